//! MCP server handler.
//!
//! Tools are routed through the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; this file only wires configuration and the
//! Fiken client into it.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ApiExecutor, build_tool_router};
use crate::fiken::{FikenApi, FikenClient};

const INSTRUCTIONS: &str = "Tools for the Fiken accounting API. Most tools are scoped to a \
    company: call get_companies first to find its slug and pass it as company_slug. Request \
    bodies are JSON documents passed as a string in the body argument. List tools are paginated \
    with page (0-based) and page_size (max 100).";

const MAJOR_UNITS_NOTE: &str = "Monetary fields (net, gross, vat, amount, unitPrice, balance, \
    paid, outstanding, netInNok, grossInNok, vatInNok and any field ending in Amount) are in \
    kroner with decimals, in results and in the bodies you send. Non-monetary numbers such as \
    quantities, ids and vat percentages are never converted.";

const MINOR_UNITS_NOTE: &str = "Monetary fields are in øre as stored by Fiken (10000 means \
    100.00 kr). Use convert_money_units to convert a JSON document between øre and kroner.";

/// The Fiken MCP server handler.
#[derive(Clone)]
pub struct FikenServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl FikenServer {
    /// Create a server talking to the real Fiken API.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = FikenClient::new(&config.fiken)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server on top of any [`FikenApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn FikenApi>) -> Self {
        let config = Arc::new(config);
        let executor = Arc::new(ApiExecutor::new(api, config.fiken.convert_money));
        info!(
            "Monetary fields presented in {}",
            if config.fiken.convert_money { "kroner" } else { "øre" }
        );

        Self {
            tool_router: build_tool_router::<Self>(executor),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn instructions(&self) -> String {
        let money = if self.config.fiken.convert_money {
            MAJOR_UNITS_NOTE
        } else {
            MINOR_UNITS_NOTE
        };
        format!("{INSTRUCTIONS} {money}")
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for FikenServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
