//! Fiken MCP Server Library
//!
//! A Model Context Protocol server that exposes the Fiken accounting API as
//! tools. Fiken stores money as integer øre; by default the server presents
//! monetary fields in kroner and converts request bodies back.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by MCP capability
//!   - **tools**: the Fiken endpoint catalog and its executor
//! - **fiken**: HTTP client for the Fiken API and the money unit codec
//!
//! # Example
//!
//! ```rust,no_run
//! use fiken_mcp_server::{Config, FikenServer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = FikenServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod fiken;

// Re-export commonly used types for convenience
pub use core::{Config, Error, FikenServer, Result};
