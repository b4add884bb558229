//! Tools domain module.
//!
//! Tools are what MCP clients call. Almost all of them are Fiken API
//! endpoints described as data; the rest are regular tool types.
//!
//! ## Architecture
//!
//! - `definitions/fiken/` - Endpoint catalog, one file per API area
//! - `definitions/money.rs` - Standalone money unit conversion tool
//! - `endpoint.rs` - Endpoint description, input schema and argument handling
//! - `executor.rs` - Runs an endpoint against the Fiken API
//! - `registry.rs` - Central tool listing
//! - `router.rs` - rmcp ToolRouter builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Endpoint
//!
//! Add an `Endpoint` to the matching catalog file in `definitions/fiken/`.
//! Registry and router pick it up automatically.

pub mod definitions;
pub mod endpoint;
mod error;
pub mod executor;
mod registry;
pub mod router;

pub use endpoint::Endpoint;
pub use error::ToolError;
pub use executor::ApiExecutor;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
