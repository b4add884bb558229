//! Protocol transport for the MCP server.
//!
//! - **STDIO**: standard input/output, the default for MCP clients - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over TCP sockets - feature: `tcp`
//!
//! Each transport owns the connection lifecycle and hands protocol messages
//! to the [`FikenServer`](crate::core::FikenServer) handler.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
