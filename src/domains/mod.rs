//! Domains module containing the server's business logic.
//!
//! The server only exposes tools; each subdomain is one MCP capability.

pub mod tools;
