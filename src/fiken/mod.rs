//! Fiken API integration.
//!
//! - `client`: authenticated HTTP transport to the Fiken REST API
//! - `money`: øre ↔ kroner conversion over arbitrary JSON payloads
//! - `query`: query string building from tool arguments

pub mod client;
mod error;
pub mod money;
pub mod query;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiRequest, ApiResponse, DEFAULT_BASE_URL, FikenApi, FikenClient, HttpMethod};
pub use error::{FikenError, FikenResult};
pub use money::{Direction, convert_value, is_money_field, to_major_units, to_minor_units};
pub use query::QueryParams;
