//! Tool definitions module.
//!
//! Fiken endpoints live in the `fiken` catalog; tools with their own logic
//! get a file each.

pub mod common;
pub mod fiken;
pub mod money;

pub use money::{ConvertMoneyParams, ConvertMoneyTool};
