//! Core types for DWA-A102 water balance calculations.
//!
//! This crate holds what every calculation step relies on:
//!
//! - [`constraint`]: construction-time guarantees for areas
//! - [`Parameter`] / [`ParameterSpec`]: the validity range of each physical
//!   parameter the regressions accept
//! - [`validate`]: the range gate every input passes before a formula runs

pub mod constraint;
mod parameter;
mod validation;

pub use parameter::{Parameter, ParameterSpec};
pub use validation::{ValidationError, validate, validate_key};
