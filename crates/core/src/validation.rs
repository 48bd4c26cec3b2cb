use thiserror::Error;
use tracing::trace;

use crate::parameter::Parameter;

/// Errors raised while checking inputs against their validity ranges.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A value lies outside the domain its regression was fitted on.
    #[error("{label} = {value} is not valid, acceptable range: {min} - {max} {unit}")]
    OutOfRange {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
        label: &'static str,
        unit: &'static str,
    },

    /// A string key does not name any registered parameter.
    #[error("no validity range registered for parameter `{key}`")]
    UnknownParameter { key: String },
}

/// Checks `value` against the validity range of `parameter`.
///
/// Bounds are inclusive. Returns the value unchanged so checks can be chained
/// into constructors.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] if `value` is below the minimum,
/// above the maximum or `NaN`.
///
/// # Example
///
/// ```
/// use watbal_core::{Parameter, validate};
///
/// assert_eq!(validate(0.3, Parameter::RoofStorageHeight), Ok(0.3));
/// assert!(validate(0.7, Parameter::RoofStorageHeight).is_err());
/// ```
pub fn validate(value: f64, parameter: Parameter) -> Result<f64, ValidationError> {
    let spec = parameter.spec();
    if spec.contains(value) {
        trace!(parameter = spec.key, value, "parameter within range");
        return Ok(value);
    }
    Err(ValidationError::OutOfRange {
        parameter,
        value,
        min: spec.min,
        max: spec.max,
        label: spec.label,
        unit: spec.unit,
    })
}

/// Checks `value` against the validity range registered under `key`.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownParameter`] if `key` is not registered
/// and [`ValidationError::OutOfRange`] if the value is outside its range.
pub fn validate_key(value: f64, key: &str) -> Result<f64, ValidationError> {
    validate(value, key.parse()?)
}
