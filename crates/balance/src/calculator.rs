use crate::{error::ElementError, partition::Partition, study::StudyArea};

/// Computes the water balance partition of one surface or measure type.
///
/// Implementors hold the design parameters of their type. Calculations are
/// deterministic: the same design and study always yield the same partition.
///
/// Range checks are kept apart from evaluation. [`Calculator::fractions`]
/// assumes [`Calculator::validate`] has passed, and
/// [`Calculator::partition`] runs both in that order.
pub trait Calculator {
    /// Display name of the element type.
    fn label(&self) -> &'static str;

    /// Checks every design parameter against its validity range.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] for the first parameter that is invalid.
    fn validate(&self) -> Result<(), ElementError>;

    /// Evaluates the fractions for already validated parameters.
    fn fractions(&self, study: &StudyArea) -> Partition;

    /// Validates the design, then evaluates its fractions.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if validation fails; no fractions are
    /// computed in that case.
    fn partition(&self, study: &StudyArea) -> Result<Partition, ElementError> {
        self.validate()?;
        Ok(self.fractions(study))
    }
}
