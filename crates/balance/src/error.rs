use thiserror::Error;
use watbal_core::{ValidationError, constraint::ConstraintError};

/// Errors raised while computing a single surface or measure element.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ElementError {
    /// A design parameter or the study climate is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A geometric quantity violates its constraint.
    #[error("invalid {name}: {source}")]
    Constraint {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A drainage designator outside the known alias set.
    #[error("unrecognized drainage type `{input}`")]
    UnrecognizedCategory { input: String },
}

impl ElementError {
    pub(crate) fn constraint(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { name, source }
    }
}

/// Errors raised while aggregating element results into a system total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AggregationError {
    #[error("cannot aggregate an empty set of elements")]
    Empty,

    /// The elements receive no precipitation, so no fraction is defined.
    #[error("total precipitation volume of the aggregated elements is zero")]
    ZeroVolume,
}

/// Errors raised while setting up a study area.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StudyAreaError {
    #[error("no climate data for region `{name}`")]
    UnknownRegion { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
