//! Surfaces: elements that only receive the rain falling on them.
//!
//! Every surface type is a small design struct holding its parameters, with
//! `Default` (where the catalogue defines one) carrying the standard values.
//! A surface becomes an [`ElementResult`] once it is given an area.

mod green_roof;
mod paving;
mod roof;

pub use green_roof::GreenRoof;
pub use paving::{GravelCover, JointClass, PaverStoneGrid, PermeableSurface, PorousSurface};
pub use roof::{FlatArea, Roof, StorageRoof};

use uom::si::f64::Area;
use watbal_core::constraint::NonNegative;

use crate::{
    calculator::Calculator, element::ElementResult, error::ElementError, stage::Stage,
    study::StudyArea,
};

/// A surface element of the study area.
pub trait Surface: Calculator {
    /// Computes the element for a surface of the given `area`.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::Constraint`] if `area` is negative or `NaN`,
    /// and [`ElementError::Validation`] if a design parameter is out of range.
    fn element(&self, study: &StudyArea, area: Area) -> Result<ElementResult, ElementError> {
        let area = NonNegative::new(area).map_err(ElementError::constraint("area"))?;
        let partition = self.partition(study)?;
        Ok(ElementResult::compose(self.label(), area, study, partition))
    }

    /// Computes the element and wraps it as the start of a drainage chain.
    ///
    /// # Errors
    ///
    /// See [`Surface::element`].
    fn stage(&self, study: &StudyArea, area: Area) -> Result<Stage, ElementError> {
        self.element(study, area).map(Stage::from)
    }
}
