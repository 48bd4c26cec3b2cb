//! Stormwater measures: elements that receive runoff from upstream stages.
//!
//! A measure reads the outlets of its upstream [`Stage`]s, takes over their
//! connected area `Au` and runoff volume, and distributes that runoff plus the
//! rain on its own area. Its own area depends on the type: a share of `Au` for
//! infiltration measures, the water surface for ponds and nothing for drainage
//! and rainwater harvesting.

mod drainage;
mod infiltration;
mod pond;
mod rainwater;

pub use drainage::{Drainage, DrainageCategory, DrainageType, drainage_fractions};
pub use infiltration::{InfiltrationSwale, SurfaceInfiltration, SwaleTrench, SwaleTrenchSystem};
pub use pond::{PondInflow, PondSystem};
pub use rainwater::RainwaterUsage;

use uom::si::{area::square_meter, f64::Area};
use watbal_core::constraint::NonNegative;

use crate::{
    calculator::Calculator,
    element::ElementResult,
    error::ElementError,
    partition::Partition,
    stage::{Stage, delivered},
    study::StudyArea,
};

/// A measure receiving the runoff of upstream stages.
pub trait Measure: Calculator {
    /// Own area of the measure when it serves `connected` upstream.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the design cannot produce a valid area.
    fn own_area(&self, _connected: Area) -> Result<Area, ElementError> {
        Ok(Area::new::<square_meter>(0.0))
    }

    /// Validates the design and evaluates its fractions for a measure
    /// serving `connected` upstream.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if validation fails.
    fn partition_with(
        &self,
        study: &StudyArea,
        _connected: Area,
    ) -> Result<Partition, ElementError> {
        self.partition(study)
    }

    /// Applies the measure to the outlets of `upstream`.
    ///
    /// Every upstream element is carried over with its runoff captured and
    /// the measure becomes the outlet of the returned stage.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the design is invalid or yields a
    /// negative own area.
    fn apply(&self, study: &StudyArea, upstream: &[Stage]) -> Result<Stage, ElementError> {
        let (connected, inflow) = delivered(upstream);
        let partition = self.partition_with(study, connected)?;
        let area = NonNegative::new(self.own_area(connected)?)
            .map_err(ElementError::constraint("measure area"))?;
        let outlet = ElementResult::routed(self.label(), area, connected, study, partition, inflow);
        Ok(Stage::chain(upstream, outlet))
    }
}
