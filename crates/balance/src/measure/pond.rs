use uom::si::{area::square_meter, f64::Area, ratio::ratio};
use watbal_core::{
    Parameter,
    constraint::{NonNegative, StrictlyPositive},
    validate,
};

use crate::{
    calculator::Calculator, error::ElementError, measure::Measure, partition::Partition,
    study::StudyArea,
};

/// An area draining a share of its runoff into a pond.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PondInflow {
    /// Area `A_i`.
    pub area: Area,
    /// Share `a_i` of the area's runoff reaching the pond (0–1).
    pub runoff_share: f64,
}

impl PondInflow {
    #[must_use]
    pub fn new(area: Area, runoff_share: f64) -> Self {
        Self { area, runoff_share }
    }

    fn effective_area(&self) -> Area {
        self.area * self.runoff_share
    }
}

/// Water surface with permanent storage.
///
/// Evaporation from the water surface is `v = ETp · Aw / (P · (Aw + Σ A_i·a_i))`
/// and everything else overflows. When no inflows are listed, the connected
/// area of the upstream stages takes their place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PondSystem {
    /// Water surface `Aw`.
    pub water_surface: Area,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflows: Vec<PondInflow>,
}

impl PondSystem {
    #[must_use]
    pub fn new(water_surface: Area) -> Self {
        Self {
            water_surface,
            inflows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_inflow(mut self, area: Area, runoff_share: f64) -> Self {
        self.inflows.push(PondInflow::new(area, runoff_share));
        self
    }

    /// `Σ A_i · a_i` of the listed inflows.
    #[must_use]
    pub fn inflow_area(&self) -> Area {
        self.inflows
            .iter()
            .fold(Area::new::<square_meter>(0.0), |sum, inflow| {
                sum + inflow.effective_area()
            })
    }

    fn evaporation(&self, study: &StudyArea, inflow_area: Area) -> Partition {
        let surface = self.water_surface;
        let share = (surface / (surface + inflow_area)).get::<ratio>();
        let v = study.evapotranspiration() / study.precipitation() * share;
        Partition::new(1.0 - v, 0.0, v)
    }
}

impl Calculator for PondSystem {
    fn label(&self) -> &'static str {
        "Pond system"
    }

    fn validate(&self) -> Result<(), ElementError> {
        StrictlyPositive::new(self.water_surface)
            .map_err(ElementError::constraint("water surface"))?;
        for inflow in &self.inflows {
            NonNegative::new(inflow.area).map_err(ElementError::constraint("inflow area"))?;
            validate(inflow.runoff_share, Parameter::PondRunoffShare)?;
        }
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        self.evaporation(study, self.inflow_area())
    }
}

impl Measure for PondSystem {
    fn own_area(&self, _connected: Area) -> Result<Area, ElementError> {
        Ok(self.water_surface)
    }

    fn partition_with(
        &self,
        study: &StudyArea,
        connected: Area,
    ) -> Result<Partition, ElementError> {
        self.validate()?;
        let inflow_area = if self.inflows.is_empty() {
            connected
        } else {
            self.inflow_area()
        };
        Ok(self.evaporation(study, inflow_area))
    }
}
