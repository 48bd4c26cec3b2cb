//! Site descriptions shared by the integration tests.
//!
//! A [`Site`] is what a calling layer would load from a config file: the study
//! climate, a set of surfaces and an optional chain of measures they drain
//! into.

use serde::Deserialize;
use uom::si::{area::square_meter, f64::Area};
use watbal_balance::{
    Drainage, DrainageType, ElementError, GreenRoof, InfiltrationSwale, Measure,
    PermeableSurface, Roof, Stage, StudyArea, Surface,
};

/// A surface design together with its area in m².
#[derive(Debug, Deserialize)]
pub struct Patch<T> {
    pub area: f64,
    #[serde(flatten)]
    pub design: T,
}

impl<T: Surface> Patch<T> {
    fn stage(&self, study: &StudyArea) -> Result<Stage, ElementError> {
        self.design
            .stage(study, Area::new::<square_meter>(self.area))
    }
}

#[derive(Debug, Deserialize)]
pub struct Site {
    pub study: StudyArea,
    #[serde(default)]
    pub roofs: Vec<Patch<Roof>>,
    #[serde(default)]
    pub green_roofs: Vec<Patch<GreenRoof>>,
    #[serde(default)]
    pub yards: Vec<Patch<PermeableSurface>>,
    /// Collects the runoff of every surface.
    pub drainage: Option<DrainageType>,
    /// Takes the runoff of the drainage, or of every surface without one.
    pub swale: Option<InfiltrationSwale>,
}

impl Site {
    /// Computes all surfaces and applies the measures in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ElementError`] raised by any element.
    pub fn stages(&self) -> Result<Vec<Stage>, ElementError> {
        let study = &self.study;
        let mut stages = Vec::new();
        for roof in &self.roofs {
            stages.push(roof.stage(study)?);
        }
        for roof in &self.green_roofs {
            stages.push(roof.stage(study)?);
        }
        for yard in &self.yards {
            stages.push(yard.stage(study)?);
        }

        if let Some(kind) = self.drainage {
            stages = vec![Drainage::new(kind).apply(study, &stages)?];
        }
        if let Some(swale) = &self.swale {
            stages = vec![swale.apply(study, &stages)?];
        }
        Ok(stages)
    }
}
