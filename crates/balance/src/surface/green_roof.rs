use watbal_core::{Parameter, validate};

use crate::{
    calculator::Calculator,
    catalogue,
    error::ElementError,
    partition::Partition,
    regression::Var,
    study::StudyArea,
    surface::Surface,
};

/// Extensive or intensive green roof.
///
/// The installation height `h` has no standard value and must be given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenRoof {
    /// Installation height `h` of the substrate in mm (40–500).
    pub installation_height: f64,
    /// Hydraulic conductivity `kf` in mm/h (18–100).
    #[cfg_attr(feature = "serde", serde(default = "GreenRoof::default_conductivity"))]
    pub conductivity: f64,
    /// Usable water capacity `WKmax - WP` (0.35–0.65).
    #[cfg_attr(feature = "serde", serde(default = "GreenRoof::default_water_capacity"))]
    pub water_capacity: f64,
}

impl GreenRoof {
    /// Creates a green roof with standard substrate properties.
    #[must_use]
    pub fn new(installation_height: f64) -> Self {
        Self {
            installation_height,
            conductivity: Self::default_conductivity(),
            water_capacity: Self::default_water_capacity(),
        }
    }

    #[must_use]
    pub fn with_conductivity(self, conductivity: f64) -> Self {
        Self {
            conductivity,
            ..self
        }
    }

    #[must_use]
    pub fn with_water_capacity(self, water_capacity: f64) -> Self {
        Self {
            water_capacity,
            ..self
        }
    }

    fn default_conductivity() -> f64 {
        70.0
    }

    fn default_water_capacity() -> f64 {
        0.5
    }
}

impl Calculator for GreenRoof {
    fn label(&self) -> &'static str {
        "Green roof"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.installation_height, Parameter::GreenRoofInstallationHeight)?;
        validate(self.conductivity, Parameter::GreenRoofConductivity)?;
        validate(self.water_capacity, Parameter::GreenRoofWaterCapacity)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::InstallationHeight, self.installation_height)
            .with(Var::Conductivity, self.conductivity)
            .with(Var::WaterCapacity, self.water_capacity);
        catalogue::GREEN_ROOF.evaluate(&inputs)
    }
}

impl Surface for GreenRoof {}
