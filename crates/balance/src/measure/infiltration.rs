//! Infiltration measures sized as a share of the connected area.
//!
//! Each measure's own area is `Au · FA / 100`, where the area share `FA`
//! (`FAsf` for surface infiltration, `FAsm` for swales) is either given or
//! derived from the hydraulic conductivity by the type's sizing formula.

use uom::si::f64::Area;
use watbal_core::{Parameter, constraint::StrictlyPositive, validate};

use crate::{
    calculator::Calculator,
    catalogue,
    error::ElementError,
    measure::Measure,
    partition::Partition,
    regression::Var,
    study::StudyArea,
};

fn check_share(share: f64) -> Result<(), ElementError> {
    StrictlyPositive::new(share).map_err(ElementError::constraint("area share"))?;
    Ok(())
}

fn share_of(connected: Area, share: f64) -> Area {
    connected * (share / 100.0)
}

/// Infiltration over a vegetated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceInfiltration {
    /// Hydraulic conductivity `kf` in mm/h (325–1100).
    pub conductivity: f64,
    /// Infiltration area share `FAsf` in %; `None` sizes it from `kf`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_share: Option<f64>,
}

impl SurfaceInfiltration {
    #[must_use]
    pub fn new(conductivity: f64) -> Self {
        Self {
            conductivity,
            area_share: None,
        }
    }

    #[must_use]
    pub fn with_area_share(self, area_share: f64) -> Self {
        Self {
            area_share: Some(area_share),
            ..self
        }
    }

    /// `FAsf = 94741 · kf^-1.195`
    #[must_use]
    pub fn standard_area_share(conductivity: f64) -> f64 {
        94741.0 * conductivity.powf(-1.195)
    }

    #[must_use]
    pub fn area_share(&self) -> f64 {
        self.area_share
            .unwrap_or_else(|| Self::standard_area_share(self.conductivity))
    }
}

impl Calculator for SurfaceInfiltration {
    fn label(&self) -> &'static str {
        "Surface infiltration"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.conductivity, Parameter::SurfaceInfiltrationConductivity)?;
        check_share(self.area_share())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        catalogue::SURFACE_INFILTRATION
            .evaluate(&study.inputs().with(Var::AreaShare, self.area_share()))
    }
}

impl Measure for SurfaceInfiltration {
    fn own_area(&self, connected: Area) -> Result<Area, ElementError> {
        Ok(share_of(connected, self.area_share()))
    }
}

/// Infiltration swale.
///
/// The only measure whose runoff is the derived, clamped fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiltrationSwale {
    /// Hydraulic conductivity `kf` in mm/h (14–3600).
    pub conductivity: f64,
    /// Swale area share `FAsm` in %; `None` sizes it from `kf`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_share: Option<f64>,
}

impl InfiltrationSwale {
    #[must_use]
    pub fn new(conductivity: f64) -> Self {
        Self {
            conductivity,
            area_share: None,
        }
    }

    #[must_use]
    pub fn with_area_share(self, area_share: f64) -> Self {
        Self {
            area_share: Some(area_share),
            ..self
        }
    }

    /// `FAsm = 42.323 · kf^-0.314`
    #[must_use]
    pub fn standard_area_share(conductivity: f64) -> f64 {
        42.323 * conductivity.powf(-0.314)
    }

    #[must_use]
    pub fn area_share(&self) -> f64 {
        self.area_share
            .unwrap_or_else(|| Self::standard_area_share(self.conductivity))
    }
}

impl Calculator for InfiltrationSwale {
    fn label(&self) -> &'static str {
        "Infiltration swale"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.conductivity, Parameter::SwaleConductivity)?;
        check_share(self.area_share())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::Conductivity, self.conductivity)
            .with(Var::AreaShare, self.area_share());
        catalogue::INFILTRATION_SWALE.evaluate(&inputs)
    }
}

impl Measure for InfiltrationSwale {
    fn own_area(&self, connected: Area) -> Result<Area, ElementError> {
        Ok(share_of(connected, self.area_share()))
    }
}

/// Swale-trench element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwaleTrench {
    /// Hydraulic conductivity `kf` in mm/h (3.6–36).
    pub conductivity: f64,
    /// Swale area share `FAsm` in %; `None` sizes it from `kf`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_share: Option<f64>,
}

impl SwaleTrench {
    #[must_use]
    pub fn new(conductivity: f64) -> Self {
        Self {
            conductivity,
            area_share: None,
        }
    }

    #[must_use]
    pub fn with_area_share(self, area_share: f64) -> Self {
        Self {
            area_share: Some(area_share),
            ..self
        }
    }

    /// `FAsm = 21.86 · kf^-0.348`
    #[must_use]
    pub fn standard_area_share(conductivity: f64) -> f64 {
        21.86 * conductivity.powf(-0.348)
    }

    #[must_use]
    pub fn area_share(&self) -> f64 {
        self.area_share
            .unwrap_or_else(|| Self::standard_area_share(self.conductivity))
    }
}

impl Calculator for SwaleTrench {
    fn label(&self) -> &'static str {
        "Swale-trench element"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.conductivity, Parameter::SwaleTrenchConductivity)?;
        check_share(self.area_share())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::Conductivity, self.conductivity)
            .with(Var::AreaShare, self.area_share());
        catalogue::SWALE_TRENCH.evaluate(&inputs)
    }
}

impl Measure for SwaleTrench {
    fn own_area(&self, connected: Area) -> Result<Area, ElementError> {
        Ok(share_of(connected, self.area_share()))
    }
}

/// Swale-trench system with throttled discharge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwaleTrenchSystem {
    /// Throttled discharge yield `qDr` in l/(s·ha) (1–10).
    pub throttled_discharge: f64,
    /// Hydraulic conductivity `kf` in mm/h (0.36–3.6).
    pub conductivity: f64,
    /// Swale area share `FAsm` in %; `None` sizes it from `qDr` and `kf`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_share: Option<f64>,
}

impl SwaleTrenchSystem {
    #[must_use]
    pub fn new(throttled_discharge: f64, conductivity: f64) -> Self {
        Self {
            throttled_discharge,
            conductivity,
            area_share: None,
        }
    }

    #[must_use]
    pub fn with_area_share(self, area_share: f64) -> Self {
        Self {
            area_share: Some(area_share),
            ..self
        }
    }

    /// `FAsm = 11.79 - 3.14 · ln(qDr) - 0.18594 · kf`
    #[must_use]
    pub fn standard_area_share(throttled_discharge: f64, conductivity: f64) -> f64 {
        11.79 - 3.14 * throttled_discharge.ln() - 0.18594 * conductivity
    }

    #[must_use]
    pub fn area_share(&self) -> f64 {
        self.area_share.unwrap_or_else(|| {
            Self::standard_area_share(self.throttled_discharge, self.conductivity)
        })
    }
}

impl Calculator for SwaleTrenchSystem {
    fn label(&self) -> &'static str {
        "Swale-trench system"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.throttled_discharge, Parameter::TrenchSystemDischarge)?;
        validate(self.conductivity, Parameter::TrenchSystemConductivity)?;
        check_share(self.area_share())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::ThrottledDischarge, self.throttled_discharge)
            .with(Var::Conductivity, self.conductivity)
            .with(Var::AreaShare, self.area_share());
        catalogue::SWALE_TRENCH_SYSTEM.evaluate(&inputs)
    }
}

impl Measure for SwaleTrenchSystem {
    fn own_area(&self, connected: Area) -> Result<Area, ElementError> {
        Ok(share_of(connected, self.area_share()))
    }
}
