//! Partially permeable pavings and gravel covers.
//!
//! Unlike roofs, these surfaces let water infiltrate: two fractions are
//! regressed and recharge `g` closes the balance.

use watbal_core::{Parameter, validate};

use crate::{
    calculator::Calculator,
    catalogue,
    error::ElementError,
    partition::Partition,
    regression::{Model, Var},
    study::StudyArea,
    surface::Surface,
};

/// Joint ratio band of a permeable surface, each with its own regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointClass {
    /// Joint ratio below 6 %.
    Narrow,
    /// Joint ratio of 6 % and above.
    Wide,
}

impl JointClass {
    #[must_use]
    pub fn of(joint_ratio: f64) -> Self {
        if joint_ratio < 6.0 {
            JointClass::Narrow
        } else {
            JointClass::Wide
        }
    }

    /// Standard hydraulic conductivity of the joint filling, mm/h.
    #[must_use]
    pub fn standard_conductivity(self) -> f64 {
        match self {
            JointClass::Narrow => 18.0,
            JointClass::Wide => 36.0,
        }
    }

    fn model(self) -> &'static Model {
        match self {
            JointClass::Narrow => &catalogue::PERMEABLE_NARROW_JOINTS,
            JointClass::Wide => &catalogue::PERMEABLE_WIDE_JOINTS,
        }
    }
}

/// Partially permeable paving (concrete pavers with joints).
///
/// The recharge remainder is not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermeableSurface {
    /// Joint ratio `FA` in % (2–10).
    pub joint_ratio: f64,
    /// Hydraulic conductivity `kf` in mm/h (6–100); `None` uses the standard
    /// value of the joint class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conductivity: Option<f64>,
    /// Storage height `Sp` in mm (0.1–2).
    #[cfg_attr(feature = "serde", serde(default = "PermeableSurface::default_storage_height"))]
    pub storage_height: f64,
    /// Usable water capacity `WKmax - WP` (0.1–0.2).
    #[cfg_attr(feature = "serde", serde(default = "PermeableSurface::default_water_capacity"))]
    pub water_capacity: f64,
}

impl PermeableSurface {
    #[must_use]
    pub fn new(joint_ratio: f64) -> Self {
        Self {
            joint_ratio,
            conductivity: None,
            storage_height: Self::default_storage_height(),
            water_capacity: Self::default_water_capacity(),
        }
    }

    #[must_use]
    pub fn with_conductivity(self, conductivity: f64) -> Self {
        Self {
            conductivity: Some(conductivity),
            ..self
        }
    }

    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self {
            storage_height,
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

    #[must_use]
    pub fn joint_class(&self) -> JointClass {
        JointClass::of(self.joint_ratio)
    }

    /// The given conductivity, or the standard one of the joint class.
    #[must_use]
    pub fn conductivity(&self) -> f64 {
        self.conductivity
            .unwrap_or_else(|| self.joint_class().standard_conductivity())
    }

    fn default_storage_height() -> f64 {
        1.0
    }

    fn default_water_capacity() -> f64 {
        0.15
    }
}

impl Calculator for PermeableSurface {
    fn label(&self) -> &'static str {
        "Permeable surface"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.joint_ratio, Parameter::PermeableJointRatio)?;
        validate(self.conductivity(), Parameter::PermeableConductivity)?;
        validate(self.storage_height, Parameter::PermeableStorageHeight)?;
        validate(self.water_capacity, Parameter::PermeableWaterCapacity)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::JointRatio, self.joint_ratio)
            .with(Var::Conductivity, self.conductivity())
            .with(Var::StorageHeight, self.storage_height)
            .with(Var::WaterCapacity, self.water_capacity);
        self.joint_class().model().evaluate(&inputs)
    }
}

impl Surface for PermeableSurface {}

/// Porous and percolating stones, gravel lawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PorousSurface {
    /// Storage height `Sp` in mm (2.5–4.2).
    pub storage_height: f64,
    /// Installation height `h` in mm (50–100).
    pub installation_height: f64,
    /// Hydraulic conductivity `kf` in mm/h (10–180).
    pub conductivity: f64,
}

impl PorousSurface {
    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self {
            storage_height,
            ..self
        }
    }

    #[must_use]
    pub fn with_installation_height(self, installation_height: f64) -> Self {
        Self {
            installation_height,
            ..self
        }
    }

    #[must_use]
    pub fn with_conductivity(self, conductivity: f64) -> Self {
        Self {
            conductivity,
            ..self
        }
    }
}

impl Default for PorousSurface {
    fn default() -> Self {
        Self {
            storage_height: 3.5,
            installation_height: 100.0,
            conductivity: 180.0,
        }
    }
}

impl Calculator for PorousSurface {
    fn label(&self) -> &'static str {
        "Porous surface"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.storage_height, Parameter::PorousStorageHeight)?;
        validate(self.installation_height, Parameter::PorousInstallationHeight)?;
        validate(self.conductivity, Parameter::PorousConductivity)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::StorageHeight, self.storage_height)
            .with(Var::InstallationHeight, self.installation_height)
            .with(Var::Conductivity, self.conductivity);
        catalogue::POROUS_SURFACE.evaluate(&inputs)
    }
}

impl Surface for PorousSurface {}

/// Lawn grid stones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaverStoneGrid {
    /// Joint ratio `FA` in % (20–30).
    pub joint_ratio: f64,
    /// Storage height `Sp` in mm (0.1–2).
    pub storage_height: f64,
    /// Usable water capacity `WKmax - WP` (0.1–0.2).
    pub water_capacity: f64,
}

impl PaverStoneGrid {
    #[must_use]
    pub fn with_joint_ratio(self, joint_ratio: f64) -> Self {
        Self {
            joint_ratio,
            ..self
        }
    }

    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self {
            storage_height,
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
}

impl Default for PaverStoneGrid {
    fn default() -> Self {
        Self {
            joint_ratio: 25.0,
            storage_height: 1.0,
            water_capacity: 0.15,
        }
    }
}

impl Calculator for PaverStoneGrid {
    fn label(&self) -> &'static str {
        "Paver stone grid"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.joint_ratio, Parameter::PaverJointRatio)?;
        validate(self.storage_height, Parameter::PaverStorageHeight)?;
        validate(self.water_capacity, Parameter::PaverWaterCapacity)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::JointRatio, self.joint_ratio)
            .with(Var::StorageHeight, self.storage_height)
            .with(Var::WaterCapacity, self.water_capacity);
        catalogue::PAVER_STONE_GRID.evaluate(&inputs)
    }
}

impl Surface for PaverStoneGrid {}

/// Water-bound gravel cover.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GravelCover {
    /// Installation height `h` in mm (50–100).
    pub installation_height: f64,
    /// Storage height `Sp` in mm (2.5–4.2).
    pub storage_height: f64,
    /// Hydraulic conductivity `kf` in mm/h (0.72–10).
    pub conductivity: f64,
}

impl GravelCover {
    #[must_use]
    pub fn with_installation_height(self, installation_height: f64) -> Self {
        Self {
            installation_height,
            ..self
        }
    }

    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self {
            storage_height,
            ..self
        }
    }

    #[must_use]
    pub fn with_conductivity(self, conductivity: f64) -> Self {
        Self {
            conductivity,
            ..self
        }
    }
}

impl Default for GravelCover {
    fn default() -> Self {
        Self {
            installation_height: 100.0,
            storage_height: 3.5,
            conductivity: 1.8,
        }
    }
}

impl Calculator for GravelCover {
    fn label(&self) -> &'static str {
        "Gravel cover"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.installation_height, Parameter::GravelInstallationHeight)?;
        validate(self.storage_height, Parameter::GravelStorageHeight)?;
        validate(self.conductivity, Parameter::GravelConductivity)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::InstallationHeight, self.installation_height)
            .with(Var::StorageHeight, self.storage_height)
            .with(Var::Conductivity, self.conductivity);
        catalogue::GRAVEL_COVER.evaluate(&inputs)
    }
}

impl Surface for GravelCover {}
