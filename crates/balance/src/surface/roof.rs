//! Roofs and sealed flat areas, parameterized by their storage height `Sp`.

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

/// Steep roof, or flat roof with a smooth cover (metal, glass).
///
/// Runoff follows the roof regression; evapotranspiration is the unclamped
/// remainder and nothing infiltrates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Roof {
    /// Storage height `Sp` in mm (0.1–0.6).
    pub storage_height: f64,
}

impl Roof {
    /// Standard storage height of tiled and sheet roofs.
    pub const STANDARD_STORAGE_HEIGHT: f64 = 0.3;

    /// Standard storage height of glass and metal roofs.
    pub const SMOOTH_STORAGE_HEIGHT: f64 = 0.6;

    /// A glass or metal roof.
    #[must_use]
    pub fn smooth() -> Self {
        Self {
            storage_height: Self::SMOOTH_STORAGE_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self { storage_height }
    }
}

impl Default for Roof {
    fn default() -> Self {
        Self {
            storage_height: Self::STANDARD_STORAGE_HEIGHT,
        }
    }
}

impl Calculator for Roof {
    fn label(&self) -> &'static str {
        "Roof"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.storage_height, Parameter::RoofStorageHeight)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        catalogue::ROOF.evaluate(&study.inputs().with(Var::StorageHeight, self.storage_height))
    }
}

impl Surface for Roof {}

/// Flat roof with a rough cover, asphalt, jointless concrete or tight paving.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FlatArea {
    /// Storage height `Sp` in mm (0.6–3).
    pub storage_height: f64,
}

impl FlatArea {
    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self { storage_height }
    }
}

impl Default for FlatArea {
    fn default() -> Self {
        Self {
            storage_height: 1.0,
        }
    }
}

impl Calculator for FlatArea {
    fn label(&self) -> &'static str {
        "Flat area"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.storage_height, Parameter::FlatAreaStorageHeight)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        catalogue::FLAT_AREA.evaluate(&study.inputs().with(Var::StorageHeight, self.storage_height))
    }
}

impl Surface for FlatArea {}

/// Roof with a storage height above 3 mm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StorageRoof {
    /// Storage height `Sp` in mm (3–10).
    pub storage_height: f64,
}

impl StorageRoof {
    #[must_use]
    pub fn with_storage_height(self, storage_height: f64) -> Self {
        Self { storage_height }
    }
}

impl Default for StorageRoof {
    fn default() -> Self {
        Self {
            storage_height: 5.0,
        }
    }
}

impl Calculator for StorageRoof {
    fn label(&self) -> &'static str {
        "Storage roof"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.storage_height, Parameter::StorageRoofStorageHeight)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        catalogue::STORAGE_ROOF
            .evaluate(&study.inputs().with(Var::StorageHeight, self.storage_height))
    }
}

impl Surface for StorageRoof {}
