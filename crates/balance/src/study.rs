use std::fmt;

use tracing::debug;
use uom::si::{f64::Length, length::millimeter};
use watbal_climate::ClimateLookup;
use watbal_core::{Parameter, validate};

use crate::{error::StudyAreaError, regression::Inputs};

/// Annual climate of the site all elements of a study share.
///
/// Both values are validated on construction, so every element computed
/// against a `StudyArea` starts from an admissible climate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStudyArea")
)]
pub struct StudyArea {
    precipitation: f64,
    evapotranspiration: f64,
}

impl StudyArea {
    /// Creates a study area from annual precipitation and potential
    /// evapotranspiration, both in mm/a.
    ///
    /// # Errors
    ///
    /// Returns [`StudyAreaError::Validation`] if either value is outside its
    /// validity range (P 500–1700 mm/a, ETp 450–700 mm/a).
    pub fn new(precipitation: f64, evapotranspiration: f64) -> Result<Self, StudyAreaError> {
        let precipitation = validate(precipitation, Parameter::Precipitation)?;
        let evapotranspiration = validate(evapotranspiration, Parameter::Evapotranspiration)?;
        Ok(Self {
            precipitation,
            evapotranspiration,
        })
    }

    /// Creates a study area from the climate of a named region.
    ///
    /// # Errors
    ///
    /// Returns [`StudyAreaError::UnknownRegion`] if `lookup` has no entry for
    /// `region`, and [`StudyAreaError::Validation`] if the region's climate is
    /// outside the validity ranges.
    pub fn from_region(lookup: &impl ClimateLookup, region: &str) -> Result<Self, StudyAreaError> {
        let climate = lookup
            .lookup(region)
            .ok_or_else(|| StudyAreaError::UnknownRegion {
                name: region.to_owned(),
            })?;
        debug!(
            region,
            precipitation = climate.precipitation,
            evapotranspiration = climate.evapotranspiration,
            "climate from region"
        );
        Self::new(climate.precipitation, climate.evapotranspiration)
    }

    /// Annual precipitation `P` in mm/a.
    #[must_use]
    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// Annual potential evapotranspiration `ETp` in mm/a.
    #[must_use]
    pub fn evapotranspiration(&self) -> f64 {
        self.evapotranspiration
    }

    /// Annual precipitation as a depth, for volume calculations.
    #[must_use]
    pub fn precipitation_depth(&self) -> Length {
        Length::new::<millimeter>(self.precipitation)
    }

    /// Regression inputs carrying this climate.
    pub(crate) fn inputs(&self) -> Inputs {
        Inputs::new(self.precipitation, self.evapotranspiration)
    }
}

/// The DWA-A102 reference climate of 800 mm/a precipitation and 500 mm/a
/// potential evapotranspiration.
impl Default for StudyArea {
    fn default() -> Self {
        Self {
            precipitation: 800.0,
            evapotranspiration: 500.0,
        }
    }
}

impl fmt::Display for StudyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "study area with P = {} mm/a and ETp = {} mm/a",
            self.precipitation, self.evapotranspiration
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStudyArea {
    precipitation: f64,
    evapotranspiration: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStudyArea> for StudyArea {
    type Error = StudyAreaError;

    fn try_from(raw: RawStudyArea) -> Result<Self, Self::Error> {
        Self::new(raw.precipitation, raw.evapotranspiration)
    }
}

#[cfg(test)]
mod tests {
    use watbal_climate::{Climate, RegionalAverages};
    use watbal_core::ValidationError;

    use super::*;

    struct Fixed;

    impl ClimateLookup for Fixed {
        fn lookup(&self, region: &str) -> Option<Climate> {
            (region == "site").then_some(Climate {
                precipitation: 650.0,
                evapotranspiration: 520.0,
            })
        }
    }

    #[test]
    fn validates_climate() {
        assert!(StudyArea::new(800.0, 500.0).is_ok());
        assert!(matches!(
            StudyArea::new(1800.0, 500.0),
            Err(StudyAreaError::Validation(ValidationError::OutOfRange {
                parameter: Parameter::Precipitation,
                ..
            }))
        ));
        assert!(StudyArea::new(800.0, 449.0).is_err());
    }

    #[test]
    fn default_is_reference_climate() {
        let study = StudyArea::default();
        assert_eq!(Some(study), StudyArea::new(800.0, 500.0).ok());
        assert_eq!(study.precipitation_depth().get::<millimeter>(), 800.0);
    }

    #[test]
    fn region_lookup() -> Result<(), StudyAreaError> {
        let study = StudyArea::from_region(&Fixed, "site")?;
        assert_eq!(study.precipitation(), 650.0);
        assert_eq!(study.evapotranspiration(), 520.0);

        let hessen = StudyArea::from_region(&RegionalAverages, "Hessen")?;
        assert_eq!(hessen.precipitation(), 755.0);
        Ok(())
    }

    #[test]
    fn unknown_region_is_an_error() {
        assert_eq!(
            StudyArea::from_region(&Fixed, "elsewhere"),
            Err(StudyAreaError::UnknownRegion {
                name: "elsewhere".into()
            })
        );
    }

    #[test]
    fn dry_regions_fail_validation() {
        assert!(matches!(
            StudyArea::from_region(&RegionalAverages, "Brandenburg"),
            Err(StudyAreaError::Validation(_))
        ));
    }
}
