use std::{fmt, str::FromStr};

use crate::{
    calculator::Calculator, error::ElementError, measure::Measure, partition::Partition,
    study::StudyArea,
};

/// Conveyance element carrying runoff to the next measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DrainageType {
    Pipe,
    Channel,
    SteepDitch,
    /// Shallow ditch with vegetation.
    VegetatedDitch,
}

/// The two partition groups of drainage elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainageCategory {
    /// Pipes, channels, steep ditches: everything runs off.
    Sealed,
    /// Vegetated ditches lose some water on the way.
    Vegetated,
}

impl DrainageType {
    #[must_use]
    pub fn category(self) -> DrainageCategory {
        match self {
            DrainageType::Pipe | DrainageType::Channel | DrainageType::SteepDitch => {
                DrainageCategory::Sealed
            }
            DrainageType::VegetatedDitch => DrainageCategory::Vegetated,
        }
    }
}

impl DrainageCategory {
    #[must_use]
    pub fn partition(self) -> Partition {
        match self {
            DrainageCategory::Sealed => Partition::new(1.0, 0.0, 0.0),
            DrainageCategory::Vegetated => Partition::new(0.7, 0.1, 0.2),
        }
    }
}

/// Accepted designators, English and German, compared case-insensitively.
const ALIASES: [(&str, DrainageType); 10] = [
    ("pipe", DrainageType::Pipe),
    ("rohr", DrainageType::Pipe),
    ("channel", DrainageType::Channel),
    ("rinne", DrainageType::Channel),
    ("steep ditch", DrainageType::SteepDitch),
    ("steiler graben", DrainageType::SteepDitch),
    ("shallow ditches with vegetation", DrainageType::VegetatedDitch),
    ("ditch with vegetation", DrainageType::VegetatedDitch),
    ("flache gräben mit bewuchs", DrainageType::VegetatedDitch),
    ("gräben mit bewuchs", DrainageType::VegetatedDitch),
];

impl FromStr for DrainageType {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| ElementError::UnrecognizedCategory {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for DrainageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrainageType::Pipe => "pipe",
            DrainageType::Channel => "channel",
            DrainageType::SteepDitch => "steep ditch",
            DrainageType::VegetatedDitch => "ditch with vegetation",
        })
    }
}

/// Fixed partition of the drainage type named by `designator`.
///
/// # Errors
///
/// Returns [`ElementError::UnrecognizedCategory`] if the designator is not a
/// known drainage type.
///
/// # Example
///
/// ```
/// use watbal_balance::drainage_fractions;
///
/// let pipe = drainage_fractions("Rohr").unwrap();
/// assert_eq!((pipe.runoff, pipe.recharge, pipe.evapotranspiration), (1.0, 0.0, 0.0));
/// assert!(drainage_fractions("nonsense").is_err());
/// ```
pub fn drainage_fractions(designator: &str) -> Result<Partition, ElementError> {
    let kind: DrainageType = designator.parse()?;
    Ok(kind.category().partition())
}

/// Drainage element without an area of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drainage {
    pub kind: DrainageType,
}

impl Drainage {
    #[must_use]
    pub fn new(kind: DrainageType) -> Self {
        Self { kind }
    }
}

impl FromStr for Drainage {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl Calculator for Drainage {
    fn label(&self) -> &'static str {
        "Drainage"
    }

    fn validate(&self) -> Result<(), ElementError> {
        Ok(())
    }

    fn fractions(&self, _study: &StudyArea) -> Partition {
        self.kind.category().partition()
    }
}

impl Measure for Drainage {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, f64::Area, volume::cubic_meter};

    use super::*;
    use crate::{
        stage::Stage,
        surface::{Roof, Surface},
    };

    #[test]
    fn sealed_designators() {
        for designator in ["pipe", "PIPE", "Rohr", "rinne", "Steep Ditch", "steiler Graben"] {
            assert_eq!(
                drainage_fractions(designator).unwrap(),
                Partition::new(1.0, 0.0, 0.0),
                "{designator}"
            );
        }
    }

    #[test]
    fn vegetated_designators() {
        for designator in [
            "ditch with vegetation",
            "Ditch with vegetation",
            "Shallow ditches with vegetation",
            "Flache Gräben mit Bewuchs",
            "GRÄBEN MIT BEWUCHS",
        ] {
            assert_eq!(
                drainage_fractions(designator).unwrap(),
                Partition::new(0.7, 0.1, 0.2),
                "{designator}"
            );
        }
    }

    #[test]
    fn unknown_designator_is_an_error() {
        assert_eq!(
            drainage_fractions("nonsense"),
            Err(ElementError::UnrecognizedCategory {
                input: "nonsense".into()
            })
        );
        assert!("".parse::<Drainage>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for kind in [
            DrainageType::Pipe,
            DrainageType::Channel,
            DrainageType::SteepDitch,
            DrainageType::VegetatedDitch,
        ] {
            assert_eq!(kind.to_string().parse::<DrainageType>().unwrap(), kind);
        }
    }

    #[test]
    fn pipe_passes_roof_runoff_on() {
        let study = StudyArea::default();
        let roof = Roof::default()
            .stage(&study, Area::new::<square_meter>(1000.0))
            .unwrap();
        let runoff = roof.outlet().volumes().runoff;

        let stage = Drainage::new(DrainageType::Pipe)
            .apply(&study, &[roof.clone()])
            .unwrap();
        let pipe = stage.outlet();

        assert_eq!(pipe.area().get::<square_meter>(), 0.0);
        assert_eq!(pipe.volumes().precipitation.get::<cubic_meter>(), 0.0);
        assert_relative_eq!(
            pipe.volumes().runoff.get::<cubic_meter>(),
            runoff.get::<cubic_meter>(),
            max_relative = 1e-12
        );
        assert_eq!(pipe.connected_area(), roof.outlet().connected_area());
        assert_eq!(stage.upstream()[0].volumes().runoff.get::<cubic_meter>(), 0.0);
    }

    #[test]
    fn vegetated_ditch_conserves_mass() {
        let study = StudyArea::default();
        let roof = Roof::default()
            .stage(&study, Area::new::<square_meter>(500.0))
            .unwrap();
        let stage: Stage = "ditch with vegetation"
            .parse::<Drainage>()
            .unwrap()
            .apply(&study, &[roof])
            .unwrap();
        let total = stage.total().unwrap();
        assert_relative_eq!(total.partition().sum(), 1.0, epsilon = 1e-12);
    }
}
