//! Validity ranges of the physical parameters used by the regressions.
//!
//! Every regression in DWA-A102 was fitted over a bounded input domain. The
//! table below records that domain for each named parameter so inputs can be
//! checked before a formula sees them.

use std::{fmt, str::FromStr};

use crate::validation::ValidationError;

/// Static description of one named physical parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub parameter: Parameter,
    /// Identifier used by string-keyed lookups.
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    /// Human readable name, including the conventional symbol.
    pub label: &'static str,
    pub unit: &'static str,
}

impl ParameterSpec {
    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The closed set of parameters that carry a validity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Precipitation,
    Evapotranspiration,
    RoofStorageHeight,
    FlatAreaStorageHeight,
    GreenRoofInstallationHeight,
    GreenRoofConductivity,
    GreenRoofWaterCapacity,
    StorageRoofStorageHeight,
    PermeableJointRatio,
    PermeableStorageHeight,
    PermeableWaterCapacity,
    PermeableConductivity,
    PorousStorageHeight,
    PorousInstallationHeight,
    PorousConductivity,
    PaverJointRatio,
    PaverStorageHeight,
    PaverWaterCapacity,
    GravelInstallationHeight,
    GravelStorageHeight,
    GravelConductivity,
    SurfaceInfiltrationConductivity,
    SwaleConductivity,
    SwaleTrenchConductivity,
    TrenchSystemDischarge,
    TrenchSystemConductivity,
    RainwaterStorageVolume,
    RainwaterDemand,
    IrrigatedShare,
    IrrigationDemand,
    PondRunoffShare,
}

impl Parameter {
    /// All parameters, in table order.
    pub const ALL: [Parameter; 31] = [
        Parameter::Precipitation,
        Parameter::Evapotranspiration,
        Parameter::RoofStorageHeight,
        Parameter::FlatAreaStorageHeight,
        Parameter::GreenRoofInstallationHeight,
        Parameter::GreenRoofConductivity,
        Parameter::GreenRoofWaterCapacity,
        Parameter::StorageRoofStorageHeight,
        Parameter::PermeableJointRatio,
        Parameter::PermeableStorageHeight,
        Parameter::PermeableWaterCapacity,
        Parameter::PermeableConductivity,
        Parameter::PorousStorageHeight,
        Parameter::PorousInstallationHeight,
        Parameter::PorousConductivity,
        Parameter::PaverJointRatio,
        Parameter::PaverStorageHeight,
        Parameter::PaverWaterCapacity,
        Parameter::GravelInstallationHeight,
        Parameter::GravelStorageHeight,
        Parameter::GravelConductivity,
        Parameter::SurfaceInfiltrationConductivity,
        Parameter::SwaleConductivity,
        Parameter::SwaleTrenchConductivity,
        Parameter::TrenchSystemDischarge,
        Parameter::TrenchSystemConductivity,
        Parameter::RainwaterStorageVolume,
        Parameter::RainwaterDemand,
        Parameter::IrrigatedShare,
        Parameter::IrrigationDemand,
        Parameter::PondRunoffShare,
    ];

    /// Returns the static range specification of this parameter.
    #[must_use]
    pub fn spec(self) -> &'static ParameterSpec {
        &PARAMETERS[self as usize]
    }

    /// Returns the string key of this parameter.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.spec().key
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolves a string key to a [`Parameter`].
///
/// Besides the canonical keys, the per-area pond keys `a_1_pod_system` to
/// `a_4_pod_system` all resolve to [`Parameter::PondRunoffShare`].
impl FromStr for Parameter {
    type Err = ValidationError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        if let Some(spec) = PARAMETERS.iter().find(|spec| spec.key == key) {
            return Ok(spec.parameter);
        }
        match key {
            "a_1_pod_system" | "a_2_pod_system" | "a_3_pod_system" | "a_4_pod_system" => {
                Ok(Parameter::PondRunoffShare)
            }
            _ => Err(ValidationError::UnknownParameter {
                key: key.to_string(),
            }),
        }
    }
}

const fn spec(
    parameter: Parameter,
    key: &'static str,
    min: f64,
    max: f64,
    label: &'static str,
    unit: &'static str,
) -> ParameterSpec {
    ParameterSpec {
        parameter,
        key,
        min,
        max,
        label,
        unit,
    }
}

/// Range table, indexed by `Parameter as usize`.
static PARAMETERS: [ParameterSpec; 31] = [
    spec(
        Parameter::Precipitation,
        "P",
        500.0,
        1700.0,
        "Precipitation (P)",
        "mm/a",
    ),
    spec(
        Parameter::Evapotranspiration,
        "ETp",
        450.0,
        700.0,
        "Potential evapotranspiration (ETp)",
        "mm/a",
    ),
    spec(
        Parameter::RoofStorageHeight,
        "Sp_roof",
        0.1,
        0.6,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::FlatAreaStorageHeight,
        "Sp_flat_area",
        0.6,
        3.0,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::GreenRoofInstallationHeight,
        "h_green_roof",
        40.0,
        500.0,
        "Installation height (h)",
        "mm",
    ),
    spec(
        Parameter::GreenRoofConductivity,
        "kf_green_roof",
        18.0,
        100.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::GreenRoofWaterCapacity,
        "WKmax_WP_green_roof",
        0.35,
        0.65,
        "Field capacity minus wilting point (WKmax-WP)",
        "-",
    ),
    spec(
        Parameter::StorageRoofStorageHeight,
        "Sp_storage_roof",
        3.0,
        10.0,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::PermeableJointRatio,
        "FA_permeable_surface",
        2.0,
        10.0,
        "Joint ratio (FA)",
        "%",
    ),
    spec(
        Parameter::PermeableStorageHeight,
        "Sp_permeable_surface",
        0.1,
        2.0,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::PermeableWaterCapacity,
        "WKmax_WP_permeable_surface",
        0.1,
        0.2,
        "Field capacity minus wilting point (WKmax-WP)",
        "-",
    ),
    spec(
        Parameter::PermeableConductivity,
        "kf_permeable_surface",
        6.0,
        100.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::PorousStorageHeight,
        "Sp_porous_surface",
        2.5,
        4.2,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::PorousInstallationHeight,
        "h_porous_surface",
        50.0,
        100.0,
        "Installation height (h)",
        "mm",
    ),
    spec(
        Parameter::PorousConductivity,
        "kf_porous_surface",
        10.0,
        180.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::PaverJointRatio,
        "FA_paver_stonegrid",
        20.0,
        30.0,
        "Joint ratio (FA)",
        "%",
    ),
    spec(
        Parameter::PaverStorageHeight,
        "Sp_paver_stonegrid",
        0.1,
        2.0,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::PaverWaterCapacity,
        "WKmax_WP_paver_stonegrid",
        0.1,
        0.2,
        "Field capacity minus wilting point (WKmax-WP)",
        "-",
    ),
    spec(
        Parameter::GravelInstallationHeight,
        "h_gravel_cover",
        50.0,
        100.0,
        "Installation height (h)",
        "mm",
    ),
    spec(
        Parameter::GravelStorageHeight,
        "Sp_gravel_cover",
        2.5,
        4.2,
        "Storage height (Sp)",
        "mm",
    ),
    spec(
        Parameter::GravelConductivity,
        "kf_gravel_cover",
        0.72,
        10.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::SurfaceInfiltrationConductivity,
        "kf_surf_infiltration",
        325.0,
        1100.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::SwaleConductivity,
        "kf_infilt_swale",
        14.0,
        3600.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::SwaleTrenchConductivity,
        "kf_swale_trench",
        3.6,
        36.0,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::TrenchSystemDischarge,
        "qDr_swale_trench_system",
        1.0,
        10.0,
        "Throttled discharge yield (qDr)",
        "l/(s*ha)",
    ),
    spec(
        Parameter::TrenchSystemConductivity,
        "kf_swale_trench_system",
        0.36,
        3.6,
        "Hydraulic conductivity (kf)",
        "mm/h",
    ),
    spec(
        Parameter::RainwaterStorageVolume,
        "VSp_rainwater_usage",
        10.0,
        200.0,
        "Specific storage volume (VSp)",
        "mm",
    ),
    spec(
        Parameter::RainwaterDemand,
        "VBr_rainwater_usage",
        0.0,
        5.0,
        "Daily service water demand (VBr)",
        "mm/d",
    ),
    spec(
        Parameter::IrrigatedShare,
        "FAbw_rainwater_usage",
        0.0,
        5.0,
        "Proportion of irrigated area (FAbw)",
        "-",
    ),
    spec(
        Parameter::IrrigationDemand,
        "qBw_rainwater_usage",
        0.0,
        200.0,
        "Specific annual irrigation requirement (qBw)",
        "l/(m^2*a)",
    ),
    spec(
        Parameter::PondRunoffShare,
        "a_i_pond_system",
        0.0,
        1.0,
        "Runoff proportion of inflow area (a_i)",
        "-",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_parameter() {
        for (index, parameter) in Parameter::ALL.iter().enumerate() {
            assert_eq!(PARAMETERS[index].parameter, *parameter);
            assert_eq!(parameter.spec().parameter, *parameter);
        }
    }

    #[test]
    fn every_range_is_ordered() {
        for spec in &PARAMETERS {
            assert!(spec.min <= spec.max, "{} has min > max", spec.key);
        }
    }

    #[test]
    fn keys_are_unique_and_round_trip() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.key().parse::<Parameter>().unwrap(), parameter);
        }
    }

    #[test]
    fn pond_area_aliases() {
        for key in ["a_1_pod_system", "a_2_pod_system", "a_3_pod_system", "a_4_pod_system"] {
            assert_eq!(key.parse::<Parameter>().unwrap(), Parameter::PondRunoffShare);
        }
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            "Sp_basement".parse::<Parameter>(),
            Err(ValidationError::UnknownParameter { key }) if key == "Sp_basement"
        ));
    }

    #[test]
    fn nan_is_never_contained() {
        assert!(!Parameter::Precipitation.spec().contains(f64::NAN));
    }
}
