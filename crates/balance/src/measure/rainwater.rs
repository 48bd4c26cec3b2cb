use watbal_core::{Parameter, validate};

use crate::{
    calculator::Calculator,
    catalogue,
    error::ElementError,
    measure::Measure,
    partition::Partition,
    regression::Var,
    study::StudyArea,
};

/// Rainwater harvesting for irrigation and service water.
///
/// Irrigation water evaporates (`v`), service water is consumed (`e`) and the
/// clamped remainder overflows as runoff. Nothing infiltrates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainwaterUsage {
    /// Specific storage volume `VSp` in mm (10–200).
    pub storage_volume: f64,
    /// Daily service water demand `VBr` in mm/d (0–5).
    pub service_demand: f64,
    /// Proportion of irrigated area `FAbw` (-, 0–5).
    #[cfg_attr(feature = "serde", serde(default = "RainwaterUsage::default_irrigated_share"))]
    pub irrigated_share: f64,
    /// Specific annual irrigation requirement `qBw` in l/(m²·a) (0–200).
    #[cfg_attr(feature = "serde", serde(default = "RainwaterUsage::default_irrigation_demand"))]
    pub irrigation_demand: f64,
}

impl RainwaterUsage {
    #[must_use]
    pub fn new(storage_volume: f64, service_demand: f64) -> Self {
        Self {
            storage_volume,
            service_demand,
            irrigated_share: Self::default_irrigated_share(),
            irrigation_demand: Self::default_irrigation_demand(),
        }
    }

    #[must_use]
    pub fn with_irrigation(self, irrigated_share: f64, irrigation_demand: f64) -> Self {
        Self {
            irrigated_share,
            irrigation_demand,
            ..self
        }
    }

    /// Annual irrigation volume `VBw = FAbw · qBw` in mm/a.
    #[must_use]
    pub fn irrigation_volume(&self) -> f64 {
        self.irrigated_share * self.irrigation_demand
    }

    /// Usable volume `Vnmin = min(P, 365 · VBr + VBw)` in mm/a.
    #[must_use]
    pub fn usable_volume(&self, study: &StudyArea) -> f64 {
        study
            .precipitation()
            .min(365.0 * self.service_demand + self.irrigation_volume())
    }

    fn default_irrigated_share() -> f64 {
        2.0
    }

    fn default_irrigation_demand() -> f64 {
        60.0
    }
}

impl Calculator for RainwaterUsage {
    fn label(&self) -> &'static str {
        "Rainwater usage"
    }

    fn validate(&self) -> Result<(), ElementError> {
        validate(self.storage_volume, Parameter::RainwaterStorageVolume)?;
        validate(self.service_demand, Parameter::RainwaterDemand)?;
        validate(self.irrigated_share, Parameter::IrrigatedShare)?;
        validate(self.irrigation_demand, Parameter::IrrigationDemand)?;
        Ok(())
    }

    fn fractions(&self, study: &StudyArea) -> Partition {
        let inputs = study
            .inputs()
            .with(Var::StorageVolume, self.storage_volume)
            .with(Var::ServiceDemand, self.service_demand)
            .with(Var::IrrigationVolume, self.irrigation_volume())
            .with(Var::UsableVolume, self.usable_volume(study));
        catalogue::RAINWATER_USAGE.evaluate(&inputs)
    }
}

impl Measure for RainwaterUsage {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, f64::Area, volume::cubic_meter};

    use super::*;
    use crate::surface::{Roof, Surface};

    #[test]
    fn service_water_regression() {
        let (p, etp, vsp, vbr) = (800.0_f64, 500.0, 50.0_f64, 2.0_f64);
        let usage = RainwaterUsage::new(vsp, vbr);
        let vbw = 120.0;
        let vnmin = p.min(365.0 * vbr + vbw);
        assert_eq!(usage.irrigation_volume(), vbw);
        assert_eq!(usage.usable_volume(&StudyArea::default()), vnmin);

        let partition = usage.partition(&StudyArea::default()).unwrap();
        let v = -0.0001927 * p + 0.0001831 * etp + 0.0006083 * vbw
            - 0.0000003127 * vbw.powi(2)
            - 0.3092 * (3.269 / vsp).exp()
            + 1.424 / (2.782 + vbr)
            + 0.0001885 * vnmin;
        let e = 0.4451 - 0.0003529 * p - 0.00007728 * etp + 0.06821 * vsp.log10()
            - 0.0002507 * vbw
            + 0.2349 * vbr.log10()
            + 0.0001738 * vnmin;

        assert_relative_eq!(partition.evapotranspiration, v, max_relative = 1e-12);
        assert_relative_eq!(partition.consumption, e, max_relative = 1e-12);
        assert_eq!(partition.recharge, 0.0);
        assert_relative_eq!(partition.runoff, (1.0 - v - e).max(0.0), epsilon = 1e-12);
    }

    #[test]
    fn irrigation_is_a_proportion_times_a_specific_demand() {
        assert_eq!(Parameter::IrrigatedShare.spec().unit, "-");
        assert_eq!(Parameter::IrrigationDemand.spec().unit, "l/(m^2*a)");

        let study = StudyArea::default();
        let full = RainwaterUsage::new(50.0, 1.0).with_irrigation(5.0, 200.0);
        assert_eq!(full.irrigation_volume(), 1000.0);
        assert!(full.partition(&study).is_ok());

        let over = RainwaterUsage::new(50.0, 1.0).with_irrigation(5.5, 60.0);
        assert!(over.partition(&study).is_err());
    }

    #[test]
    fn no_demand_no_use() {
        let partition = RainwaterUsage::new(50.0, 0.0)
            .with_irrigation(0.0, 60.0)
            .partition(&StudyArea::default())
            .unwrap();
        assert_eq!(partition, Partition::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn consumption_reaches_records() {
        let study = StudyArea::default();
        let roof = Roof::default()
            .stage(&study, Area::new::<square_meter>(200.0))
            .unwrap();
        let stage = RainwaterUsage::new(50.0, 2.0).apply(&study, &[roof]).unwrap();

        let cistern = stage.outlet();
        assert!(cistern.partition().has_consumption());
        assert!(cistern.volumes().consumption.get::<cubic_meter>() > 0.0);
        assert!(cistern.records().iter().any(|r| r.name == "Ve"));

        let total = stage.total().unwrap();
        assert!(total.records().iter().any(|r| r.name == "e"));
    }

    #[test]
    fn storage_volume_range() {
        let study = StudyArea::default();
        assert!(RainwaterUsage::new(5.0, 1.0).partition(&study).is_err());
        assert!(RainwaterUsage::new(50.0, 6.0).partition(&study).is_err());
        assert!(RainwaterUsage::new(50.0, 1.0)
            .with_irrigation(6.0, 60.0)
            .partition(&study)
            .is_err());
    }
}
