//! Volumes and result records of a single computed element.

use std::ops::Add;

use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Volume},
    volume::cubic_meter,
};
use watbal_core::constraint::{Constrained, NonNegative};

use crate::{
    partition::{Destination, Partition},
    record::Record,
    study::StudyArea,
};

/// Annual water volumes of an element.
///
/// `precipitation` is the rain falling on the element itself (`Vp`).
/// The destination volumes split the *distributed* volume, which adds the
/// runoff routed in from upstream elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volumes {
    /// `Vp`
    pub precipitation: Volume,
    /// Runoff received from upstream elements.
    pub inflow: Volume,
    /// `Va`
    pub runoff: Volume,
    /// `Vg`
    pub recharge: Volume,
    /// `Vv`
    pub evapotranspiration: Volume,
    /// `Ve`
    pub consumption: Volume,
}

impl Volumes {
    /// Splits `precipitation + inflow` according to `partition`.
    #[must_use]
    pub fn split(precipitation: Volume, inflow: Volume, partition: &Partition) -> Self {
        let distributed = precipitation + inflow;
        Self {
            precipitation,
            inflow,
            runoff: distributed * partition.runoff,
            recharge: distributed * partition.recharge,
            evapotranspiration: distributed * partition.evapotranspiration,
            consumption: distributed * partition.consumption,
        }
    }

    /// Volume handed to the element's destinations.
    #[must_use]
    pub fn distributed(&self) -> Volume {
        self.precipitation + self.inflow
    }
}

impl Add for Volumes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            precipitation: self.precipitation + rhs.precipitation,
            inflow: self.inflow + rhs.inflow,
            runoff: self.runoff + rhs.runoff,
            recharge: self.recharge + rhs.recharge,
            evapotranspiration: self.evapotranspiration + rhs.evapotranspiration,
            consumption: self.consumption + rhs.consumption,
        }
    }
}

/// The computed water balance of one surface or measure.
///
/// Results are immutable. Passing a result on to a downstream measure yields a
/// new, [captured](ElementResult::captured) copy instead of changing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementResult {
    label: String,
    area: Constrained<Area, NonNegative>,
    connected_area: Area,
    precipitation: f64,
    evapotranspiration: f64,
    partition: Partition,
    volumes: Volumes,
    runoff_captured: bool,
}

impl ElementResult {
    /// Composes the result of an element that only receives its own rain.
    ///
    /// The connected area is the runoff-effective area `area · a`.
    #[must_use]
    pub fn compose(
        label: impl Into<String>,
        area: Constrained<Area, NonNegative>,
        study: &StudyArea,
        partition: Partition,
    ) -> Self {
        let connected_area = area.get() * partition.runoff;
        let inflow = Volume::new::<cubic_meter>(0.0);
        Self::routed(label, area, connected_area, study, partition, inflow)
    }

    /// Composes the result of an element that also receives `inflow` and
    /// serves `connected_area` upstream.
    #[must_use]
    pub fn routed(
        label: impl Into<String>,
        area: Constrained<Area, NonNegative>,
        connected_area: Area,
        study: &StudyArea,
        partition: Partition,
        inflow: Volume,
    ) -> Self {
        let label = label.into();
        let precipitation: Volume = area.get() * study.precipitation_depth();
        let volumes = Volumes::split(precipitation, inflow, &partition);

        debug!(
            element = %label,
            area = area.get().get::<square_meter>(),
            a = partition.runoff,
            g = partition.recharge,
            v = partition.evapotranspiration,
            e = partition.consumption,
            "element computed"
        );

        Self {
            label,
            area,
            connected_area,
            precipitation: study.precipitation(),
            evapotranspiration: study.evapotranspiration(),
            partition,
            volumes,
            runoff_captured: false,
        }
    }

    /// Returns a copy whose runoff is taken up by a downstream measure.
    ///
    /// The runoff volume is zeroed so it is counted once, at the measure.
    /// Fractions and all other volumes are kept.
    #[must_use]
    pub fn captured(&self) -> Self {
        let mut captured = self.clone();
        captured.volumes.runoff = Volume::new::<cubic_meter>(0.0);
        captured.runoff_captured = true;
        captured
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area.get()
    }

    pub(crate) fn constrained_area(&self) -> Constrained<Area, NonNegative> {
        self.area
    }

    /// Runoff-effective area `Au` the element drains.
    #[must_use]
    pub fn connected_area(&self) -> Area {
        self.connected_area
    }

    /// Precipitation `P` of the study, in mm/a.
    #[must_use]
    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// Potential evapotranspiration `ETp` of the study, in mm/a.
    #[must_use]
    pub fn evapotranspiration(&self) -> f64 {
        self.evapotranspiration
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[must_use]
    pub fn volumes(&self) -> &Volumes {
        &self.volumes
    }

    /// Returns `true` once a downstream measure has taken up the runoff.
    #[must_use]
    pub fn is_runoff_captured(&self) -> bool {
        self.runoff_captured
    }

    /// Result rows of the element.
    ///
    /// The consumptive-use rows `e` and `Ve` are only present when the
    /// element has consumptive use.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        let mut records = vec![
            Record::new("Area", "m²", self.area().get::<square_meter>()),
            Record::new("Au", "m²", self.connected_area.get::<square_meter>()),
            Record::new("P", "mm/a", self.precipitation),
            Record::new("ETp", "mm/a", self.evapotranspiration),
        ];
        let consumption = self.partition.has_consumption();
        records.extend(fraction_records(&self.partition, consumption));
        records.extend(volume_records(&self.volumes, consumption));
        records
    }

    /// Annual depths of runoff (`RD`), recharge (`GWN`) and actual
    /// evapotranspiration (`ETa`) in mm/a.
    #[must_use]
    pub fn depth_records(&self) -> Vec<Record> {
        vec![
            Record::new("RD", "mm/a", self.partition.runoff * self.precipitation),
            Record::new("GWN", "mm/a", self.partition.recharge * self.precipitation),
            Record::new(
                "ETa",
                "mm/a",
                self.partition.evapotranspiration * self.precipitation,
            ),
        ]
    }
}

pub(crate) fn fraction_records(partition: &Partition, consumption: bool) -> Vec<Record> {
    Destination::ALL
        .into_iter()
        .filter(|d| consumption || *d != Destination::Consumption)
        .map(|d| Record::new(d.symbol(), "-", partition.get(d)))
        .collect()
}

pub(crate) fn volume_records(volumes: &Volumes, consumption: bool) -> Vec<Record> {
    let rows = [
        ("Vp", volumes.precipitation),
        ("Va", volumes.runoff),
        ("Vg", volumes.recharge),
        ("Vv", volumes.evapotranspiration),
        ("Ve", volumes.consumption),
    ];
    rows.into_iter()
        .filter(|(name, _)| consumption || *name != "Ve")
        .map(|(name, volume)| Record::new(name, "m³/a", volume.get::<cubic_meter>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::record::find_value;

    fn area(value: f64) -> Constrained<Area, NonNegative> {
        NonNegative::new(Area::new::<square_meter>(value)).unwrap()
    }

    #[test]
    fn volumes_follow_fractions() {
        let study = StudyArea::default();
        let partition = Partition::new(0.6, 0.1, 0.3);
        let element = ElementResult::compose("yard", area(250.0), &study, partition);

        let volumes = element.volumes();
        assert_relative_eq!(volumes.precipitation.get::<cubic_meter>(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(volumes.runoff.get::<cubic_meter>(), 120.0, epsilon = 1e-9);
        assert_relative_eq!(volumes.recharge.get::<cubic_meter>(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(
            volumes.evapotranspiration.get::<cubic_meter>(),
            60.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            element.connected_area().get::<square_meter>(),
            150.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn inflow_is_distributed_but_not_precipitation() {
        let study = StudyArea::default();
        let partition = Partition::new(0.0, 0.8, 0.2);
        let inflow = Volume::new::<cubic_meter>(400.0);
        let connected = Area::new::<square_meter>(500.0);
        let element =
            ElementResult::routed("swale", area(50.0), connected, &study, partition, inflow);

        let volumes = element.volumes();
        assert_relative_eq!(volumes.precipitation.get::<cubic_meter>(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(volumes.distributed().get::<cubic_meter>(), 440.0, epsilon = 1e-9);
        assert_relative_eq!(volumes.recharge.get::<cubic_meter>(), 352.0, epsilon = 1e-9);
        assert_eq!(element.connected_area(), connected);
    }

    #[test]
    fn capture_zeroes_runoff_only() {
        let study = StudyArea::default();
        let element =
            ElementResult::compose("roof", area(100.0), &study, Partition::new(0.9, 0.0, 0.1));
        let captured = element.captured();

        assert!(!element.is_runoff_captured());
        assert!(captured.is_runoff_captured());
        assert_eq!(captured.volumes().runoff.get::<cubic_meter>(), 0.0);
        assert_eq!(captured.volumes().precipitation, element.volumes().precipitation);
        assert_eq!(captured.partition(), element.partition());
        assert_eq!(captured.connected_area(), element.connected_area());
    }

    #[test]
    fn records_skip_consumption_when_absent() {
        let study = StudyArea::default();
        let plain =
            ElementResult::compose("roof", area(100.0), &study, Partition::new(0.9, 0.0, 0.1));
        let names: Vec<_> = plain.records().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Area", "Au", "P", "ETp", "a", "g", "v", "Vp", "Va", "Vg", "Vv"]
        );

        let partition = Partition::new(0.5, 0.0, 0.2).with_consumption(0.3);
        let used = ElementResult::compose("cistern", area(0.0), &study, partition);
        let records = used.records();
        assert_eq!(find_value(&records, "e"), Some(0.3));
        assert_eq!(find_value(&records, "Ve"), Some(0.0));
    }

    #[test]
    fn depths() {
        let study = StudyArea::default();
        let element =
            ElementResult::compose("lawn", area(10.0), &study, Partition::new(0.1, 0.5, 0.4));
        let records = element.depth_records();
        assert_relative_eq!(find_value(&records, "RD").unwrap(), 80.0, epsilon = 1e-9);
        assert_relative_eq!(find_value(&records, "GWN").unwrap(), 400.0, epsilon = 1e-9);
        assert_relative_eq!(find_value(&records, "ETa").unwrap(), 320.0, epsilon = 1e-9);
    }
}
