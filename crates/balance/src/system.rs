//! Aggregation of element results into system totals.

use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Volume},
    ratio::ratio,
    volume::cubic_meter,
};

use crate::{
    element::{ElementResult, Volumes, fraction_records, volume_records},
    error::AggregationError,
    partition::Partition,
    record::Record,
    stage::Stage,
};

/// Water balance of a whole system of elements.
///
/// Fractions are ratios of summed volumes to the summed precipitation volume,
/// which weights every element by the water it actually receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemTotal {
    area: Area,
    partition: Partition,
    volumes: Volumes,
    element_count: usize,
}

impl SystemTotal {
    /// Aggregates all elements of the given stages.
    ///
    /// # Errors
    ///
    /// See [`aggregate`].
    pub fn from_stages<'a>(
        stages: impl IntoIterator<Item = &'a Stage>,
    ) -> Result<Self, AggregationError> {
        aggregate(stages.into_iter().flat_map(Stage::iter))
    }

    /// Summed area of all elements.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[must_use]
    pub fn volumes(&self) -> &Volumes {
        &self.volumes
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Result rows of the system: Area, fractions and volumes.
    ///
    /// The consumptive-use rows are only present when some element has
    /// consumptive use.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        let consumption = self.volumes.consumption.get::<cubic_meter>() != 0.0;
        let mut records = vec![Record::new("Area", "m²", self.area.get::<square_meter>())];
        records.extend(fraction_records(&self.partition, consumption));
        records.extend(volume_records(&self.volumes, consumption));
        records
    }
}

/// Sums the volumes of `elements` and derives the system fractions.
///
/// Captured runoff is already zeroed on the elements, so runoff routed
/// through a measure is only counted where it finally leaves the system.
///
/// # Errors
///
/// Returns [`AggregationError::Empty`] if `elements` is empty and
/// [`AggregationError::ZeroVolume`] if their precipitation volume sums to zero.
///
/// # Example
///
/// ```
/// use uom::si::{area::square_meter, f64::Area};
/// use watbal_balance::{Roof, StudyArea, Surface, aggregate};
///
/// let study = StudyArea::default();
/// let roof = Roof::default().element(&study, Area::new::<square_meter>(120.0)).unwrap();
///
/// let total = aggregate([&roof]).unwrap();
/// assert_eq!(total.partition(), roof.partition());
/// ```
pub fn aggregate<'a>(
    elements: impl IntoIterator<Item = &'a ElementResult>,
) -> Result<SystemTotal, AggregationError> {
    let mut elements = elements.into_iter();
    let first = elements.next().ok_or(AggregationError::Empty)?;

    let (area, volumes, element_count) = elements.fold(
        (first.constrained_area(), *first.volumes(), 1),
        |(area, volumes, count), element| {
            (
                area + element.constrained_area(),
                volumes + *element.volumes(),
                count + 1,
            )
        },
    );

    let precipitation = volumes.precipitation;
    if precipitation.get::<cubic_meter>() == 0.0 {
        return Err(AggregationError::ZeroVolume);
    }
    let fraction = |volume: Volume| (volume / precipitation).get::<ratio>();
    let partition = Partition::new(
        fraction(volumes.runoff),
        fraction(volumes.recharge),
        fraction(volumes.evapotranspiration),
    )
    .with_consumption(fraction(volumes.consumption));

    debug!(
        element_count,
        precipitation = precipitation.get::<cubic_meter>(),
        a = partition.runoff,
        g = partition.recharge,
        v = partition.evapotranspiration,
        e = partition.consumption,
        "system aggregated"
    );

    Ok(SystemTotal {
        area: area.get(),
        partition,
        volumes,
        element_count,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use watbal_core::constraint::NonNegative;

    use super::*;
    use crate::study::StudyArea;

    fn element(area: f64, partition: Partition) -> ElementResult {
        let area = NonNegative::new(Area::new::<square_meter>(area)).unwrap();
        ElementResult::compose("element", area, &StudyArea::default(), partition)
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(aggregate(&[] as &[ElementResult]), Err(AggregationError::Empty));
        assert_eq!(
            SystemTotal::from_stages(&Vec::<Stage>::new()),
            Err(AggregationError::Empty)
        );
    }

    #[test]
    fn zero_volume_is_an_error() {
        let pipe = element(0.0, Partition::new(1.0, 0.0, 0.0));
        assert_eq!(aggregate([&pipe]), Err(AggregationError::ZeroVolume));
    }

    #[test]
    fn single_element_is_identity() {
        let partition = Partition::new(0.61, 0.17, 0.22);
        let roof = element(420.0, partition);
        let total = aggregate([&roof]).unwrap();

        assert_eq!(total.element_count(), 1);
        assert_relative_eq!(total.partition().runoff, 0.61, max_relative = 1e-12);
        assert_relative_eq!(total.partition().recharge, 0.17, max_relative = 1e-12);
        assert_relative_eq!(total.partition().evapotranspiration, 0.22, max_relative = 1e-12);
        assert_eq!(total.volumes(), roof.volumes());
    }

    #[test]
    fn doubling_doubles_volumes_only() {
        let yard = element(300.0, Partition::new(0.4, 0.35, 0.25));
        let single = aggregate([&yard]).unwrap();
        let double = aggregate([&yard, &yard]).unwrap();

        assert_relative_eq!(
            double.volumes().precipitation.get::<cubic_meter>(),
            2.0 * single.volumes().precipitation.get::<cubic_meter>()
        );
        assert_relative_eq!(
            double.volumes().runoff.get::<cubic_meter>(),
            2.0 * single.volumes().runoff.get::<cubic_meter>()
        );
        assert_relative_eq!(double.partition().runoff, single.partition().runoff);
        assert_relative_eq!(double.partition().recharge, single.partition().recharge);
        assert_relative_eq!(double.area().get::<square_meter>(), 600.0);
    }

    #[test]
    fn fractions_are_volume_weighted() {
        let sealed = element(300.0, Partition::new(1.0, 0.0, 0.0));
        let green = element(100.0, Partition::new(0.0, 0.5, 0.5));
        let total = aggregate([&sealed, &green]).unwrap();

        assert_relative_eq!(total.partition().runoff, 0.75, max_relative = 1e-12);
        assert_relative_eq!(total.partition().recharge, 0.125, max_relative = 1e-12);
        assert_relative_eq!(total.partition().evapotranspiration, 0.125, max_relative = 1e-12);
    }

    #[test]
    fn records_omit_consumption_when_absent() {
        let total = aggregate([&element(10.0, Partition::new(0.5, 0.5, 0.0))]).unwrap();
        let names: Vec<_> = total.records().iter().map(|r| r.name).collect();
        assert_eq!(names, ["Area", "a", "g", "v", "Vp", "Va", "Vg", "Vv"]);
    }
}
