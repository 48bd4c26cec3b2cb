use std::iter::{self, Chain, Once};
use std::slice;

use uom::si::{
    area::square_meter,
    f64::{Area, Volume},
    volume::cubic_meter,
};

use crate::{
    element::ElementResult,
    error::AggregationError,
    system::{SystemTotal, aggregate},
};

/// An ordered group of elements ending in the element that drains it.
///
/// A stage starts as a single surface. Applying a measure to one or more
/// stages yields a new stage: the upstream elements with their runoff
/// captured, followed by the measure itself as the new outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    upstream: Vec<ElementResult>,
    outlet: ElementResult,
}

/// Iterator over the elements of a [`Stage`], outlet last.
pub type Elements<'a> = Chain<slice::Iter<'a, ElementResult>, Once<&'a ElementResult>>;

impl Stage {
    /// Captures every element of the `upstream` stages and appends `outlet`.
    pub(crate) fn chain(upstream: &[Stage], outlet: ElementResult) -> Self {
        let upstream = upstream
            .iter()
            .flat_map(Stage::iter)
            .map(ElementResult::captured)
            .collect();
        Self { upstream, outlet }
    }

    /// The element whose runoff leaves the stage.
    #[must_use]
    pub fn outlet(&self) -> &ElementResult {
        &self.outlet
    }

    /// Elements draining into the outlet, all with their runoff captured.
    #[must_use]
    pub fn upstream(&self) -> &[ElementResult] {
        &self.upstream
    }

    /// Number of elements including the outlet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.upstream.len() + 1
    }

    /// Always `false`: a stage holds at least its outlet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all elements, outlet last.
    pub fn iter(&self) -> Elements<'_> {
        self.upstream.iter().chain(iter::once(&self.outlet))
    }

    /// Aggregates every element of the stage.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::ZeroVolume`] if no element receives rain.
    pub fn total(&self) -> Result<SystemTotal, AggregationError> {
        aggregate(self)
    }
}

impl From<ElementResult> for Stage {
    fn from(outlet: ElementResult) -> Self {
        Self {
            upstream: Vec::new(),
            outlet,
        }
    }
}

impl<'a> IntoIterator for &'a Stage {
    type Item = &'a ElementResult;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Connected area and runoff volume the outlets of `upstream` deliver.
pub(crate) fn delivered(upstream: &[Stage]) -> (Area, Volume) {
    upstream.iter().map(Stage::outlet).fold(
        (
            Area::new::<square_meter>(0.0),
            Volume::new::<cubic_meter>(0.0),
        ),
        |(area, volume), outlet| {
            (
                area + outlet.connected_area(),
                volume + outlet.volumes().runoff,
            )
        },
    )
}
