//! Regional climate defaults for water balance studies.
//!
//! A study needs an annual precipitation and potential evapotranspiration.
//! When site data is unavailable, [`RegionalAverages`] supplies the
//! 2000–2020 regional averages published by the German Weather Service (DWD),
//! with ETp estimated as a fixed share of precipitation.
//!
//! Any other source can be plugged in by implementing [`ClimateLookup`].

/// Annual climate of a region, in mm/a.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Climate {
    pub precipitation: f64,
    pub evapotranspiration: f64,
}

/// A source of annual climate values by region name.
pub trait ClimateLookup {
    /// Returns the climate of `region`, or `None` if the region is unknown.
    fn lookup(&self, region: &str) -> Option<Climate>;
}

/// DWD regional averages 2000–2020.
///
/// Names match exactly, including the `Bundesland` groupings used by DWD
/// (for example `"Niedersachsen/Hamburg/Bremen"`).
///
/// # Example
///
/// ```
/// use watbal_climate::{ClimateLookup, RegionalAverages};
///
/// let hessen = RegionalAverages.lookup("Hessen").unwrap();
/// assert_eq!(hessen.precipitation, 755.0);
/// assert!(RegionalAverages.lookup("Atlantis").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalAverages;

impl RegionalAverages {
    /// Iterates over the region names in the table.
    pub fn regions(&self) -> impl Iterator<Item = &'static str> {
        REGIONS.iter().map(|(name, _, _)| *name)
    }
}

impl ClimateLookup for RegionalAverages {
    fn lookup(&self, region: &str) -> Option<Climate> {
        REGIONS
            .iter()
            .find(|(name, _, _)| *name == region)
            .map(|&(_, precipitation, evapotranspiration)| Climate {
                precipitation,
                evapotranspiration,
            })
    }
}

/// `(region, P, ETp)` in mm/a.
const REGIONS: [(&str, f64, f64); 17] = [
    ("Brandenburg/Berlin", 584.0, 365.0),
    ("Brandenburg", 584.0, 365.0),
    ("Baden-Wuerttemberg", 939.0, 587.0),
    ("Bayern", 926.0, 579.0),
    ("Hessen", 755.0, 472.0),
    ("Mecklenburg-Vorpommern", 621.0, 388.0),
    ("Niedersachsen", 755.0, 472.0),
    ("Niedersachsen/Hamburg/Bremen", 755.0, 472.0),
    ("Nordrhein-Westfalen", 855.0, 534.0),
    ("Rheinland-Pfalz", 764.0, 477.0),
    ("Schleswig-Holstein", 816.0, 510.0),
    ("Saarland", 893.0, 558.0),
    ("Sachsen", 723.0, 452.0),
    ("Sachsen-Anhalt", 575.0, 359.0),
    ("Thueringen/Sachsen-Anhalt", 636.0, 398.0),
    ("Thueringen", 714.0, 446.0),
    ("Deutschland", 785.0, 491.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn known_regions() {
        let germany = RegionalAverages.lookup("Deutschland").unwrap();
        assert_eq!(germany.precipitation, 785.0);
        assert_eq!(germany.evapotranspiration, 491.0);

        let bavaria = RegionalAverages.lookup("Bayern").unwrap();
        assert_eq!(bavaria.precipitation, 926.0);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(RegionalAverages.lookup("bayern").is_none());
        assert!(RegionalAverages.lookup("").is_none());
    }

    #[test]
    fn every_listed_region_resolves() {
        assert_eq!(RegionalAverages.regions().count(), 17);
        for region in RegionalAverages.regions() {
            assert!(RegionalAverages.lookup(region).is_some(), "{region}");
        }
    }
}
