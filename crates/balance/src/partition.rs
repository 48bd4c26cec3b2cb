use std::fmt;

/// Destination of precipitation in the annual water balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    /// Surface runoff (`a`).
    Runoff,
    /// Groundwater recharge through infiltration (`g`).
    Recharge,
    /// Evapotranspiration (`v`).
    Evapotranspiration,
    /// Additional consumptive use, e.g. service water (`e`).
    Consumption,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Runoff,
        Destination::Recharge,
        Destination::Evapotranspiration,
        Destination::Consumption,
    ];

    /// Conventional DWA-A102 symbol of the destination.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Destination::Runoff => "a",
            Destination::Recharge => "g",
            Destination::Evapotranspiration => "v",
            Destination::Consumption => "e",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Split of annual precipitation into its destinations.
///
/// The fractions sum to one unless a clamped remainder engaged, in which case
/// the sum exceeds one by the amount that was clamped away. Individual
/// fractions are not restricted to `[0, 1]`: several regressions derive a
/// remainder without clamping and may produce small negative values at the
/// edges of their domain.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Runoff fraction `a`.
    pub runoff: f64,
    /// Recharge fraction `g`.
    pub recharge: f64,
    /// Evapotranspiration fraction `v`.
    pub evapotranspiration: f64,
    /// Consumptive use fraction `e`.
    pub consumption: f64,
}

impl Partition {
    /// Creates a partition without consumptive use.
    #[must_use]
    pub fn new(runoff: f64, recharge: f64, evapotranspiration: f64) -> Self {
        Self {
            runoff,
            recharge,
            evapotranspiration,
            consumption: 0.0,
        }
    }

    /// Returns `self` with the given consumptive use fraction.
    #[must_use]
    pub fn with_consumption(self, consumption: f64) -> Self {
        Self {
            consumption,
            ..self
        }
    }

    /// Returns the fraction routed to `destination`.
    #[must_use]
    pub fn get(&self, destination: Destination) -> f64 {
        match destination {
            Destination::Runoff => self.runoff,
            Destination::Recharge => self.recharge,
            Destination::Evapotranspiration => self.evapotranspiration,
            Destination::Consumption => self.consumption,
        }
    }

    pub(crate) fn set(&mut self, destination: Destination, value: f64) {
        match destination {
            Destination::Runoff => self.runoff = value,
            Destination::Recharge => self.recharge = value,
            Destination::Evapotranspiration => self.evapotranspiration = value,
            Destination::Consumption => self.consumption = value,
        }
    }

    /// Sum of all four fractions.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.runoff + self.recharge + self.evapotranspiration + self.consumption
    }

    /// Returns `true` if any precipitation goes to consumptive use.
    #[must_use]
    pub fn has_consumption(&self) -> bool {
        self.consumption != 0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn get_and_set_agree() {
        let mut partition = Partition::default();
        for (i, destination) in Destination::ALL.into_iter().enumerate() {
            partition.set(destination, i as f64 * 0.1);
        }
        assert_relative_eq!(partition.get(Destination::Runoff), 0.0);
        assert_relative_eq!(partition.get(Destination::Recharge), 0.1);
        assert_relative_eq!(partition.get(Destination::Evapotranspiration), 0.2);
        assert_relative_eq!(partition.get(Destination::Consumption), 0.3);
        assert_relative_eq!(partition.sum(), 0.6);
    }

    #[test]
    fn consumption_flag() {
        let partition = Partition::new(0.5, 0.2, 0.3);
        assert!(!partition.has_consumption());
        assert!(partition.with_consumption(0.1).has_consumption());
    }

    #[test]
    fn symbols() {
        let symbols: Vec<_> = Destination::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(symbols, ["a", "g", "v", "e"]);
    }
}
