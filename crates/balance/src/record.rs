use std::fmt;

/// One row of a tabular result: a named value with its unit.
///
/// Values carry full precision; rounding is left to whoever renders them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    pub name: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

impl Record {
    pub(crate) fn new(name: &'static str, unit: &'static str, value: f64) -> Self {
        Self { name, unit, value }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(
            f,
            "{:<4} {:>14.*} {}",
            self.name, precision, self.value, self.unit
        )
    }
}

/// Finds the value of the row called `name`.
#[must_use]
pub fn find_value(records: &[Record], name: &str) -> Option<f64> {
    records
        .iter()
        .find(|record| record.name == name)
        .map(|record| record.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_three_decimals() {
        let record = Record::new("Va", "m³/a", 706.412_345);
        assert_eq!(record.to_string(), "Va          706.412 m³/a");
        assert_eq!(format!("{record:.1}"), "Va            706.4 m³/a");
    }

    #[test]
    fn find_by_name() {
        let records = [Record::new("a", "-", 0.5), Record::new("v", "-", 0.25)];
        assert_eq!(find_value(&records, "v"), Some(0.25));
        assert_eq!(find_value(&records, "e"), None);
    }
}
