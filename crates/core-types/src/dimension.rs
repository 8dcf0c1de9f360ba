use crate::records::BenchmarkRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A scalar used as a grouping and join key.
///
/// Counts (states, symbols) compare as integers; fractions (densities) compare
/// with IEEE total ordering, so two densities are the same key only when they
/// are bit-for-bit the same value. There is no tolerance or binning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    Count(u64),
    Fraction(f64),
}

impl DimensionValue {
    /// The value as a chart coordinate.
    pub fn as_f64(&self) -> f64 {
        match *self {
            DimensionValue::Count(n) => n as f64,
            DimensionValue::Fraction(x) => x,
        }
    }
}

impl PartialEq for DimensionValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DimensionValue {}

impl PartialOrd for DimensionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DimensionValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DimensionValue::Count(a), DimensionValue::Count(b)) => a.cmp(b),
            (DimensionValue::Fraction(a), DimensionValue::Fraction(b)) => a.total_cmp(b),
            // Mixed kinds never share a series; keep the order total anyway.
            (DimensionValue::Count(_), DimensionValue::Fraction(_)) => Ordering::Less,
            (DimensionValue::Fraction(_), DimensionValue::Count(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::Count(n) => write!(f, "{}", n),
            DimensionValue::Fraction(x) => write!(f, "{}", x),
        }
    }
}

impl From<u32> for DimensionValue {
    fn from(value: u32) -> Self {
        DimensionValue::Count(u64::from(value))
    }
}

impl From<f64> for DimensionValue {
    fn from(value: f64) -> Self {
        DimensionValue::Fraction(value)
    }
}

/// The independent dimensions of a benchmark row that a report can sweep over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Number of states of the input automaton (`n`).
    States,
    /// Number of input symbols (`k`).
    Alphabet,
}

impl Axis {
    /// Extracts this axis' value from a record.
    pub fn select(&self, record: &BenchmarkRecord) -> DimensionValue {
        match self {
            Axis::States => DimensionValue::from(record.state_count()),
            Axis::Alphabet => DimensionValue::from(record.alphabet_size()),
        }
    }

    /// The axis held fixed while this one varies.
    pub fn complement(&self) -> Axis {
        match self {
            Axis::States => Axis::Alphabet,
            Axis::Alphabet => Axis::States,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Algorithm;

    #[test]
    fn counts_order_numerically() {
        let mut values = vec![
            DimensionValue::Count(100),
            DimensionValue::Count(9),
            DimensionValue::Count(20),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![DimensionValue::Count(9), DimensionValue::Count(20), DimensionValue::Count(100)]
        );
    }

    #[test]
    fn fractions_use_exact_equality() {
        assert_eq!(DimensionValue::Fraction(0.25), DimensionValue::Fraction(0.25));
        assert_ne!(DimensionValue::Fraction(0.1 + 0.2), DimensionValue::Fraction(0.3));
        assert!(DimensionValue::Fraction(0.1) < DimensionValue::Fraction(0.2));
    }

    #[test]
    fn display_matches_native_formatting() {
        assert_eq!(DimensionValue::Count(42).to_string(), "42");
        assert_eq!(DimensionValue::Fraction(0.5).to_string(), "0.5");
    }

    #[test]
    fn axis_selects_record_fields() {
        let record = BenchmarkRecord::new(Algorithm::Hopcroft, 10, 2, 100, "f1", 8).unwrap();
        assert_eq!(Axis::States.select(&record), DimensionValue::Count(10));
        assert_eq!(Axis::Alphabet.select(&record), DimensionValue::Count(2));
        assert_eq!(Axis::States.complement(), Axis::Alphabet);
    }
}
