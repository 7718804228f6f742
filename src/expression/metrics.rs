//! Fold-change and significance derivation.
//!
//! Everything here is pure: results depend only on the arguments, so a
//! refreshed view is just another call with the new parameters.

use crate::expression::filter::AnnotationFilter;
use crate::expression::record::{DerivedRecord, Record};
use serde::{Serialize, Serializer};
use std::fmt;

/// Signed ratio between condition B and condition A.
///
/// Negative values mean A dominates (`-A/B`), non-negative values mean B
/// dominates or ties (`B/A`). `Undefined` covers the pairs neither branch
/// accepts, e.g. `A > 0, B == 0` or both zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoldChange {
    Value(f64),
    Undefined,
}

impl FoldChange {
    pub fn value(self) -> Option<f64> {
        match self {
            FoldChange::Value(v) => Some(v),
            FoldChange::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, FoldChange::Value(_))
    }
}

impl fmt::Display for FoldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldChange::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            FoldChange::Undefined => f.write_str("NaN"),
        }
    }
}

// Numbers stay numbers in JSON; the undefined marker becomes "NaN"
impl Serialize for FoldChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FoldChange::Value(v) => serializer.serialize_f64(*v),
            FoldChange::Undefined => serializer.serialize_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub fold_change: FoldChange,
    pub is_significant: bool,
}

pub fn fold_change(value_a: f64, value_b: f64) -> FoldChange {
    if value_a > value_b && value_b != 0.0 {
        FoldChange::Value(-value_a / value_b)
    } else if value_b >= value_a && value_a != 0.0 {
        FoldChange::Value(value_b / value_a)
    } else {
        FoldChange::Undefined
    }
}

/// `(A>0 ∧ B>0 ∧ |A/B| > t) ∨ (A>0 ∧ B>0 ∧ |B/A| > t ∧ A+B > 10)`
///
/// The minimum-sum condition only guards the second clause.
pub fn is_significant(value_a: f64, value_b: f64, threshold: f64) -> bool {
    let both_positive = value_a > 0.0 && value_b > 0.0;
    (both_positive && (value_a / value_b).abs() > threshold)
        || (both_positive && (value_b / value_a).abs() > threshold && (value_a + value_b) > 10.0)
}

pub fn compute(value_a: f64, value_b: f64, threshold: f64) -> DerivedMetrics {
    let fold_change = fold_change(value_a, value_b);
    DerivedMetrics {
        fold_change,
        is_significant: fold_change.is_defined() && is_significant(value_a, value_b, threshold),
    }
}

/// Derive a fresh collection for one parameter set. Input records are untouched.
pub fn derive(records: &[Record], threshold: f64, filter: &AnnotationFilter) -> Vec<DerivedRecord> {
    records
        .iter()
        .map(|record| {
            let metrics = compute(record.value_a, record.value_b, threshold);
            DerivedRecord {
                record: record.clone(),
                fold_change: metrics.fold_change,
                is_significant: metrics.is_significant,
                is_highlighted: filter.matches(&record.annotation),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_dominant_is_negative() {
        assert_eq!(fold_change(8.0, 2.0), FoldChange::Value(-4.0));
    }

    #[test]
    fn test_b_dominant_or_tie_is_positive() {
        assert_eq!(fold_change(2.0, 8.0), FoldChange::Value(4.0));
        assert_eq!(fold_change(3.0, 3.0), FoldChange::Value(1.0));
    }

    #[test]
    fn test_zero_divisors_are_undefined() {
        assert_eq!(fold_change(5.0, 0.0), FoldChange::Undefined);
        assert_eq!(fold_change(0.0, 0.0), FoldChange::Undefined);
        // B >= A with A == 0 has no numeric branch either
        assert_eq!(fold_change(0.0, 5.0), FoldChange::Undefined);
    }

    #[test]
    fn test_negative_inputs_follow_literal_rule() {
        // A > B, B != 0 even though both are negative
        assert_eq!(fold_change(-1.0, -4.0), FoldChange::Value(-0.25));
        assert!(!compute(-1.0, -4.0, 0.0).is_significant);
    }

    #[test]
    fn test_significance_examples() {
        assert!(compute(8.0, 2.0, 2.0).is_significant);
        assert!(!compute(3.0, 3.0, 2.0).is_significant);
        assert!(compute(11.0, 1.0, 1.0).is_significant);
        // First clause fires: |6/5| = 1.2 > 1.0
        assert!(compute(6.0, 5.0, 1.0).is_significant);
    }

    #[test]
    fn test_sum_guard_only_applies_to_second_clause() {
        // B/A = 4 > 2 but A + B = 5: second clause blocked, first clause 0.25 fails
        assert!(!compute(1.0, 4.0, 2.0).is_significant);
        // Same ratio with enough signal
        assert!(compute(3.0, 12.0, 2.0).is_significant);
        // A/B = 4 > 2 with a tiny sum still passes via the first clause
        assert!(compute(4.0, 1.0, 2.0).is_significant);
    }

    #[test]
    fn test_undefined_is_never_significant() {
        let m = compute(5.0, 0.0, 0.0);
        assert_eq!(m.fold_change, FoldChange::Undefined);
        assert!(!m.is_significant);
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(FoldChange::Undefined.to_string(), "NaN");
        assert_eq!(format!("{:.2}", FoldChange::Value(-4.0)), "-4.00");
        assert_eq!(serde_json::to_string(&FoldChange::Value(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&FoldChange::Undefined).unwrap(), "\"NaN\"");
    }
}
