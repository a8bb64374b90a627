//! Range normalization.
//!
//! Turns a UI range into a [`Predicate`]. The rules are the same for every
//! entity and every range kind:
//!
//! | Bounds present | Predicate |
//! |----------------|-----------|
//! | lower and upper | `BETWEEN lower upper` (also when equal) |
//! | lower only | `GREATER_THAN_OR_EQUAL lower` |
//! | upper only | `LESS_THAN_OR_EQUAL upper` |
//! | neither | omitted |
//!
//! Normalization never fails. Semantic validity (e.g. an inverted range)
//! is left to the query layer unless [`InvertedRangePolicy::Swap`] is
//! selected.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::predicate::{Modifier, Predicate, PredicateValue};
use crate::selection::{DateRange, NumericRange};

/// What to do with a range whose lower bound exceeds its upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvertedRangePolicy {
    /// Emit the bounds as given.
    #[default]
    PassThrough,
    /// Exchange the bounds so `value <= value2`.
    Swap,
}

/// Build a predicate from optional lower and upper bounds.
pub fn normalize_bounds<T>(lower: Option<T>, upper: Option<T>) -> Option<Predicate>
where
    T: Into<PredicateValue>,
{
    match (lower, upper) {
        (Some(lo), Some(hi)) => Some(Predicate::between(lo, hi)),
        (Some(lo), None) => Some(Predicate::single(Modifier::GreaterThanOrEqual, lo)),
        (None, Some(hi)) => Some(Predicate::single(Modifier::LessThanOrEqual, hi)),
        (None, None) => None,
    }
}

/// Normalize a rating range.
pub fn normalize_numeric_range(
    range: &NumericRange,
    policy: InvertedRangePolicy,
) -> Option<Predicate> {
    let (mut lo, mut hi) = (range.min, range.max);
    if policy == InvertedRangePolicy::Swap {
        if let (Some(a), Some(b)) = (lo, hi) {
            if a > b {
                tracing::debug!(min = a, max = b, "swapping inverted numeric range");
                (lo, hi) = (Some(b), Some(a));
            }
        }
    }
    normalize_bounds(lo, hi)
}

/// Normalize a calendar date range.
///
/// Bounds are passed through as the caller's strings. Under
/// [`InvertedRangePolicy::Swap`] the bounds are only reordered when both
/// parse as `YYYY-MM-DD`.
pub fn normalize_date_range(range: &DateRange, policy: InvertedRangePolicy) -> Option<Predicate> {
    let mut lo = non_empty(range.start.as_deref());
    let mut hi = non_empty(range.end.as_deref());
    if policy == InvertedRangePolicy::Swap {
        if let (Some(a), Some(b)) = (lo, hi) {
            if let (Some(da), Some(db)) = (parse_date(a), parse_date(b)) {
                if da > db {
                    tracing::debug!(start = a, end = b, "swapping inverted date range");
                    std::mem::swap(&mut lo, &mut hi);
                }
            }
        }
    }
    normalize_bounds(lo, hi)
}

// UI date pickers clear to "" rather than removing the key.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(start: Option<&str>, end: Option<&str>) -> DateRange {
        DateRange {
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    #[test]
    fn test_closed_date_range_is_between() {
        let p = normalize_date_range(
            &dates(Some("2024-01-01"), Some("2024-12-31")),
            InvertedRangePolicy::PassThrough,
        )
        .unwrap();
        assert_eq!(p, Predicate::between("2024-01-01", "2024-12-31"));
    }

    #[test]
    fn test_single_day_is_degenerate_between() {
        let p = normalize_date_range(
            &dates(Some("2024-03-15"), Some("2024-03-15")),
            InvertedRangePolicy::PassThrough,
        )
        .unwrap();
        assert_eq!(p.modifier, Modifier::Between);
        assert_eq!(p.value, PredicateValue::from("2024-03-15"));
        assert_eq!(p.value2, Some(PredicateValue::from("2024-03-15")));
    }

    #[test]
    fn test_start_only_is_gte() {
        let p = normalize_date_range(&dates(Some("2023-06-01"), None), Default::default())
            .unwrap();
        assert_eq!(
            p,
            Predicate::single(Modifier::GreaterThanOrEqual, "2023-06-01")
        );
    }

    #[test]
    fn test_end_only_is_lte() {
        let p = normalize_date_range(&dates(None, Some("2023-06-30")), Default::default())
            .unwrap();
        assert_eq!(p, Predicate::single(Modifier::LessThanOrEqual, "2023-06-30"));
    }

    #[test]
    fn test_no_bounds_is_omitted() {
        assert!(normalize_date_range(&dates(None, None), Default::default()).is_none());
        assert!(normalize_numeric_range(&NumericRange::default(), Default::default()).is_none());
    }

    #[test]
    fn test_blank_date_strings_count_as_absent() {
        assert!(normalize_date_range(&dates(Some(""), Some("  ")), Default::default()).is_none());
        let p = normalize_date_range(&dates(Some(""), Some("2020-02-02")), Default::default())
            .unwrap();
        assert_eq!(p.modifier, Modifier::LessThanOrEqual);
    }

    #[test]
    fn test_numeric_equal_bounds_is_between() {
        let range = NumericRange {
            min: Some(80),
            max: Some(80),
        };
        assert_eq!(
            normalize_numeric_range(&range, Default::default()).unwrap(),
            Predicate::between(80i64, 80i64)
        );
    }

    #[test]
    fn test_inverted_range_passes_through_by_default() {
        let range = NumericRange {
            min: Some(90),
            max: Some(10),
        };
        assert_eq!(
            normalize_numeric_range(&range, InvertedRangePolicy::PassThrough).unwrap(),
            Predicate::between(90i64, 10i64)
        );
        let p = normalize_date_range(
            &dates(Some("2024-12-31"), Some("2024-01-01")),
            InvertedRangePolicy::PassThrough,
        )
        .unwrap();
        assert_eq!(p, Predicate::between("2024-12-31", "2024-01-01"));
    }

    #[test]
    fn test_swap_policy_reorders_bounds() {
        let range = NumericRange {
            min: Some(90),
            max: Some(10),
        };
        assert_eq!(
            normalize_numeric_range(&range, InvertedRangePolicy::Swap).unwrap(),
            Predicate::between(10i64, 90i64)
        );
        let p = normalize_date_range(
            &dates(Some("2024-12-31"), Some("2024-01-01")),
            InvertedRangePolicy::Swap,
        )
        .unwrap();
        assert_eq!(p, Predicate::between("2024-01-01", "2024-12-31"));
    }

    #[test]
    fn test_swap_leaves_unparseable_dates_alone() {
        let p = normalize_date_range(
            &dates(Some("someday"), Some("2024-01-01")),
            InvertedRangePolicy::Swap,
        )
        .unwrap();
        assert_eq!(p, Predicate::between("someday", "2024-01-01"));
    }
}
