//! Predicate objects consumed by the backend query layer.
//!
//! A [`Predicate`] is the tagged `{modifier, value, value2?}` structure the
//! query layer expects for a single-field comparison. The modifier
//! vocabulary is fixed downstream and serialized in SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

/// Comparison operator tag within a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    NotBetween,
    Includes,
    IncludesAll,
    Excludes,
    IsNull,
    NotNull,
}

impl Modifier {
    /// Whether the modifier carries a second operand in `value2`.
    pub fn is_two_ended(self) -> bool {
        matches!(self, Modifier::Between | Modifier::NotBetween)
    }
}

/// Operand of a predicate.
///
/// Dates stay as the `YYYY-MM-DD` strings the caller supplied so they
/// reach the query layer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredicateValue {
    Number(i64),
    Text(String),
    Ids(Vec<String>),
}

impl From<i64> for PredicateValue {
    fn from(n: i64) -> Self {
        PredicateValue::Number(n)
    }
}

impl From<String> for PredicateValue {
    fn from(s: String) -> Self {
        PredicateValue::Text(s)
    }
}

impl From<&str> for PredicateValue {
    fn from(s: &str) -> Self {
        PredicateValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for PredicateValue {
    fn from(ids: Vec<String>) -> Self {
        PredicateValue::Ids(ids)
    }
}

/// A single-field comparison for a backend query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub modifier: Modifier,
    pub value: PredicateValue,
    /// Upper operand; only present for two-ended modifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<PredicateValue>,
}

impl Predicate {
    /// A one-operand predicate.
    pub fn single(modifier: Modifier, value: impl Into<PredicateValue>) -> Self {
        Self {
            modifier,
            value: value.into(),
            value2: None,
        }
    }

    /// An inclusive `BETWEEN` predicate. A degenerate range (`lower == upper`)
    /// is still expressed as `BETWEEN`.
    pub fn between(lower: impl Into<PredicateValue>, upper: impl Into<PredicateValue>) -> Self {
        Self {
            modifier: Modifier::Between,
            value: lower.into(),
            value2: Some(upper.into()),
        }
    }
}

/// One entry of an entity filter: either a predicate or a scalar flag that
/// is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Predicate(Predicate),
    Flag(bool),
}

impl FilterValue {
    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            FilterValue::Predicate(p) => Some(p),
            FilterValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FilterValue::Flag(b) => Some(*b),
            FilterValue::Predicate(_) => None,
        }
    }
}

impl From<Predicate> for FilterValue {
    fn from(p: Predicate) -> Self {
        FilterValue::Predicate(p)
    }
}
