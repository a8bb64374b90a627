//! Relation filter builder.
//!
//! Turns a list of related-entity identifiers into a membership predicate.
//! Order and duplicates are preserved; the query layer treats the list as
//! a set.

use crate::predicate::{Modifier, Predicate};

/// `INCLUDES` predicate for a non-empty id list, `None` otherwise.
pub fn includes(ids: Option<&[String]>) -> Option<Predicate> {
    match ids {
        Some(ids) if !ids.is_empty() => Some(Predicate::single(Modifier::Includes, ids.to_vec())),
        _ => None,
    }
}
