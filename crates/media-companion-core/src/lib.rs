//! # Media Companion Core
//!
//! Shared, I/O-free logic for Media Companion: the filter-criteria
//! compiler, the view-mode registry, and timeline period resolution.
//!
//! This crate contains no filesystem, network, or database access. Every
//! function is pure and synchronous; the only process-wide data are the
//! `static` field tables and view-mode lists.
//!
//! ## Compilation Pipeline
//!
//! ```text
//! FilterSelection ──▶ assemble(entity) ──┬─▶ range::normalize_*    ──┐
//!                                        ├─▶ relation::includes    ──┼─▶ EntityFilter
//!                                        └─▶ scalar flags          ──┘
//! ```

pub mod assemble;
pub mod entity;
pub mod predicate;
pub mod range;
pub mod relation;
pub mod selection;
pub mod timeline;
pub mod view_modes;

pub use assemble::{assemble, assemble_named, assemble_with, CompileOptions, EntityFilter};
pub use entity::{Dimension, EntityType};
pub use predicate::{FilterValue, Modifier, Predicate, PredicateValue};
pub use range::InvertedRangePolicy;
pub use selection::{DateRange, FilterSelection, NumericRange};
pub use timeline::{Granularity, TimelineBucket};
pub use view_modes::{get_view_modes, supports_timeline, view_modes, ViewModeDescriptor};
