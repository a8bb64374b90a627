//! # Media Companion
//!
//! **A media-library companion: filter compilation and view-mode lookup
//! over synced media metadata.**
//!
//! The heavy lifting lives in [`media_companion_core`]: the range
//! normalizer, the relation filter builder, the per-entity filter
//! assemblers, and the view-mode registry. This crate adds the
//! application around them: configuration, logging, and the `mcx` CLI.
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ UI controls │──▶│  Selection   │──▶│  Assembler   │──▶│ Query layer │
//! │ (JSON)      │   │ (per entity) │   │ field tables │   │ (external)  │
//! └─────────────┘   └──────────────┘   └──────────────┘   └─────────────┘
//! ```
//!
//! 1. A filter panel produces a [`FilterSelection`](media_companion_core::FilterSelection).
//! 2. [`compile`] resolves the entity type, applies an optional timeline
//!    period, and runs the entity's assembler.
//! 3. The resulting [`EntityFilter`](media_companion_core::EntityFilter) is
//!    serialized for the query layer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`compile`] | Selection parsing and filter compilation |
//! | [`registry`] | Entity and view-mode listings |
//! | [`timeline`] | Timeline bucket resolution |
//! | [`logging`] | `tracing` subscriber setup |

pub mod compile;
pub mod config;
pub mod logging;
pub mod registry;
pub mod timeline;

pub use media_companion_core::{
    assemble, get_view_modes, EntityFilter, EntityType, FilterSelection, ViewModeDescriptor,
};
