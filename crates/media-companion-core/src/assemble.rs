//! Entity filter assembly.
//!
//! Each entity type owns a static field table mapping the dimensions it
//! supports to backend field names. Assembly walks every dimension present
//! in the selection, compiles it with the shared normalizers, and stores
//! the result under the entity's field name. Because the normalizers are
//! shared, the same input range yields the same predicate for every entity;
//! only the key differs.
//!
//! Dimensions an entity does not declare are skipped. Dimensions never
//! influence one another.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::entity::{Dimension, EntityType};
use crate::predicate::{FilterValue, Predicate};
use crate::range::{self, InvertedRangePolicy};
use crate::relation;
use crate::selection::FilterSelection;

type FieldTable = &'static [(Dimension, &'static str)];

static SCENE_FIELDS: FieldTable = &[
    (Dimension::Favorite, "favorite"),
    (Dimension::Organized, "organized"),
    (Dimension::Rating, "rating100"),
    (Dimension::Date, "date"),
    (Dimension::Tags, "tags"),
    (Dimension::Performers, "performers"),
    (Dimension::Galleries, "galleries"),
    (Dimension::Studios, "studios"),
];

static GALLERY_FIELDS: FieldTable = &[
    (Dimension::Favorite, "favorite"),
    (Dimension::Organized, "organized"),
    (Dimension::Rating, "rating100"),
    (Dimension::Date, "date"),
    (Dimension::Tags, "tags"),
    (Dimension::Performers, "performers"),
    (Dimension::Studios, "studios"),
];

static IMAGE_FIELDS: FieldTable = &[
    (Dimension::Favorite, "favorite"),
    (Dimension::Organized, "organized"),
    (Dimension::Rating, "rating100"),
    (Dimension::Date, "date"),
    (Dimension::Tags, "tags"),
    (Dimension::Performers, "performers"),
    (Dimension::Galleries, "galleries"),
    (Dimension::Studios, "studios"),
];

static CLIP_FIELDS: FieldTable = &[
    (Dimension::Favorite, "favorite"),
    (Dimension::Rating, "rating100"),
    (Dimension::Tags, "tags"),
    (Dimension::Performers, "performers"),
    (Dimension::Studios, "studios"),
];

static PERFORMER_FIELDS: FieldTable = &[
    (Dimension::Favorite, "filter_favorites"),
    (Dimension::Rating, "rating100"),
    (Dimension::Tags, "tags"),
];

static TAG_FIELDS: FieldTable = &[(Dimension::Favorite, "favorite")];

static STUDIO_FIELDS: FieldTable = &[
    (Dimension::Favorite, "favorite"),
    (Dimension::Rating, "rating100"),
    (Dimension::Tags, "tags"),
];

fn field_table(entity: EntityType) -> FieldTable {
    match entity {
        EntityType::Scene => SCENE_FIELDS,
        EntityType::Clip => CLIP_FIELDS,
        EntityType::Image => IMAGE_FIELDS,
        EntityType::Gallery => GALLERY_FIELDS,
        EntityType::Performer => PERFORMER_FIELDS,
        EntityType::Tag => TAG_FIELDS,
        EntityType::Studio => STUDIO_FIELDS,
    }
}

/// Backend field name for `dimension` on `entity`, if the entity supports it.
pub fn field_name(entity: EntityType, dimension: Dimension) -> Option<&'static str> {
    field_table(entity)
        .iter()
        .find(|(d, _)| *d == dimension)
        .map(|(_, field)| *field)
}

/// Dimensions the entity declares, in table order.
pub fn supported_dimensions(entity: EntityType) -> impl Iterator<Item = Dimension> {
    field_table(entity).iter().map(|(d, _)| *d)
}

/// Knobs that change how ranges are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub inverted_ranges: InvertedRangePolicy,
}

/// Compiled filter for one entity type, keyed by backend field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityFilter {
    fields: BTreeMap<&'static str, FilterValue>,
}

impl EntityFilter {
    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    /// The predicate stored under `field`, if that entry is a predicate.
    pub fn predicate(&self, field: &str) -> Option<&Predicate> {
        self.get(field).and_then(FilterValue::as_predicate)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FilterValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    fn insert(&mut self, field: &'static str, value: FilterValue) {
        self.fields.insert(field, value);
    }
}

/// Compile a selection for `entity` with default options.
pub fn assemble(entity: EntityType, selection: &FilterSelection) -> EntityFilter {
    assemble_with(entity, selection, &CompileOptions::default())
}

/// Compile a selection for an entity given by name.
///
/// An unknown name is a caller bug (the entity has no field table), so it
/// is reported as an error instead of yielding an empty filter.
pub fn assemble_named(entity: &str, selection: &FilterSelection) -> Result<EntityFilter> {
    let entity: EntityType = entity
        .parse()
        .context("cannot assemble filter without a field table")?;
    Ok(assemble(entity, selection))
}

/// Compile a selection for `entity`.
pub fn assemble_with(
    entity: EntityType,
    selection: &FilterSelection,
    options: &CompileOptions,
) -> EntityFilter {
    let mut filter = EntityFilter::default();

    for dimension in Dimension::ALL {
        let Some(value) = compile_dimension(dimension, selection, options) else {
            continue;
        };
        match field_name(entity, dimension) {
            Some(field) => filter.insert(field, value),
            None => tracing::debug!(
                entity = %entity,
                dimension = %dimension,
                "ignoring filter dimension the entity does not support"
            ),
        }
    }

    filter
}

fn compile_dimension(
    dimension: Dimension,
    selection: &FilterSelection,
    options: &CompileOptions,
) -> Option<FilterValue> {
    match dimension {
        Dimension::Favorite => selection.favorite.map(FilterValue::Flag),
        Dimension::Organized => selection.organized.map(FilterValue::Flag),
        Dimension::Rating => selection
            .rating
            .as_ref()
            .and_then(|r| range::normalize_numeric_range(r, options.inverted_ranges))
            .map(FilterValue::from),
        Dimension::Date => selection
            .date
            .as_ref()
            .and_then(|r| range::normalize_date_range(r, options.inverted_ranges))
            .map(FilterValue::from),
        Dimension::Tags => relation::includes(selection.tag_ids.as_deref()).map(FilterValue::from),
        Dimension::Performers => {
            relation::includes(selection.performer_ids.as_deref()).map(FilterValue::from)
        }
        Dimension::Galleries => {
            relation::includes(selection.gallery_ids.as_deref()).map(FilterValue::from)
        }
        Dimension::Studios => {
            relation::includes(selection.studio_ids.as_deref()).map(FilterValue::from)
        }
    }
}
