//! View-mode registry.
//!
//! Static mapping from entity type to the ordered presentation modes it
//! offers. Entities with a native per-item date (scene, gallery, image)
//! offer the `timeline` mode; the list is editorial and is not derived
//! from the schema.

use serde::Serialize;

use crate::entity::EntityType;

/// A presentation mode an entity list can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewModeDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

const GRID: ViewModeDescriptor = ViewModeDescriptor {
    id: "grid",
    label: "Grid",
};
const LIST: ViewModeDescriptor = ViewModeDescriptor {
    id: "list",
    label: "List",
};
const WALL: ViewModeDescriptor = ViewModeDescriptor {
    id: "wall",
    label: "Wall",
};
const TAGGER: ViewModeDescriptor = ViewModeDescriptor {
    id: "tagger",
    label: "Tagger",
};
const TIMELINE: ViewModeDescriptor = ViewModeDescriptor {
    id: "timeline",
    label: "Timeline",
};

static SCENE_MODES: &[ViewModeDescriptor] = &[GRID, LIST, WALL, TAGGER, TIMELINE];
static GALLERY_MODES: &[ViewModeDescriptor] = &[GRID, LIST, WALL, TIMELINE];
static IMAGE_MODES: &[ViewModeDescriptor] = &[GRID, WALL, TIMELINE];
static CLIP_MODES: &[ViewModeDescriptor] = &[GRID, LIST, WALL];
static PERFORMER_MODES: &[ViewModeDescriptor] = &[GRID, LIST, TAGGER];
static TAG_MODES: &[ViewModeDescriptor] = &[GRID, LIST];
static STUDIO_MODES: &[ViewModeDescriptor] = &[GRID, LIST];

/// Ordered view modes for `entity`. Never empty.
pub fn view_modes(entity: EntityType) -> &'static [ViewModeDescriptor] {
    match entity {
        EntityType::Scene => SCENE_MODES,
        EntityType::Clip => CLIP_MODES,
        EntityType::Image => IMAGE_MODES,
        EntityType::Gallery => GALLERY_MODES,
        EntityType::Performer => PERFORMER_MODES,
        EntityType::Tag => TAG_MODES,
        EntityType::Studio => STUDIO_MODES,
    }
}

/// View modes by entity key; unknown keys have no modes.
pub fn get_view_modes(entity: &str) -> &'static [ViewModeDescriptor] {
    EntityType::lookup(entity).map(view_modes).unwrap_or(&[])
}

pub fn supports_timeline(entity: EntityType) -> bool {
    view_modes(entity).iter().any(|m| m.id == TIMELINE.id)
}
