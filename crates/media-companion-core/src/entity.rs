//! Entity-type and filter-dimension vocabulary.
//!
//! [`EntityType`] names the kinds of synced media the library exposes.
//! [`Dimension`] names the entity-independent filter axes a selection can
//! carry; each entity declares which of them it supports through its field
//! table in [`crate::assemble`].

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A kind of media-library entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Scene,
    Clip,
    Image,
    Gallery,
    Performer,
    Tag,
    Studio,
}

impl EntityType {
    /// Every entity type, in display order.
    pub const ALL: [EntityType; 7] = [
        EntityType::Scene,
        EntityType::Clip,
        EntityType::Image,
        EntityType::Gallery,
        EntityType::Performer,
        EntityType::Tag,
        EntityType::Studio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Scene => "scene",
            EntityType::Clip => "clip",
            EntityType::Image => "image",
            EntityType::Gallery => "gallery",
            EntityType::Performer => "performer",
            EntityType::Tag => "tag",
            EntityType::Studio => "studio",
        }
    }

    /// Look up an entity type by its lowercase key, returning `None` for
    /// names outside the vocabulary.
    pub fn lookup(name: &str) -> Option<EntityType> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Self::lookup(s) {
            Some(entity) => Ok(entity),
            None => bail!(
                "Unknown entity type: '{}'. Must be one of: {}.",
                s,
                Self::ALL.map(EntityType::as_str).join(", ")
            ),
        }
    }
}

/// One named axis of filtering, independent of entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Favorite,
    Organized,
    Rating,
    Date,
    Tags,
    Performers,
    Galleries,
    Studios,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Favorite,
        Dimension::Organized,
        Dimension::Rating,
        Dimension::Date,
        Dimension::Tags,
        Dimension::Performers,
        Dimension::Galleries,
        Dimension::Studios,
    ];

    /// The selection key this dimension is read from.
    pub fn selection_key(self) -> &'static str {
        match self {
            Dimension::Favorite => "favorite",
            Dimension::Organized => "organized",
            Dimension::Rating => "rating",
            Dimension::Date => "date",
            Dimension::Tags => "tagIds",
            Dimension::Performers => "performerIds",
            Dimension::Galleries => "galleryIds",
            Dimension::Studios => "studioIds",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selection_key())
    }
}
