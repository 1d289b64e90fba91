//! Drawings, disciplines, regions and revisions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ROOT_DRAWING_ID;
use crate::geometry::{ImageTransform, Polygon, Position, Vertex};

/// A dated, versioned snapshot of a discipline or region image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Version label (e.g., "REV1"). Unique within its owner, not numeric.
    pub version: String,
    /// Bare image filename.
    pub image: String,
    /// Issue date as written in the document.
    pub date: String,
    /// Free-text description of the revision.
    pub description: String,
    /// Change notes, in document order.
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<ImageTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
}

impl Revision {
    /// Returns true if any searchable text field contains `needle`.
    ///
    /// `needle` must already be lowercase; fields are lowercased here.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.version.to_lowercase().contains(needle)
            || self
                .changes
                .iter()
                .any(|change| change.to_lowercase().contains(needle))
    }
}

/// A named sub-area of a discipline with its own revision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Footprint within the discipline image.
    pub polygon: Polygon,
    /// Oldest-first revision history.
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

/// An engineering trade scoped to one drawing.
///
/// When `regions` is present, each region's revisions are authoritative for
/// that region and `revisions` holds the non-regioned history. The two are
/// never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<ImageTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<IndexMap<String, Region>>,
    /// Oldest-first revision history.
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

impl Discipline {
    /// Looks up a region by name.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.as_ref().and_then(|regions| regions.get(name))
    }

    /// Returns true if this discipline is split into regions.
    pub fn has_regions(&self) -> bool {
        self.regions
            .as_ref()
            .is_some_and(|regions| !regions.is_empty())
    }
}

/// A node in the building/site hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Unique key of this drawing.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Default image filename.
    pub image: String,
    /// Parent drawing identifier (`None` only for the root).
    #[serde(default)]
    pub parent: Option<String>,
    /// Footprint on the root image (buildings only).
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disciplines: Option<IndexMap<String, Discipline>>,
}

impl Drawing {
    /// Returns true if this is the distinguished root drawing.
    pub fn is_root(&self) -> bool {
        self.id == ROOT_DRAWING_ID
    }

    /// Looks up a discipline by name.
    pub fn discipline(&self, name: &str) -> Option<&Discipline> {
        self.disciplines
            .as_ref()
            .and_then(|disciplines| disciplines.get(name))
    }

    /// Footprint vertices, if this drawing declares any.
    pub fn footprint(&self) -> Option<&[Vertex]> {
        self.position
            .as_ref()
            .filter(|position| position.has_vertices())
            .map(|position| position.vertices.as_slice())
    }
}
