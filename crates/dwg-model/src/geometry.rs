//! Polygon and transform types.
//!
//! Coordinates are in the pixel space of the image they belong to.

use serde::{Deserialize, Serialize};

/// A polygon vertex as `[x, y]`.
pub type Vertex = [f64; 2];

/// Placement of an image relative to another image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTransform {
    /// Image this transform is expressed against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<String>,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

/// Placement of a polygon within its image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

/// A footprint polygon with its transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub polygon_transform: PolygonTransform,
}

/// Footprint of a building drawing on the root site plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub vertices: Vec<Vertex>,
    pub image_transform: ImageTransform,
}

impl Position {
    /// Returns true if the footprint has at least one vertex.
    pub fn has_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }
}
