//! Data model for the drawing metadata document.
//!
//! The metadata document describes one project and a flat table of drawings.
//! Drawings form a tree through their `parent` identifiers, rooted at the
//! drawing with identifier [`ROOT_DRAWING_ID`]. Each drawing may carry
//! disciplines (trades), which may in turn carry regions, and both keep an
//! oldest-first revision history.
//!
//! # Module Organization
//!
//! - [`drawing`]: Drawing, Discipline, Region and Revision
//! - [`geometry`]: Polygons, footprint positions and transforms
//! - [`metadata`]: The document root (project, discipline labels, drawings)
//!
//! All keyed mappings keep document order, which is part of the query
//! contract (children and discipline names enumerate in insertion order).

pub mod drawing;
pub mod geometry;
pub mod metadata;

/// Identifier of the distinguished root drawing (the site plan).
pub const ROOT_DRAWING_ID: &str = "00";

pub use drawing::{Discipline, Drawing, Region, Revision};
pub use geometry::{ImageTransform, Polygon, PolygonTransform, Position, Vertex};
pub use metadata::{DisciplineInfo, Metadata, Project};
