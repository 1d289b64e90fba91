//! Metadata Query Layer.
//!
//! [`Catalog`] owns the loaded document plus a child index built once at
//! construction. Every query is pure: unknown identifiers produce `None` or
//! an empty sequence, never an error.

use std::collections::HashMap;
use std::path::PathBuf;

use dwg_model::{Discipline, Drawing, Metadata, Project, ROOT_DRAWING_ID, Revision};

use crate::breadcrumb::{BreadcrumbItem, build_breadcrumb};
use crate::error::{CatalogError, Result};
use crate::locator::ImageLocator;
use crate::search::{SearchHit, search};

/// Read-only, indexed view of the metadata document.
#[derive(Debug, Clone)]
pub struct Catalog {
    metadata: Metadata,
    /// Parent id -> child ids, in document order.
    children: HashMap<String, Vec<String>>,
    locator: ImageLocator,
}

impl Catalog {
    /// Index `metadata` using the default image directory.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRoot`] if there is no root drawing.
    pub fn new(metadata: Metadata) -> Result<Self> {
        Self::with_locator(metadata, ImageLocator::default())
    }

    /// Index `metadata`, resolving images with `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRoot`] if there is no root drawing.
    pub fn with_locator(metadata: Metadata, locator: ImageLocator) -> Result<Self> {
        if !metadata.drawings.contains_key(ROOT_DRAWING_ID) {
            return Err(CatalogError::MissingRoot {
                root_id: ROOT_DRAWING_ID.to_string(),
            });
        }

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for drawing in metadata.drawings.values() {
            if let Some(parent) = &drawing.parent {
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(drawing.id.clone());
            }
        }

        tracing::debug!(
            drawings = metadata.drawings.len(),
            parents = children.len(),
            "Indexed drawing catalog"
        );

        Ok(Self {
            metadata,
            children,
            locator,
        })
    }

    /// The underlying document.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn project(&self) -> &Project {
        &self.metadata.project
    }

    pub fn locator(&self) -> &ImageLocator {
        &self.locator
    }

    /// All drawings in document order.
    pub fn drawings(&self) -> impl Iterator<Item = &Drawing> {
        self.metadata.drawings.values()
    }

    /// The drawing with identifier `id`.
    pub fn drawing(&self, id: &str) -> Option<&Drawing> {
        self.metadata.drawings.get(id)
    }

    /// The root drawing (site plan).
    pub fn root_drawing(&self) -> &Drawing {
        // Presence is checked in `with_locator` and the document is immutable.
        &self.metadata.drawings[ROOT_DRAWING_ID]
    }

    /// Drawings whose parent is `parent_id`, in document order.
    pub fn child_drawings(&self, parent_id: &str) -> Vec<&Drawing> {
        self.children
            .get(parent_id)
            .map(|ids| ids.iter().filter_map(|id| self.drawing(id)).collect())
            .unwrap_or_default()
    }

    /// The top-level buildings (children of the root).
    pub fn building_drawings(&self) -> Vec<&Drawing> {
        self.child_drawings(&self.root_drawing().id)
    }

    /// The named discipline of a drawing.
    pub fn discipline(&self, drawing_id: &str, name: &str) -> Option<&Discipline> {
        self.drawing(drawing_id)?.discipline(name)
    }

    /// Discipline names of a drawing, in document order.
    pub fn discipline_names(&self, drawing_id: &str) -> Vec<&str> {
        self.drawing(drawing_id)
            .and_then(|drawing| drawing.disciplines.as_ref())
            .map(|disciplines| disciplines.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Region names of a discipline, in document order.
    pub fn region_names(&self, drawing_id: &str, discipline: &str) -> Vec<&str> {
        self.discipline(drawing_id, discipline)
            .and_then(|d| d.regions.as_ref())
            .map(|regions| regions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Revision history for a discipline or one of its regions.
    ///
    /// An existing region takes precedence over the discipline; an unknown
    /// region falls back to the discipline's own history. Callers wanting
    /// discipline-level history must pass `None` even when a region is
    /// selected elsewhere.
    pub fn revisions(
        &self,
        drawing_id: &str,
        discipline: &str,
        region: Option<&str>,
    ) -> &[Revision] {
        let Some(discipline) = self.discipline(drawing_id, discipline) else {
            return &[];
        };
        if let Some(region) = region.and_then(|name| discipline.region(name)) {
            return &region.revisions;
        }
        &discipline.revisions
    }

    /// The newest revision, i.e. the last element of [`Self::revisions`].
    pub fn latest_revision(
        &self,
        drawing_id: &str,
        discipline: &str,
        region: Option<&str>,
    ) -> Option<&Revision> {
        self.revisions(drawing_id, discipline, region).last()
    }

    /// Location of an image given its bare filename.
    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.locator.image_path(filename)
    }

    /// Breadcrumb for the given selection. See [`build_breadcrumb`].
    pub fn breadcrumb(
        &self,
        drawing_id: &str,
        discipline: Option<&str>,
        region: Option<&str>,
        revision: Option<&str>,
    ) -> Vec<BreadcrumbItem> {
        build_breadcrumb(self, drawing_id, discipline, region, revision)
    }

    /// Search hits for `query`. See [`search`].
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(self, query)
    }
}
