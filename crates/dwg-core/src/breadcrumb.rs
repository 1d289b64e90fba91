//! Breadcrumb construction.

use crate::catalog::Catalog;
use crate::navigation::NavigationPath;

/// One navigable segment of the breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Text shown for the segment.
    pub label: String,
    /// Selection restored when the segment is activated.
    pub target: NavigationPath,
}

/// Label prefix distinguishing region segments from plain names.
pub const REGION_LABEL_PREFIX: &str = "Region ";

/// Format a region name as shown in breadcrumbs and labels.
pub fn region_label(region: &str) -> String {
    format!("{REGION_LABEL_PREFIX}{region}")
}

/// Build the breadcrumb for a selection.
///
/// Segments, in order: the root; the target drawing unless it is the root
/// (or unknown); the discipline; the region; the revision. Each segment's
/// target keeps the selection up to that segment and drops everything finer,
/// so activating the discipline segment clears region and revision.
pub fn build_breadcrumb(
    catalog: &Catalog,
    drawing_id: &str,
    discipline: Option<&str>,
    region: Option<&str>,
    revision: Option<&str>,
) -> Vec<BreadcrumbItem> {
    let mut items = Vec::with_capacity(5);

    let root = catalog.root_drawing();
    items.push(BreadcrumbItem {
        label: root.name.clone(),
        target: NavigationPath::drawing(&root.id),
    });

    if drawing_id != root.id
        && let Some(drawing) = catalog.drawing(drawing_id)
    {
        items.push(BreadcrumbItem {
            label: drawing.name.clone(),
            target: NavigationPath::drawing(&drawing.id),
        });
    }

    if let Some(discipline) = discipline {
        items.push(BreadcrumbItem {
            label: discipline.to_string(),
            target: NavigationPath::drawing(drawing_id).with_discipline(Some(discipline)),
        });
    }

    if let Some(region) = region {
        items.push(BreadcrumbItem {
            label: region_label(region),
            target: NavigationPath::drawing(drawing_id)
                .with_discipline(discipline)
                .with_region(Some(region)),
        });
    }

    if let Some(revision) = revision {
        items.push(BreadcrumbItem {
            label: revision.to_string(),
            target: NavigationPath::drawing(drawing_id)
                .with_discipline(discipline)
                .with_region(region)
                .with_revision(Some(revision)),
        });
    }

    items
}
