//! Building footprint overlay on the site plan.

use dwg_model::Vertex;

use crate::catalog::Catalog;
use crate::geometry::{Point, Rect};
use crate::navigation::NavigationPath;

/// Margin added around the footprints' bounding box, in footprint units.
pub const OVERLAY_PADDING: f64 = 200.0;

/// Floor-plan suffix dropped from building names in overlay labels.
pub const LABEL_SUFFIX: &str = " 지상1층 평면도";

/// One clickable building outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub drawing_id: String,
    pub label: String,
    pub vertices: Vec<Point>,
    /// Vertex average; the label anchor.
    pub centroid: Point,
}

impl Footprint {
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }
}

/// Footprints of every building that declares one, plus the shared view box.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingOverlay {
    /// Padded bounding box of all footprint vertices.
    pub view_box: Rect,
    pub footprints: Vec<Footprint>,
}

impl BuildingOverlay {
    /// The building under `p` (view-box coordinates).
    ///
    /// Later footprints are drawn on top, so they are tested first.
    pub fn hit_test(&self, p: Point) -> Option<&str> {
        self.footprints
            .iter()
            .rev()
            .find(|footprint| footprint.contains(p))
            .map(|footprint| footprint.drawing_id.as_str())
    }
}

/// Overlay for `selection`.
///
/// Present only while the root drawing is selected and at least one building
/// has footprint vertices. Buildings without a footprint are left out.
pub fn building_overlay(catalog: &Catalog, selection: &NavigationPath) -> Option<BuildingOverlay> {
    if !selection.is_root() {
        return None;
    }

    let footprints: Vec<Footprint> = catalog
        .building_drawings()
        .into_iter()
        .filter_map(|building| {
            let vertices = building.footprint()?;
            Some(Footprint {
                drawing_id: building.id.clone(),
                label: overlay_label(&building.name),
                vertices: vertices.iter().copied().map(Point::from).collect(),
                centroid: centroid(vertices),
            })
        })
        .collect();

    let bounds = Rect::bounding(footprints.iter().flat_map(|f| f.vertices.iter().copied()))?;

    Some(BuildingOverlay {
        view_box: bounds.padded(OVERLAY_PADDING),
        footprints,
    })
}

/// Building name with the floor-plan suffix removed.
pub fn overlay_label(name: &str) -> String {
    name.replacen(LABEL_SUFFIX, "", 1)
}

fn centroid(vertices: &[Vertex]) -> Point {
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
    Point::new(sx / n, sy / n)
}

/// Even-odd ray casting test.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
