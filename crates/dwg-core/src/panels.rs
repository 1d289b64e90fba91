//! Presentation models for the sidebar and the drawing info panel.
//!
//! Each builder reads the catalog and the current selection and returns
//! plain data; widgets only lay it out. Clicks are expressed as the
//! [`NavAction`] they dispatch.

use dwg_model::{Drawing, Revision};

use crate::catalog::Catalog;
use crate::navigation::{NavAction, NavigationPath};

// =============================================================================
// Building tree
// =============================================================================

/// A row of the building list.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingTreeEntry<'a> {
    pub drawing: &'a Drawing,
    pub selected: bool,
    /// `None` for the root entry.
    pub discipline_count: Option<usize>,
}

impl BuildingTreeEntry<'_> {
    pub fn action(&self) -> NavAction {
        NavAction::SelectDrawing(self.drawing.id.clone())
    }
}

/// Root drawing first, then every building in document order.
pub fn building_tree<'a>(catalog: &'a Catalog, selection: &NavigationPath) -> Vec<BuildingTreeEntry<'a>> {
    let root = catalog.root_drawing();
    let mut entries = vec![BuildingTreeEntry {
        drawing: root,
        selected: selection.drawing_id == root.id,
        discipline_count: None,
    }];
    entries.extend(catalog.building_drawings().into_iter().map(|building| {
        BuildingTreeEntry {
            drawing: building,
            selected: selection.drawing_id == building.id,
            discipline_count: Some(catalog.discipline_names(&building.id).len()),
        }
    }));
    entries
}

// =============================================================================
// Discipline filter
// =============================================================================

/// A region button under the selected discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry<'a> {
    pub name: &'a str,
    pub selected: bool,
}

impl RegionEntry<'_> {
    /// Selects the region, or clears it when already selected.
    pub fn action(&self) -> NavAction {
        NavAction::SelectRegion((!self.selected).then(|| self.name.to_string()))
    }
}

/// A discipline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineEntry<'a> {
    pub name: &'a str,
    pub selected: bool,
    /// Discipline-level revision count; zero hides the badge.
    pub revision_count: usize,
    /// Only populated for the selected discipline.
    pub regions: Vec<RegionEntry<'a>>,
}

impl DisciplineEntry<'_> {
    /// Selects the discipline, or clears it when already selected.
    pub fn action(&self) -> NavAction {
        NavAction::SelectDiscipline((!self.selected).then(|| self.name.to_string()))
    }
}

/// Discipline filter for the selected drawing.
///
/// `None` on the root drawing or when the drawing has no disciplines; the
/// sidebar then shows a "select a building" hint.
pub fn discipline_panel<'a>(
    catalog: &'a Catalog,
    selection: &NavigationPath,
) -> Option<Vec<DisciplineEntry<'a>>> {
    if selection.is_root() {
        return None;
    }
    let drawing_id = selection.drawing_id.as_str();
    let names = catalog.discipline_names(drawing_id);
    if names.is_empty() {
        return None;
    }

    let entries = names
        .into_iter()
        .map(|name| {
            let selected = selection.discipline() == Some(name);
            let regions = if selected {
                catalog
                    .region_names(drawing_id, name)
                    .into_iter()
                    .map(|region| RegionEntry {
                        name: region,
                        selected: selection.region() == Some(region),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            DisciplineEntry {
                name,
                selected,
                revision_count: catalog
                    .discipline(drawing_id, name)
                    .map_or(0, |d| d.revisions.len()),
                regions,
            }
        })
        .collect();
    Some(entries)
}

// =============================================================================
// Revision timeline
// =============================================================================

/// A timeline row.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry<'a> {
    pub revision: &'a Revision,
    pub selected: bool,
    pub latest: bool,
}

impl TimelineEntry<'_> {
    /// Selects the revision, or clears it when already selected.
    pub fn action(&self) -> NavAction {
        NavAction::SelectRevision((!self.selected).then(|| self.revision.version.clone()))
    }
}

/// What the revision timeline shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineView<'a> {
    /// No discipline selected.
    NoDiscipline,
    /// The discipline has regions but none is selected.
    RegionRequired,
    /// Nothing recorded for the current discipline/region.
    Empty,
    /// Oldest first; the last entry is the latest.
    Entries(Vec<TimelineEntry<'a>>),
}

pub fn revision_timeline<'a>(catalog: &'a Catalog, selection: &NavigationPath) -> TimelineView<'a> {
    let Some(discipline) = selection.discipline() else {
        return TimelineView::NoDiscipline;
    };
    let drawing_id = selection.drawing_id.as_str();
    if selection.region().is_none() && !catalog.region_names(drawing_id, discipline).is_empty() {
        return TimelineView::RegionRequired;
    }

    let revisions = catalog.revisions(drawing_id, discipline, selection.region());
    if revisions.is_empty() {
        return TimelineView::Empty;
    }
    let last = revisions.len() - 1;
    TimelineView::Entries(
        revisions
            .iter()
            .enumerate()
            .map(|(index, revision)| TimelineEntry {
                revision,
                selected: selection.revision() == Some(revision.version.as_str()),
                latest: index == last,
            })
            .collect(),
    )
}

// =============================================================================
// Drawing info
// =============================================================================

/// Contents of the collapsible info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingInfo<'a> {
    pub drawing: &'a Drawing,
    pub discipline: Option<&'a str>,
    pub region: Option<&'a str>,
    /// The selected revision, if it exists in the current history.
    pub revision: Option<&'a Revision>,
    /// Size of the current history; shown only when no revision is selected.
    pub revision_count: Option<usize>,
    /// Regions of the selected discipline.
    pub regions: Vec<&'a str>,
}

/// Info panel model, `None` on the bare root selection or an unknown drawing.
pub fn drawing_info<'a>(catalog: &'a Catalog, selection: &'a NavigationPath) -> Option<DrawingInfo<'a>> {
    let drawing = catalog.drawing(&selection.drawing_id)?;
    let discipline = selection.discipline();
    if discipline.is_none() && drawing.is_root() {
        return None;
    }

    let (revisions, regions) = match discipline {
        Some(name) => (
            catalog.revisions(&drawing.id, name, selection.region()),
            catalog.region_names(&drawing.id, name),
        ),
        None => (&[][..], Vec::new()),
    };
    let revision = selection
        .revision()
        .and_then(|version| revisions.iter().find(|r| r.version == version));
    let revision_count = (discipline.is_some() && revision.is_none() && !revisions.is_empty())
        .then_some(revisions.len());

    Some(DrawingInfo {
        drawing,
        discipline,
        region: selection.region(),
        revision,
        revision_count,
        regions,
    })
}
