//! Table and text rendering for CLI output.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use dwg_core::{BreadcrumbItem, Catalog, ImageSource, NavigationPath, SearchHit, resolve_image};
use dwg_model::{Drawing, Revision};

/// Indented drawing hierarchy, root first, children in document order.
pub fn render_tree(catalog: &Catalog) -> String {
    let mut out = String::new();
    write_tree_node(catalog, catalog.root_drawing(), 0, &mut out);
    out
}

fn write_tree_node(catalog: &Catalog, drawing: &Drawing, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let disciplines = catalog.discipline_names(&drawing.id).len();
    let footprint = if drawing.footprint().is_some() { " *" } else { "" };
    let count = match disciplines {
        0 => String::new(),
        1 => " (1 discipline)".to_string(),
        n => format!(" ({n} disciplines)"),
    };
    out.push_str(&format!("{indent}{} {}{count}{footprint}\n", drawing.id, drawing.name));
    for child in catalog.child_drawings(&drawing.id) {
        write_tree_node(catalog, child, depth + 1, out);
    }
}

pub fn disciplines_table(catalog: &Catalog, drawing_id: &str) -> Table {
    let mut table = styled_table(["Discipline", "Image", "Regions", "Revisions", "Latest"]);
    for name in catalog.discipline_names(drawing_id) {
        let Some(discipline) = catalog.discipline(drawing_id, name) else {
            continue;
        };
        let regions = catalog.region_names(drawing_id, name);
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            optional_cell(discipline.image.as_deref()),
            if regions.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(regions.join(", "))
            },
            Cell::new(discipline.revisions.len()),
            optional_cell(discipline.revisions.last().map(|r| r.version.as_str())),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

pub fn regions_table(catalog: &Catalog, drawing_id: &str, discipline: &str) -> Table {
    let mut table = styled_table(["Region", "Vertices", "Revisions", "Latest"]);
    let Some(owner) = catalog.discipline(drawing_id, discipline) else {
        return table;
    };
    for name in catalog.region_names(drawing_id, discipline) {
        let Some(region) = owner.region(name) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(dwg_core::breadcrumb::region_label(name)),
            Cell::new(region.polygon.vertices.len()),
            Cell::new(region.revisions.len()),
            optional_cell(region.revisions.last().map(|r| r.version.as_str())),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

pub fn revisions_table(revisions: &[Revision]) -> Table {
    let mut table = styled_table(["Version", "Date", "Description", "Changes", "Image"]);
    let last = revisions.len().saturating_sub(1);
    for (index, revision) in revisions.iter().enumerate() {
        let version = if index == last {
            Cell::new(format!("{} (latest)", revision.version))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&revision.version)
        };
        table.add_row(vec![
            version,
            Cell::new(&revision.date),
            Cell::new(&revision.description),
            if revision.changes.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(revision.changes.join("\n"))
            },
            Cell::new(&revision.image),
        ]);
    }
    table
}

pub fn search_table(hits: &[SearchHit<'_>]) -> Table {
    let mut table = styled_table(["Drawing", "Name", "Discipline", "Region", "Revision", "Detail"]);
    for hit in hits {
        table.add_row(vec![
            Cell::new(&hit.drawing.id),
            Cell::new(&hit.drawing.name),
            optional_cell(hit.discipline),
            optional_cell(hit.region),
            optional_cell(hit.revision.map(|r| r.version.as_str())),
            optional_cell(hit.revision.map(|r| r.description.as_str())),
        ]);
    }
    table
}

/// Breadcrumb labels joined with ` > `.
pub fn render_breadcrumb(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Result of the `resolve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub drawing: String,
    pub discipline: Option<String>,
    pub region: Option<String>,
    pub revision: Option<String>,
    pub source: &'static str,
    pub filename: String,
    pub path: PathBuf,
    pub exists: bool,
}

impl ResolveReport {
    /// Resolve `selection`, or `None` if the drawing is unknown.
    pub fn build(catalog: &Catalog, selection: &NavigationPath) -> Option<Self> {
        let image = resolve_image(catalog, selection)?;
        Some(Self {
            drawing: selection.drawing_id.clone(),
            discipline: selection.discipline.clone(),
            region: selection.region.clone(),
            revision: selection.revision.clone(),
            source: source_name(image.source),
            filename: image.filename.to_string(),
            exists: image.path.is_file(),
            path: image.path,
        })
    }
}

pub fn source_name(source: ImageSource) -> &'static str {
    match source {
        ImageSource::Drawing => "drawing",
        ImageSource::Discipline => "discipline",
        ImageSource::Revision => "revision",
    }
}

pub fn resolve_table(report: &ResolveReport) -> Table {
    let mut table = styled_table(["Field", "Value"]);
    table.add_row(vec![Cell::new("Source"), Cell::new(report.source)]);
    table.add_row(vec![Cell::new("Image"), Cell::new(&report.filename)]);
    table.add_row(vec![
        Cell::new("Path"),
        Cell::new(report.path.display()),
    ]);
    table.add_row(vec![
        Cell::new("On disk"),
        if report.exists {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("missing").fg(Color::Red)
        },
    ]);
    table
}

/// Missing image files referenced by the document, as `(owner, path)`.
pub fn missing_images(catalog: &Catalog) -> Vec<(String, PathBuf)> {
    let mut missing = Vec::new();
    let mut check = |owner: String, filename: &str| {
        let path = catalog.image_path(filename);
        if !path.is_file() {
            missing.push((owner, path));
        }
    };
    for drawing in catalog.drawings() {
        check(drawing.id.clone(), &drawing.image);
        for (name, discipline) in drawing.disciplines.iter().flatten() {
            let owner = format!("{} / {name}", drawing.id);
            if let Some(image) = &discipline.image {
                check(owner.clone(), image);
            }
            for revision in &discipline.revisions {
                check(format!("{owner} / {}", revision.version), &revision.image);
            }
            for (region_name, region) in discipline.regions.iter().flatten() {
                for revision in &region.revisions {
                    check(
                        format!("{owner} / Region {region_name} / {}", revision.version),
                        &revision.image,
                    );
                }
            }
        }
    }
    missing
}

pub fn missing_images_table(missing: &[(String, PathBuf)]) -> Table {
    let mut table = styled_table(["Referenced by", "Missing file"]);
    for (owner, path) in missing {
        table.add_row(vec![Cell::new(owner), Cell::new(path.display()).fg(Color::Red)]);
    }
    table
}

fn styled_table<const N: usize>(headers: [&str; N]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
