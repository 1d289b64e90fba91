use anyhow::{Result, bail};
use tracing::{info, warn};

use dwg_core::{Catalog, NavigationPath, search};
use dwg_cli::render::{
    ResolveReport, disciplines_table, missing_images, missing_images_table, regions_table,
    render_breadcrumb, render_tree, resolve_table, revisions_table, search_table,
};

use crate::cli::SelectionArgs;

pub fn run_tree(catalog: &Catalog) -> Result<()> {
    print!("{}", render_tree(catalog));
    Ok(())
}

pub fn run_disciplines(catalog: &Catalog, drawing: &str) -> Result<()> {
    require_drawing(catalog, drawing)?;
    if catalog.discipline_names(drawing).is_empty() {
        println!("Drawing {drawing} has no disciplines.");
        return Ok(());
    }
    println!("{}", disciplines_table(catalog, drawing));
    Ok(())
}

pub fn run_regions(catalog: &Catalog, drawing: &str, discipline: &str) -> Result<()> {
    require_discipline(catalog, drawing, discipline)?;
    if catalog.region_names(drawing, discipline).is_empty() {
        println!("Discipline {discipline} of drawing {drawing} has no regions.");
        return Ok(());
    }
    println!("{}", regions_table(catalog, drawing, discipline));
    Ok(())
}

pub fn run_revisions(
    catalog: &Catalog,
    drawing: &str,
    discipline: &str,
    region: Option<&str>,
) -> Result<()> {
    require_discipline(catalog, drawing, discipline)?;
    if let Some(region) = region
        && catalog
            .discipline(drawing, discipline)
            .and_then(|d| d.region(region))
            .is_none()
    {
        warn!(drawing, discipline, region, "Unknown region, showing discipline history");
    }
    let revisions = catalog.revisions(drawing, discipline, region);
    if revisions.is_empty() {
        println!("No revisions recorded.");
        return Ok(());
    }
    println!("{}", revisions_table(revisions));
    Ok(())
}

pub fn run_search(catalog: &Catalog, query: &str, limit: usize) -> Result<()> {
    if query.trim().is_empty() {
        return Ok(());
    }
    let hits = search(catalog, query);
    if hits.is_empty() {
        println!("No results for \"{}\".", query.trim());
        return Ok(());
    }
    let shown = &hits[..hits.len().min(limit)];
    println!("{}", search_table(shown));
    if hits.len() > shown.len() {
        println!("{} of {} hits shown.", shown.len(), hits.len());
    }
    Ok(())
}

pub fn run_breadcrumb(catalog: &Catalog, args: &SelectionArgs) -> Result<()> {
    require_drawing(catalog, &args.drawing)?;
    let items = catalog.breadcrumb(
        &args.drawing,
        args.discipline.as_deref(),
        args.region.as_deref(),
        args.revision.as_deref(),
    );
    println!("{}", render_breadcrumb(&items));
    Ok(())
}

pub fn run_resolve(catalog: &Catalog, args: &SelectionArgs, json: bool) -> Result<()> {
    let selection = selection_path(args);
    let Some(report) = ResolveReport::build(catalog, &selection) else {
        bail!("unknown drawing \"{}\"", args.drawing);
    };
    if !report.exists {
        warn!(path = %report.path.display(), "Resolved image is missing on disk");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", resolve_table(&report));
    }
    Ok(())
}

/// Returns the number of missing images.
pub fn run_validate(catalog: &Catalog) -> Result<usize> {
    let metadata = catalog.metadata();
    info!(
        project = %metadata.project.name,
        drawings = metadata.drawing_count(),
        "Metadata document is valid"
    );
    println!(
        "{}: {} drawings, {} buildings, {} revisions",
        metadata.project.name,
        metadata.drawing_count(),
        catalog.building_drawings().len(),
        metadata.revision_count()
    );

    let missing = missing_images(catalog);
    if missing.is_empty() {
        println!("All referenced images found under {}.", catalog.locator().root().display());
    } else {
        println!("{}", missing_images_table(&missing));
    }
    Ok(missing.len())
}

fn selection_path(args: &SelectionArgs) -> NavigationPath {
    NavigationPath::drawing(&args.drawing)
        .with_discipline(args.discipline.as_deref())
        .with_region(args.region.as_deref())
        .with_revision(args.revision.as_deref())
}

fn require_drawing(catalog: &Catalog, drawing: &str) -> Result<()> {
    if catalog.drawing(drawing).is_none() {
        bail!("unknown drawing \"{drawing}\"");
    }
    Ok(())
}

fn require_discipline(catalog: &Catalog, drawing: &str, discipline: &str) -> Result<()> {
    require_drawing(catalog, drawing)?;
    if catalog.discipline(drawing, discipline).is_none() {
        bail!("drawing \"{drawing}\" has no discipline \"{discipline}\"");
    }
    Ok(())
}
