use std::path::PathBuf;

use dwg_core::overlay::OVERLAY_PADDING;
use dwg_core::{
    Catalog, ImageSource, NavAction, NavigationPath, NavigationState, Point, Rect, TimelineView,
    ViewTransform, ZoomLimits, building_overlay, building_tree, discipline_panel, drawing_info,
    resolve_image, revision_timeline, viewer_label,
};
use dwg_ingest::parse_metadata;
use proptest::prelude::*;

fn catalog() -> Catalog {
    let metadata = parse_metadata(include_str!("fixtures/metadata.json")).expect("fixture metadata");
    Catalog::new(metadata).expect("catalog")
}

fn resolved_filename(catalog: &Catalog, path: &NavigationPath) -> Option<String> {
    resolve_image(catalog, path).map(|image| image.filename.to_string())
}

// =============================================================================
// Image resolution
// =============================================================================

#[test]
fn resolution_follows_precedence() {
    let catalog = catalog();
    let drawing = NavigationPath::drawing("03");
    let discipline = drawing.clone().with_discipline(Some("구조"));
    let revision = discipline.clone().with_revision(Some("R1"));

    assert_eq!(resolved_filename(&catalog, &drawing).as_deref(), Some("site.png"));
    // No own image and no revision selected: falls through to the drawing.
    assert_eq!(resolved_filename(&catalog, &discipline).as_deref(), Some("site.png"));
    assert_eq!(resolved_filename(&catalog, &revision).as_deref(), Some("s-r1.png"));

    let image = resolve_image(&catalog, &revision).expect("resolved");
    assert_eq!(image.source, ImageSource::Revision);
    assert_eq!(image.path, PathBuf::from("drawings").join("s-r1.png"));
}

#[test]
fn discipline_image_without_revision() {
    let catalog = catalog();
    let path = NavigationPath::drawing("01").with_discipline(Some("건축"));
    let image = resolve_image(&catalog, &path).expect("resolved");
    assert_eq!(image.filename, "a101.png");
    assert_eq!(image.source, ImageSource::Discipline);
}

#[test]
fn region_narrows_revision_lookup() {
    let catalog = catalog();
    let base = NavigationPath::drawing("01").with_discipline(Some("구조"));

    let region_rev = base.clone().with_region(Some("A")).with_revision(Some("R0"));
    assert_eq!(resolved_filename(&catalog, &region_rev).as_deref(), Some("s101-a-r0.png"));

    let discipline_rev = base.clone().with_revision(Some("R0"));
    assert_eq!(resolved_filename(&catalog, &discipline_rev).as_deref(), Some("s101-r0.png"));

    // R1 exists only in region A; without the region it falls back to the
    // discipline image.
    let missing = base.with_revision(Some("R1"));
    assert_eq!(resolved_filename(&catalog, &missing).as_deref(), Some("s101.png"));
}

#[test]
fn unknown_entities() {
    let catalog = catalog();
    assert!(resolve_image(&catalog, &NavigationPath::drawing("99")).is_none());

    let unknown_discipline = NavigationPath::drawing("01").with_discipline(Some("전기"));
    let image = resolve_image(&catalog, &unknown_discipline).expect("resolved");
    assert_eq!(image.filename, "b101.png");
    assert_eq!(image.source, ImageSource::Drawing);
}

#[test]
fn viewer_label_joins_selection() {
    let catalog = catalog();
    let path = NavigationPath::drawing("01")
        .with_discipline(Some("구조"))
        .with_region(Some("B"))
        .with_revision(Some("R0"));
    assert_eq!(
        viewer_label(&catalog, &path),
        "101동 지상1층 평면도 / 구조 / Region B / R0"
    );
    assert_eq!(viewer_label(&catalog, &NavigationPath::root()), "전체 배치도");
}

// =============================================================================
// Building overlay
// =============================================================================

#[test]
fn overlay_only_on_root() {
    let catalog = catalog();
    assert!(building_overlay(&catalog, &NavigationPath::drawing("01")).is_none());

    let overlay = building_overlay(&catalog, &NavigationPath::root()).expect("overlay");
    let ids: Vec<&str> = overlay.footprints.iter().map(|f| f.drawing_id.as_str()).collect();
    // "03" has no footprint.
    assert_eq!(ids, ["01", "02"]);
    assert_eq!(overlay.footprints[0].label, "101동");
    assert_eq!(overlay.footprints[0].centroid, Point::new(300.0, 250.0));
}

#[test]
fn overlay_view_box_is_padded_bounds() {
    let catalog = catalog();
    let overlay = building_overlay(&catalog, &NavigationPath::root()).expect("overlay");
    assert_eq!(
        overlay.view_box,
        Rect::new(
            100.0 - OVERLAY_PADDING,
            100.0 - OVERLAY_PADDING,
            900.0 + OVERLAY_PADDING * 2.0,
            350.0 + OVERLAY_PADDING * 2.0,
        )
    );
}

#[test]
fn clicking_a_footprint_selects_the_building() {
    let catalog = catalog();
    let overlay = building_overlay(&catalog, &NavigationPath::root()).expect("overlay");
    let state = NavigationState::default();

    let hit = overlay.hit_test(Point::new(850.0, 300.0)).expect("inside 102");
    let next = state.apply(NavAction::SelectDrawing(hit.to_string()));
    assert_eq!(next.drawing_id(), "02");

    assert!(overlay.hit_test(Point::new(600.0, 300.0)).is_none());
}

// =============================================================================
// Panels
// =============================================================================

#[test]
fn building_tree_lists_root_then_buildings() {
    let catalog = catalog();
    let selection = NavigationPath::drawing("02");
    let entries = building_tree(&catalog, &selection);
    let rows: Vec<(&str, bool, Option<usize>)> = entries
        .iter()
        .map(|e| (e.drawing.id.as_str(), e.selected, e.discipline_count))
        .collect();
    assert_eq!(
        rows,
        [
            ("00", false, None),
            ("01", false, Some(3)),
            ("02", true, Some(2)),
            ("03", false, Some(1)),
        ]
    );
}

#[test]
fn discipline_panel_hidden_on_root_and_bare_drawings() {
    let catalog = catalog();
    assert!(discipline_panel(&catalog, &NavigationPath::root()).is_none());
    assert!(discipline_panel(&catalog, &NavigationPath::drawing("04")).is_none());
}

#[test]
fn discipline_panel_expands_selected_discipline() {
    let catalog = catalog();
    let selection = NavigationPath::drawing("01")
        .with_discipline(Some("구조"))
        .with_region(Some("A"));
    let entries = discipline_panel(&catalog, &selection).expect("panel");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name, "건축");
    assert_eq!(entries[0].revision_count, 2);
    assert!(entries[0].regions.is_empty());

    let structure = &entries[1];
    assert!(structure.selected);
    assert_eq!(structure.revision_count, 1);
    let regions: Vec<(&str, bool)> = structure.regions.iter().map(|r| (r.name, r.selected)).collect();
    assert_eq!(regions, [("A", true), ("B", false)]);

    // Clicking the selected entries deselects them.
    assert_eq!(structure.action(), NavAction::SelectDiscipline(None));
    assert_eq!(structure.regions[0].action(), NavAction::SelectRegion(None));
    assert_eq!(
        structure.regions[1].action(),
        NavAction::SelectRegion(Some("B".to_string()))
    );
    assert_eq!(
        entries[2].action(),
        NavAction::SelectDiscipline(Some("소방".to_string()))
    );
}

#[test]
fn timeline_hints() {
    let catalog = catalog();
    let drawing = NavigationPath::drawing("01");
    assert_eq!(revision_timeline(&catalog, &drawing), TimelineView::NoDiscipline);

    let needs_region = drawing.clone().with_discipline(Some("구조"));
    assert_eq!(revision_timeline(&catalog, &needs_region), TimelineView::RegionRequired);

    let empty = NavigationPath::drawing("02").with_discipline(Some("조경"));
    assert_eq!(revision_timeline(&catalog, &empty), TimelineView::Empty);
}

#[test]
fn timeline_marks_latest_and_selected() {
    let catalog = catalog();
    let selection = NavigationPath::drawing("01")
        .with_discipline(Some("건축"))
        .with_revision(Some("REV1"));
    let TimelineView::Entries(entries) = revision_timeline(&catalog, &selection) else {
        panic!("expected entries");
    };
    let rows: Vec<(&str, bool, bool)> = entries
        .iter()
        .map(|e| (e.revision.version.as_str(), e.selected, e.latest))
        .collect();
    assert_eq!(rows, [("REV1", true, false), ("REV2", false, true)]);
    assert_eq!(entries[0].action(), NavAction::SelectRevision(None));
    assert_eq!(
        entries[1].action(),
        NavAction::SelectRevision(Some("REV2".to_string()))
    );
}

#[test]
fn drawing_info_contents() {
    let catalog = catalog();
    assert!(drawing_info(&catalog, &NavigationPath::root()).is_none());

    let bare = NavigationPath::drawing("01");
    let info = drawing_info(&catalog, &bare).expect("info");
    assert_eq!(info.drawing.id, "01");
    assert!(info.revision_count.is_none());

    let discipline = NavigationPath::drawing("01").with_discipline(Some("구조"));
    let info = drawing_info(&catalog, &discipline).expect("info");
    assert_eq!(info.regions, ["A", "B"]);
    assert_eq!(info.revision_count, Some(1));

    let revision = NavigationPath::drawing("01")
        .with_discipline(Some("구조"))
        .with_region(Some("A"))
        .with_revision(Some("R1"));
    let info = drawing_info(&catalog, &revision).expect("info");
    assert_eq!(info.region, Some("A"));
    assert_eq!(info.revision.map(|r| r.date.as_str()), Some("2025-02-20"));
    assert!(info.revision_count.is_none());
}

// =============================================================================
// View transform
// =============================================================================

proptest! {
    #[test]
    fn zoom_stays_within_limits(
        factors in proptest::collection::vec(0.01f64..50.0, 1..20),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
    ) {
        let limits = ZoomLimits::default();
        let mut view = ViewTransform::new();
        for factor in factors {
            view.zoom_by(factor, Point::new(x, y), &limits);
            prop_assert!(view.scale >= limits.min_scale);
            prop_assert!(view.scale <= limits.max_scale);
        }
    }

    #[test]
    fn zoom_anchor_is_fixed_point(
        factor in 0.6f64..1.6,
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
    ) {
        let limits = ZoomLimits::default();
        let mut view = ViewTransform::new();
        let anchor = Point::new(x, y);
        let before = view.to_content(anchor);
        view.zoom_by(factor, anchor, &limits);
        let after = view.to_content(anchor);
        prop_assert!((before.x - after.x).abs() < 1e-6);
        prop_assert!((before.y - after.y).abs() < 1e-6);
    }
}
