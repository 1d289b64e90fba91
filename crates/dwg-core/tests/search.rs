use dwg_core::{Catalog, NavigationPath, search};
use dwg_ingest::parse_metadata;

fn catalog() -> Catalog {
    let metadata = parse_metadata(include_str!("fixtures/metadata.json")).expect("fixture metadata");
    Catalog::new(metadata).expect("catalog")
}

#[test]
fn blank_queries_yield_nothing() {
    let catalog = catalog();
    assert!(search(&catalog, "").is_empty());
    assert!(search(&catalog, "   ").is_empty());
    assert!(search(&catalog, "\t\n").is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let catalog = catalog();
    let lower = search(&catalog, "fire");
    let upper = search(&catalog, "FIRE");
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
}

#[test]
fn revision_matched_by_several_fields_is_one_hit() {
    let catalog = catalog();
    // F1 mentions "fire" in its description and in a change note.
    let hits = search(&catalog, "fire");
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.drawing.id, "01");
    assert_eq!(hit.discipline, Some("소방"));
    assert_eq!(hit.revision.map(|r| r.version.as_str()), Some("F1"));
}

#[test]
fn drawing_name_hits() {
    let catalog = catalog();
    let ids: Vec<&str> = search(&catalog, "101동")
        .iter()
        .filter(|hit| hit.discipline.is_none())
        .map(|hit| hit.drawing.id.as_str())
        .collect();
    assert_eq!(ids, ["01", "04"]);
}

#[test]
fn discipline_name_hits_carry_discipline() {
    let catalog = catalog();
    let hits = search(&catalog, "조경");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].drawing.id, "02");
    assert_eq!(hits[0].discipline, Some("조경"));
    assert!(hits[0].revision.is_none());
}

#[test]
fn region_revisions_are_searched() {
    let catalog = catalog();
    let hits = search(&catalog, "보강");
    let found: Vec<(&str, Option<&str>, Option<&str>)> = hits
        .iter()
        .map(|hit| {
            (
                hit.drawing.id.as_str(),
                hit.region,
                hit.revision.map(|r| r.version.as_str()),
            )
        })
        .collect();
    assert_eq!(found, [("01", Some("A"), Some("R1")), ("03", None, Some("R1"))]);
}

#[test]
fn hit_targets_navigate_to_the_match() {
    let catalog = catalog();
    let hits = search(&catalog, "기둥");
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].target(),
        NavigationPath::drawing("01")
            .with_discipline(Some("구조"))
            .with_region(Some("A"))
            .with_revision(Some("R1"))
    );
    assert_eq!(hits[0].summary(), "구조 · R1 · A 영역 기둥 보강");
}

#[test]
fn query_is_trimmed() {
    let catalog = catalog();
    assert_eq!(search(&catalog, "  fire "), search(&catalog, "fire"));
}
