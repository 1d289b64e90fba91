//! Search over drawing names, discipline names and revision text.

use dwg_model::{Drawing, Revision};

use crate::catalog::Catalog;
use crate::navigation::NavigationPath;

/// A single search match.
///
/// The same drawing/discipline/revision may appear more than once when it
/// matches through different fields; hits are not deduplicated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub drawing: &'a Drawing,
    /// Matched discipline, or the discipline owning the matched revision.
    pub discipline: Option<&'a str>,
    /// Region owning the matched revision, for region-level revisions.
    pub region: Option<&'a str>,
    pub revision: Option<&'a Revision>,
}

impl<'a> SearchHit<'a> {
    fn drawing(drawing: &'a Drawing) -> Self {
        Self {
            drawing,
            discipline: None,
            region: None,
            revision: None,
        }
    }

    /// Selection to navigate to when the hit is chosen.
    pub fn target(&self) -> NavigationPath {
        NavigationPath::drawing(&self.drawing.id)
            .with_discipline(self.discipline)
            .with_region(self.region)
            .with_revision(self.revision.map(|r| r.version.as_str()))
    }

    /// Secondary line: discipline, version and description joined by " · ".
    pub fn summary(&self) -> String {
        [
            self.discipline,
            self.revision.map(|r| r.version.as_str()),
            self.revision.map(|r| r.description.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
    }
}

/// Search with the caller-side guard applied.
///
/// The query is trimmed; an empty or whitespace-only query yields no hits
/// without running the matcher.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    search_trimmed(catalog, query)
}

/// Case-insensitive substring match of a non-empty, trimmed query.
///
/// For every drawing in document order: the drawing name; then per
/// discipline, the discipline name, its own revisions, and the revisions of
/// each of its regions.
pub fn search_trimmed<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for drawing in catalog.drawings() {
        if drawing.name.to_lowercase().contains(&needle) {
            hits.push(SearchHit::drawing(drawing));
        }

        let Some(disciplines) = &drawing.disciplines else {
            continue;
        };
        for (name, discipline) in disciplines {
            if name.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    discipline: Some(name.as_str()),
                    ..SearchHit::drawing(drawing)
                });
            }

            for revision in &discipline.revisions {
                if revision.matches_lowercase(&needle) {
                    hits.push(SearchHit {
                        discipline: Some(name.as_str()),
                        revision: Some(revision),
                        ..SearchHit::drawing(drawing)
                    });
                }
            }

            for (region_name, region) in discipline.regions.iter().flatten() {
                for revision in &region.revisions {
                    if revision.matches_lowercase(&needle) {
                        hits.push(SearchHit {
                            discipline: Some(name.as_str()),
                            region: Some(region_name.as_str()),
                            revision: Some(revision),
                            drawing,
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(query, hits = hits.len(), "Search completed");
    hits
}
