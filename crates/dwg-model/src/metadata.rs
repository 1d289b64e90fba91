//! The metadata document root.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::drawing::Drawing;

/// Project identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Unit of measure for drawing coordinates.
    pub unit: String,
}

/// Entry of the informational list of known discipline labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineInfo {
    pub name: String,
}

/// The whole metadata document.
///
/// Produced by an external pipeline and treated as immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub project: Project,
    #[serde(default)]
    pub disciplines: Vec<DisciplineInfo>,
    /// Drawings keyed by identifier, in document order.
    ///
    /// A key repeated in the document is a parse error rather than a silent
    /// overwrite.
    #[serde(deserialize_with = "unique_drawings")]
    pub drawings: IndexMap<String, Drawing>,
}

impl Metadata {
    /// Number of drawings in the document.
    pub fn drawing_count(&self) -> usize {
        self.drawings.len()
    }

    /// Total number of revisions across all disciplines and regions.
    pub fn revision_count(&self) -> usize {
        self.drawings
            .values()
            .filter_map(|drawing| drawing.disciplines.as_ref())
            .flat_map(|disciplines| disciplines.values())
            .map(|discipline| {
                let regioned: usize = discipline
                    .regions
                    .iter()
                    .flat_map(|regions| regions.values())
                    .map(|region| region.revisions.len())
                    .sum();
                discipline.revisions.len() + regioned
            })
            .sum()
    }
}

fn unique_drawings<'de, D>(deserializer: D) -> Result<IndexMap<String, Drawing>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueDrawings;

    impl<'de> Visitor<'de> for UniqueDrawings {
        type Value = IndexMap<String, Drawing>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of drawings keyed by unique identifier")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut drawings = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((id, drawing)) = access.next_entry::<String, Drawing>()? {
                if drawings.contains_key(&id) {
                    return Err(de::Error::custom(format_args!(
                        "duplicate drawing identifier `{id}`"
                    )));
                }
                drawings.insert(id, drawing);
            }
            Ok(drawings)
        }
    }

    deserializer.deserialize_map(UniqueDrawings)
}
