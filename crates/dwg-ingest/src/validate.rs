//! Structural validation of the drawing tree.

use std::collections::HashSet;

use dwg_model::{Metadata, ROOT_DRAWING_ID};

use crate::error::{IngestError, Result};

/// Checks the invariants of the drawing table.
///
/// Repeated keys never reach this point: deserializing [`Metadata`] rejects
/// them.
///
/// - every key equals the drawing's own `id`
/// - the root drawing exists and has no parent
/// - every other drawing has a parent that resolves
/// - every parent chain reaches the root (no cycles)
///
/// # Errors
///
/// Returns the first violation found, in document order.
pub fn validate_metadata(metadata: &Metadata) -> Result<()> {
    let drawings = &metadata.drawings;

    for (key, drawing) in drawings {
        if key != &drawing.id {
            return Err(IngestError::IdMismatch {
                key: key.clone(),
                id: drawing.id.clone(),
            });
        }
    }

    let root = drawings
        .get(ROOT_DRAWING_ID)
        .ok_or_else(|| IngestError::MissingRoot {
            root_id: ROOT_DRAWING_ID.to_string(),
        })?;
    if let Some(parent) = &root.parent {
        return Err(IngestError::RootHasParent {
            root_id: ROOT_DRAWING_ID.to_string(),
            parent: parent.clone(),
        });
    }

    for drawing in drawings.values().filter(|d| !d.is_root()) {
        let Some(parent) = &drawing.parent else {
            return Err(IngestError::OrphanDrawing {
                id: drawing.id.clone(),
            });
        };
        if !drawings.contains_key(parent) {
            return Err(IngestError::DanglingParent {
                id: drawing.id.clone(),
                parent: parent.clone(),
            });
        }
    }

    // Every chain must reach the root within `drawings.len()` steps.
    let mut reaches_root: HashSet<&str> = HashSet::from([ROOT_DRAWING_ID]);
    for drawing in drawings.values() {
        let mut chain: Vec<&str> = Vec::new();
        let mut current = drawing.id.as_str();
        while !reaches_root.contains(current) {
            if chain.contains(&current) || chain.len() > drawings.len() {
                return Err(IngestError::ParentCycle {
                    id: drawing.id.clone(),
                });
            }
            chain.push(current);
            current = drawings
                .get(current)
                .and_then(|d| d.parent.as_deref())
                .unwrap_or(ROOT_DRAWING_ID);
        }
        reaches_root.extend(chain);
    }

    tracing::debug!(drawings = drawings.len(), "Drawing tree validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwg_model::{Drawing, Project};

    fn table(drawings: Vec<Drawing>) -> Metadata {
        Metadata {
            project: Project {
                name: "Test".to_string(),
                unit: "px".to_string(),
            },
            disciplines: Vec::new(),
            drawings: drawings.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }

    fn drawing(id: &str, parent: Option<&str>) -> Drawing {
        Drawing {
            id: id.to_string(),
            name: format!("Drawing {id}"),
            image: format!("{id}.png"),
            parent: parent.map(str::to_string),
            position: None,
            disciplines: None,
        }
    }

    #[test]
    fn accepts_valid_tree() {
        let metadata = table(vec![
            drawing("00", None),
            drawing("01", Some("00")),
            drawing("02", Some("01")),
        ]);
        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn rejects_missing_root() {
        let metadata = table(vec![drawing("01", None)]);
        assert!(matches!(
            validate_metadata(&metadata),
            Err(IngestError::MissingRoot { .. })
        ));
    }

    #[test]
    fn rejects_root_with_parent() {
        let metadata = table(vec![drawing("00", Some("01")), drawing("01", Some("00"))]);
        assert!(matches!(
            validate_metadata(&metadata),
            Err(IngestError::RootHasParent { .. })
        ));
    }

    #[test]
    fn rejects_dangling_parent() {
        let metadata = table(vec![drawing("00", None), drawing("01", Some("42"))]);
        let err = validate_metadata(&metadata).unwrap_err();
        assert_eq!(
            err.to_string(),
            "drawing \"01\" references unknown parent \"42\""
        );
    }

    #[test]
    fn rejects_orphan() {
        let metadata = table(vec![drawing("00", None), drawing("01", None)]);
        assert!(matches!(
            validate_metadata(&metadata),
            Err(IngestError::OrphanDrawing { .. })
        ));
    }

    #[test]
    fn rejects_cycle() {
        let metadata = table(vec![
            drawing("00", None),
            drawing("01", Some("02")),
            drawing("02", Some("01")),
        ]);
        assert!(matches!(
            validate_metadata(&metadata),
            Err(IngestError::ParentCycle { .. })
        ));
    }

    #[test]
    fn rejects_key_id_mismatch() {
        let mut metadata = table(vec![drawing("00", None)]);
        let stray = drawing("07", Some("00"));
        metadata.drawings.insert("08".to_string(), stray);
        assert!(matches!(
            validate_metadata(&metadata),
            Err(IngestError::IdMismatch { .. })
        ));
    }
}
