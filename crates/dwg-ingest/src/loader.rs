//! Metadata document loading.

use std::path::Path;

use dwg_model::Metadata;

use crate::error::{IngestError, Result};
use crate::validate::validate_metadata;

/// Loads and validates the metadata document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid metadata
/// document, or violates the drawing-tree invariants.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use dwg_ingest::load_metadata;
///
/// let metadata = load_metadata(Path::new("data/metadata.json"))?;
/// assert!(metadata.drawings.contains_key("00"));
/// ```
pub fn load_metadata(path: &Path) -> Result<Metadata> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata: Metadata =
        serde_json::from_str(&content).map_err(|source| IngestError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;

    validate_metadata(&metadata)?;

    tracing::info!(
        path = %path.display(),
        project = %metadata.project.name,
        drawings = metadata.drawing_count(),
        revisions = metadata.revision_count(),
        "Loaded drawing metadata"
    );
    Ok(metadata)
}

/// Parses and validates a metadata document held in memory.
///
/// # Errors
///
/// Returns an error if the text is not a valid metadata document or violates
/// the drawing-tree invariants.
pub fn parse_metadata(content: &str) -> Result<Metadata> {
    let metadata: Metadata =
        serde_json::from_str(content).map_err(|source| IngestError::Parse { path: None, source })?;
    validate_metadata(&metadata)?;
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "project": { "name": "Campus", "unit": "px" },
        "disciplines": [],
        "drawings": {
            "00": { "id": "00", "name": "Site", "image": "site.png", "parent": null, "position": null },
            "01": { "id": "01", "name": "Hall", "image": "hall.png", "parent": "00", "position": null }
        }
    }"#;

    fn write_metadata(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_metadata() {
        let (_dir, path) = write_metadata(MINIMAL);
        let metadata = load_metadata(&path).unwrap();
        assert_eq!(metadata.project.name, "Campus");
        assert_eq!(metadata.drawing_count(), 2);
    }

    #[test]
    fn test_load_metadata_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_metadata(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_metadata_invalid_json() {
        let (_dir, path) = write_metadata("{ not json");
        let err = load_metadata(&path).unwrap_err();
        assert!(matches!(err, IngestError::Parse { path: Some(_), .. }));
    }

    #[test]
    fn test_parse_metadata_runs_validation() {
        let without_root = MINIMAL.replace(r#""00": { "id": "00""#, r#""99": { "id": "99""#);
        let err = parse_metadata(&without_root).unwrap_err();
        assert!(matches!(err, IngestError::MissingRoot { .. }));
    }

    #[test]
    fn test_parse_metadata_rejects_duplicate_ids() {
        let duplicated = MINIMAL.replace(
            r#""01": { "id": "01", "name": "Hall""#,
            r#""01": { "id": "01", "name": "Annex", "image": "annex.png", "parent": "00", "position": null },
            "01": { "id": "01", "name": "Hall""#,
        );
        let err = parse_metadata(&duplicated).unwrap_err();
        assert!(matches!(err, IngestError::Parse { path: None, .. }));
    }
}
