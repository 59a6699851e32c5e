//! JSON loading for the collectible reference dataset.
//!
//! The dataset is a single JSON array of collectible records shipped next
//! to the binary. A missing or malformed dataset is fatal; there is nothing
//! to reconcile against without it.

use crate::types::Collectible;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("catalog {path} is empty")]
    Empty { path: String },
}

/// Load the collectible catalog from a JSON file.
///
/// Validates at load time that every record's discriminant is known (serde
/// rejects unknown `type` values) so later table lookups are total.
pub fn load_collectibles(path: &Path) -> Result<Vec<Collectible>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let collectibles: Vec<Collectible> =
        serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
    if collectibles.is_empty() {
        return Err(CatalogError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(collectibles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollectibleKind;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records() {
        let file = write_catalog(
            r#"[
                {"type": "Revelio", "index": 1, "key": "2839767",
                 "region": "The Great Hall", "video": "abc123", "time": 42},
                {"type": "Merlin", "index": 3, "key": "c35e6d8a-1d84-4e7c-a95e-0c8b6e3e2f01",
                 "region": "Hogwarts Valley", "video": "", "time": 0}
            ]"#,
        );
        let catalog = load_collectibles(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].kind, CollectibleKind::Revelio);
        assert_eq!(catalog[0].key, "2839767");
        assert_eq!(catalog[0].video.as_deref(), Some("abc123"));
        assert!(!catalog[0].collected);
        // Empty video string normalizes to None.
        assert_eq!(catalog[1].video, None);
    }

    #[test]
    fn numeric_keys_become_strings() {
        let file = write_catalog(
            r#"[{"type": "Revelio", "index": 2, "key": 2839768, "region": "Hogsmeade"}]"#,
        );
        let catalog = load_collectibles(file.path()).unwrap();
        assert_eq!(catalog[0].key, "2839768");
        assert_eq!(catalog[0].video, None);
        assert_eq!(catalog[0].time, None);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let file = write_catalog(
            r#"[{"type": "PortKey", "index": 1, "key": "x", "region": "Hogsmeade"}]"#,
        );
        assert!(matches!(
            load_collectibles(file.path()),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_collectibles(Path::new("/nonexistent/collectibles.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let file = write_catalog("[]");
        assert!(matches!(
            load_collectibles(file.path()),
            Err(CatalogError::Empty { .. })
        ));
    }
}
