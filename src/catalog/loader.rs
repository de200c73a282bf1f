use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::types::SpaceObject;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One immutable catalog state, used for exactly one computation.
///
/// `skipped` counts records that were present in the file but could not be
/// deserialized; an empty catalog with `skipped == 0` is a valid, distinct
/// outcome from a load failure.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub objects: Vec<SpaceObject>,
    pub skipped: usize,
}

/// Loads catalog snapshots from a configured JSON file.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file into a fresh snapshot.
    ///
    /// An unreadable file or a top-level value that is not a JSON array fails
    /// the whole load. Individual records that fail to deserialize (missing
    /// `type`, non-numeric coordinates) are skipped and counted, preserving
    /// the order of the remaining records.
    pub fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_catalog(&content)
    }
}

pub fn parse_catalog(content: &str) -> Result<CatalogSnapshot, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(content)?;

    let mut objects = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<SpaceObject>(record) {
            Ok(object) => objects.push(object),
            Err(e) => {
                log::warn!("Skipping malformed catalog record {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    Ok(CatalogSnapshot { objects, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ObjectKind;

    #[test]
    fn parses_well_formed_catalog_in_order() {
        let content = r#"[
            {"name": "ISS", "type": "satellite", "lat": 51.6, "lon": 0.0, "alt": 420.0},
            {"name": "Fragment-1", "type": "debris", "lat": 51.6, "lon": 0.1, "alt": 419.5}
        ]"#;
        let snapshot = parse_catalog(content).unwrap();
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(snapshot.objects.len(), 2);
        assert_eq!(snapshot.objects[0].name, "ISS");
        assert_eq!(snapshot.objects[0].kind, ObjectKind::Satellite);
        assert_eq!(snapshot.objects[1].kind, ObjectKind::Debris);
    }

    #[test]
    fn skips_and_counts_malformed_records() {
        let content = r#"[
            {"name": "Good", "type": "satellite", "lat": 0.0, "lon": 0.0, "alt": 500.0},
            {"name": "NoType", "lat": 0.0, "lon": 0.0, "alt": 500.0},
            {"name": "BadLat", "type": "debris", "lat": "north", "lon": 0.0, "alt": 500.0},
            {"name": "AlsoGood", "type": "debris", "lat": 1.0, "lon": 1.0, "alt": 500.0}
        ]"#;
        let snapshot = parse_catalog(content).unwrap();
        assert_eq!(snapshot.skipped, 2);
        let names: Vec<_> = snapshot.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Good", "AlsoGood"]);
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let content = r#"[{"name": "X", "type": "rocket_body", "lat": 0.0, "lon": 0.0, "alt": 500.0}]"#;
        let snapshot = parse_catalog(content).unwrap();
        assert_eq!(snapshot.skipped, 1);
        assert!(snapshot.objects.is_empty());
    }

    #[test]
    fn empty_array_is_a_valid_empty_catalog() {
        let snapshot = parse_catalog("[]").unwrap();
        assert!(snapshot.objects.is_empty());
        assert_eq!(snapshot.skipped, 0);
    }

    #[test]
    fn non_array_top_level_fails_the_load() {
        assert!(parse_catalog(r#"{"objects": []}"#).is_err());
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn missing_file_fails_the_load() {
        let loader = CatalogLoader::new(PathBuf::from("/nonexistent/catalog.json"));
        assert!(matches!(loader.load(), Err(CatalogError::Io(_))));
    }
}
