//! In-memory album catalog
//!
//! The catalog is built once at startup and never mutated afterwards. It is
//! shared between requests behind an `Arc` and read without locking.

use std::collections::HashSet;
use std::path::Path;

use crate::config::CatalogSection;
use crate::types::Album;
use crate::{Error, Result};

/// Ordered, read-only collection of albums.
///
/// Insertion order is the serialization order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn empty() -> Self {
        Self { albums: Vec::new() }
    }

    /// Load an ordered JSON array of albums from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let albums: Vec<Album> = serde_json::from_str(&contents)?;

        let mut seen = HashSet::with_capacity(albums.len());
        for album in &albums {
            if !seen.insert(album.id.as_str()) {
                return Err(Error::invalid_catalog(format!(
                    "duplicate album id '{}' in {}",
                    album.id,
                    path.display()
                )));
            }
        }

        tracing::debug!(path = %path.display(), albums = albums.len(), "Loaded catalog seed file");

        Ok(Self::new(albums))
    }

    /// Build the catalog described by configuration: the seed file when one is
    /// set, the built-in records otherwise.
    pub fn from_config(section: &CatalogSection) -> Result<Self> {
        match &section.path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Full ordered sequence of albums.
    pub fn list(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Album::new("1", "Blue Train", "John Coltrane", 56.99),
            Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
            Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        let ids: Vec<&str> = catalog.list().iter().map(|a| a.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(catalog.list()[0].title, "Blue Train");
        assert_eq!(catalog.list()[1].artist, "Gerry Mulligan");
        assert_eq!(catalog.list()[2].price, 39.99);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let albums = vec![
            Album::new("9", "Z", "Last", 1.0),
            Album::new("1", "A", "First", 2.0),
            Album::new("5", "M", "Middle", 3.0),
        ];
        let catalog = Catalog::new(albums.clone());

        assert_eq!(catalog.list(), albums.as_slice());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_from_json_file_keeps_file_order() {
        let file = write_seed(
            r#"[
                {"id": "b", "title": "Kind of Blue", "artist": "Miles Davis", "price": 12.5},
                {"id": "a", "title": "Time Out", "artist": "Dave Brubeck", "price": 9.99}
            ]"#,
        );

        let catalog = Catalog::from_json_file(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].id, "b");
        assert_eq!(catalog.list()[1].id, "a");
    }

    #[test]
    fn test_from_json_file_rejects_duplicate_ids() {
        let file = write_seed(
            r#"[
                {"id": "1", "title": "One", "artist": "A", "price": 1.0},
                {"id": "1", "title": "Other", "artist": "B", "price": 2.0}
            ]"#,
        );

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn test_from_json_file_rejects_malformed_json() {
        let file = write_seed(r#"{"id": "1"}"#);

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_config_defaults_without_path() {
        let catalog = Catalog::from_config(&CatalogSection::default()).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_from_config_uses_seed_path() {
        let file = write_seed("[]");
        let section = CatalogSection {
            path: Some(file.path().to_string_lossy().into_owned()),
        };

        let catalog = Catalog::from_config(&section).unwrap();
        assert!(catalog.is_empty());
    }
}
