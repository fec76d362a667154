//! Document reader: byte source -> parsed JSON tree

use serde_json::Value;
use std::path::{Path, PathBuf};

use super::error::{ParseError, Result};

/// Where the raw collection bytes come from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

impl From<Vec<u8>> for DocumentSource {
    fn from(bytes: Vec<u8>) -> Self {
        DocumentSource::Bytes(bytes)
    }
}

/// A parsed, read-only collection document
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDocument {
    root: Value,
}

impl CollectionDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let root = serde_json::from_slice(bytes)?;
        Ok(Self { root })
    }

    /// Read and parse a file from disk (blocking)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ParseError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    /// Read and parse a file from disk on the tokio runtime
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ParseError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_slice(&bytes)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl From<Value> for CollectionDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

/// Load `source` into a [`CollectionDocument`]
pub fn read(source: DocumentSource) -> Result<CollectionDocument> {
    match source {
        DocumentSource::Path(path) => {
            let document = CollectionDocument::from_path(&path)?;
            tracing::debug!(path = %path.display(), "Read collection from file");
            Ok(document)
        }
        DocumentSource::Bytes(bytes) => CollectionDocument::from_slice(&bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes() {
        let doc = read(DocumentSource::Bytes(br#"{"item":[]}"#.to_vec())).unwrap();
        assert!(doc.root().get("item").unwrap().is_array());
    }

    #[test]
    fn test_read_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collection.json");
        fs::write(&path, r#"{"info":{"name":"Demo"}}"#).unwrap();

        let doc = read(path.into()).unwrap();
        assert_eq!(doc.root()["info"]["name"], "Demo");
    }

    #[test]
    fn test_missing_file_is_source_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = read(DocumentSource::Path(path.clone())).unwrap_err();
        match err {
            ParseError::SourceUnreadable { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected SourceUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let err = read(DocumentSource::Bytes(br#"{"info":{"name":"De"#.to_vec())).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson(_)));
    }

    #[test]
    fn test_nesting_beyond_parser_depth_is_malformed() {
        let depth = 200;
        let nested = format!(
            "{}{}",
            r#"{"item":["#.repeat(depth),
            "]}".repeat(depth)
        );

        let err = read(DocumentSource::Bytes(nested.into_bytes())).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson(_)));

        let shallow = format!("{}{}", r#"{"item":["#.repeat(50), "]}".repeat(50));
        assert!(read(DocumentSource::Bytes(shallow.into_bytes())).is_ok());
    }

    #[tokio::test]
    async fn test_load_async() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collection.json");
        fs::write(&path, r#"{"item":[{"name":"a"}]}"#).unwrap();

        let doc = CollectionDocument::load(&path).await.unwrap();
        assert_eq!(doc.root()["item"][0]["name"], "a");

        let missing = CollectionDocument::load(temp_dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(ParseError::SourceUnreadable { .. })));
    }
}
