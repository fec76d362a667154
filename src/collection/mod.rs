//! Collection summarization
//!
//! Reads an uploaded API collection (a JSON document with an `info` object
//! and an `item` array of requests), projects each item into a flat
//! [`EndpointRecord`], and renders the result as indented JSON.
//!
//! ## Pipeline
//!
//! 1. [`read`] loads bytes from a [`DocumentSource`] and parses them. This is
//!    the only step that can fail: the source is unreadable, or the bytes
//!    are not JSON.
//! 2. [`extract`] walks the tree. Missing or mistyped sections become empty
//!    values, so extraction always produces a summary.
//! 3. [`SummaryDocument::to_pretty_json`] renders the summary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use postdigest::collection::{self, DocumentSource, ExtractOptions};
//!
//! let json = collection::summarize(
//!     DocumentSource::Path("demo.postman_collection.json".into()),
//!     &ExtractOptions::default(),
//! )?;
//! ```

pub mod access;
pub mod error;
pub mod extract;
pub mod reader;
pub mod summary;

pub use access::Field;
pub use error::{CollectionError, ParseError, Result};
pub use extract::{ExtractOptions, endpoint_record, extract, extract_with};
pub use reader::{CollectionDocument, DocumentSource, read};
pub use summary::{CollectionInfo, EndpointRecord, SummaryDocument};

/// Read, extract and render in one pass
pub fn summarize(
    source: DocumentSource,
    options: &ExtractOptions,
) -> std::result::Result<String, CollectionError> {
    let (_, rendered) = summarize_document(source, options)?;
    Ok(rendered)
}

/// Like [`summarize`], also handing back the structured summary
pub fn summarize_document(
    source: DocumentSource,
    options: &ExtractOptions,
) -> std::result::Result<(SummaryDocument, String), CollectionError> {
    let document = read(source)?;
    let summary = extract_with(&document, options);
    let rendered = summary.to_pretty_json().map_err(CollectionError::Render)?;
    Ok((summary, rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_bytes() {
        let bytes = br#"{"info":{"name":"Demo"},"item":[{"name":"a"}]}"#.to_vec();

        let rendered = summarize(DocumentSource::Bytes(bytes), &ExtractOptions::default()).unwrap();
        let summary: SummaryDocument = serde_json::from_str(&rendered).unwrap();

        assert_eq!(summary.title, "Demo");
        assert_eq!(summary.endpoints.len(), 1);
    }

    #[test]
    fn test_summarize_surfaces_parse_failures() {
        let result = summarize(
            DocumentSource::Bytes(b"{\"item\": [".to_vec()),
            &ExtractOptions::default(),
        );

        assert!(matches!(
            result,
            Err(CollectionError::Parse(ParseError::MalformedJson(_)))
        ));
    }
}
