//! Endpoint extraction over a parsed collection.
//!
//! The walk never fails: absent or mistyped sections degrade to empty
//! values through [`Field`]. Only the top-level `item` array is read unless
//! [`ExtractOptions::flatten_folders`] is set.

use serde::{Deserialize, Serialize};

use super::access::Field;
use super::reader::CollectionDocument;
use super::summary::{CollectionInfo, EndpointRecord, SummaryDocument};

const FOLDER_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractOptions {
    /// Replace folder items with the requests nested under them
    #[serde(default)]
    pub flatten_folders: bool,
    /// Folder nesting depth to descend into when flattening
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            flatten_folders: false,
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    16
}

/// Summarize `doc` with the top-level-only baseline
pub fn extract(doc: &CollectionDocument) -> SummaryDocument {
    extract_with(doc, &ExtractOptions::default())
}

pub fn extract_with(doc: &CollectionDocument, options: &ExtractOptions) -> SummaryDocument {
    let root = Field::root(doc.root());
    let info = collection_info(root.get("info"));

    let mut endpoints = Vec::new();
    for item in root.get("item").elements() {
        collect_item(item, None, 0, options, &mut endpoints);
    }

    tracing::debug!(
        title = %info.title,
        endpoints = endpoints.len(),
        flatten_folders = options.flatten_folders,
        "Extracted collection summary"
    );

    SummaryDocument::new(info, endpoints)
}

fn collection_info(info: Field<'_>) -> CollectionInfo {
    CollectionInfo {
        title: info.get("name").text(),
        description: info.get("description").text(),
        schema: info.get("schema").text(),
    }
}

fn collect_item(
    item: Field<'_>,
    parent: Option<&str>,
    depth: usize,
    options: &ExtractOptions,
    out: &mut Vec<EndpointRecord>,
) {
    let name = qualified_name(parent, item.get("name").text());

    if options.flatten_folders && is_folder(item) && depth < options.max_depth {
        for child in item.get("item").elements() {
            collect_item(child, Some(name.as_str()), depth + 1, options, out);
        }
        return;
    }

    let mut record = endpoint_record(item);
    record.name = name;
    out.push(record);
}

fn is_folder(item: Field<'_>) -> bool {
    !item.get("request").is_present() && item.get("item").value().is_some_and(|v| v.is_array())
}

fn qualified_name(parent: Option<&str>, name: String) -> String {
    match parent {
        Some(parent) => format!("{parent}{FOLDER_SEPARATOR}{name}"),
        None => name,
    }
}

/// Project one collection item into an [`EndpointRecord`]
pub fn endpoint_record(item: Field<'_>) -> EndpointRecord {
    let name = item.get("name").text();
    let request = item.get("request");

    if !request.is_present() {
        return EndpointRecord {
            name,
            ..Default::default()
        };
    }

    let headers = request
        .get("header")
        .elements()
        .map(|header| format!("{}: {}", header.get("key").text(), header.get("value").text()))
        .collect();

    EndpointRecord {
        name,
        method: request.get("method").text(),
        url: request.get("url").get("raw").text(),
        headers,
        body: request.get("body").get("raw").text(),
    }
}
