//! Read -> extract -> render checks against realistic collection files

use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

use postdigest::collection::{
    self, CollectionDocument, CollectionError, DocumentSource, EndpointRecord, ExtractOptions,
    ParseError, SummaryDocument, extract,
};

fn write_collection(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn extract_value(value: Value) -> SummaryDocument {
    extract(&CollectionDocument::from(value))
}

#[test]
fn test_single_request_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_collection(
        &temp_dir,
        "demo.json",
        r#"{"info":{"name":"Demo","description":"d","schema":"s"},"item":[{"name":"Get Users","request":{"method":"GET","url":{"raw":"http://x/users"},"header":[{"key":"Accept","value":"json"}],"body":{"raw":""}}}]}"#,
    );

    let doc = collection::read(DocumentSource::Path(path)).unwrap();
    let summary = extract(&doc);

    assert_eq!(summary.title, "Demo");
    assert_eq!(summary.description, "d");
    assert_eq!(summary.schema, "s");
    assert_eq!(
        summary.endpoints,
        vec![EndpointRecord {
            name: "Get Users".to_string(),
            method: "GET".to_string(),
            url: "http://x/users".to_string(),
            headers: vec!["Accept: json".to_string()],
            body: String::new(),
        }]
    );
}

#[test]
fn test_item_without_request() {
    let summary = extract_value(json!({
        "info": {"name": "Demo"},
        "item": [{"name": "Placeholder"}, {"name": "Real", "request": {"method": "GET"}}]
    }));

    assert_eq!(summary.endpoints.len(), 2);
    assert_eq!(
        summary.endpoints[0],
        EndpointRecord {
            name: "Placeholder".to_string(),
            ..Default::default()
        }
    );
    assert_eq!(summary.endpoints[1].method, "GET");
}

#[test]
fn test_collection_without_info() {
    let summary = extract_value(json!({"item": []}));

    assert_eq!(summary.title, "");
    assert_eq!(summary.description, "");
    assert_eq!(summary.schema, "");
    assert!(summary.endpoints.is_empty());
}

#[test]
fn test_truncated_file_fails_before_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_collection(&temp_dir, "broken.json", r#"{"info":{"name":"Demo"},"item":[{"#);

    let result = collection::summarize(DocumentSource::Path(path), &ExtractOptions::default());

    assert!(matches!(
        result,
        Err(CollectionError::Parse(ParseError::MalformedJson(_)))
    ));
}

#[test]
fn test_item_as_string() {
    let summary = extract_value(json!({"info": {"name": "Demo"}, "item": "nope"}));

    assert_eq!(summary.title, "Demo");
    assert!(summary.endpoints.is_empty());
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let result = collection::summarize(
        DocumentSource::Path(temp_dir.path().join("absent.json")),
        &ExtractOptions::default(),
    );

    assert!(matches!(
        result,
        Err(CollectionError::Parse(ParseError::SourceUnreadable { .. }))
    ));
}

#[test]
fn test_rendered_summary_round_trips() {
    let doc = CollectionDocument::from(json!({
        "info": {"name": "Shop", "description": "Store API", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"},
        "item": [
            {"name": "List", "request": {"method": "GET", "url": {"raw": "{{base}}/items"},
                "header": [{"key": "Accept", "value": "application/json"}, {"key": "X-Api-Key", "value": "{{key}}"}]}},
            {"name": "Create", "request": {"method": "POST", "url": {"raw": "{{base}}/items"},
                "body": {"mode": "raw", "raw": "{\"name\": \"widget\"}"}}},
            {"name": "Docs"}
        ]
    }));

    let summary = extract(&doc);
    let rendered = summary.to_pretty_json().unwrap();

    // Variables are passed through untouched
    let reparsed: SummaryDocument = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reparsed, summary);
    assert_eq!(reparsed.endpoints[0].url, "{{base}}/items");
    assert_eq!(reparsed.endpoints[1].body, "{\"name\": \"widget\"}");
    assert_eq!(
        reparsed.endpoints[0].headers,
        vec!["Accept: application/json", "X-Api-Key: {{key}}"]
    );

    // Key order in the text follows the summary layout
    let title = rendered.find("\"Title\"").unwrap();
    let description = rendered.find("\"Description\"").unwrap();
    let schema = rendered.find("\"Schema\"").unwrap();
    let endpoints = rendered.find("\"Endpoints\"").unwrap();
    assert!(title < description && description < schema && schema < endpoints);
}

#[test]
fn test_summarize_matches_direct_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let content = json!({
        "info": {"name": "Demo"},
        "item": [{"name": "a", "request": {"method": "GET"}}, {"name": "b"}]
    })
    .to_string();
    let path = write_collection(&temp_dir, "demo.json", &content);

    let rendered =
        collection::summarize(DocumentSource::Path(path.clone()), &ExtractOptions::default())
            .unwrap();
    let direct = extract(&CollectionDocument::from_path(&path).unwrap());

    let reparsed: SummaryDocument = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reparsed, direct);

    let from_bytes = collection::summarize(
        DocumentSource::Bytes(content.into_bytes()),
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(from_bytes, rendered);
}

#[test]
fn test_extraction_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = CollectionDocument::from(json!({
                    "info": {"name": format!("c{i}")},
                    "item": (0..i).map(|j| json!({"name": format!("r{j}")})).collect::<Vec<_>>()
                }));
                extract(&doc)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let summary = handle.join().unwrap();
        assert_eq!(summary.title, format!("c{i}"));
        assert_eq!(summary.endpoints.len(), i);
    }
}
