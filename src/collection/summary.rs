//! Output model for a summarized collection.
//!
//! Field declaration order is the serialized key order, so the rendered
//! document always reads `Title`, `Description`, `Schema`, `Endpoints`, and
//! each endpoint `Name`, `Method`, `URL`, `Headers`, `Body`.
//!
//! ```json
//! {
//!   "Title": "Demo",
//!   "Description": "d",
//!   "Schema": "s",
//!   "Endpoints": [
//!     {
//!       "Name": "Get Users",
//!       "Method": "GET",
//!       "URL": "http://x/users",
//!       "Headers": ["Accept: json"],
//!       "Body": ""
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDocument {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Schema")]
    pub schema: String,
    #[serde(rename = "Endpoints")]
    pub endpoints: Vec<EndpointRecord>,
}

/// Flattened view of one request item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    /// `"<key>: <value>"` in document order
    #[serde(rename = "Headers")]
    pub headers: Vec<String>,
    #[serde(rename = "Body")]
    pub body: String,
}

/// Collection-level metadata read from `info`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionInfo {
    pub title: String,
    pub description: String,
    pub schema: String,
}

impl SummaryDocument {
    pub fn new(info: CollectionInfo, endpoints: Vec<EndpointRecord>) -> Self {
        Self {
            title: info.title,
            description: info.description,
            schema: info.schema,
            endpoints,
        }
    }

    /// Indented JSON rendering
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
