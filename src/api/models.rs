//! Response bodies for the upload API.
//!
//! A successful `POST /api/parseCollection` answers with the rendered
//! [`SummaryDocument`](crate::collection::SummaryDocument) itself; only
//! failures and health checks use the types below.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: BTreeMap<String, String>,
    pub version: String,
    pub collections_parsed: u64,
    pub collections_rejected: u64,
    pub endpoints_extracted: u64,
}
