//! Extraction endpoints
//!
//! `POST /extract` resolves bare field names with pattern matching and fails
//! on unreadable PDFs. `POST /extract-datapoints` resolves described fields
//! with proximity matching and treats unreadable PDFs as empty text.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use docpoint_core::{FieldRequest, FieldResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Create the extraction router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/extract", post(extract))
        .route("/extract-datapoints", post(extract_datapoints))
}

/// Pattern-mode request.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub pdf_base64: String,
    pub data_points: Vec<String>,
}

/// Pattern-mode response: field name to value, in request order.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub results: Map<String, Value>,
}

/// Proximity-mode request.
#[derive(Debug, Deserialize)]
pub struct DatapointsRequest {
    pub document_content: String,
    pub data_points: Vec<FieldRequest>,
}

#[derive(Debug, Serialize)]
pub struct DatapointResult {
    pub name: String,
    pub value: String,
    pub confidence: f64,
}

/// Proximity-mode response, one entry per requested field.
#[derive(Debug, Serialize)]
pub struct DatapointsResponse {
    pub results: Vec<DatapointResult>,
}

impl From<FieldResult> for DatapointResult {
    fn from(result: FieldResult) -> Self {
        Self {
            name: result.name,
            value: result.value,
            confidence: result.confidence.unwrap_or(0.0),
        }
    }
}

/// Decode a base64 payload, ignoring ASCII whitespace from line wrapping.
pub fn decode_document(encoded: &str) -> Option<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact).ok()
}

/// Extract named fields with pattern matching
async fn extract(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>> {
    let Json(request) = payload?;

    let pdf_bytes = decode_document(&request.pdf_base64)
        .ok_or_else(|| ApiError::BadRequest("Invalid base64-encoded PDF.".to_string()))?;
    if pdf_bytes.is_empty() {
        return Err(ApiError::BadRequest("PDF content is empty.".to_string()));
    }

    info!(
        "Extracting {} data points from {} byte PDF",
        request.data_points.len(),
        pdf_bytes.len()
    );

    let fields: Vec<FieldRequest> = request
        .data_points
        .into_iter()
        .map(FieldRequest::named)
        .collect();

    let extractor = state.extractor.clone();
    let results = tokio::task::spawn_blocking(move || extractor.extract_pattern(&pdf_bytes, &fields))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Unprocessable(format!("Extraction failed: {}", e)))?;

    let mut map = Map::new();
    for result in results {
        map.insert(result.name, Value::String(result.value));
    }
    debug!("Returning {} results", map.len());

    Ok(Json(ExtractResponse { results: map }))
}

/// Extract described fields with proximity matching
async fn extract_datapoints(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DatapointsRequest>, JsonRejection>,
) -> Result<Json<DatapointsResponse>> {
    let Json(request) = payload?;

    let document = decode_document(&request.document_content)
        .ok_or_else(|| ApiError::BadRequest("Invalid base64-encoded document.".to_string()))?;

    info!(
        "Scoring {} data points against {} byte document",
        request.data_points.len(),
        document.len()
    );

    let fields = request.data_points;
    let extractor = state.extractor.clone();
    let results = tokio::task::spawn_blocking(move || extractor.extract_proximity(&document, &fields))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(DatapointsResponse {
        results: results.into_iter().map(DatapointResult::from).collect(),
    }))
}
