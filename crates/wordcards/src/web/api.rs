//! JSON API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::AppState;
use crate::error::Error;
use crate::word::WordRecord;

/// Errors surfaced by the API, each rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// The index is not a position in the current list.
    InvalidIndex,
    /// The request body was not usable JSON.
    BadBody(JsonRejection),
    /// The store failed.
    Storage(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Storage(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidIndex => (StatusCode::NOT_FOUND, "Invalid index".to_string()),
            Self::BadBody(rejection) => (rejection.status(), rejection.body_text()),
            Self::Storage(err) => {
                error!("Word store operation failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

/// Parse a path segment as a list index.
///
/// Anything that is not a non-negative integer is treated like an index past
/// the end of the list.
fn parse_index(raw: &str) -> Result<usize, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidIndex);
    }
    raw.parse().map_err(|_| ApiError::InvalidIndex)
}

pub(super) async fn list_words(
    State(state): State<AppState>,
) -> Result<Json<Vec<WordRecord>>, ApiError> {
    let words = state.service().list().await?;
    debug!("Listing {} words", words.len());
    Ok(Json(words))
}

pub(super) async fn add_word(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(record) = body?;
    state.service().append(WordRecord::from(record)).await?;
    Ok(message("Word added successfully"))
}

pub(super) async fn delete_word(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let index = parse_index(&raw_index)?;
    if state.service().remove_at(index).await? {
        Ok(message("Word deleted successfully"))
    } else {
        Err(ApiError::InvalidIndex)
    }
}

pub(super) async fn update_word(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let index = parse_index(&raw_index)?;
    let Json(record) = body?;
    if state
        .service()
        .replace_at(index, WordRecord::from(record))
        .await?
    {
        Ok(message("Word updated successfully"))
    } else {
        Err(ApiError::InvalidIndex)
    }
}

pub(super) async fn download_words(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.service().export_raw().await?;
    debug!("Exporting {} bytes", document.len());

    let disposition = format!("attachment; filename=\"{}\"", state.download_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}
