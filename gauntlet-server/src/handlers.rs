//! HTTP request handlers

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use gauntlet_core::{InfinityStone, Report};
use serde_json::Value;
use tracing::{debug, warn};

/// `GET /stones` - every stone in catalog order
pub async fn list_stones(State(state): State<AppState>) -> Json<Vec<InfinityStone>> {
    let stones = state.catalog.list();
    debug!("Listing {} stones", stones.len());
    Json(stones.to_vec())
}

/// `GET /stones/:name` - a single stone by exact name
///
/// A name that does not decode to UTF-8 cannot match any stone, so it is a 404.
pub async fn get_stone(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<InfinityStone>> {
    let Path(name) = name.map_err(|e| {
        debug!(error = %e, "undecodable stone name");
        ApiError::NotFound(e.body_text())
    })?;

    let stone = state.catalog.get(&name).map_err(|e| {
        debug!(error = %e, "stone lookup failed");
        ApiError::from(e)
    })?;

    Ok(Json(stone.clone()))
}

/// `POST /stones/report` - hand a suspicious activity report to the reporter
///
/// The body is decoded by hand so decoder messages stay in the server log.
pub async fn report_activity(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusCode> {
    let report = decode_report(&body)?;
    state.reporter.report(report);

    Ok(StatusCode::ACCEPTED)
}

/// Only a JSON object (or `null`, read as an empty report) is a report.
fn decode_report(body: &[u8]) -> ApiResult<Report> {
    let value: Value = serde_json::from_slice(body).map_err(invalid_payload)?;

    match value {
        Value::Null => Ok(Report::default()),
        Value::Object(_) => serde_json::from_value(value).map_err(invalid_payload),
        _ => {
            warn!(error = "expected a JSON object", "invalid report payload");
            Err(ApiError::BadRequest("expected a JSON object".to_string()))
        }
    }
}

fn invalid_payload(e: serde_json::Error) -> ApiError {
    warn!(error = %e, "invalid report payload");
    ApiError::BadRequest(e.to_string())
}
