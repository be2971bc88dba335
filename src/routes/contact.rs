use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::AppError;
use crate::relay::RelayOutcome;
use crate::state::SharedState;
use crate::submission::parser;

/// Relay one contact submission and report `{status, id}`.
///
/// The status code is 200 for both outcomes; the body carries the verdict.
/// Only an unparseable request body is rejected.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RelayOutcome>, AppError> {
    let raw = parser::parse_request(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;

    Ok(Json(state.relay.submit(&raw).await))
}
