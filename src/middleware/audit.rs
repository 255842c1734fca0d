use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{RawPathParams, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{error, info};

use super::AuthUser;
use crate::app::AppState;
use crate::error::ApiError;

const NO_BODY: &str = "No request body found";

/// Logs admin requests and responses with their bodies.
///
/// Both bodies are buffered (bounded by `api.max_request_size_bytes`) and
/// re-attached unchanged.
pub async fn admin_audit_log(
    State(state): State<AppState>,
    params: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.security.enable_audit_logging {
        return Ok(next.run(request).await);
    }

    let limit = state.config.api.max_request_size_bytes;
    let user_id = request.extensions().get::<AuthUser>().map(|user| user.id);
    let uri = request.uri().clone();
    let params = params.map(|params| format_params(&params)).unwrap_or_default();

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, limit)
        .await
        .map_err(|_| ApiError::bad_request("Request body too large"))?;

    info!(user_id = ?user_id, uri = %uri, body = %describe_request(&bytes, &params), "Admin request");

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, limit).await.map_err(|e| {
        error!("Failed to buffer admin response: {}", e);
        ApiError::internal_server_error("Failed to read response")
    })?;

    if parts.status.as_u16() >= 400 {
        error!(user_id = ?user_id, uri = %uri, status = %parts.status, body = %describe_body(&bytes), "Admin error");
    } else {
        info!(user_id = ?user_id, uri = %uri, status = %parts.status, body = %describe_body(&bytes), "Admin response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// `name=value` pairs of the matched route, e.g. `comment_id=5`
fn format_params(params: &RawPathParams) -> String {
    join_params(params.iter())
}

fn join_params<'a>(params: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    params
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Request body, or the path parameters when the body is empty
fn describe_request(bytes: &Bytes, params: &str) -> String {
    if bytes.is_empty() && !params.is_empty() {
        format!("{} (path: {})", NO_BODY, params)
    } else {
        describe_body(bytes)
    }
}

fn describe_body(bytes: &Bytes) -> String {
    if bytes.is_empty() {
        NO_BODY.to_string()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
