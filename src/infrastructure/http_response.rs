// HTTP response utilities for JSON payloads and field errors
use crate::domain::dashboard::DashboardError;
use crate::domain::stacktrace_link::RepoPathError;
use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Serialize `data` as a JSON response with the given status
pub fn json_response<T: Serialize>(status: StatusCode, data: &T) -> Response<Body> {
    let bytes = match serde_json::to_vec(data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("JSON serialization error: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(Body::from(bytes))
        .unwrap_or_else(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

/// `{"field": ["message", ...]}` payload, fields in name order
pub fn field_errors<'a>(
    status: StatusCode,
    errors: impl IntoIterator<Item = (&'a str, String)>,
) -> Response<Body> {
    let mut payload: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (field, message) in errors {
        payload.entry(field).or_default().push(message);
    }
    json_response(status, &payload)
}

pub fn detail(status: StatusCode, message: &str) -> Response<Body> {
    json_response(status, &serde_json::json!({ "detail": message }))
}

pub fn repo_path_errors(errors: Vec<RepoPathError>) -> Response<Body> {
    if let Some(failure) = errors.iter().find(|e| !e.is_validation()) {
        tracing::error!("Repo path lookup failed: {:#}", failure);
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal error");
    }

    field_errors(
        StatusCode::BAD_REQUEST,
        errors.iter().map(|e| (e.field().name(), e.to_string())),
    )
}

pub fn dashboard_error(error: DashboardError) -> Response<Body> {
    let message = error.to_string();
    match error {
        DashboardError::DuplicateTitle => field_errors(StatusCode::CONFLICT, [("title", message)]),
        DashboardError::BlankTitle | DashboardError::NameTooLong => {
            field_errors(StatusCode::BAD_REQUEST, [("title", message)])
        }
        DashboardError::SlugTooLong => field_errors(StatusCode::BAD_REQUEST, [("slug", message)]),
        DashboardError::DuplicateTombstone => detail(StatusCode::CONFLICT, &message),
        DashboardError::UnknownPrebuilt(_) => detail(StatusCode::NOT_FOUND, &message),
        DashboardError::Store(e) => internal_error(e),
    }
}

pub fn internal_error(error: anyhow::Error) -> Response<Body> {
    tracing::error!("Store error: {:#}", error);
    detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}
