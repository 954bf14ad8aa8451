// HTTP request handlers
use crate::domain::code_host::Organization;
use crate::domain::stacktrace_link::{LinkField, RepoPathError};
use crate::infrastructure::http_response::{
    dashboard_error, detail, field_errors, internal_error, json_response, repo_path_errors,
};
use crate::presentation::app_state::AppState;
use crate::presentation::request_body::RequestBody;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const NOT_FOUND: &str = "The requested resource does not exist";

#[derive(Deserialize)]
pub struct PrebuiltQuery {
    pub query: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Suggest stack/source roots for a file URL and a stack trace path
pub async fn parse_repo_path(
    Path((organization_slug, project_slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match RequestBody::from_payload(payload) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let organization = match find_organization(&state, &organization_slug).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };
    match state.directory.find_project(organization.id, &project_slug).await {
        Ok(Some(_)) => {}
        Ok(None) => return detail(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => return internal_error(e),
    }

    let source_url = link_field(&body, LinkField::SourceUrl);
    let stack_path = link_field(&body, LinkField::StackPath);
    let (source_url, stack_path) = match (source_url, stack_path) {
        (Ok(source_url), Ok(stack_path)) => (source_url, stack_path),
        (source_url, stack_path) => {
            let errors = [source_url.err(), stack_path.err()].into_iter().flatten().collect();
            return repo_path_errors(errors);
        }
    };

    match state
        .repo_path_service
        .parse(organization.id, source_url, stack_path)
        .await
    {
        Ok(link) => json_response(StatusCode::OK, &link),
        Err(e) => {
            tracing::debug!("Rejected repo path for {}: {}", source_url, e);
            repo_path_errors(vec![e])
        }
    }
}

/// List prebuilt dashboards not tombstoned for the organization
pub async fn list_prebuilt_dashboards(
    Path(organization_slug): Path<String>,
    Query(query): Query<PrebuiltQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let organization = match find_organization(&state, &organization_slug).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    match state
        .dashboard_service
        .get_prebuilt_dashboards(organization.id, query.query.as_deref())
        .await
    {
        Ok(dashboards) => json_response(StatusCode::OK, &dashboards),
        Err(e) => internal_error(e),
    }
}

/// Hide a prebuilt dashboard for the organization
pub async fn delete_prebuilt_dashboard(
    Path((organization_slug, slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let organization = match find_organization(&state, &organization_slug).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    match state
        .dashboard_service
        .tombstone_prebuilt(organization.id, &slug)
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => dashboard_error(e),
    }
}

/// List the organization's saved dashboards
pub async fn list_dashboards(
    Path(organization_slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let organization = match find_organization(&state, &organization_slug).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    match state.dashboard_service.list_dashboards(organization.id).await {
        Ok(dashboards) => json_response(StatusCode::OK, &dashboards),
        Err(e) => internal_error(e),
    }
}

/// Save a new dashboard for the organization
pub async fn create_dashboard(
    Path(organization_slug): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match RequestBody::from_payload(payload) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let organization = match find_organization(&state, &organization_slug).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    let title = body.required_string("title");
    let created_by = body.required_integer("createdBy");
    let (title, created_by) = match (title, created_by) {
        (Ok(title), Ok(created_by)) => (title, created_by),
        (title, created_by) => {
            let errors = [
                title.err().map(|e| ("title", e.to_string())),
                created_by.err().map(|e| ("createdBy", e.to_string())),
            ];
            return field_errors(StatusCode::BAD_REQUEST, errors.into_iter().flatten());
        }
    };

    match state
        .dashboard_service
        .create_dashboard(organization.id, created_by, title)
        .await
    {
        Ok(dashboard) => json_response(StatusCode::CREATED, &dashboard),
        Err(e) => dashboard_error(e),
    }
}

async fn find_organization(state: &AppState, slug: &str) -> Result<Organization, Response> {
    match state.directory.find_organization(slug).await {
        Ok(Some(organization)) => Ok(organization),
        Ok(None) => Err(detail(StatusCode::NOT_FOUND, NOT_FOUND)),
        Err(e) => Err(internal_error(e)),
    }
}

fn link_field(body: &RequestBody, field: LinkField) -> Result<&str, RepoPathError> {
    body.required_string(field.name())
        .map_err(|e| RepoPathError::Field(field, e))
}
