// Dashboard domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column width shared by dashboard titles and tombstone slugs.
pub const MAX_NAME_LENGTH: usize = 255;

/// A dashboard saved by a user, unique per (organization, title).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: u64,
    pub title: String,
    pub created_by: u64,
    pub organization_id: u64,
    pub date_added: DateTime<Utc>,
}

impl Dashboard {
    pub fn new(id: u64, organization_id: u64, created_by: u64, title: String) -> Self {
        Self {
            id,
            title,
            created_by,
            organization_id,
            date_added: Utc::now(),
        }
    }
}

/// Marks a prebuilt dashboard as replaced or deleted for one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTombstone {
    pub slug: String,
    pub organization_id: u64,
    pub date_added: DateTime<Utc>,
}

impl DashboardTombstone {
    pub fn new(organization_id: u64, slug: String) -> Self {
        Self {
            slug,
            organization_id,
            date_added: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltDashboard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSpec {
    pub title: String,
    // config lowercases keys on some versions
    #[serde(alias = "displaytype")]
    pub display_type: String,
    pub interval: String,
    #[serde(default)]
    pub queries: Vec<WidgetQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetQuery {
    pub name: String,
    pub conditions: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Dashboard with that title already exists.")]
    DuplicateTitle,

    #[error("Ensure this field has no more than 255 characters.")]
    NameTooLong,

    #[error("Ensure this field has no more than 255 characters.")]
    SlugTooLong,

    #[error("This field may not be blank.")]
    BlankTitle,

    #[error("Dashboard tombstone already exists.")]
    DuplicateTombstone,

    #[error("Unknown prebuilt dashboard: {0}")]
    UnknownPrebuilt(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// The prebuilt list shipped with the service when no override is configured.
pub fn default_prebuilt_dashboards() -> Vec<PrebuiltDashboard> {
    vec![PrebuiltDashboard {
        id: "default-overview".to_string(),
        title: "Dashboard".to_string(),
        widgets: vec![WidgetSpec {
            title: "Events".to_string(),
            display_type: "line".to_string(),
            interval: "5m".to_string(),
            queries: vec![WidgetQuery {
                name: "Events".to_string(),
                conditions: "!event.type:transaction".to_string(),
                fields: vec!["count()".to_string()],
            }],
        }],
    }]
}
