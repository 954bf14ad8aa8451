use crate::domain::code_host::{Integration, Organization, Project, Repository};
use crate::domain::dashboard::{PrebuiltDashboard, default_prebuilt_dashboards};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardsConfig {
    #[serde(default)]
    pub prebuilt: Vec<PrebuiltDashboard>,
}

/// Records loaded into the in-memory directory at startup.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DirectorySeed {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

/// Server settings from `config/service`, overridable with
/// `STACKLINK_SERVER__BIND` style environment variables
pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service").required(false))
        .add_source(
            config::Environment::with_prefix("STACKLINK")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Prebuilt dashboards from `config/dashboards`, falling back to the
/// built-in list when the file is absent or lists none
pub fn load_prebuilt_dashboards() -> anyhow::Result<Vec<PrebuiltDashboard>> {
    let dashboards: DashboardsConfig = load_optional("config/dashboards")?;
    Ok(prebuilt_or_default(dashboards))
}

pub fn load_directory_seed() -> anyhow::Result<DirectorySeed> {
    load_optional("config/directory")
}

fn load_optional<T: DeserializeOwned>(name: &str) -> anyhow::Result<T> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn prebuilt_or_default(config: DashboardsConfig) -> Vec<PrebuiltDashboard> {
    if config.prebuilt.is_empty() {
        default_prebuilt_dashboards()
    } else {
        config.prebuilt
    }
}
