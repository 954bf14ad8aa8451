// Application state for HTTP handlers
use crate::application::code_host_directory::CodeHostDirectory;
use crate::application::dashboard_service::DashboardService;
use crate::application::repo_path_service::RepoPathService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn CodeHostDirectory>,
    pub dashboard_service: DashboardService,
    pub repo_path_service: RepoPathService,
}
