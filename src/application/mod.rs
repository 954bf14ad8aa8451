// Application layer - Use cases and repository traits
pub mod code_host_directory;
pub mod dashboard_service;
pub mod dashboard_store;
pub mod repo_path_service;
