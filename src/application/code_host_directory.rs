// Lookup trait for organizations, projects, integrations and repositories
use crate::domain::code_host::{Integration, Organization, Project, Repository};
use async_trait::async_trait;

#[async_trait]
pub trait CodeHostDirectory: Send + Sync {
    async fn find_organization(&self, slug: &str) -> anyhow::Result<Option<Organization>>;

    async fn find_project(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> anyhow::Result<Option<Project>>;

    /// Integrations installed on the organization whose provider is one of
    /// `providers`, ordered by id
    async fn list_integrations(
        &self,
        organization_id: u64,
        providers: &[&str],
    ) -> anyhow::Result<Vec<Integration>>;

    /// Repositories of the organization linked to the integration, ordered by id
    async fn list_repositories(
        &self,
        organization_id: u64,
        integration_id: u64,
    ) -> anyhow::Result<Vec<Repository>>;
}
