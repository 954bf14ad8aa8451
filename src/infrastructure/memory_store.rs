// In-memory store backing both the dashboard tables and the code host directory
use crate::application::code_host_directory::CodeHostDirectory;
use crate::application::dashboard_store::DashboardStore;
use crate::domain::code_host::{Integration, Organization, Project, Repository};
use crate::domain::dashboard::{Dashboard, DashboardError, DashboardTombstone};
use crate::infrastructure::config::DirectorySeed;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    organizations: Vec<Organization>,
    projects: Vec<Project>,
    integrations: Vec<Integration>,
    repositories: Vec<Repository>,
    dashboards: Vec<Dashboard>,
    tombstones: Vec<DashboardTombstone>,
    next_dashboard_id: u64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn from_seed(seed: DirectorySeed) -> Self {
        let mut integrations = seed.integrations;
        integrations.sort_by_key(|i| i.id);
        let mut repositories = seed.repositories;
        repositories.sort_by_key(|r| r.id);

        tracing::debug!(
            "Seeding store: {} organizations, {} projects, {} integrations, {} repositories",
            seed.organizations.len(),
            seed.projects.len(),
            integrations.len(),
            repositories.len()
        );

        Self {
            tables: RwLock::new(Tables {
                organizations: seed.organizations,
                projects: seed.projects,
                integrations,
                repositories,
                ..Tables::default()
            }),
        }
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn insert_dashboard(
        &self,
        organization_id: u64,
        created_by: u64,
        title: &str,
    ) -> Result<Dashboard, DashboardError> {
        let mut tables = self.tables.write().await;

        if tables
            .dashboards
            .iter()
            .any(|d| d.organization_id == organization_id && d.title == title)
        {
            return Err(DashboardError::DuplicateTitle);
        }

        tables.next_dashboard_id += 1;
        let dashboard = Dashboard::new(
            tables.next_dashboard_id,
            organization_id,
            created_by,
            title.to_string(),
        );
        tables.dashboards.push(dashboard.clone());
        Ok(dashboard)
    }

    async fn list_dashboards(&self, organization_id: u64) -> Result<Vec<Dashboard>> {
        let tables = self.tables.read().await;
        let mut dashboards: Vec<Dashboard> = tables
            .dashboards
            .iter()
            .filter(|d| d.organization_id == organization_id)
            .cloned()
            .collect();
        dashboards.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(dashboards)
    }

    async fn insert_tombstone(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> Result<DashboardTombstone, DashboardError> {
        let mut tables = self.tables.write().await;

        if tables
            .tombstones
            .iter()
            .any(|t| t.organization_id == organization_id && t.slug == slug)
        {
            return Err(DashboardError::DuplicateTombstone);
        }

        let tombstone = DashboardTombstone::new(organization_id, slug.to_string());
        tables.tombstones.push(tombstone.clone());
        Ok(tombstone)
    }

    async fn get_tombstone(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> Result<Option<DashboardTombstone>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tombstones
            .iter()
            .find(|t| t.organization_id == organization_id && t.slug == slug)
            .cloned())
    }

    async fn list_tombstones(&self, organization_id: u64) -> Result<Vec<DashboardTombstone>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tombstones
            .iter()
            .filter(|t| t.organization_id == organization_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CodeHostDirectory for MemoryStore {
    async fn find_organization(&self, slug: &str) -> Result<Option<Organization>> {
        let tables = self.tables.read().await;
        Ok(tables.organizations.iter().find(|o| o.slug == slug).cloned())
    }

    async fn find_project(&self, organization_id: u64, slug: &str) -> Result<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .find(|p| p.organization_id == organization_id && p.slug == slug)
            .cloned())
    }

    async fn list_integrations(
        &self,
        organization_id: u64,
        providers: &[&str],
    ) -> Result<Vec<Integration>> {
        let tables = self.tables.read().await;
        Ok(tables
            .integrations
            .iter()
            .filter(|i| i.is_installed_on(organization_id))
            .filter(|i| providers.contains(&i.provider.as_str()))
            .cloned()
            .collect())
    }

    async fn list_repositories(
        &self,
        organization_id: u64,
        integration_id: u64,
    ) -> Result<Vec<Repository>> {
        let tables = self.tables.read().await;
        Ok(tables
            .repositories
            .iter()
            .filter(|r| r.organization_id == organization_id)
            .filter(|r| r.integration_id == Some(integration_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_title_unique_per_organization() {
        let store = MemoryStore::default();
        let first = store.insert_dashboard(1, 10, "Errors").await.unwrap();
        assert_eq!(first.id, 1);

        assert!(matches!(
            store.insert_dashboard(1, 11, "Errors").await,
            Err(DashboardError::DuplicateTitle)
        ));

        let other_org = store.insert_dashboard(2, 10, "Errors").await.unwrap();
        assert_eq!(other_org.id, 2);
    }

    #[tokio::test]
    async fn test_list_dashboards_sorted_by_title() {
        let store = MemoryStore::default();
        store.insert_dashboard(1, 10, "Latency").await.unwrap();
        store.insert_dashboard(1, 10, "Errors").await.unwrap();
        store.insert_dashboard(2, 10, "Other").await.unwrap();

        let titles: Vec<String> = store
            .list_dashboards(1)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["Errors", "Latency"]);
    }

    #[tokio::test]
    async fn test_tombstone_unique_per_organization() {
        let store = MemoryStore::default();
        store.insert_tombstone(1, "default-overview").await.unwrap();

        assert!(matches!(
            store.insert_tombstone(1, "default-overview").await,
            Err(DashboardError::DuplicateTombstone)
        ));
        store.insert_tombstone(2, "default-overview").await.unwrap();

        assert_eq!(store.list_tombstones(1).await.unwrap().len(), 1);
        assert!(store.get_tombstone(2, "default-overview").await.unwrap().is_some());
        assert!(store.get_tombstone(3, "default-overview").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_directory_lookups() {
        let store = MemoryStore::from_seed(DirectorySeed {
            organizations: vec![Organization {
                id: 1,
                slug: "blap".to_string(),
            }],
            projects: vec![Project {
                id: 3,
                slug: "foo".to_string(),
                organization_id: 1,
            }],
            integrations: vec![
                Integration {
                    id: 6,
                    provider: "gitlab".to_string(),
                    name: "gl".to_string(),
                    external_id: "9".to_string(),
                    domain_name: "gitlab.com/blap".to_string(),
                    organization_ids: vec![1],
                },
                Integration {
                    id: 5,
                    provider: "github".to_string(),
                    name: "getsentry".to_string(),
                    external_id: "1234".to_string(),
                    domain_name: "github.com/getsentry".to_string(),
                    organization_ids: vec![1],
                },
            ],
            repositories: vec![Repository {
                id: 8,
                organization_id: 1,
                name: "getsentry/sentry".to_string(),
                provider: "integrations:github".to_string(),
                integration_id: Some(5),
                url: "https://github.com/getsentry/sentry".to_string(),
            }],
        });

        let org = store.find_organization("blap").await.unwrap().unwrap();
        assert!(store.find_project(org.id, "foo").await.unwrap().is_some());
        assert!(store.find_project(2, "foo").await.unwrap().is_none());

        let ids: Vec<u64> = store
            .list_integrations(1, &["github", "gitlab"])
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![5, 6]);
        assert!(store.list_integrations(2, &["github"]).await.unwrap().is_empty());

        assert_eq!(store.list_repositories(1, 5).await.unwrap().len(), 1);
        assert!(store.list_repositories(1, 6).await.unwrap().is_empty());
    }
}
