// Dashboard service - Saved dashboards and the prebuilt list
use crate::application::dashboard_store::DashboardStore;
use crate::domain::dashboard::{
    Dashboard, DashboardError, DashboardTombstone, MAX_NAME_LENGTH, PrebuiltDashboard,
};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    prebuilt: Arc<Vec<PrebuiltDashboard>>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>, prebuilt: Vec<PrebuiltDashboard>) -> Self {
        Self {
            store,
            prebuilt: Arc::new(prebuilt),
        }
    }

    /// Prebuilt dashboards visible to an organization, in list order.
    ///
    /// An entry is hidden when the organization has a tombstone for its id,
    /// or when `title_query` is given and not contained in its title
    /// (case-insensitive).
    pub async fn get_prebuilt_dashboards(
        &self,
        organization_id: u64,
        title_query: Option<&str>,
    ) -> anyhow::Result<Vec<PrebuiltDashboard>> {
        let tombstones: HashSet<String> = self
            .store
            .list_tombstones(organization_id)
            .await?
            .into_iter()
            .map(|t| t.slug)
            .collect();

        let title_query = title_query
            .filter(|q| !q.is_empty())
            .map(|q| q.to_lowercase());

        Ok(self
            .prebuilt
            .iter()
            .filter(|d| match &title_query {
                Some(q) => d.title.to_lowercase().contains(q.as_str()),
                None => true,
            })
            .filter(|d| !tombstones.contains(&d.id))
            .cloned()
            .collect())
    }

    pub async fn create_dashboard(
        &self,
        organization_id: u64,
        created_by: u64,
        title: &str,
    ) -> Result<Dashboard, DashboardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DashboardError::BlankTitle);
        }
        if title.chars().count() > MAX_NAME_LENGTH {
            return Err(DashboardError::NameTooLong);
        }

        let dashboard = self
            .store
            .insert_dashboard(organization_id, created_by, title)
            .await?;
        tracing::info!(
            "Created dashboard {} for organization {}",
            dashboard.id,
            organization_id
        );
        Ok(dashboard)
    }

    pub async fn list_dashboards(&self, organization_id: u64) -> anyhow::Result<Vec<Dashboard>> {
        self.store.list_dashboards(organization_id).await
    }

    /// Hide a prebuilt dashboard for an organization. Repeating the call
    /// returns the existing tombstone.
    pub async fn tombstone_prebuilt(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> Result<DashboardTombstone, DashboardError> {
        if slug.chars().count() > MAX_NAME_LENGTH {
            return Err(DashboardError::SlugTooLong);
        }
        if !self.prebuilt.iter().any(|d| d.id == slug) {
            return Err(DashboardError::UnknownPrebuilt(slug.to_string()));
        }

        match self.store.insert_tombstone(organization_id, slug).await {
            Ok(tombstone) => {
                tracing::info!(
                    "Tombstoned prebuilt dashboard {} for organization {}",
                    slug,
                    organization_id
                );
                Ok(tombstone)
            }
            Err(DashboardError::DuplicateTombstone) => {
                tracing::debug!("Prebuilt dashboard {} already tombstoned", slug);
                self.store
                    .get_tombstone(organization_id, slug)
                    .await?
                    .ok_or(DashboardError::DuplicateTombstone)
            }
            Err(e) => Err(e),
        }
    }
}
