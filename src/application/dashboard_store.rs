// Repository trait for dashboard persistence
use crate::domain::dashboard::{Dashboard, DashboardError, DashboardTombstone};
use async_trait::async_trait;

#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Insert a dashboard, failing with `DuplicateTitle` when the
    /// organization already has one with the same title
    async fn insert_dashboard(
        &self,
        organization_id: u64,
        created_by: u64,
        title: &str,
    ) -> Result<Dashboard, DashboardError>;

    /// Saved dashboards of an organization, ordered by title
    async fn list_dashboards(&self, organization_id: u64) -> anyhow::Result<Vec<Dashboard>>;

    /// Insert a tombstone, failing with `DuplicateTombstone` when
    /// (organization, slug) already exists
    async fn insert_tombstone(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> Result<DashboardTombstone, DashboardError>;

    async fn get_tombstone(
        &self,
        organization_id: u64,
        slug: &str,
    ) -> anyhow::Result<Option<DashboardTombstone>>;

    async fn list_tombstones(
        &self,
        organization_id: u64,
    ) -> anyhow::Result<Vec<DashboardTombstone>>;
}
