// Repo path parsing - Derive a code mapping from a source URL and a stack path
use crate::application::code_host_directory::CodeHostDirectory;
use crate::domain::code_host::{Integration, Repository, is_url_prefix};
use crate::domain::path_roots::{file_name, find_roots};
use crate::domain::source_provider::SourceProvider;
use crate::domain::stacktrace_link::{LinkResult, RepoPathError};
use std::sync::Arc;
use url::Url;

#[derive(Clone)]
pub struct RepoPathService {
    directory: Arc<dyn CodeHostDirectory>,
}

impl RepoPathService {
    pub fn new(directory: Arc<dyn CodeHostDirectory>) -> Self {
        Self { directory }
    }

    /// Match `source_url` to an installed integration and tracked repository
    /// of the organization, then compute the roots aligning `stack_path`
    /// with the file the URL points at.
    ///
    /// Checks run in order: URL syntax, file name, integration, repository,
    /// provider URL layout.
    pub async fn parse(
        &self,
        organization_id: u64,
        source_url: &str,
        stack_path: &str,
    ) -> Result<LinkResult, RepoPathError> {
        let url = parse_source_url(source_url)?;

        if source_file_name(&url).as_deref() != Some(file_name(stack_path)) {
            return Err(RepoPathError::DifferentFile);
        }

        let integration = self.find_integration(organization_id, &url).await?;
        let provider = SourceProvider::from_key(&integration.provider)
            .ok_or(RepoPathError::IntegrationNotFound)?;
        let repository = self
            .find_repository(organization_id, integration.id, &url)
            .await?;

        let location = provider
            .extract_location(&repository.url, &url)
            .ok_or(RepoPathError::InvalidUrl)?;
        let roots = find_roots(stack_path, &location.path).ok_or(RepoPathError::DifferentFile)?;

        tracing::debug!(
            "Matched {} to repository {} (stack_root={:?}, source_root={:?})",
            source_url,
            repository.name,
            roots.stack_root,
            roots.source_root
        );

        Ok(LinkResult {
            integration_id: integration.id,
            repository_id: repository.id,
            provider: provider.key().to_string(),
            stack_root: roots.stack_root,
            source_root: roots.source_root,
            default_branch: location.branch,
        })
    }

    async fn find_integration(
        &self,
        organization_id: u64,
        url: &Url,
    ) -> Result<Integration, RepoPathError> {
        let providers = SourceProvider::ALL.map(|p| p.key());
        self.directory
            .list_integrations(organization_id, &providers)
            .await?
            .into_iter()
            .find(|i| is_url_prefix(&i.base_url(), url.as_str()))
            .ok_or(RepoPathError::IntegrationNotFound)
    }

    async fn find_repository(
        &self,
        organization_id: u64,
        integration_id: u64,
        url: &Url,
    ) -> Result<Repository, RepoPathError> {
        self.directory
            .list_repositories(organization_id, integration_id)
            .await?
            .into_iter()
            .find(|r| is_url_prefix(&r.url, url.as_str()))
            .ok_or(RepoPathError::RepositoryNotFound)
    }
}

fn parse_source_url(source_url: &str) -> Result<Url, RepoPathError> {
    let url = Url::parse(source_url.trim()).map_err(|_| RepoPathError::InvalidUrl)?;
    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    if !matches!(url.scheme(), "http" | "https") || !has_host {
        return Err(RepoPathError::InvalidUrl);
    }
    Ok(url)
}

fn source_file_name(url: &Url) -> Option<String> {
    let last = url.path_segments()?.next_back()?;
    urlencoding::decode(last).ok().map(|name| name.into_owned())
}
