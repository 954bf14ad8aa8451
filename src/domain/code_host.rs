// Organization, project and source-control records used for link lookups
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[allow(dead_code)]
    pub id: u64,
    pub slug: String,
    pub organization_id: u64,
}

/// An installed source-control integration, e.g. a GitHub app on an account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Integration {
    pub id: u64,
    pub provider: String,
    #[allow(dead_code)]
    pub name: String,
    #[allow(dead_code)]
    pub external_id: String,
    /// Host plus account, e.g. `github.com/getsentry`.
    pub domain_name: String,
    /// Organizations the integration is installed on.
    #[serde(default)]
    pub organization_ids: Vec<u64>,
}

impl Integration {
    pub fn is_installed_on(&self, organization_id: u64) -> bool {
        self.organization_ids.contains(&organization_id)
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain_name.trim_end_matches('/'))
    }
}

/// A repository tracked by an organization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub organization_id: u64,
    /// `owner/name`, e.g. `getsentry/sentry`.
    pub name: String,
    #[allow(dead_code)]
    pub provider: String,
    pub integration_id: Option<u64>,
    pub url: String,
}

/// True when `url` equals `prefix` or continues it at a `/` boundary.
///
/// `https://github.com/getsentry/sentry` is a prefix of
/// `https://github.com/getsentry/sentry/blob/...` but not of
/// `https://github.com/getsentry/sentry-plugins/...`.
pub fn is_url_prefix(prefix: &str, url: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match url.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url_prefix() {
        let repo = "https://github.com/getsentry/sentry";
        assert!(is_url_prefix(repo, "https://github.com/getsentry/sentry"));
        assert!(is_url_prefix(repo, "https://github.com/getsentry/sentry/blob/master/a.py"));
        assert!(is_url_prefix(
            "https://github.com/getsentry/",
            "https://github.com/getsentry/sentry"
        ));
        assert!(!is_url_prefix(
            repo,
            "https://github.com/getsentry/sentry-plugins/blob/master/a.py"
        ));
        assert!(!is_url_prefix(repo, "https://github.com/getsentry/snuba/blob/master/a.py"));
    }

    #[test]
    fn test_integration_base_url() {
        let integration = Integration {
            id: 1,
            provider: "github".to_string(),
            name: "getsentry".to_string(),
            external_id: "1234".to_string(),
            domain_name: "github.com/getsentry".to_string(),
            organization_ids: vec![7],
        };
        assert_eq!(integration.base_url(), "https://github.com/getsentry");
        assert!(integration.is_installed_on(7));
        assert!(!integration.is_installed_on(8));
    }
}
