// Source-control providers and their file URL layouts
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProvider {
    GitHub,
    GitHubEnterprise,
    GitLab,
}

/// Branch and in-repo path pulled out of a file URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub branch: String,
    pub path: String,
}

impl SourceProvider {
    pub const ALL: [SourceProvider; 3] = [
        SourceProvider::GitHub,
        SourceProvider::GitHubEnterprise,
        SourceProvider::GitLab,
    ];

    /// Integration provider key as stored on the integration record.
    pub fn key(&self) -> &'static str {
        match self {
            SourceProvider::GitHub => "github",
            SourceProvider::GitHubEnterprise => "github_enterprise",
            SourceProvider::GitLab => "gitlab",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Path fragment between the repository URL and the branch name.
    fn blob_marker(&self) -> &'static str {
        match self {
            SourceProvider::GitHub | SourceProvider::GitHubEnterprise => "blob/",
            SourceProvider::GitLab => "-/blob/",
        }
    }

    /// Split `{repo_url}/{marker}{branch}/{path}` into branch and path.
    ///
    /// Query string and fragment (line anchors) are ignored and the path is
    /// percent-decoded. Branch names containing `/` cannot be told apart
    /// from the path, so the first segment is taken as the branch.
    pub fn extract_location(&self, repo_url: &str, source_url: &Url) -> Option<SourceLocation> {
        let mut file_url = source_url.clone();
        file_url.set_query(None);
        file_url.set_fragment(None);

        let rest = file_url
            .as_str()
            .strip_prefix(repo_url.trim_end_matches('/'))?
            .strip_prefix('/')?
            .strip_prefix(self.blob_marker())?;

        let (branch, path) = rest.split_once('/')?;
        if branch.is_empty() || path.is_empty() {
            return None;
        }

        let branch = urlencoding::decode(branch).ok()?.into_owned();
        let path = urlencoding::decode(path).ok()?.into_owned();
        Some(SourceLocation { branch, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO: &str = "https://github.com/getsentry/sentry";

    fn location(branch: &str, path: &str) -> Option<SourceLocation> {
        Some(SourceLocation {
            branch: branch.to_string(),
            path: path.to_string(),
        })
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SourceProvider::from_key("github"), Some(SourceProvider::GitHub));
        assert_eq!(SourceProvider::from_key("gitlab"), Some(SourceProvider::GitLab));
        assert_eq!(SourceProvider::from_key("bitbucket"), None);
    }

    #[test]
    fn test_github_location() {
        let url = Url::parse(
            "https://github.com/getsentry/sentry/blob/master/src/sentry/api/endpoints/project_stacktrace_link.py",
        )
        .unwrap();
        assert_eq!(
            SourceProvider::GitHub.extract_location(REPO, &url),
            location("master", "src/sentry/api/endpoints/project_stacktrace_link.py")
        );
    }

    #[test]
    fn test_ignores_line_anchor_and_decodes() {
        let url =
            Url::parse("https://github.com/getsentry/sentry/blob/main/docs/read%20me.md?plain=1#L10")
                .unwrap();
        assert_eq!(
            SourceProvider::GitHub.extract_location(REPO, &url),
            location("main", "docs/read me.md")
        );
    }

    #[test]
    fn test_gitlab_location() {
        let url = Url::parse("https://gitlab.com/getsentry/sentry/-/blob/main/src/app.py").unwrap();
        assert_eq!(
            SourceProvider::GitLab.extract_location("https://gitlab.com/getsentry/sentry", &url),
            location("main", "src/app.py")
        );
    }

    #[test]
    fn test_rejects_foreign_layout() {
        let url = Url::parse("https://github.com/getsentry/sentry/tree/master/src/app.py").unwrap();
        assert_eq!(SourceProvider::GitHub.extract_location(REPO, &url), None);

        let url = Url::parse("https://github.com/getsentry/sentry/blob/master").unwrap();
        assert_eq!(SourceProvider::GitHub.extract_location(REPO, &url), None);

        let url = Url::parse("https://github.com/getsentry/snuba/blob/master/a.py").unwrap();
        assert_eq!(SourceProvider::GitHub.extract_location(REPO, &url), None);
    }
}
