// Stacktrace link result and validation errors
use crate::domain::validation::FieldError;
use serde::Serialize;
use thiserror::Error;

/// Code mapping suggestion returned for a (source URL, stack path) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResult {
    pub integration_id: u64,
    pub repository_id: u64,
    pub provider: String,
    pub stack_root: String,
    pub source_root: String,
    pub default_branch: String,
}

/// Request fields a validation error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    SourceUrl,
    StackPath,
}

impl LinkField {
    pub fn name(&self) -> &'static str {
        match self {
            LinkField::SourceUrl => "sourceUrl",
            LinkField::StackPath => "stackPath",
        }
    }
}

#[derive(Debug, Error)]
pub enum RepoPathError {
    #[error("{1}")]
    Field(LinkField, FieldError),

    #[error("Enter a valid URL.")]
    InvalidUrl,

    #[error("Source code URL points to a different file than the stack trace")]
    DifferentFile,

    #[error("Could not find integration")]
    IntegrationNotFound,

    #[error("Could not find repo")]
    RepositoryNotFound,

    /// The organization/integration lookup itself failed.
    #[error(transparent)]
    Directory(#[from] anyhow::Error),
}

impl RepoPathError {
    /// Whether the error describes bad input rather than a service failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RepoPathError::Directory(_))
    }

    pub fn field(&self) -> LinkField {
        match self {
            RepoPathError::Field(field, _) => *field,
            _ => LinkField::SourceUrl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_result_keys() {
        let result = LinkResult {
            integration_id: 1,
            repository_id: 2,
            provider: "github".to_string(),
            stack_root: "".to_string(),
            source_root: "src/".to_string(),
            default_branch: "master".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "integrationId": 1,
                "repositoryId": 2,
                "provider": "github",
                "stackRoot": "",
                "sourceRoot": "src/",
                "defaultBranch": "master",
            })
        );
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(RepoPathError::InvalidUrl.field().name(), "sourceUrl");
        assert_eq!(RepoPathError::RepositoryNotFound.field().name(), "sourceUrl");
        let missing = RepoPathError::Field(LinkField::StackPath, FieldError::Required);
        assert_eq!(missing.field().name(), "stackPath");
        assert_eq!(missing.to_string(), "This field is required.");
        assert!(!RepoPathError::Directory(anyhow::anyhow!("down")).is_validation());
    }
}
