use std::path::PathBuf;

use thiserror::Error;

/// Conditions that stop a run before any summary is produced.
///
/// Tag problems are never represented here; they are collected as
/// [`ValidationError`](crate::report::ValidationError)s instead.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Missing job-definition-files in {}", .path.display())]
    MissingJobDefinitionFiles { path: PathBuf },

    #[error("Missing jobs in {}", .path.display())]
    MissingJobs { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid manifest pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to list manifests: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to walk workflow files: {0}")]
    Walk(#[from] ignore::Error),
}

impl CheckError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        CheckError::Yaml {
            path: path.into(),
            source,
        }
    }
}
