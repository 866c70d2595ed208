//! Validation errors collected during a run and the [`Report`] that holds them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// What is wrong with a single image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// A job's image tag is not a release version.
    InvalidJobTag { job: String, tag: String },
    /// A job's image tag is a bare YAML number (or other non-string value).
    UnquotedJobTag { job: String, tag: String },
    /// A workflow `container` line carries a non-release tag.
    InvalidContainerTag { tag: String },
    /// A workflow `container` line has no tag at all.
    MissingContainerTag,
    /// The manifests list no job definition files.
    NoJobDefinitions,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidJobTag { job, tag } => {
                write!(f, "Invalid image tag '{tag}' for job '{job}'")
            }
            ErrorKind::UnquotedJobTag { job, tag } => {
                write!(f, "Image tag {tag} for job '{job}' is not a quoted string")
            }
            ErrorKind::InvalidContainerTag { tag } => write!(f, "Invalid container tag '{tag}'"),
            ErrorKind::MissingContainerTag => write!(f, "Missing container tag"),
            ErrorKind::NoJobDefinitions => write!(f, "No job definition files found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub file: PathBuf,
    /// 1-based, only for workflow lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(flatten)]
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(file: impl Into<PathBuf>, line: Option<usize>, kind: ErrorKind) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}: {}", self.file.display(), self.kind),
            None => write!(f, "{}: {}", self.file.display(), self.kind),
        }
    }
}

/// Everything found by one run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub job_definition_files: usize,
    pub workflow_files: usize,
    pub errors: Vec<ValidationError>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status for this report: 0 when clean, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_ok() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_file_and_line() {
        let err = ValidationError::new("workflows/main.nf", Some(12), ErrorKind::MissingContainerTag);
        assert_eq!(err.to_string(), "workflows/main.nf:12: Missing container tag");

        let err = ValidationError::new(
            "data-manager/jobs.yaml",
            None,
            ErrorKind::InvalidJobTag {
                job: "B".into(),
                tag: "latest".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "data-manager/jobs.yaml: Invalid image tag 'latest' for job 'B'"
        );
    }

    #[test]
    fn unquoted_tag_message() {
        let kind = ErrorKind::UnquotedJobTag {
            job: "A".into(),
            tag: "1200.0".into(),
        };
        assert_eq!(
            kind.to_string(),
            "Image tag 1200.0 for job 'A' is not a quoted string"
        );
    }

    #[test]
    fn exit_code_follows_errors() {
        let mut report = Report::default();
        assert!(report.is_ok());
        assert_eq!(report.exit_code(), 0);

        report
            .errors
            .push(ValidationError::new("data-manager", None, ErrorKind::NoJobDefinitions));
        assert!(!report.is_ok());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn serializes_flat_error_records() {
        let err = ValidationError::new(
            "a.nf",
            Some(3),
            ErrorKind::InvalidContainerTag { tag: "dev".into() },
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["file"], "a.nf");
        assert_eq!(json["line"], 3);
        assert_eq!(json["kind"], "invalid_container_tag");
        assert_eq!(json["tag"], "dev");
    }
}
