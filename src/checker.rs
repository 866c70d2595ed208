use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::report::{ErrorKind, Report, ValidationError};
use crate::ui::Observer;
use crate::workflow::WorkflowFiles;
use crate::{jobs, manifest, workflow};

/// Runs the whole check over one repository.
pub struct Checker {
    /// Repository root every other path is resolved against.
    pub root: PathBuf,
    pub config: CheckerConfig,
}

impl Checker {
    pub fn new(root: impl Into<PathBuf>, config: CheckerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Manifests, then job definitions, then workflow scripts.
    ///
    /// Returns `Err` only for fatal problems; tag problems end up in the report.
    pub fn run(&self, observer: &mut impl Observer) -> Result<Report, CheckError> {
        let dm_dir = self.root.join(&self.config.data_manager_dir);
        let mut report = Report::default();

        let jd_files = manifest::resolve(&dm_dir, &self.config.manifest_pattern, observer)?;
        info!("{} job definition files listed", jd_files.len());

        if jd_files.is_empty() {
            let error = ValidationError::new(&dm_dir, None, ErrorKind::NoJobDefinitions);
            observer.error(&error);
            report.errors.push(error);
        } else {
            observer.info(&format!("Checking {} job definition files...", jd_files.len()));
            report.job_definition_files = jd_files.len();
            report.errors.extend(jobs::scan(&jd_files, &dm_dir, observer)?);
        }

        let files = WorkflowFiles {
            extension: &self.config.workflow_extension,
            respect_gitignore: self.config.respect_gitignore,
        };
        let (workflow_files, errors) = workflow::scan(&self.root, &files, observer)?;
        report.workflow_files = workflow_files;
        report.errors.extend(errors);

        debug!("run finished with {} errors", report.errors.len());
        Ok(report)
    }
}
