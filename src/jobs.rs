//! Checks the image tag of every job in the listed job definition files.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::decoder::{JobStep, get_image, tag_is_text};
use crate::error::CheckError;
use crate::report::{ErrorKind, ValidationError};
use crate::rules::is_valid_tag;
use crate::ui::Observer;

#[derive(Debug, Deserialize)]
struct JobDefinition {
    #[serde(default)]
    jobs: Option<IndexMap<String, JobStep>>,
}

/// Scans each job definition file (relative to `dm_dir`) and returns one
/// error per job whose tag is not a release tag.
///
/// Bad tags never stop the scan; unreadable files and files without a
/// `jobs` mapping do.
pub fn scan(
    paths: &[String],
    dm_dir: &Path,
    observer: &mut impl Observer,
) -> Result<Vec<ValidationError>, CheckError> {
    let mut errors = Vec::new();

    for relative in paths {
        let path = dm_dir.join(relative);
        observer.checking(&path);

        let contents = std::fs::read_to_string(&path).map_err(|e| CheckError::io(&path, e))?;
        let definition: Option<JobDefinition> =
            serde_yaml::from_str(&contents).map_err(|e| CheckError::yaml(&path, e))?;
        let jobs = definition
            .and_then(|d| d.jobs)
            .ok_or_else(|| CheckError::MissingJobs { path: path.clone() })?;

        debug!("{} defines {} jobs", path.display(), jobs.len());

        for (name, step) in &jobs {
            let (image, tag) = get_image(step);
            let job = name.clone();
            let kind = if !tag_is_text(step) {
                ErrorKind::UnquotedJobTag { job, tag }
            } else if is_valid_tag(&tag) {
                debug!("job '{name}' uses {image}:{tag}");
                continue;
            } else {
                ErrorKind::InvalidJobTag { job, tag }
            };

            let error = ValidationError::new(&path, None, kind);
            observer.error(&error);
            errors.push(error);
        }
    }

    Ok(errors)
}
