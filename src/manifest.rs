//! Resolves the job definition files listed by Data Manager manifests.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::CheckError;
use crate::ui::Observer;

/// A `manifest-*.yaml` document. Only the file list matters here.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(rename = "job-definition-files")]
    job_definition_files: Option<Vec<String>>,
}

/// Reads every manifest in `dm_dir` matching `pattern` and concatenates
/// their `job-definition-files` lists in discovery order.
///
/// Stops at the first manifest without the list. Duplicates are kept.
pub fn resolve(
    dm_dir: &Path,
    pattern: &str,
    observer: &mut impl Observer,
) -> Result<Vec<String>, CheckError> {
    // Only `pattern` is glob syntax; brackets in the checkout path are literal.
    let dm_dir = glob::Pattern::escape(&dm_dir.to_string_lossy());
    let full_pattern = Path::new(&dm_dir).join(pattern);
    let mut files = Vec::new();

    for entry in glob::glob(&full_pattern.to_string_lossy())? {
        let path = entry?;
        observer.checking(&path);

        let listed = read_manifest(&path)?
            .job_definition_files
            .ok_or_else(|| CheckError::MissingJobDefinitionFiles { path: path.clone() })?;

        debug!("{} lists {} job definition files", path.display(), listed.len());
        files.extend(listed);
    }

    Ok(files)
}

fn read_manifest(path: &Path) -> Result<Manifest, CheckError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
    // An empty document deserializes to nothing at all.
    let manifest: Option<Manifest> =
        serde_yaml::from_str(&contents).map_err(|e| CheckError::yaml(path, e))?;
    Ok(manifest.unwrap_or_default())
}
