//! Checks `container '...'` declarations in workflow scripts.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::CheckError;
use crate::report::{ErrorKind, ValidationError};
use crate::rules::{ContainerLine, is_valid_tag};
use crate::ui::Observer;

/// Options for finding workflow scripts beneath a root.
#[derive(Debug, Clone)]
pub struct WorkflowFiles<'a> {
    pub extension: &'a str,
    pub respect_gitignore: bool,
}

impl WorkflowFiles<'_> {
    /// Lists matching files beneath `root`, in a stable order.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>, CheckError> {
        // Walk everything except hidden entries, like a plain `**/*.nf` glob.
        let mut walker = WalkBuilder::new(root);
        walker
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b));

        if self.respect_gitignore {
            walker
                .require_git(false)
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true);
        }

        let mut files = Vec::new();
        for entry in walker.build() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_some_and(|t| t.is_file())
                && path.extension().is_some_and(|ext| ext == self.extension)
            {
                files.push(path.to_path_buf());
            }
        }

        debug!("found {} workflow files under {}", files.len(), root.display());
        Ok(files)
    }
}

/// Checks every workflow file beneath `root`. Errors name files relative to `root`.
pub fn scan(
    root: &Path,
    files: &WorkflowFiles<'_>,
    observer: &mut impl Observer,
) -> Result<(usize, Vec<ValidationError>), CheckError> {
    let paths = files.collect(root)?;
    if paths.is_empty() {
        observer.info(&format!("No .{} workflow files found", files.extension));
        return Ok((0, Vec::new()));
    }

    let mut errors = Vec::new();
    for path in &paths {
        let display = path.strip_prefix(root).unwrap_or(path);
        observer.checking(display);

        let contents = std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        for error in scan_source(display, &contents) {
            observer.error(&error);
            errors.push(error);
        }
    }

    Ok((paths.len(), errors))
}

/// Checks the lines of one script. Line numbers are 1-based.
pub fn scan_source(file: &Path, contents: &str) -> Vec<ValidationError> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let kind = match ContainerLine::extract(line) {
                ContainerLine::NoMatch => return None,
                ContainerLine::TagMissing => ErrorKind::MissingContainerTag,
                ContainerLine::TagPresent(tag) if is_valid_tag(&tag) => return None,
                ContainerLine::TagPresent(tag) => ErrorKind::InvalidContainerTag { tag },
            };
            Some(ValidationError::new(file, Some(index + 1), kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentObserver;
    use std::fs;

    const NF: WorkflowFiles<'static> = WorkflowFiles {
        extension: "nf",
        respect_gitignore: false,
    };

    const SCRIPT: &str = "\
process align {
    container 'repo/img:1.0.2'
}
process sort {
    container 'repo/img'
}
process index {
    container 'repo/img:latest'
    script:
    \"\"\"
    echo done
    \"\"\"
}
";

    #[test]
    fn reports_missing_and_invalid_tags_with_line_numbers() {
        let errors = scan_source(Path::new("main.nf"), SCRIPT);
        assert_eq!(
            errors,
            [
                ValidationError::new("main.nf", Some(5), ErrorKind::MissingContainerTag),
                ValidationError::new(
                    "main.nf",
                    Some(8),
                    ErrorKind::InvalidContainerTag {
                        tag: "latest".into()
                    }
                ),
            ]
        );
    }

    #[test]
    fn walks_recursively_and_skips_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("modules/local");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("main.nf"), "container 'a:1.0'\n").unwrap();
        fs::write(nested.join("sort.nf"), "container 'a:dev'\n").unwrap();
        fs::write(nested.join("notes.txt"), "container 'a:dev'\n").unwrap();

        let (count, errors) = scan(dir.path(), &NF, &mut SilentObserver).unwrap();
        assert_eq!(count, 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].file, Path::new("modules/local/sort.nf"));
        assert_eq!(errors[0].line, Some(1));
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let hidden = dir.path().join(".nextflow");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("cache.nf"), "container 'a'\n").unwrap();

        let (count, errors) = scan(dir.path(), &NF, &mut SilentObserver).unwrap();
        assert_eq!(count, 0);
        assert!(errors.is_empty());
    }

    #[test]
    fn gitignore_is_honoured_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        fs::write(dir.path().join(".gitignore"), "work/\n").unwrap();
        fs::write(dir.path().join("work/stage.nf"), "container 'a'\n").unwrap();

        let (count, _) = scan(dir.path(), &NF, &mut SilentObserver).unwrap();
        assert_eq!(count, 1);

        let files = WorkflowFiles {
            respect_gitignore: true,
            ..NF
        };
        let (count, _) = scan(dir.path(), &files, &mut SilentObserver).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn no_workflow_files_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (count, errors) = scan(dir.path(), &NF, &mut SilentObserver).unwrap();
        assert_eq!(count, 0);
        assert!(errors.is_empty());
    }
}
