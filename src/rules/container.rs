//! Recognises `container '<image>'` declarations in workflow scripts.

use std::sync::LazyLock;

use regex::Regex;

use super::split_reference;

static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*container\s+'([^']*)'").unwrap());

/// What a single workflow line says about a container image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerLine {
    /// Not a container declaration.
    NoMatch,
    /// A declaration with a tag, valid or not.
    TagPresent(String),
    /// A declaration whose image has no tag (or an empty one).
    TagMissing,
}

impl ContainerLine {
    /// Classifies one line. Lines are independent of each other.
    pub fn extract(line: &str) -> Self {
        let Some(captures) = DECLARATION.captures(line) else {
            return ContainerLine::NoMatch;
        };

        match split_reference(&captures[1]) {
            (_, Some(tag)) if !tag.is_empty() => ContainerLine::TagPresent(tag.to_string()),
            _ => ContainerLine::TagMissing,
        }
    }
}
