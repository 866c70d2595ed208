//! Release tag format: `MAJOR.MINOR` or `MAJOR.MINOR.PATCH`, digits only.

use std::sync::LazyLock;

use regex::Regex;

static RELEASE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").unwrap());

/// Returns true when `tag` is a production release tag, e.g. `2024.3` or `1.0.2`.
pub fn is_valid_tag(tag: &str) -> bool {
    RELEASE_TAG.is_match(tag)
}
