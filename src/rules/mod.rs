mod container;
mod tag;

pub use container::ContainerLine;
pub use tag::is_valid_tag;

/// Splits an image reference into its name and optional tag.
///
/// The tag is whatever follows the last `:`, unless a `/` comes after that
/// colon, in which case the colon belongs to a registry port.
pub fn split_reference(reference: &str) -> (&str, Option<&str>) {
    match reference.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => (name, Some(tag)),
        _ => (reference, None),
    }
}
