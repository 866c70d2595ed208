//! Decodes the container image of a Data Manager job.
//!
//! Jobs normally declare `image: {name: ..., tag: ...}`; a bare
//! `image: name:tag` string is accepted as well. Nothing here judges whether
//! the tag is any good.

use serde::Deserialize;
use serde_yaml::Value;

use crate::rules::split_reference;

/// One entry of a job definition's `jobs` mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobStep {
    #[serde(default)]
    pub image: Option<ImageSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageSpec {
    Reference(String),
    Parts {
        #[serde(default)]
        name: Value,
        #[serde(default)]
        tag: Value,
    },
}

/// Returns the `(image_name, image_tag)` pair of a job. Either may be empty.
pub fn get_image(step: &JobStep) -> (String, String) {
    match &step.image {
        None => (String::new(), String::new()),
        Some(ImageSpec::Reference(reference)) => {
            let (name, tag) = split_reference(reference);
            (name.to_string(), tag.unwrap_or_default().to_string())
        }
        Some(ImageSpec::Parts { name, tag }) => (scalar_text(name), scalar_text(tag)),
    }
}

/// False when the tag was written as a bare YAML number, bool or other
/// non-string value. Its original spelling is lost in that case (`1.2e3`,
/// `+1.2` and `.5` all read as floats), so the rendered text can't be trusted.
pub fn tag_is_text(step: &JobStep) -> bool {
    match &step.image {
        Some(ImageSpec::Parts { tag, .. }) => matches!(tag, Value::String(_) | Value::Null),
        _ => true,
    }
}

// Non-string scalars are rendered to text for reporting only.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
