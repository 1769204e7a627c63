//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// The `tags` field, normalized.
    pub fn tags(&self) -> FrontmatterTags {
        FrontmatterTags::from_value(self.fields.get("tags"))
    }
}

/// Shape of the `tags` field in frontmatter.
///
/// ```yaml
/// tags: single-tag        # Single
/// tags: [a, b]            # List
/// tags:                   # List
///   - a
///   - b
/// ```
/// Anything else (missing, null, a number, a mapping) is `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrontmatterTags {
    #[default]
    Absent,
    Single(String),
    /// String elements of a sequence; non-string elements are dropped.
    List(Vec<String>),
}

impl FrontmatterTags {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self::Single(s.clone()),
            Some(Value::Sequence(items)) => Self::List(
                items.iter().filter_map(|v| v.as_str().map(ToOwned::to_owned)).collect(),
            ),
            _ => Self::Absent,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(tag) => vec![tag],
            Self::List(tags) => tags,
        }
    }
}
