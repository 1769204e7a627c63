//! Tag and location predicates used to filter extracted occurrences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{TagLocation, TagOccurrence};
use crate::search::SearchError;

/// Whether `candidate` satisfies the query tag.
///
/// Comparison is case-insensitive. With `include_subtags`, `parent/child` and
/// deeper descendants also match `parent`; a bare prefix never does (`ab` does
/// not match `abc/def`).
pub fn matches_tag(candidate: &str, query: &str, include_subtags: bool) -> bool {
    if query.is_empty() {
        return candidate.is_empty();
    }

    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate == query {
        return true;
    }
    include_subtags
        && candidate.strip_prefix(query.as_str()).is_some_and(|rest| rest.starts_with('/'))
}

/// Restricts which tag locations a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationFilter {
    #[default]
    All,
    Frontmatter,
    Inline,
}

impl LocationFilter {
    pub fn accepts(&self, occurrence: &TagOccurrence) -> bool {
        match self {
            Self::All => true,
            Self::Frontmatter => occurrence.location == TagLocation::Frontmatter,
            Self::Inline => occurrence.location == TagLocation::Inline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Frontmatter => "frontmatter",
            Self::Inline => "inline",
        }
    }
}

impl FromStr for LocationFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "frontmatter" => Ok(Self::Frontmatter),
            "inline" => Ok(Self::Inline),
            _ => Err(SearchError::UnknownLocation(s.to_string())),
        }
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
