//! Search query parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SearchError;
use crate::tags::{LocationFilter, TagOccurrence, matches_tag};

/// Report shape produced by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFormat {
    Names,
    #[default]
    Locations,
    Lines,
    Blocks,
}

impl SearchFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Locations => "locations",
            Self::Lines => "lines",
            Self::Blocks => "blocks",
        }
    }
}

impl FromStr for SearchFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "names" => Ok(Self::Names),
            "locations" => Ok(Self::Locations),
            "lines" => Ok(Self::Lines),
            "blocks" => Ok(Self::Blocks),
            _ => Err(SearchError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SearchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated search settings, as given on the command line or in the
/// `[search]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub format: String,
    pub location: String,
    #[serde(rename = "subtags")]
    pub include_subtags: bool,
    #[serde(rename = "context")]
    pub context_lines: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            format: SearchFormat::default().as_str().to_string(),
            location: LocationFilter::default().as_str().to_string(),
            include_subtags: false,
            context_lines: 0,
        }
    }
}

/// A validated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Tag to look for, without a leading `#`.
    pub tag: String,
    pub location: LocationFilter,
    pub include_subtags: bool,
    /// Lines of context around each match; only the `lines` format uses it.
    pub context_lines: usize,
    pub format: SearchFormat,
}

impl SearchQuery {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            location: LocationFilter::default(),
            include_subtags: false,
            context_lines: 0,
            format: SearchFormat::default(),
        }
    }

    /// Validate raw options. The format is checked first.
    pub fn from_options(tag: &str, options: &SearchOptions) -> Result<Self, SearchError> {
        let format = options.format.parse()?;
        let location = options.location.parse()?;
        Ok(Self {
            tag: tag.to_string(),
            location,
            include_subtags: options.include_subtags,
            context_lines: options.context_lines,
            format,
        })
    }

    pub fn with_format(mut self, format: SearchFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_location(mut self, location: LocationFilter) -> Self {
        self.location = location;
        self
    }

    pub fn with_subtags(mut self, include_subtags: bool) -> Self {
        self.include_subtags = include_subtags;
        self
    }

    pub fn with_context(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Whether an occurrence satisfies both the tag and the location filter.
    pub fn accepts(&self, occurrence: &TagOccurrence) -> bool {
        matches_tag(&occurrence.tag, &self.tag, self.include_subtags)
            && self.location.accepts(occurrence)
    }
}

/// Drop one leading `#` from a tag typed by the user.
pub fn strip_tag_marker(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}
