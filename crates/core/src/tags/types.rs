//! Tag occurrence types.

use serde::Serialize;
use std::fmt;

/// Where in a note a tag was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagLocation {
    /// Listed under the `tags` key of the frontmatter.
    Frontmatter,
    /// Written as `#tag` in the note body.
    Inline,
}

impl TagLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontmatter => "frontmatter",
            Self::Inline => "inline",
        }
    }
}

impl fmt::Display for TagLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tag found in a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOccurrence {
    /// Tag text without the leading `#`, case as written.
    pub tag: String,
    pub location: TagLocation,
    /// 1-based line number for inline tags, 0 for frontmatter tags.
    pub line_number: usize,
    /// Verbatim text that produced the match.
    pub matched_text: String,
}

impl TagOccurrence {
    pub(crate) fn inline(tag: &str, line_number: usize, matched_text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            location: TagLocation::Inline,
            line_number,
            matched_text: matched_text.trim().to_string(),
        }
    }

    pub(crate) fn frontmatter(tag: String) -> Self {
        Self {
            matched_text: tag.clone(),
            tag,
            location: TagLocation::Frontmatter,
            line_number: 0,
        }
    }
}

/// A tagged line with the lines around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBlock {
    /// First matching tag on the line, case as written.
    pub tag: String,
    /// 1-based line carrying the tag.
    pub line_number: usize,
    /// 1-based first line of the window.
    pub start_line: usize,
    /// 1-based last line of the window, inclusive.
    pub end_line: usize,
    pub lines: Vec<String>,
}
