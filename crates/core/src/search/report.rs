//! Search results and their summary line.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tags::LocationFilter;

/// First match of a note (`locations` format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationHit {
    pub note: PathBuf,
    pub line_number: usize,
    pub tag: String,
}

/// One match with surrounding lines (`lines` format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineHit {
    pub note: PathBuf,
    pub line_number: usize,
    pub tag: String,
    /// 1-based first line of `context`.
    pub start_line: usize,
    /// 1-based last line of `context`, inclusive.
    pub end_line: usize,
    pub context: String,
}

/// One match with its enclosing paragraph (`blocks` format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockHit {
    pub note: PathBuf,
    pub line_number: usize,
    pub tag: String,
    pub start_line: usize,
    pub end_line: usize,
    pub block: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", content = "hits", rename_all = "lowercase")]
pub enum SearchResults {
    Names(Vec<PathBuf>),
    Locations(Vec<LocationHit>),
    Lines(Vec<LineHit>),
    Blocks(Vec<BlockHit>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            Self::Names(notes) => notes.len(),
            Self::Locations(hits) => hits.len(),
            Self::Lines(hits) => hits.len(),
            Self::Blocks(hits) => hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first_note(&self) -> Option<&Path> {
        match self {
            Self::Names(notes) => notes.first().map(PathBuf::as_path),
            Self::Locations(hits) => hits.first().map(|h| h.note.as_path()),
            Self::Lines(hits) => hits.first().map(|h| h.note.as_path()),
            Self::Blocks(hits) => hits.first().map(|h| h.note.as_path()),
        }
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub tag: String,
    pub location: LocationFilter,
    pub include_subtags: bool,
    #[serde(flatten)]
    pub results: SearchResults,
}

impl SearchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The note behind the only result, if there is exactly one.
    pub fn single_note(&self) -> Option<&Path> {
        if self.len() == 1 { self.results.first_note() } else { None }
    }

    /// Human-readable summary, e.g. `Found 2 notes with tag '#work' (in inline)`.
    pub fn headline(&self) -> String {
        let n = self.len();
        let tag = &self.tag;
        let suffix = location_message(self.location, self.include_subtags);

        match (&self.results, n) {
            (SearchResults::Names(_) | SearchResults::Locations(_), 0) => {
                format!("No notes found with tag '#{tag}'{suffix}")
            }
            (SearchResults::Names(_) | SearchResults::Locations(_), _) => {
                format!("Found {n} notes with tag '#{tag}'{suffix}")
            }
            (SearchResults::Lines(_), 0) => format!("No lines found with tag '#{tag}'{suffix}"),
            (SearchResults::Lines(_), _) => format!("Found {n} occurrences of '#{tag}'{suffix}"),
            (SearchResults::Blocks(_), 0) => {
                format!("No blocks found with tag '#{tag}'{suffix}")
            }
            (SearchResults::Blocks(_), _) => format!("Found {n} blocks with tag '#{tag}'{suffix}"),
        }
    }
}

/// ` (in <location>, including subtags)` with only the non-default parts.
pub fn location_message(location: LocationFilter, include_subtags: bool) -> String {
    let mut parts = Vec::new();
    if location != LocationFilter::All {
        parts.push(format!("in {location}"));
    }
    if include_subtags {
        parts.push("including subtags".to_string());
    }

    if parts.is_empty() { String::new() } else { format!(" ({})", parts.join(", ")) }
}
