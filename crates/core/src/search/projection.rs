//! Result projections.
//!
//! The engine feeds each note's matching occurrences to a [`Projection`],
//! in vault listing order; `finish` yields the final results.

use std::path::{Path, PathBuf};

use super::report::{BlockHit, LineHit, LocationHit, SearchResults};
use crate::tags::{TagOccurrence, note_lines};

pub trait Projection {
    /// Record the matches of one note. `occurrences` is never empty.
    ///
    /// Called at most once per note, so projections never deduplicate notes.
    fn accumulate(&mut self, note: &Path, content: &str, occurrences: &[TagOccurrence]);

    fn finish(self) -> SearchResults;
}

/// Each matching note once.
#[derive(Debug, Default)]
pub struct NamesProjection {
    notes: Vec<PathBuf>,
}

impl Projection for NamesProjection {
    fn accumulate(&mut self, note: &Path, _content: &str, _occurrences: &[TagOccurrence]) {
        self.notes.push(note.to_path_buf());
    }

    fn finish(self) -> SearchResults {
        SearchResults::Names(self.notes)
    }
}

/// First matching occurrence of each note.
#[derive(Debug, Default)]
pub struct LocationsProjection {
    hits: Vec<LocationHit>,
}

impl Projection for LocationsProjection {
    fn accumulate(&mut self, note: &Path, _content: &str, occurrences: &[TagOccurrence]) {
        if let Some(first) = occurrences.first() {
            self.hits.push(LocationHit {
                note: note.to_path_buf(),
                line_number: first.line_number,
                tag: first.tag.clone(),
            });
        }
    }

    fn finish(self) -> SearchResults {
        SearchResults::Locations(self.hits)
    }
}

/// Every occurrence with `context_lines` lines on each side.
#[derive(Debug, Default)]
pub struct LinesProjection {
    context_lines: usize,
    hits: Vec<LineHit>,
}

impl LinesProjection {
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines, hits: Vec::new() }
    }
}

impl Projection for LinesProjection {
    fn accumulate(&mut self, note: &Path, content: &str, occurrences: &[TagOccurrence]) {
        let lines = note_lines(content);

        for occ in occurrences {
            let (start, end) = context_window(lines.len(), occ.line_number, self.context_lines);
            self.hits.push(LineHit {
                note: note.to_path_buf(),
                line_number: occ.line_number,
                tag: occ.tag.clone(),
                start_line: start + 1,
                end_line: end,
                context: lines[start..end].join("\n"),
            });
        }
    }

    fn finish(self) -> SearchResults {
        SearchResults::Lines(self.hits)
    }
}

/// 0-based `[start, end)` of the lines shown around 1-based `line_number`.
///
/// A frontmatter occurrence (line 0) gets the first `context` lines.
fn context_window(line_count: usize, line_number: usize, context: usize) -> (usize, usize) {
    let start = line_number.saturating_sub(context + 1).min(line_count);
    let end = (line_number + context).min(line_count).max(start);
    (start, end)
}

/// Every inline occurrence with its blank-line-delimited paragraph.
///
/// Paragraph bounds never depend on the requested context.
#[derive(Debug, Default)]
pub struct BlocksProjection {
    hits: Vec<BlockHit>,
}

impl Projection for BlocksProjection {
    fn accumulate(&mut self, note: &Path, content: &str, occurrences: &[TagOccurrence]) {
        let lines = note_lines(content);

        for occ in occurrences {
            // Frontmatter tags have no line to expand from
            if occ.line_number == 0 || occ.line_number > lines.len() {
                continue;
            }
            let (start, end) = paragraph_bounds(&lines, occ.line_number - 1);
            self.hits.push(BlockHit {
                note: note.to_path_buf(),
                line_number: occ.line_number,
                tag: occ.tag.clone(),
                start_line: start + 1,
                end_line: end + 1,
                block: lines[start..=end].join("\n"),
            });
        }
    }

    fn finish(self) -> SearchResults {
        SearchResults::Blocks(self.hits)
    }
}

/// Inclusive 0-based bounds of the non-blank run containing `idx`.
fn paragraph_bounds(lines: &[&str], idx: usize) -> (usize, usize) {
    let is_blank = |i: usize| lines[i].trim().is_empty();

    let mut start = idx;
    while start > 0 && !is_blank(start - 1) {
        start -= 1;
    }

    let mut end = idx;
    while end + 1 < lines.len() && !is_blank(end + 1) {
        end += 1;
    }

    (start, end)
}
