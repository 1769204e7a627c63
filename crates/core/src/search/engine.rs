//! Vault-wide tag search.

use tracing::{debug, warn};

use super::SearchError;
use super::projection::{
    BlocksProjection, LinesProjection, LocationsProjection, NamesProjection, Projection,
};
use super::query::{SearchFormat, SearchOptions, SearchQuery};
use super::report::{SearchReport, SearchResults};
use crate::tags::{TagOccurrence, extract_tags};
use crate::vault::NoteSource;

/// Search engine scanning every note of a source.
pub struct TagSearch<'a, S: NoteSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: NoteSource + ?Sized> TagSearch<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Validate raw options, then search. Invalid options fail before any
    /// note is listed or read.
    pub fn run_with_options(
        &self,
        tag: &str,
        options: &SearchOptions,
    ) -> Result<SearchReport, SearchError> {
        let query = SearchQuery::from_options(tag, options)?;
        self.run(&query)
    }

    /// Execute a search query.
    pub fn run(&self, query: &SearchQuery) -> Result<SearchReport, SearchError> {
        let results = match query.format {
            SearchFormat::Names => self.scan(query, NamesProjection::default())?,
            SearchFormat::Locations => self.scan(query, LocationsProjection::default())?,
            SearchFormat::Lines => self.scan(query, LinesProjection::new(query.context_lines))?,
            SearchFormat::Blocks => self.scan(query, BlocksProjection::default())?,
        };

        Ok(SearchReport {
            tag: query.tag.clone(),
            location: query.location,
            include_subtags: query.include_subtags,
            results,
        })
    }

    fn scan<P: Projection>(
        &self,
        query: &SearchQuery,
        mut projection: P,
    ) -> Result<SearchResults, SearchError> {
        let notes = self.source.list_notes()?;
        debug!(notes = notes.len(), tag = %query.tag, format = %query.format, "scanning vault");

        for note in &notes {
            let content = match self.source.read_note(note) {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping {}: {e}", note.display());
                    continue;
                }
            };

            let matches: Vec<TagOccurrence> =
                extract_tags(&content).into_iter().filter(|o| query.accepts(o)).collect();

            if !matches.is_empty() {
                projection.accumulate(note, &content, &matches);
            }
        }

        Ok(projection.finish())
    }
}
