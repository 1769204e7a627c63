//! Tag search over a whole vault.
//!
//! A search scans every note from a [`NoteSource`](crate::vault::NoteSource),
//! keeps the tag occurrences that satisfy the query and hands them to one of
//! four projections:
//! - `names`: each matching note once
//! - `locations`: first match per note, with line number
//! - `lines`: every match with `context_lines` of surrounding text
//! - `blocks`: every match with its enclosing paragraph

pub mod engine;
pub mod projection;
pub mod query;
pub mod report;

use thiserror::Error;

use crate::vault::VaultError;

pub use engine::TagSearch;
pub use projection::{
    BlocksProjection, LinesProjection, LocationsProjection, NamesProjection, Projection,
};
pub use query::{SearchFormat, SearchOptions, SearchQuery, strip_tag_marker};
pub use report::{
    BlockHit, LineHit, LocationHit, SearchReport, SearchResults, location_message,
};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown format: {0} (use: names, locations, lines, blocks)")]
    UnknownFormat(String),

    #[error("unknown location: {0} (use: all, frontmatter, inline)")]
    UnknownLocation(String),

    #[error(transparent)]
    Vault(#[from] VaultError),
}
