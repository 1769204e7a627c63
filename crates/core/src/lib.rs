//! Core library for mdtag.
//!
//! Tag extraction and search over a vault of markdown notes, plus the
//! surrounding plumbing the CLI needs: configuration, vault access, daily
//! notes and opening notes in an external viewer.

pub mod config;
pub mod daily;
pub mod frontmatter;
pub mod open;
pub mod search;
pub mod tags;
pub mod vault;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
