//! Vault file discovery and note access.
//!
//! This module provides utilities for walking vault directories, reading
//! notes through the [`NoteSource`] trait and listing directory entries.

pub mod listing;
pub mod source;
pub mod walker;

use thiserror::Error;

pub use listing::{list_entries, validate_path};
pub use source::{NoteSource, Vault};
pub use walker::{VaultWalker, WalkedFile};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read note {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("path escapes the vault: {0}")]
    InvalidPath(String),

    #[error("not a directory in the vault: {0}")]
    NotADirectory(String),
}
