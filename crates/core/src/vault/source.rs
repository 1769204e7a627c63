//! Access to note listings and note contents.

use std::fs;
use std::path::{Path, PathBuf};

use super::VaultError;
use super::walker::VaultWalker;
use crate::config::types::ResolvedConfig;

/// Where a search gets its notes from.
///
/// `list_notes` must return the same order on every call within a search;
/// search results follow that order.
pub trait NoteSource {
    /// Identifiers of every note, relative to the vault root.
    fn list_notes(&self) -> Result<Vec<PathBuf>, VaultError>;

    /// Raw text of one note.
    fn read_note(&self, note: &Path) -> Result<String, VaultError>;
}

/// A vault on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    name: String,
    root: PathBuf,
    excluded_folders: Vec<PathBuf>,
}

impl Vault {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), root: root.into(), excluded_folders: Vec::new() }
    }

    pub fn with_exclusions(mut self, excluded_folders: Vec<PathBuf>) -> Self {
        self.excluded_folders = excluded_folders;
        self
    }

    /// The vault described by the active config profile.
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self::new(cfg.vault_name.clone(), cfg.vault_root.clone())
            .with_exclusions(cfg.excluded_folders.clone())
    }

    /// Name used when asking the vault app to open a note.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a note given its identifier.
    pub fn note_path(&self, note: &Path) -> PathBuf {
        self.root.join(note)
    }
}

impl NoteSource for Vault {
    fn list_notes(&self) -> Result<Vec<PathBuf>, VaultError> {
        let walker = VaultWalker::with_exclusions(&self.root, self.excluded_folders.clone())?;
        Ok(walker.walk()?.into_iter().map(|f| f.relative_path).collect())
    }

    fn read_note(&self, note: &Path) -> Result<String, VaultError> {
        let path = self.note_path(note);
        fs::read_to_string(&path).map_err(|e| VaultError::ReadError(path.display().to_string(), e))
    }
}
