//! Recursive vault directory walker.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::VaultError;

/// A markdown note discovered in the vault.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to vault root; this is the note's identifier.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown notes in a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips the given folders.
    ///
    /// Exclusions may be relative to the vault root (`templates`,
    /// `archive/2020`) or absolute paths inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the vault and return all markdown notes, sorted by relative path.
    /// Hidden entries, common tool directories and exclusions are skipped.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry
                .map_err(|e| VaultError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            return true;
        }

        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        match entry.path().strip_prefix(&self.root) {
            Ok(relative) => self.excluded_folders.iter().any(|ex| relative.starts_with(ex)),
            Err(_) => false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
