//! One-level directory listing inside a vault.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::VaultError;

/// Resolve `relative` against the vault root, refusing paths that leave it.
pub fn validate_path(root: &Path, relative: &str) -> Result<PathBuf, VaultError> {
    let rel = Path::new(relative.trim());
    let escapes = rel.components().any(|c| {
        matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
    });
    if escapes {
        return Err(VaultError::InvalidPath(relative.to_string()));
    }
    Ok(root.join(rel))
}

/// List the entries of a vault directory.
///
/// Directories come first with a trailing `/`, then files; each group is
/// sorted by name. Hidden entries are skipped.
pub fn list_entries(root: &Path, relative: Option<&str>) -> Result<Vec<String>, VaultError> {
    let target = match relative.filter(|r| !r.trim().is_empty()) {
        Some(rel) => validate_path(root, rel)?,
        None => root.to_path_buf(),
    };

    if !target.is_dir() {
        return Err(VaultError::NotADirectory(target.display().to_string()));
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(&target).min_depth(1).max_depth(1) {
        let entry =
            entry.map_err(|e| VaultError::WalkError(target.display().to_string(), e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        if entry.file_type().is_dir() {
            dirs.push(format!("{name}/"));
        } else {
            files.push(name);
        }
    }

    dirs.sort();
    files.sort();
    dirs.extend(files);
    Ok(dirs)
}
