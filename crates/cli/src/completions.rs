//! Shell completion support with dynamic value completers.
//!
//! Completions read the default config profile, so they suggest notes and
//! tags from the user's own vault.

use clap_complete::engine::CompletionCandidate;
use mdtag_core::config::loader::ConfigLoader;
use mdtag_core::tags::extract_tags;
use mdtag_core::vault::{NoteSource, Vault};
use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Notes scanned when collecting tag candidates.
const MAX_SCANNED_NOTES: usize = 500;

/// Load the default vault, returning None if the config fails.
fn load_vault() -> Option<Vault> {
    ConfigLoader::load(None, None).ok().map(|cfg| Vault::from_config(&cfg))
}

/// Complete note paths from the vault.
pub fn complete_notes(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");
    let Some(vault) = load_vault() else {
        return vec![];
    };
    note_candidates(&vault, current_str)
}

/// Complete tags found in the vault, with or without a leading `#`.
pub fn complete_tags(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");
    let Some(vault) = load_vault() else {
        return vec![];
    };
    tag_candidates(&vault, current_str)
}

fn note_candidates(source: &impl NoteSource, prefix: &str) -> Vec<CompletionCandidate> {
    let notes = source.list_notes().unwrap_or_default();
    notes
        .iter()
        .map(|n| n.to_string_lossy().replace('\\', "/"))
        .filter(|n| n.starts_with(prefix))
        .map(CompletionCandidate::new)
        .collect()
}

fn tag_candidates(source: &impl NoteSource, current: &str) -> Vec<CompletionCandidate> {
    let (marker, prefix) = match current.strip_prefix('#') {
        Some(rest) => ("#", rest),
        None => ("", current),
    };
    let prefix = prefix.to_lowercase();

    let mut tags = BTreeSet::new();
    for note in source.list_notes().unwrap_or_default().iter().take(MAX_SCANNED_NOTES) {
        let Ok(content) = source.read_note(note) else {
            continue;
        };
        for occ in extract_tags(&content) {
            if occ.tag.to_lowercase().starts_with(&prefix) {
                tags.insert(occ.tag);
            }
        }
    }

    tags.into_iter().map(|t| CompletionCandidate::new(format!("{marker}{t}"))).collect()
}
