//! One note per day.
//!
//! The note name comes from a Moment-style pattern (`YYYY-MM-DD`, the format
//! vault apps use for daily notes), optionally under a folder. A missing note
//! is created from the configured template; an existing note is never touched.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::DailyConfig;
use crate::vault::{VaultError, validate_path};

#[derive(Debug, Error)]
pub enum DailyError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error("failed to create daily note {0}: {1}")]
    Create(String, #[source] io::Error),
}

/// The daily note for a date, relative to the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNote {
    pub path: PathBuf,
    /// False when the note already existed.
    pub created: bool,
}

// Longer tokens first so `MMMM` wins over `MM`.
const MOMENT_TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("GGGG", "%G"),
    ("WW", "%V"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translate a Moment date pattern into a chrono format string.
///
/// `[text]` is copied literally, as are characters that are not tokens.
pub fn moment_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '['
            && let Some(end) = rest.find(']')
        {
            push_literal(&mut out, &rest[1..end]);
            rest = &rest[end + 1..];
            continue;
        }

        match MOMENT_TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, specifier)) => {
                out.push_str(specifier);
                rest = &rest[token.len()..];
            }
            None => {
                push_literal(&mut out, &rest[..c.len_utf8()]);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    out.push_str(&text.replace('%', "%%"));
}

/// Vault-relative path of the daily note for `date`.
pub fn note_path(cfg: &DailyConfig, date: NaiveDate) -> String {
    let name = with_md_suffix(&date.format(&moment_to_strftime(&cfg.format)).to_string());
    match cfg.folder.as_deref().map(|f| f.trim().trim_matches('/')).filter(|f| !f.is_empty()) {
        Some(folder) => format!("{folder}/{name}"),
        None => name,
    }
}

/// Make sure the daily note for `date` exists, creating it from the template
/// when missing.
pub fn ensure_daily_note(
    vault_root: &Path,
    cfg: &DailyConfig,
    date: NaiveDate,
) -> Result<DailyNote, DailyError> {
    let relative = note_path(cfg, date);
    let path = validate_path(vault_root, &relative)?;
    let create_err = |e| DailyError::Create(path.display().to_string(), e);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(create_err)?;
    }

    let content = match cfg.template.as_deref() {
        Some(template) => read_template(vault_root, template)?,
        None => String::new(),
    };

    let created = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes()).map_err(create_err)?;
            debug!("created daily note {}", path.display());
            true
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => false,
        Err(e) => return Err(create_err(e)),
    };

    Ok(DailyNote { path: PathBuf::from(relative), created })
}

/// Template text; an unreadable template gives an empty note.
fn read_template(vault_root: &Path, template: &str) -> Result<String, DailyError> {
    let path = validate_path(vault_root, &with_md_suffix(template))?;
    match fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!("ignoring daily template {}: {e}", path.display());
            Ok(String::new())
        }
    }
}

fn with_md_suffix(name: &str) -> String {
    if name.ends_with(".md") { name.to_string() } else { format!("{name}.md") }
}
