use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::search::SearchOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub open: OpenConfig,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub daily: DailyConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Name the vault app knows this vault by; defaults to the last
    /// component of `vault_root`.
    pub vault_name: Option<String>,
    /// Folders to skip when scanning notes (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

/// How a single search result or `mdtag open` hands a note over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenTarget {
    /// Launch a `<scheme>://open` URI handled by the vault app.
    #[default]
    App,
    /// Run a text editor on the note file.
    Editor,
}

impl OpenTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Editor => "editor",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenConfig {
    #[serde(default)]
    pub default: OpenTarget,
    /// Editor command; falls back to `$EDITOR`, `$VISUAL`, then `vim`.
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self { default: OpenTarget::default(), editor: None, uri_scheme: default_uri_scheme() }
    }
}

fn default_uri_scheme() -> String {
    "obsidian".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where `mdtag daily` keeps one note per day.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DailyConfig {
    /// Folder relative to vault_root; the vault root when unset.
    #[serde(default)]
    pub folder: Option<String>,
    /// Note name as a Moment-style date pattern, e.g. `YYYY-MM-DD`.
    #[serde(default = "default_daily_format")]
    pub format: String,
    /// Note (relative to vault_root, `.md` optional) copied into new daily notes.
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self { folder: None, format: default_daily_format(), template: None }
    }
}

fn default_daily_format() -> String {
    "YYYY-MM-DD".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub vault_name: String,
    /// Excluded folders, relative to `vault_root`.
    pub excluded_folders: Vec<PathBuf>,
    pub open: OpenConfig,
    pub search: SearchOptions,
    pub logging: LoggingConfig,
    pub daily: DailyConfig,
}
