//! Handing notes over to the vault app or a text editor.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::config::{OpenTarget, ResolvedConfig};

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to launch '{0}': {1}")]
    Launch(String, #[source] io::Error),

    #[error("editor '{0}' exited with status: {1}")]
    EditorFailed(String, ExitStatus),

    #[error("editor command is empty")]
    EmptyEditor,
}

/// Something that can present a note to the user.
pub trait NoteOpener {
    /// Open `note`, given relative to the vault root.
    fn open(&self, note: &Path) -> Result<(), OpenError>;
}

/// `<scheme>://open?vault=<vault>&file=<file>` with both values
/// percent-encoded.
pub fn note_uri(scheme: &str, vault: &str, file: &str) -> String {
    format!(
        "{scheme}://open?vault={}&file={}",
        urlencoding::encode(vault),
        urlencoding::encode(file)
    )
}

/// Opens notes through the vault app's URI handler.
#[derive(Debug, Clone)]
pub struct AppOpener {
    scheme: String,
    vault_name: String,
    section: Option<String>,
}

impl AppOpener {
    pub fn new(scheme: impl Into<String>, vault_name: impl Into<String>) -> Self {
        Self { scheme: scheme.into(), vault_name: vault_name.into(), section: None }
    }

    /// Jump to a heading inside the note.
    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn uri_for(&self, note: &Path) -> String {
        let mut file = note.to_string_lossy().replace('\\', "/");
        if let Some(section) = &self.section {
            file.push('#');
            file.push_str(section);
        }
        note_uri(&self.scheme, &self.vault_name, &file)
    }
}

impl NoteOpener for AppOpener {
    fn open(&self, note: &Path) -> Result<(), OpenError> {
        let uri = self.uri_for(note);
        debug!("opening {uri}");
        open::that(&uri).map_err(|e| OpenError::Launch(uri, e))
    }
}

/// Runs an editor on the note file and waits for it.
#[derive(Debug, Clone)]
pub struct EditorOpener {
    vault_root: PathBuf,
    command: String,
}

impl EditorOpener {
    pub fn new(vault_root: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self { vault_root: vault_root.into(), command: command.into() }
    }

    /// Editor from config, else `$EDITOR`, else `$VISUAL`, else `vim`.
    pub fn from_config(vault_root: impl Into<PathBuf>, configured: Option<&str>) -> Self {
        let command = configured
            .filter(|c| !c.trim().is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(default_editor);
        Self::new(vault_root, command)
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl NoteOpener for EditorOpener {
    fn open(&self, note: &Path) -> Result<(), OpenError> {
        // `code --wait` style commands carry their own arguments
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(OpenError::EmptyEditor)?;
        let path = self.vault_root.join(note);
        debug!("running {} on {}", self.command, path.display());

        let status = Command::new(program)
            .args(parts)
            .arg(&path)
            .status()
            .map_err(|e| OpenError::Launch(self.command.clone(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(OpenError::EditorFailed(self.command.clone(), status))
        }
    }
}

fn default_editor() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vim".to_string())
}

/// The opener the config asks for; `force_editor` overrides the default.
pub fn opener_for(
    cfg: &ResolvedConfig,
    force_editor: bool,
    section: Option<String>,
) -> Box<dyn NoteOpener> {
    if force_editor || cfg.open.default == OpenTarget::Editor {
        Box::new(EditorOpener::from_config(&cfg.vault_root, cfg.open.editor.as_deref()))
    } else {
        Box::new(
            AppOpener::new(&cfg.open.uri_scheme, &cfg.vault_name).with_section(section),
        )
    }
}
