use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file and resolve the active profile.
    ///
    /// The profile is `profile_override`, else the file's `profile`, else
    /// `default`.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let (_, cf) = Self::read(&path)?;

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf)
    }

    /// Make `name` the profile used when no `--profile` is given.
    ///
    /// Only the top-level `profile` line is rewritten (inserted after
    /// `version` when missing); the rest of the file is kept as written.
    pub fn set_default_profile(
        config_path: Option<&Path>,
        name: &str,
    ) -> Result<PathBuf, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let (source, cf) = Self::read(&path)?;

        if !cf.profiles.contains_key(name) {
            return Err(ConfigError::ProfileNotFound(name.to_string()));
        }

        fs::write(&path, with_default_profile(&source, name))
            .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;
        Ok(path)
    }

    /// Read and validate the config file, keeping its raw text.
    fn read(path: &Path) -> Result<(String, ConfigFile), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        Ok((s, cf))
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        cf: &ConfigFile,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_root = expand_path(&prof.vault_root)?;
        let sub = |s: &str| s.replace("{{vault_root}}", &vault_root.to_string_lossy());

        let vault_name = prof.vault_name.clone().unwrap_or_else(|| {
            vault_root
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| active.to_string())
        });

        let excluded_folders = prof.excluded_folders.iter().map(PathBuf::from).collect();

        let logging = match cf.logging.file {
            Some(ref file) => LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&sub(&file.to_string_lossy()))?),
            },
            None => cf.logging.clone(),
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            vault_root,
            vault_name,
            excluded_folders,
            open: cf.open.clone(),
            search: cf.search.clone(),
            logging,
            daily: cf.daily.clone(),
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdtag").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdtag").join("config.toml")
}

fn with_default_profile(source: &str, name: &str) -> String {
    let entry = format!("profile = \"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""));
    let mut lines: Vec<String> = source.lines().map(str::to_string).collect();

    // Top-level keys end at the first table header
    let header =
        lines.iter().position(|l| l.trim_start().starts_with('[')).unwrap_or(lines.len());

    match lines[..header].iter().position(|l| is_key(l, "profile")) {
        Some(i) => lines[i] = entry,
        None => {
            let at =
                lines[..header].iter().position(|l| is_key(l, "version")).map_or(0, |i| i + 1);
            lines.insert(at, entry);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn is_key(line: &str, key: &str) -> bool {
    line.trim_start()
        .strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
