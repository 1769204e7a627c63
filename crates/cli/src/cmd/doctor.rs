use mdtag_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: bool) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc, verbose);
            tracing::debug!("doctor resolved profile {}", rc.active_profile);

            println!("OK   mdtag doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("vault_name: {}", rc.vault_name);
            if !rc.excluded_folders.is_empty() {
                let excluded: Vec<_> =
                    rc.excluded_folders.iter().map(|p| p.display().to_string()).collect();
                println!("excluded_folders: {}", excluded.join(", "));
            }
            println!("open.default: {}", rc.open.default.as_str());
            if let Some(editor) = &rc.open.editor {
                println!("open.editor: {editor}");
            }
            println!("open.uri_scheme: {}", rc.open.uri_scheme);
            println!("search.format: {}", rc.search.format);
            println!("search.location: {}", rc.search.location);
            println!("search.subtags: {}", rc.search.include_subtags);
            println!("search.context: {}", rc.search.context_lines);
            if !rc.vault_root.is_dir() {
                println!("warning: vault_root is not a directory");
            }
        }
        Err(e) => {
            println!("FAIL mdtag doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
