pub mod daily;
pub mod doctor;
pub mod list;
pub mod open;
pub mod output;
pub mod search;
pub mod set_default;

use std::path::Path;

use mdtag_core::config::loader::ConfigLoader;
use mdtag_core::config::types::ResolvedConfig;

use crate::logging;

/// Load the active profile and start logging, or exit with status 1.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, verbose: bool) -> ResolvedConfig {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&rc, verbose);
    rc
}
