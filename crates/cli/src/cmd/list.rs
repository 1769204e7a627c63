//! List command implementation.

use std::path::Path;

use mdtag_core::vault::list_entries;

use super::load_config;
use super::output::render_entries;
use crate::ListArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: bool, args: ListArgs) {
    let rc = load_config(config, profile, verbose);

    let entries = match list_entries(&rc.vault_root, args.path.as_deref()) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error listing vault: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", render_entries(&entries));
}
