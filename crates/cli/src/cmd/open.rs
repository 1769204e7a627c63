//! Open command implementation.

use std::path::Path;

use mdtag_core::open::opener_for;
use mdtag_core::vault::validate_path;
use tracing::info;

use super::load_config;
use crate::OpenArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: bool, args: OpenArgs) {
    let rc = load_config(config, profile, verbose);

    if let Err(e) = validate_path(&rc.vault_root, &args.note) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let note = Path::new(args.note.trim());
    let opener = opener_for(&rc, args.editor, args.section);
    if let Err(e) = opener.open(note) {
        eprintln!("Error opening {}: {}", note.display(), e);
        std::process::exit(1);
    }
    info!("opened {}", note.display());
}
