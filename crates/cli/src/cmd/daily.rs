//! Daily note command implementation.

use std::path::Path;

use chrono::Local;
use mdtag_core::daily::ensure_daily_note;
use mdtag_core::open::opener_for;
use tracing::info;

use super::load_config;
use crate::DailyArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: bool, args: DailyArgs) {
    let rc = load_config(config, profile, verbose);

    let today = Local::now().date_naive();
    let note = match ensure_daily_note(&rc.vault_root, &rc.daily, today) {
        Ok(note) => note,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if note.created {
        info!("created {}", note.path.display());
    }

    if args.no_open {
        println!("{}", note.path.display());
        return;
    }

    let opener = opener_for(&rc, args.editor, None);
    if let Err(e) = opener.open(&note.path) {
        eprintln!("Error opening {}: {}", note.path.display(), e);
        std::process::exit(1);
    }
}
