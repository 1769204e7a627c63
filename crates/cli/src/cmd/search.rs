//! Search command implementation.

use std::path::Path;

use mdtag_core::config::types::ResolvedConfig;
use mdtag_core::open::opener_for;
use mdtag_core::search::{SearchOptions, SearchQuery, TagSearch, strip_tag_marker};
use mdtag_core::vault::Vault;
use tracing::debug;

use super::load_config;
use super::output::{render_json, render_text};
use crate::SearchArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, verbose: bool, args: SearchArgs) {
    let rc = load_config(config, profile, verbose);

    let tag = strip_tag_marker(&args.tag);
    let options = merge_options(&rc.search, &args);

    // Bad format or location values fail before the vault is touched
    let query = match SearchQuery::from_options(tag, &options) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let vault = Vault::from_config(&rc);
    let report = match TagSearch::new(&vault).run(&query) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error searching: {}", e);
            std::process::exit(1);
        }
    };
    debug!("{} results for #{}", report.len(), report.tag);

    if args.json {
        match render_json(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if args.open || args.editor {
        if let Some(note) = report.single_note() {
            println!("{}\n", report.headline());
            open_single(&rc, note, args.editor);
            return;
        }
    }

    print!("{}", render_text(&report));
}

fn open_single(rc: &ResolvedConfig, note: &Path, force_editor: bool) {
    let opener = opener_for(rc, force_editor, None);
    if let Err(e) = opener.open(note) {
        eprintln!("Error opening {}: {}", note.display(), e);
        std::process::exit(1);
    }
}

/// Config `[search]` defaults overridden by the flags that were given.
fn merge_options(defaults: &SearchOptions, args: &SearchArgs) -> SearchOptions {
    SearchOptions {
        format: args.format.clone().unwrap_or_else(|| defaults.format.clone()),
        location: args.location.clone().unwrap_or_else(|| defaults.location.clone()),
        include_subtags: args.subtags || defaults.include_subtags,
        context_lines: args.context.unwrap_or(defaults.context_lines),
    }
}
