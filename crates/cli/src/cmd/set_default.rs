//! Set-default command implementation.

use std::path::Path;

use mdtag_core::config::loader::ConfigLoader;

pub fn run(config: Option<&Path>, name: &str) {
    match ConfigLoader::set_default_profile(config, name) {
        Ok(path) => println!("Default profile set to: {name} ({})", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
