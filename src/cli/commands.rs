//! Subcommand handlers for config actions.

use std::io;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::DEFAULT_CONFIG;
use crate::settings::Settings;

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, settings: &Settings, config_path: &Path) {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            match settings.columns {
                Some(columns) => println!("  Width: {} columns", columns),
                None => println!("  Width: terminal"),
            }
            println!("  Resample: {}", settings.render.resample.name());
            println!("  Color: {}", settings.render.color.name());
            println!("  Glyphs: {}", settings.render.glyphs);
            println!("  Output: {}", settings.render.output.name());
            println!("  Fetch timeout: {}s", settings.fetch_timeout.as_secs());
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => match write_default_config(config_path) {
            Ok(()) => println!("Created config file: {}", config_path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'textview config show' to view current settings.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Write the commented default config to `path`, creating parent directories.
///
/// Refuses to overwrite an existing file.
pub fn write_default_config(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
}
