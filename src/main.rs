//! Entry point for the **altile** binary.
//!
//! By default the configuration is evaluated, validated and written to
//! stdout as JSON for the host to read.  The only environment input is
//! `HOME`, which locates both the settings file and the autostart script.
//!
//! * `--keys` prints a key-binding cheat sheet instead.
//! * `--autostart` runs the startup-once hook.

use altile::config::{settings_path, Config, Settings};
use altile::hooks::Autostart;
use altile::process::ProcessSpawner;
use log::{error, info};
use std::path::Path;

/// Try to load settings from `$HOME/.config/altile/settings.json`,
/// falling back to compiled-in defaults.
fn load_settings() -> Settings {
    let Some(home) = std::env::var_os("HOME") else {
        info!("HOME not set, using default settings");
        return Settings::default();
    };
    let path = settings_path(Path::new(&home));
    match Settings::load(&path) {
        Ok(s) => {
            info!("loaded settings from {}", path.display());
            s
        }
        Err(e) => {
            info!("no settings file ({}), using defaults", e);
            Settings::default()
        }
    }
}

//  Main

fn main() {
    env_logger::init();

    if std::env::args().any(|a| a == "--autostart") {
        run_autostart();
        return;
    }

    let config = Config::build(&load_settings());
    if let Err(e) = config.validate() {
        error!("invalid configuration: {}", e);
        std::process::exit(1);
    }

    if std::env::args().any(|a| a == "--keys") {
        for binding in config.keys.bindings() {
            println!("{}", binding.describe());
        }
        return;
    }

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("failed to serialize configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Startup-once hook.
fn run_autostart() {
    match Autostart::from_env() {
        Some(hook) => {
            hook.run(&ProcessSpawner);
        }
        None => info!("HOME not set, skipping autostart"),
    }
}
