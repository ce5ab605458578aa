// src/bin/app_data.rs
//! app-data: print the page bindings for a host record
//!
//! Usage: `app-data [PATH|-]`
//!   PATH  record file (.json or .toml)
//!   -     read a JSON record from stdin
//!   none  use $REGISTER_APP_DATA, else ./app-data.json

use anyhow::{Context, Result};
use register_app_data::{load_from_env, load_from_json, load_from_path, to_bindings};
use std::io::{Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1).as_deref() {
        Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read app data from stdin")?;
            load_from_json(&input)
        }
        Some(path) => load_from_path(path),
        None => load_from_env(),
    };

    info!(
        role = config.user_role(),
        user = config.current_user(),
        tabs = config.allowed_tabs().len(),
        "app data normalized"
    );

    let rendered = serde_json::to_string_pretty(&to_bindings(&config))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write bindings to stdout")?;

    Ok(())
}
