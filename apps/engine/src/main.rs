//! Presentation shim: reads a `UserProfile` as JSON, runs the engine,
//! and prints the full recommendation report as JSON. Everything that
//! matters lives in the library.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::config::Config;
use engine::models::UserProfile;
use engine::report::build_report;
use engine::Catalog;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Waypoint engine v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin().context("loading builtin catalog")?,
    };

    let profile = read_profile().context("reading user profile")?;
    let report = build_report(&profile, &catalog);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Reads the profile JSON from the first CLI argument, or stdin when no
/// argument (or "-") is given.
fn read_profile() -> Result<UserProfile> {
    let arg = std::env::args().nth(1);
    let json = match arg.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading profile file {path}"))?,
    };
    serde_json::from_str(&json).context("parsing profile JSON")
}
