mod app;
mod menu;

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
};

use ksm_core::config::{self, AppConfig};
use tracing::warn;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.log_dir)?;

    if let Err(err) = config::ensure_default_config() {
        warn!("Could not write default configuration: {err:#}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = app::KsmApp::new(stdin.lock(), stdout.lock(), config.data_file);
    app.run()
}

fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join("ksm.log");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::WARN);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
