//! Replay binary: runs a recorded pose-sample file through the tracker.

use anyhow::{bail, Result};
use clap::Parser;
use face_circle_tracker::app::{AppConfig, ReplayApp};
use face_circle_tracker::config::{Config, EXAMPLE_CONFIG};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pose sample recording to replay (YAML)
    #[arg(short, long)]
    samples: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Write an example configuration file to the given path and exit
    #[arg(long)]
    write_example_config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Circle Tracker");

    if let Some(path) = &args.write_example_config {
        std::fs::write(path, EXAMPLE_CONFIG)?;
        info!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let Some(sample_path) = args.samples else {
        bail!("no sample file given; pass --samples <file> or --write-example-config <file>");
    };

    let mut app = ReplayApp::new(AppConfig { sample_path, config })?;
    let summary = app.run()?;

    info!(
        "replay finished: {} frames, {} rejected, {} skipped, completed: {}",
        summary.frames, summary.rejected, summary.skipped, summary.completed
    );

    Ok(())
}
