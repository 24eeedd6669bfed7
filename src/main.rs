use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use launch_dashboard::app::LaunchDashboardApp;
use launch_dashboard::config::Config;
use launch_dashboard::data::loader;
use launch_dashboard::state::AppState;

#[derive(Parser)]
#[command(name = "launch-dashboard")]
#[command(version)]
#[command(about = "Launch records dashboard: success breakdown and payload scatter")]
struct Cli {
    /// CSV with launch records (overrides `data_path` from the config)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if cli.print_config {
        println!("{}", Config::example_json());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    // The dataset is owned here and handed to the UI; a bad file aborts startup.
    let dataset = loader::load_file(&config.data_path, &config.columns)
        .inspect_err(|e| {
            if e.is_schema_mismatch() {
                log::error!("Header names are read from the `columns` section of the config");
            }
        })
        .with_context(|| format!("loading launch records from {}", config.data_path.display()))?;
    let state = AppState::new(Arc::new(dataset), config.data_path.clone(), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
