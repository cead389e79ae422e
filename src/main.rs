#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod presenter;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use punchdeck_core::mock::{MockDataSource, MockPunchStore};
use punchdeck_core::CarouselConfig;
use tracing_subscriber::EnvFilter;

use crate::context::Settings;

/// Global settings, resolved once from the command line
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Settings resolved at startup
pub fn get_settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings {
        config: CarouselConfig::default(),
        source: MockDataSource::demo(),
        store: Arc::new(MockPunchStore::demo()),
    })
}

/// Punchdeck - Loyalty punch cards
#[derive(Parser, Debug)]
#[command(name = "punchdeck-desktop")]
#[command(about = "Punchdeck - page through loyalty cards and punch them")]
struct Args {
    /// Carousel config file (JSON). Defaults to <config dir>/punchdeck/config.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Horizontal gap between cards (px), overrides the config file
    #[arg(long)]
    gap: Option<f32>,

    /// Depth step between cards (px), overrides the config file
    #[arg(long)]
    depth: Option<f32>,

    /// Make the first N deck loads fail (exercises the error state)
    #[arg(long, default_value_t = 0)]
    fail_load: u32,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("punchdeck").join("config.json");
    path.exists().then_some(path)
}

fn resolve_config(args: &Args) -> anyhow::Result<CarouselConfig> {
    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => CarouselConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(gap) = args.gap {
        config.layout.gap = gap;
    }
    if let Some(depth) = args.depth {
        config.layout.depth = depth;
    }
    config.validate().context("invalid carousel settings")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let config = resolve_config(&args)?;
    tracing::info!(?config, fail_load = args.fail_load, "Starting punchdeck");

    let _ = SETTINGS.set(Settings {
        config,
        source: MockDataSource::demo().failing(args.fail_load),
        store: Arc::new(MockPunchStore::demo()),
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Punchdeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}
