use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shirt_search::config::{Config, OutputFormat};
use shirt_search::{catalog, render, Color, SearchEngine, SearchOptions, Size};

#[derive(Parser)]
#[command(name = "shirt-search", about = "Faceted search over a shirt catalog")]
struct Cli {
    /// JSON catalog to search. Overrides `[catalog] path` from the config.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Number of shirts in the generated sample catalog (used when no catalog file is set).
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for the generated sample catalog.
    #[arg(long)]
    seed: Option<u64>,

    /// Acceptable size; repeat for several. With no sizes and no colors nothing matches.
    #[arg(short, long = "size", value_name = "SIZE")]
    sizes: Vec<Size>,

    /// Acceptable color; repeat for several.
    #[arg(short, long = "color", value_name = "COLOR")]
    colors: Vec<Color>,

    /// Output format.
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Config file to use instead of ~/.config/shirt-search/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format: {other} (expected table or json)")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("shirt-search debug log started");
    }

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let shirts = match cli.catalog.as_deref().or(cfg.catalog.catalog_path()) {
        Some(path) => catalog::load(path)?,
        None => catalog::sample(
            cli.sample.unwrap_or(cfg.catalog.sample_size),
            cli.seed.unwrap_or(cfg.catalog.sample_seed),
        ),
    };

    let engine = SearchEngine::new(shirts);
    let options = SearchOptions::new().sizes(cli.sizes).colors(cli.colors);
    let results = engine.search(Some(&options))?;

    match cli.format.unwrap_or(cfg.output.format) {
        OutputFormat::Table => {
            print!("{}", render::table(&results, cfg.output.hide_empty_facets)?)
        }
        OutputFormat::Json => println!("{}", render::json(&results)?),
    }

    Ok(())
}
