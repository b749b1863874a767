// ./src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use station_heatmap::heatmap::{Reconstruction, ReconstructionConfig};
use station_heatmap::io::{DEFAULT_VALUE_FIELD, FieldExport, StationCatalog};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Rekonstruiert ein Heatmap-Feld aus Stationswerten
#[derive(Parser)]
#[command(name = "station_heatmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Reconstruct a dense heatmap field from geolocated station values",
    long_about = None
)]
struct Cli {
    /// JSON-Datei: { "<Station>": { "latitude": .., "longitude": .., "<Feld>": .. } }
    #[arg(short, long)]
    stations: PathBuf,

    /// Name des Skalarfeldes, das verteilt wird
    #[arg(long, default_value = DEFAULT_VALUE_FIELD)]
    value_field: String,

    /// Optionale JSON-Konfiguration (fehlende Felder = Standardwerte)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Zieldatei für das Feld (JSON für den Renderer)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log-Level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<ReconstructionConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ReconstructionConfig::default(),
    };
    info!("Configuration: {:?}", config);

    let catalog = StationCatalog::from_path(&cli.stations, &cli.value_field)
        .with_context(|| format!("loading stations from {}", cli.stations.display()))?;
    if !catalog.missing_value.is_empty() {
        warn!(
            "{} stations without '{}': {:?}",
            catalog.missing_value.len(),
            cli.value_field,
            catalog.missing_value
        );
    }

    let reconstruction = Reconstruction::new(config).context("invalid configuration")?;
    let started = Instant::now();
    let field = reconstruction
        .run(&catalog.samples)
        .context("reconstruction failed")?;
    info!("Reconstruction finished in {:.2?}", started.elapsed());

    let export = FieldExport::from_field(&field);
    info!(
        "Grid {}x{} (buffers top={} left={}), {} zero cells, range {:?}..{:?}",
        export.rows,
        export.cols,
        export.top_buffer,
        export.left_buffer,
        export.summary.zero_cells,
        export.summary.min_positive,
        export.summary.max_positive
    );
    for station in &export.stations {
        info!(
            "  {:<30} -> ({:>5}, {:>5}) value {:.3}",
            station.name, station.row, station.col, station.value
        );
    }
    if !field.placement.skipped.is_empty() {
        warn!("Skipped stations: {:?}", field.placement.skipped);
    }

    if let Some(path) = &cli.output {
        export
            .write_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
