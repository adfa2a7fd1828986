use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

mod pipeline;
mod settings;

use pipeline::build_catalog;

/// Build a track catalog from a sectioned music directory.
#[derive(Parser, Debug)]
#[command(name = "tracklist")]
struct Args {
    /// The directory to read
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tracklist=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let settings = settings::load_settings();

    info!(
        root = %args.dir.display(),
        output = ?settings.catalog.output,
        association = ?settings.catalog.association,
        timestamp = ?settings.catalog.timestamp,
        "building catalog"
    );

    let summary = build_catalog(&args.dir, &settings)?;

    info!(
        "{} tracks totaling {} MB",
        summary.totals.track_count,
        summary.totals.megabytes()
    );
    info!("wrote {}", summary.output.display());
    Ok(())
}
