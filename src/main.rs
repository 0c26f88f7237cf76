use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use tokio::signal::unix::{SignalKind, signal};

use canopy::api::CanopyApi;
use canopy::conf::Config;
use canopy::core::{CliArgs, setup_logging};
use canopy::index::MemoryStore;
use canopy::listing::ListingBuilder;
use canopy::track::InflightTracker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    info!(args; "Canopy started.");

    // Development backend; deployments plug their own GroupedIndex/BulkGet.
    let store = Arc::new(MemoryStore::new());
    let builder = ListingBuilder::new(store.clone(), store, config.listing.clone());
    let tracker = Arc::new(InflightTracker::new());

    tokio::spawn(report_on_signal(tracker.clone()));

    let api = CanopyApi::new(builder, tracker);
    api.serve(&config.server.addr()).await?;
    Ok(())
}

/// Dump in-flight requests to the log whenever SIGUSR1 arrives.
async fn report_on_signal(tracker: Arc<InflightTracker>) {
    let mut stream = match signal(SignalKind::user_defined1()) {
        Ok(stream) => stream,
        Err(err) => {
            warn!("cannot install SIGUSR1 handler: {err}");
            return;
        }
    };
    while stream.recv().await.is_some() {
        tracker.report_once();
    }
}
