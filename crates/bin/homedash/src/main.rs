//! # homedash — smart-home dashboard
//!
//! Composition root that wires the dashboard to a backend and runs it.
//!
//! ## Responsibilities
//! - Load configuration (`homedash.toml`, env vars)
//! - Initialise logging (to stderr, so the terminal backend owns stdout)
//! - Seed the demonstration house
//! - Run the single-threaded tick loop on the terminal backend until quit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homedash_adapter_terminal::TerminalBackend;
use homedash_app::dashboard::Dashboard;
use homedash_app::ports::SystemClock;
use homedash_app::runtime;
use homedash_domain::house::House;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid configuration, falling back to defaults");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "cannot start the async runtime");
            return;
        }
    };
    runtime.block_on(serve(config));
    // the stdin reader may still be parked on a blocking read
    runtime.shutdown_background();
}

async fn serve(config: Config) {
    let house = match House::demo(&config.house.floors) {
        Ok(house) => house,
        Err(err) => {
            tracing::error!(error = %err, "cannot build the demo house");
            return;
        }
    };
    tracing::info!(
        floors = house.floors().len(),
        devices = house.device_count(),
        "house ready"
    );

    let mut dashboard = Dashboard::new(house, SystemClock);
    let mut backend = TerminalBackend::stdio();

    if let Err(err) = runtime::run(&mut dashboard, &mut backend, config.display.tick_rate_hz).await
    {
        tracing::error!(error = %err, "terminal backend failed");
    }

    tracing::info!(
        log_entries = dashboard.house().log().len(),
        "dashboard stopped"
    );
}
