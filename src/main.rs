//! Entry point for the koyomi name-matching server.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:8080)
//! koyomi
//!
//! # Set listen address
//! LISTEN_ADDR=0.0.0.0:8080 koyomi
//!
//! # Require a bearer token
//! API_TOKEN=secret koyomi
//!
//! # Preload the seed tables at startup
//! PRELOAD_DATA=1 koyomi
//! ```

use std::env;

use koyomi::runtime::{build_runtime, RuntimeConfig};
use koyomi::server::{ApiServer, AppState, ServerConfig};
use koyomi::store::{NameStore, JAPANESE_KEY, KOREAN_KEY};
use tracing::{error, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Environment variable for worker threads
const ENV_WORKER_THREADS: &str = "WORKER_THREADS";

/// Environment variable for loading seed data without waiting for
/// POST /init-database
const ENV_PRELOAD_DATA: &str = "PRELOAD_DATA";

fn main() {
    init_tracing();

    let runtime_config = RuntimeConfig {
        worker_threads: env::var(ENV_WORKER_THREADS)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            }),
        ..Default::default()
    };

    let runtime = match build_runtime(runtime_config) {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to build runtime");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = run_server().await {
            error!(error = %e, "Server failed");
            std::process::exit(1);
        }
    });
}

/// Initialize the tracing subscriber.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("koyomi=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .init();
}

async fn run_server() -> Result<(), std::io::Error> {
    let config = ServerConfig::from_env();
    let store = NameStore::new();

    if env::var(ENV_PRELOAD_DATA).map(|v| v == "1").unwrap_or(false) {
        store.set(JAPANESE_KEY, koyomi::data::japanese_seed());
        store.set(KOREAN_KEY, koyomi::data::korean_seed());
        info!("Seed tables preloaded");
    }

    info!(
        listen = %config.listen_addr,
        auth = config.api_token.is_some(),
        "Starting koyomi server"
    );

    let server = ApiServer::new(AppState { config, store });
    server.run().await
}
