//! Tokio runtime construction.
//!
//! The runtime is built explicitly rather than via `#[tokio::main]` so worker
//! count and thread naming stay configurable from the environment.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::runtime::{Builder, Runtime};
use tracing::info;

static WORKER_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Number of worker threads (default: number of CPU cores)
    pub worker_threads: usize,
    /// Maximum blocking threads (default: 4)
    pub max_blocking_threads: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus(),
            max_blocking_threads: 4,
        }
    }
}

#[inline]
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Build the multi-threaded work-stealing runtime with named workers.
pub fn build_runtime(config: RuntimeConfig) -> std::io::Result<Runtime> {
    info!(
        worker_threads = config.worker_threads,
        blocking_threads = config.max_blocking_threads,
        "Building runtime"
    );

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .max_blocking_threads(config.max_blocking_threads)
        .enable_all()
        .thread_name_fn(|| {
            let id = WORKER_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("koyomi-worker-{id}")
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RuntimeConfig::default();
        assert!(config.worker_threads >= 1);
        assert_eq!(config.max_blocking_threads, 4);
    }

    #[test]
    fn test_runtime_builds() {
        let config = RuntimeConfig {
            worker_threads: 2,
            max_blocking_threads: 1,
        };
        let rt = build_runtime(config).expect("runtime should build");
        rt.block_on(async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        });
    }
}
