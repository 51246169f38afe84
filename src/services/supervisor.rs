//! Supervisor: spawns the worker pool and waits to be told to stop.
//!
//! The search has no natural end. The supervisor launches a fixed number of
//! workers on the blocking pool, parks on SIGINT/SIGTERM, and on either
//! signal snapshots the registry and hands the result back for output. The
//! workers are abandoned mid-attempt; nothing they were doing needs to be
//! drained.

use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use crate::domain::models::BestResult;
use crate::services::registry::BestResultRegistry;
use crate::services::search_worker::{SearchConfig, SearchWorker};

/// Fixed size of the racing worker pool.
pub const WORKER_COUNT: usize = 4;

/// Owns the registry and the worker pool for one search run.
pub struct Supervisor {
    config: SearchConfig,
    registry: Arc<BestResultRegistry>,
}

impl Supervisor {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            registry: Arc::new(BestResultRegistry::new()),
        }
    }

    /// Launch [`WORKER_COUNT`] workers, block until SIGINT or SIGTERM, then
    /// return whatever the registry holds.
    ///
    /// The returned `None` only happens when the process is signalled
    /// before any worker completes a single round.
    pub async fn run_until_signalled(&self) -> std::io::Result<Option<BestResult>> {
        for id in 0..WORKER_COUNT {
            let worker = SearchWorker::new(id, self.config, Arc::clone(&self.registry));
            tokio::task::spawn_blocking(move || worker.run());
        }
        info!(
            workers = WORKER_COUNT,
            participants = self.config.participants,
            rounds = self.config.rounds,
            "search started; send SIGINT or SIGTERM to collect the best session"
        );

        wait_for_termination().await?;
        info!("termination requested; collecting best session");
        Ok(self.registry.snapshot())
    }
}

/// Resolve on the first SIGINT or SIGTERM; both mean finalize-and-exit.
async fn wait_for_termination() -> std::io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = interrupt.recv() => {}
        _ = terminate.recv() => {}
    }
    Ok(())
}
