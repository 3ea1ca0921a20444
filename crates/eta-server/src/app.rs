//! Process wiring: config, tracing, store, cache, poller, HTTP server, and
//! shutdown.
//!
//! The poller and the server share one shutdown channel. Ctrl-C flips it;
//! so does a fatal poller error, after which the process exits non-zero.

use std::sync::Arc;

use eta_core::clock::SystemClock;
use eta_core::config::EtaConfig;
use eta_core::constants::VERSION;
use eta_core::errors::{EtaError, EtaResult, StoreError};
use eta_core::observability::init_tracing;
use eta_core::traits::{HistoryStore, SampleSource};
use eta_poller::{Poller, PollerStats};
use eta_prediction::{PredictionEngine, SnapshotCache};
use eta_source::build_source;
use eta_storage::FileHistoryStore;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

use crate::api::{create_router, AppState};
use crate::cli::Cli;

type PollerTask = JoinHandle<Result<PollerStats, StoreError>>;

/// Run `eta` until Ctrl-C or a fatal poller error.
pub async fn run(cli: Cli) -> EtaResult<()> {
    let root = std::env::current_dir().map_err(|e| EtaError::Server {
        reason: format!("cannot determine working directory: {e}"),
    })?;
    let config = EtaConfig::load(&root, Some(&cli.overrides()))?;
    init_tracing(&config.observability);
    info!(
        version = VERSION,
        source = %config.source.kind,
        url = config.source.active_url(),
        history = %config.storage.history_path.display(),
        "eta starting"
    );

    let store: Arc<dyn HistoryStore> = Arc::new(FileHistoryStore::from_config(&config.storage));
    let state = build_state(&config, Arc::clone(&store));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut poller_task = if config.poller.enabled {
        let source = build_source(&config.source)?;
        Some(spawn_poller(source, Arc::clone(&store), &config, shutdown_rx.clone())?)
    } else {
        info!("poller disabled, serving existing history only");
        None
    };

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| EtaError::Server {
            reason: format!("cannot bind {addr}: {e}"),
        })?;
    info!(%addr, "HTTP server listening");

    let server_task = {
        let rx = shutdown_rx.clone();
        tokio::spawn(async move {
            axum::serve(listener, create_router(state))
                .with_graceful_shutdown(wait_for_shutdown(rx))
                .await
        })
    };

    // Whichever comes first: Ctrl-C, or the poller stopping on its own.
    let early_poller_exit = tokio::select! {
        _ = ctrl_c() => {
            info!("shutdown signal received");
            None
        }
        joined = join_poller(&mut poller_task) => Some(joined),
    };
    // Send fails only when every receiver is gone, i.e. nothing to notify.
    let _ = shutdown_tx.send(true);

    let poller_result = match early_poller_exit {
        Some(joined) => joined,
        None => match poller_task {
            Some(task) => task.await,
            None => Ok(Ok(PollerStats::default())),
        },
    };

    let server_result = server_task.await;
    info!("HTTP server stopped");

    finish_poller(poller_result)?;
    match server_result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(EtaError::Server {
            reason: format!("HTTP server failed: {e}"),
        }),
        Err(e) => Err(EtaError::Server {
            reason: format!("HTTP server task failed: {e}"),
        }),
    }
}

/// Snapshot cache over `store`, wrapped for the router.
pub fn build_state(config: &EtaConfig, store: Arc<dyn HistoryStore>) -> AppState {
    let cache = SnapshotCache::from_config(
        store,
        PredictionEngine::from_config(&config.prediction),
        Arc::new(SystemClock),
        &config.cache,
    );
    AppState::new(cache)
}

fn spawn_poller(
    source: Arc<dyn SampleSource>,
    store: Arc<dyn HistoryStore>,
    config: &EtaConfig,
    shutdown: watch::Receiver<bool>,
) -> Result<PollerTask, StoreError> {
    let mut poller = Poller::from_config(source, store, &config.poller)?;
    Ok(tokio::spawn(async move {
        poller.run(wait_for_shutdown(shutdown)).await
    }))
}

fn finish_poller(result: Result<Result<PollerStats, StoreError>, JoinError>) -> EtaResult<()> {
    match result {
        Ok(Ok(stats)) => {
            info!(
                iterations = stats.iterations,
                appended = stats.appended,
                "poller finished"
            );
            Ok(())
        }
        Ok(Err(e)) => {
            error!(error = %e, "poller stopped on a fatal history error");
            Err(e.into())
        }
        Err(e) => Err(EtaError::Server {
            reason: format!("poller task failed: {e}"),
        }),
    }
}

async fn join_poller(
    task: &mut Option<PollerTask>,
) -> Result<Result<PollerStats, StoreError>, JoinError> {
    match task.as_mut() {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    // An error means the sender was dropped, which also means stop.
    let _ = rx.wait_for(|stop| *stop).await;
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}

