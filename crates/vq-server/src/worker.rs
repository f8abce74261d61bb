//! Background tasks that run alongside the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::AppState;

/// Drop idle sessions every `interval_secs` until shutdown is signalled.
pub async fn session_sweep_worker(
    state: Arc<AppState>,
    mut shutdown: watch::Receiver<bool>,
    interval_secs: u64,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    info!(interval_secs, "session sweep worker started");
    let sessions = state.assessments.sessions();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let purged = sessions.purge_expired().await;
                if purged > 0 {
                    let remaining = sessions.len().await;
                    info!(purged, remaining, "expired sessions purged");
                } else {
                    debug!("session sweep found nothing to purge");
                }
            }
            _ = shutdown.changed() => {
                info!("session sweep worker shutting down");
                return;
            }
        }
    }
}
