//! Shared application state for the site server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use std::sync::Arc;

use chrono::Duration;
use vq_core::lead::LeadSink;
use vq_core::service::AssessmentService;
use vq_core::session::SessionStore;

use crate::config::{ServerConfig, SiteConfig};

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Assessment sessions and lead hand-off.
    pub assessments: AssessmentService,
    /// Links and images rendered into the pages.
    pub site: SiteConfig,
}

impl AppState {
    /// Build state from configuration and a lead sink.
    #[must_use]
    pub fn new(config: &ServerConfig, sink: Arc<dyn LeadSink>) -> Self {
        let ttl = i64::try_from(config.session_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self {
            assessments: AssessmentService::new(
                SessionStore::new(ttl).with_max_sessions(config.max_sessions),
                sink,
            ),
            site: config.site.clone(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
