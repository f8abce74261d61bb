//! Server configuration for the Virtue Quotient site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `VQ_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default purchase link for the hardcover.
pub const DEFAULT_AMAZON_URL: &str = "https://a.co/d/5KJK1bl";

/// Default purchase link for the Kindle edition.
pub const DEFAULT_KINDLE_URL: &str = "https://a.co/d/cotjjfM";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Idle time after which an assessment session is dropped.
    pub session_ttl_secs: u64,
    /// Seconds between idle-session sweeps.
    pub session_scan_interval_secs: u64,
    /// Upper bound on live assessment sessions.
    pub max_sessions: usize,
    /// JSON-lines file for captured leads. Leads are only logged when unset.
    pub lead_file: Option<PathBuf>,
    /// Links and images used by the pages.
    pub site: SiteConfig,
}

/// Outbound links and image locations rendered into the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub amazon_url: String,
    pub kindle_url: String,
    pub book_cover_url: String,
    pub author_image_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            amazon_url: DEFAULT_AMAZON_URL.to_owned(),
            kindle_url: DEFAULT_KINDLE_URL.to_owned(),
            book_cover_url: "/IMG_7733.jpg".to_owned(),
            author_image_url: "https://placehold.co/400x500/e2e8f0/1a365d?text=Dr.+Rosa+Lee"
                .to_owned(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on, binds to `0.0.0.0`
    /// - `VQ_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `VQ_LOG_LEVEL`: log filter (default: `info`)
    /// - `VQ_SESSION_TTL_SECS`: idle session lifetime (default: `3600`)
    /// - `VQ_SESSION_SCAN_INTERVAL`: seconds between idle-session sweeps (default: `60`)
    /// - `VQ_MAX_SESSIONS`: live session cap (default: `10000`)
    /// - `VQ_LEAD_FILE`: append captured leads to this file (optional)
    /// - `VQ_AMAZON_URL`, `VQ_KINDLE_URL`: purchase links
    /// - `VQ_BOOK_COVER_URL`, `VQ_AUTHOR_IMAGE_URL`: page images
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_addr = SocketAddr::from(([127, 0, 0, 1], 8080));

        // Priority: VQ_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = lookup("VQ_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            default_addr
        };

        let log_level = lookup("VQ_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let session_ttl_secs = lookup("VQ_SESSION_TTL_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(3600);

        let session_scan_interval_secs = lookup("VQ_SESSION_SCAN_INTERVAL")
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(60);

        let max_sessions = lookup("VQ_MAX_SESSIONS")
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(10_000);

        let lead_file = lookup("VQ_LEAD_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            amazon_url: lookup("VQ_AMAZON_URL").unwrap_or(defaults.amazon_url),
            kindle_url: lookup("VQ_KINDLE_URL").unwrap_or(defaults.kindle_url),
            book_cover_url: lookup("VQ_BOOK_COVER_URL").unwrap_or(defaults.book_cover_url),
            author_image_url: lookup("VQ_AUTHOR_IMAGE_URL").unwrap_or(defaults.author_image_url),
        };

        Self {
            bind_addr,
            log_level,
            session_ttl_secs,
            session_scan_interval_secs,
            max_sessions,
            lead_file,
            site,
        }
    }
}
