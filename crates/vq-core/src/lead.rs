//! Lead delivery.
//!
//! When a visitor unlocks their results, the completed contact record and
//! their band are handed to a [`LeadSink`]. The footer newsletter form hands
//! over a bare email the same way. The sink is injected, so the flow never
//! knows where leads end up.
//!
//! Three sinks ship with the crate:
//!
//! - [`LogLeadSink`]: one structured `tracing` event per lead
//! - [`FileLeadSink`]: append-only JSON lines
//! - [`MemoryLeadSink`]: in-memory, for tests

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::contact::ContactRecord;
use crate::error::LeadError;

/// A lead captured by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lead {
    /// Contact details given to unlock VQ Snapshot results.
    Assessment {
        contact: ContactRecord,
        score: i32,
        band: String,
        percentile: String,
    },
    /// Footer newsletter sign-up.
    Newsletter { email: String },
}

impl Lead {
    /// The email address the lead was captured with.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Assessment { contact, .. } => &contact.email,
            Self::Newsletter { email } => email,
        }
    }

    /// Short tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Assessment { .. } => "assessment",
            Self::Newsletter { .. } => "newsletter",
        }
    }
}

/// One line in a lead file.
#[derive(Debug, Serialize)]
struct LeadRecord<'a> {
    id: Uuid,
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    lead: &'a Lead,
}

/// Destination for captured leads.
///
/// Implementations must be safe to share across async tasks.
#[async_trait::async_trait]
pub trait LeadSink: Send + Sync + 'static {
    /// Human-readable sink name for logs and errors.
    fn name(&self) -> &str;

    /// Deliver one lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError`] if the lead could not be delivered.
    async fn deliver(&self, lead: &Lead) -> Result<(), LeadError>;
}

/// Sink that only logs the lead.
#[derive(Debug, Default)]
pub struct LogLeadSink;

#[async_trait::async_trait]
impl LeadSink for LogLeadSink {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, lead: &Lead) -> Result<(), LeadError> {
        match lead {
            Lead::Assessment {
                contact,
                score,
                band,
                ..
            } => info!(
                kind = lead.kind(),
                name = %contact.name,
                email = %contact.email,
                newsletter = contact.newsletter_opt_in,
                score,
                band = %band,
                "lead captured"
            ),
            Lead::Newsletter { email } => {
                info!(kind = lead.kind(), email = %email, "lead captured");
            }
        }
        Ok(())
    }
}

/// Sink that appends JSON lines to a file.
///
/// The file is opened lazily in append mode on the first delivery and
/// writes are serialized behind a mutex. Nothing is ever rewritten.
pub struct FileLeadSink {
    path: PathBuf,
    writer: Mutex<Option<tokio::fs::File>>,
}

impl FileLeadSink {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn get_writer(
        &self,
    ) -> Result<tokio::sync::MutexGuard<'_, Option<tokio::fs::File>>, LeadError> {
        let mut guard = self.writer.lock().await;
        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await
                .map_err(|e| LeadError::Delivery {
                    sink: self.name().to_owned(),
                    reason: format!("failed to open lead file '{}': {e}", self.path.display()),
                })?;
            *guard = Some(file);
        }
        Ok(guard)
    }
}

impl std::fmt::Debug for FileLeadSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLeadSink")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl LeadSink for FileLeadSink {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "file"
    }

    async fn deliver(&self, lead: &Lead) -> Result<(), LeadError> {
        let record = LeadRecord {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            lead,
        };
        let mut line = serde_json::to_vec(&record).map_err(|e| LeadError::Serialization {
            reason: e.to_string(),
        })?;
        line.push(b'\n');

        let mut guard = self.get_writer().await?;
        let file = guard.as_mut().ok_or_else(|| LeadError::Delivery {
            sink: "file".to_owned(),
            reason: "file handle unexpectedly None after open".to_owned(),
        })?;

        file.write_all(&line).await.map_err(|e| LeadError::Delivery {
            sink: "file".to_owned(),
            reason: format!("write failed: {e}"),
        })?;
        file.flush().await.map_err(|e| LeadError::Delivery {
            sink: "file".to_owned(),
            reason: format!("flush failed: {e}"),
        })?;
        Ok(())
    }
}

/// Sink that keeps leads in memory.
#[derive(Debug, Default)]
pub struct MemoryLeadSink {
    leads: Mutex<Vec<Lead>>,
}

impl MemoryLeadSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl LeadSink for MemoryLeadSink {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, lead: &Lead) -> Result<(), LeadError> {
        self.leads.lock().await.push(lead.clone());
        Ok(())
    }
}
