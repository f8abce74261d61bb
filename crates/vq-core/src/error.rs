//! Error types for `vq-core`.
//!
//! Only caller mistakes and I/O failures are errors here. A visitor trying
//! to advance with an incomplete questionnaire or an empty contact form is
//! not an error: those come back as [`Transition::Blocked`] values.
//!
//! [`Transition::Blocked`]: crate::flow::Transition::Blocked

use crate::flow::Stage;
use crate::session::SessionId;

/// Errors from mutating an assessment flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// A Likert answer outside `1..=5`.
    #[error("answer value {value} is out of range, expected 1..=5")]
    OutOfRangeAnswer { value: i64 },

    /// The question id is not part of the catalog.
    #[error("unknown question id {id}")]
    UnknownQuestion { id: u32 },

    /// The action is not accepted in the flow's current stage.
    #[error("cannot {action} while in the {stage} stage")]
    WrongStage { action: &'static str, stage: Stage },
}

/// Errors from the in-memory session store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No session with this id exists.
    #[error("session not found: {id}")]
    NotFound { id: SessionId },

    /// The session sat idle past its TTL and was dropped.
    #[error("session expired: {id}")]
    Expired { id: SessionId },

    /// The store already holds its maximum number of live sessions.
    #[error("session limit of {limit} reached")]
    Capacity { limit: usize },

    /// The flow rejected the requested mutation.
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Errors from handing a lead to a delivery sink.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// The sink failed to deliver the lead.
    #[error("lead sink '{sink}' failed: {reason}")]
    Delivery { sink: String, reason: String },

    /// Serialization of the lead failed.
    #[error("lead serialization failed: {reason}")]
    Serialization { reason: String },

    /// The lead was missing a required field.
    #[error("lead is missing required field '{field}'")]
    MissingField { field: &'static str },
}
