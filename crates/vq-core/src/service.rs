//! Assessment service.
//!
//! Async facade over the [`SessionStore`] and the injected [`LeadSink`].
//! Flow events run under the session lock; lead delivery runs after the
//! lock is released. A failed delivery is logged and does not undo the
//! move to `Results`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::contact::ContactUpdate;
use crate::error::{LeadError, SessionError};
use crate::flow::{FlowSnapshot, Transition};
use crate::lead::{Lead, LeadSink};
use crate::session::{SessionId, SessionStore};

/// Outcome of a flow event: the transition (if any) and the resulting state.
#[derive(Debug, Clone)]
pub struct EventResult {
    pub transition: Option<Transition>,
    pub state: FlowSnapshot,
}

/// Entry points for the presentation layer.
pub struct AssessmentService {
    sessions: SessionStore,
    sink: Arc<dyn LeadSink>,
}

impl std::fmt::Debug for AssessmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentService")
            .field("sessions", &self.sessions)
            .field("sink", &self.sink.name())
            .finish()
    }
}

impl AssessmentService {
    #[must_use]
    pub fn new(sessions: SessionStore, sink: Arc<dyn LeadSink>) -> Self {
        Self { sessions, sink }
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Open a session and return its id with the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Capacity`] when the store is full, or another
    /// [`SessionError`] if the new session vanished before it could be read
    /// back.
    pub async fn open(&self) -> Result<(SessionId, FlowSnapshot), SessionError> {
        let id = self.sessions.open().await?;
        let state = self.state(id).await?;
        Ok((id, state))
    }

    /// Current state of a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired.
    pub async fn state(&self, id: SessionId) -> Result<FlowSnapshot, SessionError> {
        self.sessions.read(id, |flow| flow.snapshot()).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired.
    pub async fn start(&self, id: SessionId) -> Result<EventResult, SessionError> {
        self.transition(id, |flow| flow.start()).await
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired, or the
    /// flow rejects the answer.
    pub async fn record_answer(
        &self,
        id: SessionId,
        question_id: u32,
        value: i64,
    ) -> Result<EventResult, SessionError> {
        let state = self
            .sessions
            .try_update(id, |flow| {
                flow.record_answer(question_id, value)?;
                Ok(flow.snapshot())
            })
            .await?;
        Ok(EventResult {
            transition: None,
            state,
        })
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired.
    pub async fn submit_questionnaire(&self, id: SessionId) -> Result<EventResult, SessionError> {
        self.transition(id, |flow| flow.submit_questionnaire()).await
    }

    /// Apply several contact edits as one event.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired, or the
    /// flow is not in lead capture.
    pub async fn update_contact(
        &self,
        id: SessionId,
        updates: Vec<ContactUpdate>,
    ) -> Result<EventResult, SessionError> {
        let state = self
            .sessions
            .try_update(id, |flow| {
                // Stage is the only failure and it does not change between edits.
                for update in updates {
                    flow.update_contact(update)?;
                }
                Ok(flow.snapshot())
            })
            .await?;
        Ok(EventResult {
            transition: None,
            state,
        })
    }

    /// Unlock results and hand the lead to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired.
    pub async fn submit_contact(&self, id: SessionId) -> Result<EventResult, SessionError> {
        let (transition, state, lead) = self
            .sessions
            .update(id, |flow| {
                let transition = flow.submit_contact();
                let lead = transition
                    .is_advanced()
                    .then(|| flow.lead_handoff())
                    .flatten();
                (transition, flow.snapshot(), lead)
            })
            .await?;

        if let Some(lead) = lead {
            info!(session_id = %id, band = ?state.outcome.map(|o| o.band.label), "results unlocked");
            self.hand_off(&lead).await;
        }

        Ok(EventResult {
            transition: Some(transition),
            state,
        })
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the session is unknown or expired.
    pub async fn reset(&self, id: SessionId) -> Result<FlowSnapshot, SessionError> {
        self.sessions
            .update(id, |flow| {
                flow.reset();
                flow.snapshot()
            })
            .await
    }

    pub async fn close(&self, id: SessionId) -> bool {
        self.sessions.close(id).await
    }

    /// Footer newsletter sign-up.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingField`] for an empty email, or the sink's
    /// delivery error.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), LeadError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LeadError::MissingField { field: "email" });
        }
        self.sink
            .deliver(&Lead::Newsletter {
                email: email.to_owned(),
            })
            .await
    }

    async fn transition(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut crate::flow::AssessmentFlow) -> Transition,
    ) -> Result<EventResult, SessionError> {
        let (transition, state) = self
            .sessions
            .update(id, |flow| {
                let transition = f(flow);
                (transition, flow.snapshot())
            })
            .await?;
        if let Transition::Blocked(reason) = &transition {
            tracing::debug!(session_id = %id, ?reason, "transition blocked");
        }
        Ok(EventResult {
            transition: Some(transition),
            state,
        })
    }

    async fn hand_off(&self, lead: &Lead) {
        if let Err(e) = self.sink.deliver(lead).await {
            warn!(
                sink = self.sink.name(),
                kind = lead.kind(),
                error = %e,
                "lead delivery failed"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::flow::{BlockReason, Stage};
    use crate::lead::MemoryLeadSink;
    use crate::question::QUESTIONS;

    struct FailingSink;

    #[async_trait::async_trait]
    impl LeadSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        async fn deliver(&self, _lead: &Lead) -> Result<(), LeadError> {
            Err(LeadError::Delivery {
                sink: "failing".to_owned(),
                reason: "unreachable".to_owned(),
            })
        }
    }

    fn service_with(sink: Arc<dyn LeadSink>) -> AssessmentService {
        AssessmentService::new(SessionStore::new(Duration::hours(1)), sink)
    }

    async fn reach_lead_capture(service: &AssessmentService, value: i64) -> SessionId {
        let (id, _) = service.open().await.unwrap();
        service.start(id).await.unwrap();
        for q in &QUESTIONS {
            service.record_answer(id, q.id, value).await.unwrap();
        }
        let result = service.submit_questionnaire(id).await.unwrap();
        assert_eq!(result.transition, Some(Transition::Advanced(Stage::LeadCapture)));
        id
    }

    fn contact(name: &str, email: &str) -> Vec<ContactUpdate> {
        vec![
            ContactUpdate::Name(name.to_owned()),
            ContactUpdate::Email(email.to_owned()),
        ]
    }

    #[tokio::test]
    async fn full_run_delivers_one_lead() {
        let sink = Arc::new(MemoryLeadSink::new());
        let service = service_with(sink.clone());
        let id = reach_lead_capture(&service, 3).await;

        service
            .update_contact(id, contact("Ada", "ada@example.com"))
            .await
            .unwrap();
        let result = service.submit_contact(id).await.unwrap();

        assert_eq!(result.transition, Some(Transition::Advanced(Stage::Results)));
        assert_eq!(result.state.outcome.unwrap().band.label, "Moderate");

        let leads = sink.leads().await;
        assert_eq!(leads.len(), 1);
        let Lead::Assessment { score, band, .. } = &leads[0] else {
            unreachable!("expected an assessment lead");
        };
        assert_eq!(*score, 42);
        assert_eq!(band, "Moderate");
    }

    #[tokio::test]
    async fn blocked_contact_delivers_nothing() {
        let sink = Arc::new(MemoryLeadSink::new());
        let service = service_with(sink.clone());
        let id = reach_lead_capture(&service, 3).await;

        service.update_contact(id, contact("Ada", "  ")).await.unwrap();
        let result = service.submit_contact(id).await.unwrap();

        assert!(matches!(
            result.transition,
            Some(Transition::Blocked(BlockReason::InvalidContact { .. }))
        ));
        assert_eq!(result.state.stage, Stage::LeadCapture);
        assert!(sink.leads().await.is_empty());
    }

    #[tokio::test]
    async fn failing_sink_still_reveals_results() {
        let service = service_with(Arc::new(FailingSink));
        let id = reach_lead_capture(&service, 5).await;
        service
            .update_contact(id, contact("Ada", "ada@example.com"))
            .await
            .unwrap();

        let result = service.submit_contact(id).await.unwrap();
        assert_eq!(result.state.stage, Stage::Results);
        assert_eq!(result.state.outcome.unwrap().band.label, "Ultra-Rare");
    }

    #[tokio::test]
    async fn repeated_submit_does_not_deliver_twice() {
        let sink = Arc::new(MemoryLeadSink::new());
        let service = service_with(sink.clone());
        let id = reach_lead_capture(&service, 2).await;
        service
            .update_contact(id, contact("Ada", "ada@example.com"))
            .await
            .unwrap();

        service.submit_contact(id).await.unwrap();
        let again = service.submit_contact(id).await.unwrap();
        assert!(matches!(
            again.transition,
            Some(Transition::Blocked(BlockReason::WrongStage { .. }))
        ));
        assert_eq!(sink.leads().await.len(), 1);
    }

    #[tokio::test]
    async fn incomplete_questionnaire_stays_put() {
        let service = service_with(Arc::new(MemoryLeadSink::new()));
        let (id, _) = service.open().await.unwrap();
        service.start(id).await.unwrap();
        for q in &QUESTIONS[..13] {
            service.record_answer(id, q.id, 4).await.unwrap();
        }
        let result = service.submit_questionnaire(id).await.unwrap();
        assert_eq!(
            result.transition,
            Some(Transition::Blocked(BlockReason::IncompleteAnswers {
                answered: 13,
                total: 14,
            }))
        );
        assert_eq!(result.state.stage, Stage::Questionnaire);
    }

    #[tokio::test]
    async fn reset_clears_session_state() {
        let service = service_with(Arc::new(MemoryLeadSink::new()));
        let id = reach_lead_capture(&service, 4).await;
        let state = service.reset(id).await.unwrap();
        assert_eq!(state.stage, Stage::Intro);
        assert_eq!(state.answered, 0);
    }

    #[tokio::test]
    async fn newsletter_requires_email() {
        let sink = Arc::new(MemoryLeadSink::new());
        let service = service_with(sink.clone());

        let err = service.subscribe_newsletter("   ").await.unwrap_err();
        assert!(matches!(err, LeadError::MissingField { field: "email" }));

        service
            .subscribe_newsletter(" reader@example.com ")
            .await
            .unwrap();
        assert_eq!(
            sink.leads().await,
            vec![Lead::Newsletter {
                email: "reader@example.com".to_owned()
            }]
        );
    }

    #[tokio::test]
    async fn closed_session_is_gone() {
        let service = service_with(Arc::new(MemoryLeadSink::new()));
        let (id, _) = service.open().await.unwrap();
        assert!(service.close(id).await);
        assert!(matches!(
            service.state(id).await,
            Err(SessionError::NotFound { .. })
        ));
    }
}
