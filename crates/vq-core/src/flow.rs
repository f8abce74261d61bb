//! VQ Snapshot flow controller.
//!
//! One [`AssessmentFlow`] per visitor. It moves through four stages:
//!
//! ```text
//! Intro -> Questionnaire -> LeadCapture -> Results
//! ```
//!
//! Every forward move is an explicit call. A move whose guard fails returns
//! [`Transition::Blocked`] and leaves the flow untouched, so the page can
//! keep the button disabled and show why. [`AssessmentFlow::reset`] goes
//! back to `Intro` from anywhere and drops all answers and contact data.
//!
//! Data mutations that make no sense for the current stage (recording an
//! answer after the questionnaire was submitted, an out-of-range value) are
//! caller bugs and come back as [`FlowError`].

use std::fmt;

use serde::Serialize;

use crate::answers::{AnswerSet, Likert};
use crate::contact::{ContactField, ContactRecord, ContactUpdate};
use crate::engine::{self, Band, MAX_SCORE};
use crate::error::FlowError;
use crate::lead::Lead;
use crate::question::QUESTION_COUNT;

/// Stage of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Questionnaire,
    LeadCapture,
    Results,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Questionnaire => "questionnaire",
            Self::LeadCapture => "lead capture",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

/// Why a forward move did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockReason {
    /// The move does not start from the current stage.
    WrongStage { expected: Stage, actual: Stage },
    /// Not every question has an answer yet.
    IncompleteAnswers { answered: usize, total: usize },
    /// Name or email is empty.
    InvalidContact { missing: Vec<ContactField> },
}

/// Result of a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The flow is now in this stage.
    Advanced(Stage),
    /// Nothing changed.
    Blocked(BlockReason),
}

impl Transition {
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }
}

/// Score and band, fixed when the flow enters `Results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub score: i32,
    pub max_score: i32,
    pub band: &'static Band,
}

/// Read-only view of a flow for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub stage: Stage,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
    pub answers: AnswerSet,
    pub contact: ContactRecord,
    pub can_submit_questionnaire: bool,
    pub can_submit_contact: bool,
    pub outcome: Option<Outcome>,
}

/// State machine for one visitor's assessment.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    stage: Stage,
    answers: AnswerSet,
    contact: ContactRecord,
    outcome: Option<Outcome>,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Intro,
            answers: AnswerSet::new(),
            contact: ContactRecord::default(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn contact(&self) -> &ContactRecord {
        &self.contact
    }

    /// Set once the flow reaches `Results`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// `Intro -> Questionnaire`.
    pub fn start(&mut self) -> Transition {
        if let Some(blocked) = self.require(Stage::Intro) {
            return blocked;
        }
        self.stage = Stage::Questionnaire;
        Transition::Advanced(self.stage)
    }

    /// Upsert an answer while in the questionnaire.
    ///
    /// # Errors
    ///
    /// - [`FlowError::WrongStage`] outside `Questionnaire`.
    /// - [`FlowError::OutOfRangeAnswer`] if `value` is not in `1..=5`.
    /// - [`FlowError::UnknownQuestion`] if the id is not in the catalog.
    pub fn record_answer(&mut self, question_id: u32, value: i64) -> Result<(), FlowError> {
        if self.stage != Stage::Questionnaire {
            return Err(FlowError::WrongStage {
                action: "record an answer",
                stage: self.stage,
            });
        }
        let value = Likert::new(value)?;
        self.answers.record(question_id, value)
    }

    /// `Questionnaire -> LeadCapture`, once every question is answered.
    pub fn submit_questionnaire(&mut self) -> Transition {
        if let Some(blocked) = self.require(Stage::Questionnaire) {
            return blocked;
        }
        if !self.answers.is_complete() {
            return Transition::Blocked(BlockReason::IncompleteAnswers {
                answered: self.answers.answered(),
                total: QUESTION_COUNT,
            });
        }
        self.stage = Stage::LeadCapture;
        Transition::Advanced(self.stage)
    }

    /// Edit the contact form.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::WrongStage`] outside `LeadCapture`.
    pub fn update_contact(&mut self, update: ContactUpdate) -> Result<(), FlowError> {
        if self.stage != Stage::LeadCapture {
            return Err(FlowError::WrongStage {
                action: "update contact details",
                stage: self.stage,
            });
        }
        self.contact.apply(update);
        Ok(())
    }

    /// `LeadCapture -> Results`, once name and email are present.
    ///
    /// Scores the answer set and fixes the outcome.
    pub fn submit_contact(&mut self) -> Transition {
        if let Some(blocked) = self.require(Stage::LeadCapture) {
            return blocked;
        }
        let missing = self.contact.missing_fields();
        if !missing.is_empty() {
            return Transition::Blocked(BlockReason::InvalidContact { missing });
        }

        let score = engine::score(&self.answers);
        self.outcome = Some(Outcome {
            score,
            max_score: MAX_SCORE,
            band: engine::classify(score),
        });
        self.stage = Stage::Results;
        Transition::Advanced(self.stage)
    }

    /// The lead to hand to delivery. Only available in `Results`.
    #[must_use]
    pub fn lead_handoff(&self) -> Option<Lead> {
        let outcome = self.outcome.filter(|_| self.stage == Stage::Results)?;
        Some(Lead::Assessment {
            contact: self.contact.trimmed(),
            score: outcome.score,
            band: outcome.band.label.to_owned(),
            percentile: outcome.band.percentile.to_owned(),
        })
    }

    /// Back to `Intro`, dropping answers, contact and outcome.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            stage: self.stage,
            answered: self.answers.answered(),
            total: QUESTION_COUNT,
            complete: self.answers.is_complete(),
            answers: self.answers.clone(),
            contact: self.contact.clone(),
            can_submit_questionnaire: self.stage == Stage::Questionnaire
                && self.answers.is_complete(),
            can_submit_contact: self.stage == Stage::LeadCapture && self.contact.is_valid(),
            outcome: self.outcome,
        }
    }

    fn require(&self, expected: Stage) -> Option<Transition> {
        (self.stage != expected).then_some(Transition::Blocked(BlockReason::WrongStage {
            expected,
            actual: self.stage,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::question::QUESTIONS;

    fn answer_all(flow: &mut AssessmentFlow, value: i64) {
        for q in &QUESTIONS {
            flow.record_answer(q.id, value).unwrap();
        }
    }

    fn fill_contact(flow: &mut AssessmentFlow) {
        flow.update_contact(ContactUpdate::Name("Ada".to_owned())).unwrap();
        flow.update_contact(ContactUpdate::Email("ada@example.com".to_owned()))
            .unwrap();
    }

    fn flow_at_lead_capture(value: i64) -> AssessmentFlow {
        let mut flow = AssessmentFlow::new();
        flow.start();
        answer_all(&mut flow, value);
        assert!(flow.submit_questionnaire().is_advanced());
        flow
    }

    #[test]
    fn new_flow_is_empty_intro() {
        let flow = AssessmentFlow::new();
        assert_eq!(flow.stage(), Stage::Intro);
        assert_eq!(flow.answers().answered(), 0);
        assert!(flow.contact().newsletter_opt_in);
        assert!(flow.outcome().is_none());
    }

    #[test]
    fn start_moves_to_questionnaire_once() {
        let mut flow = AssessmentFlow::new();
        assert_eq!(flow.start(), Transition::Advanced(Stage::Questionnaire));
        assert_eq!(
            flow.start(),
            Transition::Blocked(BlockReason::WrongStage {
                expected: Stage::Intro,
                actual: Stage::Questionnaire,
            })
        );
    }

    #[test]
    fn answers_rejected_before_start() {
        let mut flow = AssessmentFlow::new();
        let err = flow.record_answer(1, 3).unwrap_err();
        assert!(matches!(err, FlowError::WrongStage { stage: Stage::Intro, .. }));
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut flow = AssessmentFlow::new();
        flow.start();
        assert_eq!(
            flow.record_answer(1, 6),
            Err(FlowError::OutOfRangeAnswer { value: 6 })
        );
        assert_eq!(
            flow.record_answer(1, 0),
            Err(FlowError::OutOfRangeAnswer { value: 0 })
        );
        assert_eq!(flow.answers().answered(), 0);
    }

    #[test]
    fn thirteen_answers_block_submit() {
        let mut flow = AssessmentFlow::new();
        flow.start();
        for q in &QUESTIONS[..13] {
            flow.record_answer(q.id, 4).unwrap();
        }
        assert_eq!(
            flow.submit_questionnaire(),
            Transition::Blocked(BlockReason::IncompleteAnswers {
                answered: 13,
                total: 14,
            })
        );
        assert_eq!(flow.stage(), Stage::Questionnaire);
        assert!(!flow.snapshot().can_submit_questionnaire);
    }

    #[test]
    fn completeness_survives_re_answering() {
        let mut flow = AssessmentFlow::new();
        flow.start();
        answer_all(&mut flow, 2);
        assert!(flow.is_complete());
        for q in &QUESTIONS {
            flow.record_answer(q.id, 5).unwrap();
            assert!(flow.is_complete());
        }
    }

    #[test]
    fn contact_edits_rejected_outside_lead_capture() {
        let mut flow = AssessmentFlow::new();
        flow.start();
        let err = flow
            .update_contact(ContactUpdate::Name("Ada".to_owned()))
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::WrongStage { stage: Stage::Questionnaire, .. }
        ));
    }

    #[test]
    fn answers_frozen_after_questionnaire() {
        let mut flow = flow_at_lead_capture(3);
        assert!(flow.record_answer(1, 5).is_err());
        assert_eq!(flow.answers().get(1).map(Likert::get), Some(3));
    }

    #[test]
    fn empty_contact_blocks_results() {
        let mut flow = flow_at_lead_capture(3);
        flow.update_contact(ContactUpdate::Name("Ada".to_owned())).unwrap();
        flow.update_contact(ContactUpdate::Email("   ".to_owned())).unwrap();
        assert_eq!(
            flow.submit_contact(),
            Transition::Blocked(BlockReason::InvalidContact {
                missing: vec![ContactField::Email],
            })
        );
        assert_eq!(flow.stage(), Stage::LeadCapture);
        assert!(flow.outcome().is_none());
        assert!(flow.lead_handoff().is_none());
    }

    #[test]
    fn all_threes_reaches_moderate_results() {
        let mut flow = flow_at_lead_capture(3);
        fill_contact(&mut flow);
        assert_eq!(flow.submit_contact(), Transition::Advanced(Stage::Results));

        let outcome = flow.outcome().unwrap();
        assert_eq!(outcome.score, 42);
        assert_eq!(outcome.max_score, 70);
        assert_eq!(outcome.band.label, "Moderate");
    }

    #[test]
    fn results_stage_is_terminal() {
        let mut flow = flow_at_lead_capture(5);
        fill_contact(&mut flow);
        flow.submit_contact();
        let before = flow.outcome();

        assert!(!flow.start().is_advanced());
        assert!(!flow.submit_questionnaire().is_advanced());
        assert!(!flow.submit_contact().is_advanced());
        assert!(flow.record_answer(1, 1).is_err());
        assert_eq!(flow.outcome(), before);
        assert_eq!(flow.stage(), Stage::Results);
    }

    #[test]
    fn handoff_carries_trimmed_contact_and_band() {
        let mut flow = flow_at_lead_capture(1);
        flow.update_contact(ContactUpdate::Name("  Ada  ".to_owned())).unwrap();
        flow.update_contact(ContactUpdate::Email("ada@example.com ".to_owned()))
            .unwrap();
        flow.update_contact(ContactUpdate::NewsletterOptIn(false)).unwrap();
        flow.submit_contact();

        let Some(Lead::Assessment { contact, score, band, percentile }) = flow.lead_handoff()
        else {
            unreachable!("expected an assessment lead");
        };
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        assert!(!contact.newsletter_opt_in);
        assert_eq!(score, 14);
        assert_eq!(band, "Very Low");
        assert_eq!(percentile, "<10th");
    }

    #[test]
    fn reset_returns_to_clean_intro() {
        let mut flow = flow_at_lead_capture(4);
        fill_contact(&mut flow);
        flow.submit_contact();
        flow.reset();

        assert_eq!(flow.stage(), Stage::Intro);
        assert_eq!(flow.answers().answered(), 0);
        assert_eq!(flow.contact(), &ContactRecord::default());
        assert!(flow.outcome().is_none());
        assert!(!flow.is_complete());
    }

    #[test]
    fn snapshot_reports_progress() {
        let mut flow = AssessmentFlow::new();
        flow.start();
        flow.record_answer(1, 2).unwrap();
        flow.record_answer(2, 3).unwrap();
        let snap = flow.snapshot();
        assert_eq!(snap.stage, Stage::Questionnaire);
        assert_eq!(snap.answered, 2);
        assert_eq!(snap.total, 14);
        assert!(!snap.complete);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["stage"], "questionnaire");
        assert_eq!(json["answers"]["2"], 3);
        assert!(json["outcome"].is_null());
    }

    #[test]
    fn wrong_stage_error_message_names_the_stage() {
        let err = FlowError::WrongStage {
            action: "record an answer",
            stage: Stage::LeadCapture,
        };
        assert_eq!(
            err.to_string(),
            "cannot record an answer while in the lead capture stage"
        );
    }
}
