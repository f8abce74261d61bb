//! VQ Snapshot assessment routes: `/v1/snapshot/*`
//!
//! The snapshot page drives the assessment flow through these endpoints.
//! Transition endpoints always answer `200` with `status` set to `advanced`
//! or `blocked`; a blocked move is a status for the page to render, not an
//! error.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use vq_core::contact::ContactUpdate;
use vq_core::engine::{BANDS, Band, MAX_SCORE, MIN_SCORE};
use vq_core::flow::{BlockReason, FlowSnapshot, Transition};
use vq_core::question::{
    LIKERT_HIGH_LABEL, LIKERT_LOW_LABEL, LIKERT_MAX, LIKERT_MIN, QUESTIONS, Question,
    REFLECTION_PROMPT,
};
use vq_core::service::EventResult;
use vq_core::session::SessionId;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Build the `/v1/snapshot` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/bands", get(list_bands))
        .route("/sessions", post(open_session))
        .route("/sessions/{id}", get(get_session).delete(close_session))
        .route("/sessions/{id}/start", post(start))
        .route("/sessions/{id}/answers/{question_id}", put(record_answer))
        .route(
            "/sessions/{id}/questionnaire/submit",
            post(submit_questionnaire),
        )
        .route("/sessions/{id}/contact", patch(update_contact))
        .route("/sessions/{id}/contact/submit", post(submit_contact))
        .route("/sessions/{id}/reset", post(reset))
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
    pub scale: LikertScale,
    pub reflection_prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
    pub low_label: &'static str,
    pub high_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BandsResponse {
    pub min_score: i32,
    pub max_score: i32,
    pub bands: &'static [Band],
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub state: FlowSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// The flow moved to a new stage.
    Advanced,
    /// The move's guard failed; nothing changed.
    Blocked,
    /// Data was recorded without a stage change.
    Updated,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub status: EventStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<BlockReason>,
    pub state: FlowSnapshot,
}

impl From<EventResult> for EventResponse {
    fn from(result: EventResult) -> Self {
        let (status, reason) = match result.transition {
            None => (EventStatus::Updated, None),
            Some(Transition::Advanced(_)) => (EventStatus::Advanced, None),
            Some(Transition::Blocked(reason)) => (EventStatus::Blocked, Some(reason)),
        };
        Self {
            status,
            reason,
            state: result.state,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub value: i64,
}

/// Partial contact form update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub newsletter_opt_in: Option<bool>,
}

impl ContactPatch {
    fn into_updates(self) -> Vec<ContactUpdate> {
        let mut updates = Vec::with_capacity(3);
        if let Some(name) = self.name {
            updates.push(ContactUpdate::Name(name));
        }
        if let Some(email) = self.email {
            updates.push(ContactUpdate::Email(email));
        }
        if let Some(opt_in) = self.newsletter_opt_in {
            updates.push(ContactUpdate::NewsletterOptIn(opt_in));
        }
        updates
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

/// The question catalog and answer scale.
async fn list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: &QUESTIONS,
        scale: LikertScale {
            min: LIKERT_MIN,
            max: LIKERT_MAX,
            low_label: LIKERT_LOW_LABEL,
            high_label: LIKERT_HIGH_LABEL,
        },
        reflection_prompt: REFLECTION_PROMPT,
    })
}

/// The band table.
async fn list_bands() -> Json<BandsResponse> {
    Json(BandsResponse {
        min_score: MIN_SCORE,
        max_score: MAX_SCORE,
        bands: &BANDS,
    })
}

/// Open a new assessment session.
async fn open_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (session_id, flow) = state.assessments.open().await?;
    tracing::info!(session_id = %session_id, "assessment session opened");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            state: flow,
        }),
    ))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let flow = state.assessments.state(session_id).await?;
    Ok(Json(SessionResponse {
        session_id,
        state: flow,
    }))
}

async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let session_id = parse_session_id(&id)?;
    state.assessments.close(session_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// `Intro -> Questionnaire`.
async fn start(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let result = state.assessments.start(session_id).await?;
    Ok(Json(result.into()))
}

/// Record or replace one answer.
async fn record_answer(
    State(state): State<Arc<AppState>>,
    Path((id, question_id)): Path<(String, String)>,
    ApiJson(body): ApiJson<AnswerRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let question_id: u32 = question_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid question id '{question_id}'")))?;
    let result = state
        .assessments
        .record_answer(session_id, question_id, body.value)
        .await?;
    Ok(Json(result.into()))
}

/// `Questionnaire -> LeadCapture`, blocked until every question is answered.
async fn submit_questionnaire(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let result = state.assessments.submit_questionnaire(session_id).await?;
    Ok(Json(result.into()))
}

/// Edit the lead-capture form.
async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ContactPatch>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let result = state
        .assessments
        .update_contact(session_id, body.into_updates())
        .await?;
    Ok(Json(result.into()))
}

/// `LeadCapture -> Results`, blocked until name and email are present.
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let result = state.assessments.submit_contact(session_id).await?;
    Ok(Json(result.into()))
}

/// Back to the intro with an empty answer set.
async fn reset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let flow = state.assessments.reset(session_id).await?;
    Ok(Json(EventResponse {
        status: EventStatus::Updated,
        reason: None,
        state: flow,
    }))
}

fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid session id '{raw}'")))
}
