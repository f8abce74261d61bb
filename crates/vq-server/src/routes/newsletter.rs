//! Footer newsletter sign-up: `/v1/newsletter`

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Build the `/v1/newsletter` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(subscribe))
}

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub subscribed: bool,
}

async fn subscribe(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SubscribeRequest>,
) -> Result<(StatusCode, Json<SubscribeResponse>), AppError> {
    state.assessments.subscribe_newsletter(&body.email).await?;
    tracing::info!("newsletter subscription recorded");
    Ok((
        StatusCode::ACCEPTED,
        Json(SubscribeResponse { subscribed: true }),
    ))
}
