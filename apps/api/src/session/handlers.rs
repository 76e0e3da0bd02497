use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::render::{session_view, SessionView};
use crate::session::navigation::Navigation;
use crate::state::AppState;

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let (id, session) = state.sessions.create().await;
    (StatusCode::CREATED, Json(session_view(id, &session, Utc::now())))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.snapshot(session_id).await?;
    Ok(Json(session_view(session_id, &session, Utc::now())))
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(navigation): AppJson<Navigation>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(session_id, |s| {
            navigation.apply(s);
            session_view(session_id, s, Utc::now())
        })
        .await?;
    Ok(Json(view))
}
