//! Axum route handler for gated content generation.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::generation::models::{GeneratedContent, GenerationRequest};
use crate::render::{session_view, SessionView};
use crate::session::gate::attempt_generation;
use crate::session::model::FREE_GENERATION_LIMIT;
use crate::session::store::SessionStore;
use crate::state::AppState;

const RETRY_MESSAGE: &str = "Content generation failed. Please try again.";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: GeneratedContent,
    pub session: SessionView,
}

/// Clears `generation_pending` if the handler exits before writing back,
/// e.g. the client disconnects and the future is dropped mid-call, or the
/// generator panics.
struct PendingGuard {
    sessions: SessionStore,
    session_id: Uuid,
    armed: bool,
}

impl PendingGuard {
    fn new(sessions: SessionStore, session_id: Uuid) -> Self {
        Self {
            sessions,
            session_id,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.armed {
            warn!(
                "Generation for session {} ended without a result, releasing it",
                self.session_id
            );
            self.sessions.release_pending(self.session_id);
        }
    }
}

/// POST /api/v1/sessions/:id/generate
///
/// 1. validate required fields (no usage consumed on failure)
/// 2. reject if a generation is already in flight for this session
/// 3. paywall gate: may consume one free generation, or route to pricing
/// 4. call the generator with the session unlocked
/// 5. write the outcome back to the session
///
/// If the request is dropped between 3 and 5 the in-flight flag is still
/// released, so the session is never left locked.
///
/// The gate decision in step 3 stands regardless of what step 4 returns.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(request): AppJson<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;

    let tab = request.tab();
    state
        .sessions
        .update(session_id, |session| {
            if session.generation_pending {
                return Err(AppError::GenerationPending);
            }
            if !attempt_generation(session) {
                return Err(AppError::Paywall {
                    limit: FREE_GENERATION_LIMIT,
                });
            }
            session.generation_pending = true;
            session.tab = tab;
            session.last_error = None;
            Ok(())
        })
        .await??;
    let guard = PendingGuard::new(state.sessions.clone(), session_id);

    info!("Generating {tab:?} content for session {session_id}");
    let result = state.generator.generate(&request).await;

    let view = state
        .sessions
        .update(session_id, |session| {
            session.generation_pending = false;
            match &result {
                Ok(content) => session.last_content = Some(content.clone()),
                Err(_) => session.last_error = Some(RETRY_MESSAGE.to_string()),
            }
            session_view(session_id, session, Utc::now())
        })
        .await?;
    guard.disarm();

    let content = result?;
    Ok(Json(GenerateResponse {
        content,
        session: view,
    }))
}
