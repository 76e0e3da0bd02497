use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::billing::payment::{apply_payment_event, PaymentEvent, PaymentOutcome};
use crate::billing::plans::{Plan, PLANS};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::render::{session_view, SessionView};
use crate::session::model::NOTIFICATION_TTL_SECS;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PlanListResponse {
    pub plans: &'static [Plan],
}

#[derive(Serialize)]
pub struct PaymentResponse {
    pub outcome: PaymentOutcome,
    pub session: SessionView,
}

/// GET /api/v1/plans
pub async fn handle_list_plans() -> Json<PlanListResponse> {
    Json(PlanListResponse { plans: PLANS })
}

/// POST /api/v1/sessions/:id/payments
///
/// Payment processor callback. On upgrade, a background task clears the
/// success notification once it expires so it disappears without a client
/// round-trip.
pub async fn handle_payment_callback(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(event): AppJson<PaymentEvent>,
) -> Result<Json<PaymentResponse>, AppError> {
    let (outcome, session, raised) = state
        .sessions
        .update(session_id, |s| {
            let outcome = apply_payment_event(s, &event, Utc::now())?;
            let raised = s.notification.as_ref().map(|n| n.expires_at);
            Ok::<_, AppError>((outcome, session_view(session_id, s, Utc::now()), raised))
        })
        .await??;

    if let (PaymentOutcome::Upgraded, Some(expires_at)) = (outcome, raised) {
        schedule_notification_dismissal(state.sessions.clone(), session_id, expires_at);
    }

    Ok(Json(PaymentResponse { outcome, session }))
}

/// Removes the notification raised at `expires_at` once its TTL has run,
/// leaving any newer notification alone.
fn schedule_notification_dismissal(
    sessions: SessionStore,
    session_id: Uuid,
    expires_at: DateTime<Utc>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ttl = std::time::Duration::from_secs(NOTIFICATION_TTL_SECS as u64);
        tokio::time::sleep(ttl).await;
        let dismissed = sessions
            .update(session_id, |s| {
                let same = s.notification.as_ref().map(|n| n.expires_at) == Some(expires_at);
                if same {
                    s.notification = None;
                }
                same
            })
            .await;
        if let Ok(true) = dismissed {
            debug!("Dismissed payment notification for session {session_id}");
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::generation::generator::{ContentGenerator, GenerationError};
    use crate::generation::models::{GeneratedContent, GenerationRequest};
    use crate::session::model::{Notification, Page};
    use crate::session::premium::PAYMENT_SUCCESS_MESSAGE;

    struct UnusedGenerator;

    #[async_trait]
    impl ContentGenerator for UnusedGenerator {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GeneratedContent, GenerationError> {
            Err(GenerationError::Failed)
        }
    }

    fn app() -> AppState {
        AppState {
            sessions: SessionStore::default(),
            generator: Arc::new(UnusedGenerator),
        }
    }

    fn approved(tx: &str) -> PaymentEvent {
        PaymentEvent::Approved {
            transaction_id: tx.to_string(),
            plan_id: "unlimited".to_string(),
            amount: "9.99".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_notification_dismissed_after_ttl() {
        let state = app();
        let (id, _) = state.sessions.create().await;

        let response =
            handle_payment_callback(State(state.clone()), Path(id), AppJson(approved("TX-1")))
                .await
                .unwrap();
        assert_eq!(response.outcome, PaymentOutcome::Upgraded);
        assert_eq!(response.session.page, Page::Optimizer);

        let stored = state.sessions.snapshot(id).await.unwrap();
        assert_eq!(
            stored.notification.map(|n| n.message).as_deref(),
            Some(PAYMENT_SUCCESS_MESSAGE)
        );

        tokio::time::sleep(Duration::from_secs(NOTIFICATION_TTL_SECS as u64 + 1)).await;

        let stored = state.sessions.snapshot(id).await.unwrap();
        assert!(stored.notification.is_none());
        assert!(stored.premium);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissal_leaves_newer_notification() {
        let sessions = SessionStore::default();
        let (id, _) = sessions.create().await;
        let now = Utc::now();
        let older = Notification::new("first", now);
        sessions
            .update(id, |s| {
                let later = now + chrono::Duration::seconds(1);
                s.notification = Some(Notification::new("second", later));
            })
            .await
            .unwrap();

        schedule_notification_dismissal(sessions.clone(), id, older.expires_at)
            .await
            .unwrap();

        let stored = sessions.snapshot(id).await.unwrap();
        assert_eq!(stored.notification.map(|n| n.message).as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_declined_payment_schedules_nothing() {
        let state = app();
        let (id, _) = state.sessions.create().await;
        let event = PaymentEvent::Error {
            message: "card declined".to_string(),
        };

        let response = handle_payment_callback(State(state.clone()), Path(id), AppJson(event))
            .await
            .unwrap();

        assert_eq!(response.outcome, PaymentOutcome::Declined);
        let stored = state.sessions.snapshot(id).await.unwrap();
        assert!(!stored.premium);
        assert!(stored.notification.is_none());
    }
}
