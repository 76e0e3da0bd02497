//! In-memory session store. Sessions live until they sit idle past the TTL
//! or the process exits.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::model::SessionState;

/// Sessions untouched for this long are dropped.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

type Sessions = HashMap<Uuid, SessionState>;

/// Every transition runs inside `update` while the lock is held, so a
/// session is never mutated by two flows at once. Callers must not hold
/// the lock across an external await.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<Sessions>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_SESSION_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Starts a fresh session and returns its id with a copy of its state.
    /// Idle sessions are evicted on the way in.
    pub async fn create(&self) -> (Uuid, SessionState) {
        let id = Uuid::new_v4();
        let state = SessionState::new(Utc::now());
        let mut sessions = self.sessions.lock().await;
        evict_idle(&mut sessions, self.idle_ttl, Instant::now());
        sessions.insert(id, state.clone());
        debug!("Created session {id}");
        (id, state)
    }

    /// Applies `f` to the session and returns its result. Expired
    /// notifications are pruned first and the session is marked as seen.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.lock().await;
        let state = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        state.last_seen = Instant::now();
        state.prune_notification(Utc::now());
        Ok(f(state))
    }

    /// A copy of the session's current state.
    pub async fn snapshot(&self, id: Uuid) -> Result<SessionState, AppError> {
        self.update(id, |state| state.clone()).await
    }

    /// Clears the in-flight flag without awaiting. Used from `Drop`, where
    /// the lock cannot be awaited: if it is contended the clear is handed to
    /// a spawned task instead.
    pub fn release_pending(&self, id: Uuid) {
        fn clear(sessions: &mut Sessions, id: Uuid) {
            if let Some(state) = sessions.get_mut(&id) {
                state.generation_pending = false;
            }
        }

        match self.sessions.try_lock() {
            Ok(mut sessions) => clear(&mut sessions, id),
            Err(_) => {
                if let Ok(runtime) = tokio::runtime::Handle::try_current() {
                    let sessions = self.sessions.clone();
                    runtime.spawn(async move { clear(&mut *sessions.lock().await, id) });
                }
            }
        }
    }

    /// Drops sessions idle longer than the TTL. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        evict_idle(&mut sessions, self.idle_ttl, Instant::now())
    }

    /// Runs `evict_idle` every `interval` for as long as the runtime lives.
    pub fn spawn_idle_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle().await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle sessions");
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

fn evict_idle(sessions: &mut Sessions, idle_ttl: Duration, now: Instant) -> usize {
    let before = sessions.len();
    sessions.retain(|_, state| now.duration_since(state.last_seen) < idle_ttl);
    before - sessions.len()
}
