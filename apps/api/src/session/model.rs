//! Per-session state. One `SessionState` holds everything the gate, router,
//! and premium transition read or write.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::generation::models::GeneratedContent;

/// Free generations per session before the paywall kicks in.
pub const FREE_GENERATION_LIMIT: u32 = 20;

/// How long a transient notification stays visible.
pub const NOTIFICATION_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Optimizer,
    Pricing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Product,
    Category,
}

/// A message that dismisses itself once `expires_at` passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            expires_at: now + Duration::seconds(NOTIFICATION_TTL_SECS),
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Free generations consumed. Never decremented.
    pub usage_count: u32,
    /// Unlimited use. Only ever goes false -> true.
    pub premium: bool,
    pub page: Page,
    pub tab: Tab,
    /// Set when the gate blocks an attempt; cleared by navigation or payment.
    pub paywall_visible: bool,
    pub notification: Option<Notification>,
    /// Best-effort debounce while a permitted generation is in flight.
    pub generation_pending: bool,
    /// Payment transaction ids already applied.
    pub processed_transactions: HashSet<String>,
    pub last_content: Option<GeneratedContent>,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Monotonic time of the last access; drives idle eviction.
    pub last_seen: Instant,
}

impl SessionState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            usage_count: 0,
            premium: false,
            page: Page::default(),
            tab: Tab::default(),
            paywall_visible: false,
            notification: None,
            generation_pending: false,
            processed_transactions: HashSet::new(),
            last_content: None,
            last_error: None,
            created_at: now,
            last_seen: Instant::now(),
        }
    }

    /// Free generations left, or `None` once premium.
    pub fn remaining_free(&self) -> Option<u32> {
        if self.premium {
            None
        } else {
            Some(FREE_GENERATION_LIMIT.saturating_sub(self.usage_count))
        }
    }

    pub fn active_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_active(now))
    }

    /// Drops an expired notification. Returns true if one was removed.
    pub fn prune_notification(&mut self, now: DateTime<Utc>) -> bool {
        match &self.notification {
            Some(n) if !n.is_active(now) => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }
}
