//! Premium transition, applied when the payment processor approves a purchase.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::session::model::{Notification, Page, SessionState};

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful! You now have unlimited access.";

/// Unlocks unlimited generation, routes to the optimizer and raises a
/// notification that expires on its own. Safe to call more than once.
pub fn on_payment_success(state: &mut SessionState, now: DateTime<Utc>) {
    if !state.premium {
        info!("Session upgraded to premium after {} free generations", state.usage_count);
    }
    state.premium = true;
    state.paywall_visible = false;
    state.page = Page::Optimizer;
    state.notification = Some(Notification::new(PAYMENT_SUCCESS_MESSAGE, now));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_payment_success_sets_premium_and_routes() {
        let now = Utc::now();
        let mut state = SessionState::new(now);
        state.page = Page::Pricing;
        state.paywall_visible = true;

        on_payment_success(&mut state, now);

        assert!(state.premium);
        assert!(!state.paywall_visible);
        assert_eq!(state.page, Page::Optimizer);
        let note = state.active_notification(now).unwrap();
        assert_eq!(note.message, PAYMENT_SUCCESS_MESSAGE);
        assert!(state.active_notification(now + Duration::seconds(3)).is_none());
    }

    #[test]
    fn test_payment_success_is_idempotent() {
        let now = Utc::now();
        let mut state = SessionState::new(now);
        on_payment_success(&mut state, now);
        on_payment_success(&mut state, now);
        assert!(state.premium);
        assert_eq!(state.page, Page::Optimizer);
    }
}
