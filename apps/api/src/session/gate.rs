//! Paywall Gate — decides whether a generation attempt may proceed.

use tracing::info;

use crate::session::model::{Page, SessionState, FREE_GENERATION_LIMIT};

/// Permits or blocks one generation attempt.
///
/// - premium: permitted, nothing changes
/// - free tier exhausted: blocked, the session is routed to the pricing view
///   with the paywall shown, the counter is untouched
/// - otherwise: permitted, the counter goes up by one
pub fn attempt_generation(state: &mut SessionState) -> bool {
    if state.premium {
        return true;
    }

    if state.usage_count >= FREE_GENERATION_LIMIT {
        info!(
            "Free tier exhausted ({}/{}), showing paywall",
            state.usage_count, FREE_GENERATION_LIMIT
        );
        state.paywall_visible = true;
        state.page = Page::Pricing;
        return false;
    }

    state.usage_count += 1;
    true
}
