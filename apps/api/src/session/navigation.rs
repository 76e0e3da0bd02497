//! Page Router — plain assignments over `page` and `tab`.

use serde::Deserialize;

use crate::session::model::{Page, SessionState, Tab};

pub fn navigate_home(state: &mut SessionState) {
    state.page = Page::Home;
    state.paywall_visible = false;
}

pub fn navigate_to_pricing(state: &mut SessionState) {
    state.page = Page::Pricing;
}

/// Opens the optimizer on `tab`.
pub fn navigate_to_optimizer(state: &mut SessionState, tab: Tab) {
    state.page = Page::Optimizer;
    state.tab = tab;
    state.paywall_visible = false;
}

/// Body of `POST /sessions/:id/navigate`. Unknown pages or tabs fail to
/// deserialize and never reach the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Navigation {
    Home,
    Pricing,
    Optimizer {
        #[serde(default)]
        tab: Tab,
    },
}

impl Navigation {
    pub fn apply(self, state: &mut SessionState) {
        match self {
            Navigation::Home => navigate_home(state),
            Navigation::Pricing => navigate_to_pricing(state),
            Navigation::Optimizer { tab } => navigate_to_optimizer(state, tab),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_navigate_to_optimizer_sets_tab() {
        let mut state = SessionState::new(Utc::now());
        navigate_to_optimizer(&mut state, Tab::Category);
        assert_eq!(state.page, Page::Optimizer);
        assert_eq!(state.tab, Tab::Category);
    }

    #[test]
    fn test_navigate_home_and_pricing_keep_tab() {
        let mut state = SessionState::new(Utc::now());
        navigate_to_optimizer(&mut state, Tab::Category);
        navigate_to_pricing(&mut state);
        assert_eq!(state.page, Page::Pricing);
        navigate_home(&mut state);
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.tab, Tab::Category);
    }

    #[test]
    fn test_navigation_body_parsing() {
        let nav: Navigation =
            serde_json::from_str(r#"{"page":"optimizer","tab":"category"}"#).unwrap();
        assert_eq!(nav, Navigation::Optimizer { tab: Tab::Category });

        let nav: Navigation = serde_json::from_str(r#"{"page":"optimizer"}"#).unwrap();
        assert_eq!(nav, Navigation::Optimizer { tab: Tab::Product });

        let nav: Navigation = serde_json::from_str(r#"{"page":"home"}"#).unwrap();
        assert_eq!(nav, Navigation::Home);

        assert!(serde_json::from_str::<Navigation>(r#"{"page":"admin"}"#).is_err());
        assert!(
            serde_json::from_str::<Navigation>(r#"{"page":"optimizer","tab":"blog"}"#).is_err()
        );
    }

    #[test]
    fn test_leaving_pricing_hides_paywall() {
        let mut state = SessionState::new(Utc::now());
        state.paywall_visible = true;
        state.page = Page::Pricing;
        Navigation::Optimizer { tab: Tab::Product }.apply(&mut state);
        assert!(!state.paywall_visible);
    }
}
