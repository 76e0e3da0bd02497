//! Stateless projection of a session into what the client should display.
//!
//! Nothing here mutates state. Handlers take a snapshot, project it and
//! return the view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::generation::models::GeneratedContent;
use crate::session::model::{Page, SessionState, Tab, FREE_GENERATION_LIMIT};

#[derive(Debug, Clone, Serialize)]
pub struct NotificationView {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageView {
    pub used: u32,
    pub limit: u32,
    /// `None` once premium.
    pub remaining: Option<u32>,
    pub premium: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub page: Page,
    pub tab: Tab,
    pub show_paywall: bool,
    pub usage: UsageView,
    pub generation_pending: bool,
    pub notification: Option<NotificationView>,
    pub content: Option<GeneratedContent>,
    pub content_markdown: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub fn session_view(session_id: Uuid, state: &SessionState, now: DateTime<Utc>) -> SessionView {
    SessionView {
        session_id,
        page: state.page,
        tab: state.tab,
        show_paywall: state.paywall_visible,
        usage: UsageView {
            used: state.usage_count,
            limit: FREE_GENERATION_LIMIT,
            remaining: state.remaining_free(),
            premium: state.premium,
        },
        generation_pending: state.generation_pending,
        notification: state.active_notification(now).map(|n| NotificationView {
            message: n.message.clone(),
            expires_at: n.expires_at,
        }),
        content: state.last_content.clone(),
        content_markdown: state.last_content.as_ref().map(render_markdown),
        error: state.last_error.clone(),
        created_at: state.created_at,
    }
}

/// Renders generated copy as a single Markdown document, FAQs last.
pub fn render_markdown(content: &GeneratedContent) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", content.title));
    if !content.meta_description.is_empty() {
        out.push_str(&format!("> {}\n\n", content.meta_description));
    }
    out.push_str(content.body.trim_end());
    out.push('\n');

    if !content.faqs.is_empty() {
        out.push_str("\n## Frequently Asked Questions\n");
        for faq in &content.faqs {
            out.push_str(&format!("\n### {}\n\n{}\n", faq.question, faq.answer));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::models::Faq;
    use crate::session::model::Notification;
    use chrono::Duration;

    fn content() -> GeneratedContent {
        GeneratedContent {
            slug: "trail-runner-2".to_string(),
            title: "Trail Runner 2".to_string(),
            meta_description: "Light trail shoes.".to_string(),
            body: "## Grip\n\nSticky rubber.\n".to_string(),
            faqs: vec![
                Faq {
                    question: "Sizing?".to_string(),
                    answer: "True to size.".to_string(),
                },
                Faq {
                    question: "Warranty?".to_string(),
                    answer: "One year.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_markdown_orders_sections() {
        let md = render_markdown(&content());
        let title = md.find("# Trail Runner 2").unwrap();
        let body = md.find("Sticky rubber.").unwrap();
        let faq1 = md.find("### Sizing?").unwrap();
        let faq2 = md.find("### Warranty?").unwrap();
        assert!(title < body && body < faq1 && faq1 < faq2);
    }

    #[test]
    fn test_markdown_without_faqs_has_no_faq_heading() {
        let mut c = content();
        c.faqs.clear();
        assert!(!render_markdown(&c).contains("Frequently Asked"));
    }

    #[test]
    fn test_view_hides_expired_notification() {
        let now = Utc::now();
        let mut state = SessionState::new(now);
        state.notification = Some(Notification::new("done", now));
        let id = Uuid::new_v4();

        assert!(session_view(id, &state, now).notification.is_some());
        assert!(session_view(id, &state, now + Duration::seconds(4))
            .notification
            .is_none());
    }

    #[test]
    fn test_view_reports_usage() {
        let now = Utc::now();
        let mut state = SessionState::new(now);
        state.usage_count = 19;
        state.last_content = Some(content());
        let view = session_view(Uuid::new_v4(), &state, now);
        assert_eq!(view.usage.used, 19);
        assert_eq!(view.usage.remaining, Some(1));
        assert!(view.content_markdown.unwrap().starts_with("# Trail Runner 2"));
    }
}
