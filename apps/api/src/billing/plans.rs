//! Plan catalog shown on the pricing view.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Minor units (cents).
    pub amount_cents: u64,
    pub currency: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[Plan {
    id: "unlimited",
    name: "Unlimited Access",
    description: "Remove the free-tier limit for the rest of this session.",
    amount_cents: 999,
    currency: "USD",
    features: &[
        "Unlimited product page generations",
        "Unlimited category page generations",
        "SEO title, meta description, body and FAQs",
    ],
}];

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

impl Plan {
    /// "9.99" style display amount.
    pub fn display_amount(&self) -> String {
        format!("{}.{:02}", self.amount_cents / 100, self.amount_cents % 100)
    }
}

/// Parses a decimal amount such as "9.99", "9.9" or "10" into cents.
/// More than two fractional digits is rejected rather than rounded.
pub fn parse_amount_cents(amount: &str) -> Option<u64> {
    let amount = amount.trim();
    let (whole, frac) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };
    if whole.is_empty() || frac.len() > 2 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let frac: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_plan() {
        let plan = find_plan("unlimited").unwrap();
        assert_eq!(plan.display_amount(), "9.99");
        assert!(find_plan("lifetime").is_none());
    }

    #[test]
    fn test_parse_amount_cents() {
        assert_eq!(parse_amount_cents("9.99"), Some(999));
        assert_eq!(parse_amount_cents("9.9"), Some(990));
        assert_eq!(parse_amount_cents(" 10 "), Some(1000));
        assert_eq!(parse_amount_cents("10."), Some(1000));
        assert_eq!(parse_amount_cents("9.999"), None);
        assert_eq!(parse_amount_cents("-9.99"), None);
        assert_eq!(parse_amount_cents(".99"), None);
        assert_eq!(parse_amount_cents("abc"), None);
    }
}
