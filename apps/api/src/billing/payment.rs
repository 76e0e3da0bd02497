//! Payment processor callbacks and how they land on a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::billing::plans::{find_plan, parse_amount_cents};
use crate::errors::AppError;
use crate::session::model::SessionState;
use crate::session::premium::on_payment_success;

/// Exactly one of these arrives per checkout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentEvent {
    Approved {
        transaction_id: String,
        plan_id: String,
        amount: String,
        currency: String,
    },
    Error {
        #[serde(default)]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Premium granted by this callback.
    Upgraded,
    /// Transaction seen before; nothing re-applied.
    AlreadyApplied,
    /// Processor reported an error; session untouched.
    Declined,
}

/// Applies a payment callback. An approval must name a known plan with a
/// matching amount and currency; a mismatch is rejected and changes nothing.
pub fn apply_payment_event(
    state: &mut SessionState,
    event: &PaymentEvent,
    now: DateTime<Utc>,
) -> Result<PaymentOutcome, AppError> {
    match event {
        PaymentEvent::Error { message } => {
            warn!("Payment processor reported an error: {message}");
            Ok(PaymentOutcome::Declined)
        }
        PaymentEvent::Approved {
            transaction_id,
            plan_id,
            amount,
            currency,
        } => {
            let transaction_id = transaction_id.trim();
            if transaction_id.is_empty() {
                return Err(AppError::Validation(
                    "transaction_id cannot be empty".to_string(),
                ));
            }
            if state.processed_transactions.contains(transaction_id) {
                info!("Transaction {transaction_id} already applied, ignoring replay");
                return Ok(PaymentOutcome::AlreadyApplied);
            }

            let plan = find_plan(plan_id)
                .ok_or_else(|| AppError::Validation(format!("Unknown plan '{plan_id}'")))?;
            let paid = parse_amount_cents(amount)
                .ok_or_else(|| AppError::Validation(format!("Invalid amount '{amount}'")))?;
            if paid != plan.amount_cents || !currency.eq_ignore_ascii_case(plan.currency) {
                warn!(
                    "Payment {transaction_id} for plan {} does not match: got {amount} {currency}, expected {} {}",
                    plan.id,
                    plan.display_amount(),
                    plan.currency
                );
                return Err(AppError::Validation(format!(
                    "Payment of {amount} {currency} does not match plan '{}' ({} {})",
                    plan.id,
                    plan.display_amount(),
                    plan.currency
                )));
            }

            state
                .processed_transactions
                .insert(transaction_id.to_string());
            on_payment_success(state, now);
            info!("Applied transaction {transaction_id} for plan {}", plan.id);
            Ok(PaymentOutcome::Upgraded)
        }
    }
}
