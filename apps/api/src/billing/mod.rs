// Pricing plans and the payment processor callback.

pub mod handlers;
pub mod payment;
pub mod plans;
