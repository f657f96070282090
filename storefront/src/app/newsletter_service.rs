//! Newsletter service
//!
//! The "Join the Ledger of Oddities" form. Subscriptions are acknowledged
//! only; nothing is stored or sent.

use regex::Regex;
use serde::Serialize;

use crate::error::AppError;

/// Acknowledgment shown after subscribing
pub const SUBSCRIBED_MESSAGE: &str = "Subscribed. Check your coffin— er, inbox.";

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeAck {
    pub email: String,
    pub message: String,
}

pub struct NewsletterService {
    email_pattern: Regex,
}

impl NewsletterService {
    pub fn new() -> Result<Self, AppError> {
        let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| AppError::Internal(format!("Invalid email pattern: {}", e)))?;
        Ok(Self { email_pattern })
    }

    /// Acknowledge a subscription for a well-formed address
    pub fn subscribe(&self, email: &str) -> Result<SubscribeAck, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if !self.email_pattern.is_match(email) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        tracing::info!("Newsletter subscription received");

        Ok(SubscribeAck {
            email: email.to_string(),
            message: SUBSCRIBED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_valid_email() {
        let service = NewsletterService::new().unwrap();

        let ack = service.subscribe("  you@midnight.io ").unwrap();

        assert_eq!(ack.email, "you@midnight.io");
        assert_eq!(ack.message, SUBSCRIBED_MESSAGE);
    }

    #[test]
    fn subscribe_requires_email() {
        let service = NewsletterService::new().unwrap();

        let err = service.subscribe("   ").unwrap_err().to_string();

        assert!(err.contains("Email is required"));
    }

    #[test]
    fn subscribe_rejects_malformed_email() {
        let service = NewsletterService::new().unwrap();

        for bad in ["midnight.io", "you@", "you@midnight", "a b@c.d", "@midnight.io"] {
            assert!(
                matches!(service.subscribe(bad), Err(AppError::BadRequest(_))),
                "{bad} should be rejected"
            );
        }
    }
}
