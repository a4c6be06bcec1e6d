//! Email field and submission bookkeeping.

use repmap_core::is_valid_email;
use serde::Serialize;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const SUBMITTING: &str = "Submitting...";
pub const SUBSCRIPTION_SUCCESSFUL: &str = "Subscription successful!";
pub const UNKNOWN_ERROR: &str = "Unknown error occurred.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub email: String,
    /// A signup request is outstanding.
    pub in_flight: bool,
}

impl SignupForm {
    /// The email as it will be submitted, if it is acceptable.
    pub fn validated_email(&self) -> Option<String> {
        let email = self.email.trim();
        is_valid_email(email).then(|| email.to_string())
    }

    pub fn reset(&mut self) {
        self.email.clear();
    }
}

/// Status text for a failed submission.
pub fn failure_text(error: &str) -> String {
    let error = if error.is_empty() { UNKNOWN_ERROR } else { error };
    format!("Error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_email_trims() {
        let form = SignupForm {
            email: "  voter@example.org ".into(),
            in_flight: false,
        };
        assert_eq!(form.validated_email().as_deref(), Some("voter@example.org"));
    }

    #[test]
    fn test_validated_email_rejects() {
        for email in ["", "voter", "voter@example", "a b@example.org", "@example.org"] {
            let form = SignupForm {
                email: email.into(),
                in_flight: false,
            };
            assert_eq!(form.validated_email(), None, "{email:?}");
        }
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(failure_text("db down"), "Error: db down");
        assert_eq!(failure_text(""), "Error: Unknown error occurred.");
    }
}
