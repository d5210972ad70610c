//! Contact form validation and submission lifecycle
//!
//! Four required fields, one email-shape check, and a small phase machine:
//! `Idle -> Submitting -> Submitted -> Idle`. The success state expires back
//! to idle after a fixed delay; the web layer schedules that through the
//! timer seam so the transition is testable with a simulated clock.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// How long the success state is shown before reverting to idle
pub const SUBMITTED_RESET_MS: u32 = 5000;

lazy_static! {
    /// Basic `local@domain.tld` shape, no whitespace or extra `@`
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex");
}

/// The four form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

/// Field values as typed by the visitor; serialized as the POST body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validate all fields. A field absent from the returned map is valid.
pub fn validate(fields: &ContactFields) -> BTreeMap<FormField, String> {
    let mut errors = BTreeMap::new();

    if fields.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required".to_string());
    }

    if fields.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(fields.email.trim()) {
        errors.insert(FormField::Email, "Invalid email address".to_string());
    }

    if fields.subject.trim().is_empty() {
        errors.insert(FormField::Subject, "Subject is required".to_string());
    }

    if fields.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required".to_string());
    }

    errors
}

/// Submission lifecycle. The submit control stays disabled outside `Idle`,
/// which is the only mutual-exclusion rule in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Start a submission; only valid from `Idle`
    pub fn begin(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Submitting,
            other => other,
        }
    }

    /// Finish the outbound request: success shows the confirmation state,
    /// failure returns straight to idle so the visitor can retry
    pub fn complete(self, ok: bool) -> SubmitPhase {
        match self {
            SubmitPhase::Submitting if ok => SubmitPhase::Submitted,
            SubmitPhase::Submitting => SubmitPhase::Idle,
            other => other,
        }
    }

    /// The confirmation state timing out
    pub fn expire(self) -> SubmitPhase {
        match self {
            SubmitPhase::Submitted => SubmitPhase::Idle,
            other => other,
        }
    }

    /// Whether the submit control accepts a click
    pub fn can_submit(self) -> bool {
        self == SubmitPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "x".to_string(),
            message: "y".to_string(),
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn test_missing_name_is_the_only_error() {
        let fields = ContactFields {
            name: "".to_string(),
            ..valid_fields()
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&FormField::Name).map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let fields = ContactFields {
            subject: "   ".to_string(),
            ..valid_fields()
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FormField::Subject));
    }

    #[test]
    fn test_malformed_email_is_the_only_error() {
        for email in ["not-an-email", "a@b", "a b@c.com", "a@@b.com", "@b.com"] {
            let fields = ContactFields {
                email: email.to_string(),
                ..valid_fields()
            };
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "email {:?}", email);
            assert_eq!(
                errors.get(&FormField::Email).map(String::as_str),
                Some("Invalid email address")
            );
        }
    }

    #[test]
    fn test_empty_form_flags_all_fields() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(&FormField::Email).map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn test_phase_happy_path() {
        let phase = SubmitPhase::Idle.begin();
        assert_eq!(phase, SubmitPhase::Submitting);
        let phase = phase.complete(true);
        assert_eq!(phase, SubmitPhase::Submitted);
        assert_eq!(phase.expire(), SubmitPhase::Idle);
    }

    #[test]
    fn test_phase_failure_returns_to_idle() {
        assert_eq!(SubmitPhase::Submitting.complete(false), SubmitPhase::Idle);
    }

    #[test]
    fn test_phase_blocks_reentry() {
        // a second click while in flight or during the confirmation state
        // must not start another submission
        assert_eq!(SubmitPhase::Submitting.begin(), SubmitPhase::Submitting);
        assert_eq!(SubmitPhase::Submitted.begin(), SubmitPhase::Submitted);
        assert!(!SubmitPhase::Submitting.can_submit());
        assert!(!SubmitPhase::Submitted.can_submit());
        assert!(SubmitPhase::Idle.can_submit());
    }

    #[test]
    fn test_fields_serialize_as_flat_json() {
        let json = serde_json::to_string(&valid_fields()).expect("serialize failed");
        assert!(json.contains("\"name\":\"A\""));
        assert!(json.contains("\"email\":\"a@b.com\""));
        assert!(json.contains("\"subject\":\"x\""));
        assert!(json.contains("\"message\":\"y\""));
    }
}
