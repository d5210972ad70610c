//! Contact form lifecycle tests
//!
//! Validation edge cases plus the full submit lifecycle driven by the fake
//! scheduler, including the timed reset of the success state.

use portfolio_common::{
    validate, ContactFields, FakeScheduler, FormField, SubmitPhase, TimerScheduler,
    SUBMITTED_RESET_MS,
};
use std::cell::Cell;
use std::rc::Rc;

fn filled() -> ContactFields {
    ContactFields {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        subject: "x".to_string(),
        message: "y".to_string(),
    }
}

/// Exactly one error per single missing or malformed field
#[test]
fn test_single_field_errors() {
    let missing_name = ContactFields {
        name: String::new(),
        ..filled()
    };
    let errors = validate(&missing_name);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&FormField::Name));

    let bad_email = ContactFields {
        email: "not-an-email".to_string(),
        ..filled()
    };
    let errors = validate(&bad_email);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&FormField::Email).map(String::as_str),
        Some("Invalid email address")
    );
}

/// A fully valid form yields no errors
#[test]
fn test_valid_form_has_no_errors() {
    assert!(validate(&filled()).is_empty());
}

/// idle -> submitting -> submitted on a successful response, then back to
/// idle exactly when the reset delay elapses on the simulated clock
#[test]
fn test_submit_lifecycle_with_timed_reset() {
    assert!(validate(&filled()).is_empty());

    let phase = Rc::new(Cell::new(SubmitPhase::Idle));
    let mut scheduler = FakeScheduler::new();

    phase.set(phase.get().begin());
    assert_eq!(phase.get(), SubmitPhase::Submitting);
    assert!(!phase.get().can_submit());

    // simulated OK-class endpoint response
    phase.set(phase.get().complete(true));
    assert_eq!(phase.get(), SubmitPhase::Submitted);

    let expiring = phase.clone();
    scheduler.schedule_ms(
        SUBMITTED_RESET_MS,
        Box::new(move || expiring.set(expiring.get().expire())),
    );

    scheduler.advance(u64::from(SUBMITTED_RESET_MS) - 1);
    assert_eq!(phase.get(), SubmitPhase::Submitted);
    scheduler.advance(1);
    assert_eq!(phase.get(), SubmitPhase::Idle);
    assert!(phase.get().can_submit());
}

/// A failed response drops straight back to idle so the visitor can retry
#[test]
fn test_submit_failure_returns_to_idle() {
    let phase = SubmitPhase::Idle.begin().complete(false);
    assert_eq!(phase, SubmitPhase::Idle);
    assert!(phase.can_submit());
}
