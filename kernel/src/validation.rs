//! Advisory validation of a booking draft.
//!
//! Every rule maps to one form field and one message; the result is a full
//! field-to-message map rebuilt on each call, never an error. Submission is
//! refused while any field is invalid, but nothing here raises.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::booking::{BookingDraft, BookingField, ValidationResult};

// local@domain.tld shape: no whitespace or extra '@' on either side, at
// least one '.' after the '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Digits plus an optional leading '+', spaces, hyphens and parentheses.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());

/// Validates a draft. Idempotent: the same draft always yields the same
/// result.
pub fn validate(draft: &BookingDraft) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(BookingField::FullName, "Full name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(BookingField::Email, "Email is required".to_string());
    } else if !EMAIL_PATTERN.is_match(&draft.email) {
        errors.insert(
            BookingField::Email,
            "Please enter a valid email address".to_string(),
        );
    }

    if !draft.phone.is_empty() && !PHONE_PATTERN.is_match(&draft.phone) {
        errors.insert(
            BookingField::Phone,
            "Please enter a valid phone number".to_string(),
        );
    }

    if !draft.game_choice.is_made() {
        errors.insert(
            BookingField::GameSlugs,
            "Please select at least one game or choose to decide at venue".to_string(),
        );
    }

    if draft.date.is_none() {
        errors.insert(BookingField::Date, "Please select a date".to_string());
    }

    if draft.time_slot.trim().is_empty() {
        errors.insert(
            BookingField::TimeSlot,
            "Please select a time slot".to_string(),
        );
    }

    if draft.duration == 0 {
        errors.insert(
            BookingField::Duration,
            "Please select a duration".to_string(),
        );
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::booking::GameChoice;

    fn complete_draft() -> BookingDraft {
        let mut draft = BookingDraft {
            full_name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            game_choice: GameChoice::Explicit(BTreeSet::from(["valorant".into()])),
            date: NaiveDate::from_ymd_opt(2030, 1, 1),
            time_slot: "14:00".into(),
            duration: 2,
            snacks: Default::default(),
            notes: String::new(),
        };
        draft.snacks.insert("fries".into(), 2);
        draft.snacks.insert("soda".into(), 0);
        draft
    }

    #[test]
    fn empty_draft_fails_every_required_field() {
        let result = validate(&BookingDraft::default());
        assert!(!result.valid);

        let fields: Vec<_> = result.errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                BookingField::FullName,
                BookingField::Email,
                BookingField::GameSlugs,
                BookingField::Date,
                BookingField::TimeSlot,
                BookingField::Duration,
            ]
        );
        // Phone is optional, an empty one is fine.
        assert!(!result.errors.contains_key(&BookingField::Phone));
    }

    #[test]
    fn complete_draft_is_valid() {
        let result = validate(&complete_draft());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let draft = BookingDraft {
            full_name: "   ".into(),
            ..complete_draft()
        };
        let result = validate(&draft);
        assert_eq!(
            result.errors.get(&BookingField::FullName).map(String::as_str),
            Some("Full name is required")
        );
    }

    #[test]
    fn email_needs_a_dot_after_the_at_sign() {
        let draft = BookingDraft {
            email: "a@b".into(),
            ..complete_draft()
        };
        assert_eq!(
            validate(&draft)
                .errors
                .get(&BookingField::Email)
                .map(String::as_str),
            Some("Please enter a valid email address")
        );

        let draft = BookingDraft {
            email: "a@b.com".into(),
            ..complete_draft()
        };
        assert!(validate(&draft).valid);
    }

    #[test]
    fn phone_accepts_dial_characters_only() {
        let draft = BookingDraft {
            phone: "+91 98765-43210".into(),
            ..complete_draft()
        };
        assert!(validate(&draft).valid);

        let draft = BookingDraft {
            phone: "call me".into(),
            ..complete_draft()
        };
        assert_eq!(
            validate(&draft)
                .errors
                .get(&BookingField::Phone)
                .map(String::as_str),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn decide_at_venue_satisfies_the_game_requirement() {
        let draft = BookingDraft {
            game_choice: GameChoice::DecideAtVenue,
            ..complete_draft()
        };
        assert!(validate(&draft).valid);

        let draft = BookingDraft {
            game_choice: GameChoice::Explicit(BTreeSet::new()),
            ..complete_draft()
        };
        let result = validate(&draft);
        assert_eq!(
            result.errors.get(&BookingField::GameSlugs).map(String::as_str),
            Some("Please select at least one game or choose to decide at venue")
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = BookingDraft {
            email: "broken".into(),
            ..BookingDraft::default()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }
}
