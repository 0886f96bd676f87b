use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{BookingDraft, GameChoice, ValidationResult},
    id::{GameSlug, SnackId},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking draft as the client sends it. All business rules live in the
/// kernel validator and come back as an advisory field-error map; garde only
/// guards structural bounds here.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraftRequest {
    #[garde(skip)]
    pub full_name: String,
    #[garde(skip)]
    pub email: String,
    #[garde(skip)]
    pub phone: String,
    #[garde(skip)]
    pub game_slugs: Vec<GameSlug>,
    #[garde(skip)]
    pub decide_at_venue: bool,
    #[garde(skip)]
    pub date: Option<NaiveDate>,
    #[garde(skip)]
    pub time_slot: String,
    // 0 means "not picked yet" and is reported by the advisory validator.
    #[garde(range(max = 4))]
    pub duration: u32,
    #[garde(skip)]
    pub snacks: BTreeMap<SnackId, u32>,
    #[garde(skip)]
    pub notes: String,
}

impl From<BookingDraftRequest> for BookingDraft {
    fn from(value: BookingDraftRequest) -> Self {
        let BookingDraftRequest {
            full_name,
            email,
            phone,
            game_slugs,
            decide_at_venue,
            date,
            time_slot,
            duration,
            snacks,
            notes,
        } = value;
        // Deferring to the venue clears any explicit picks, mirroring the
        // form control behaviour.
        let game_choice = if decide_at_venue {
            GameChoice::DecideAtVenue
        } else {
            GameChoice::Explicit(BTreeSet::from_iter(game_slugs))
        };
        Self {
            full_name,
            email,
            phone,
            game_choice,
            date,
            time_slot,
            duration,
            snacks,
            notes,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuery {
    /// Deep-linked game slug (`?game=valorant`).
    pub game: Option<GameSlug>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraftResponse {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub game_slugs: Vec<GameSlug>,
    pub decide_at_venue: bool,
    pub date: Option<NaiveDate>,
    pub time_slot: String,
    pub duration: u32,
    pub snacks: BTreeMap<SnackId, u32>,
    pub notes: String,
}

impl From<BookingDraft> for BookingDraftResponse {
    fn from(value: BookingDraft) -> Self {
        let BookingDraft {
            full_name,
            email,
            phone,
            game_choice,
            date,
            time_slot,
            duration,
            snacks,
            notes,
        } = value;
        let (game_slugs, decide_at_venue) = match game_choice {
            GameChoice::Explicit(slugs) => (slugs.into_iter().collect(), false),
            GameChoice::DecideAtVenue => (Vec::new(), true),
        };
        Self {
            full_name,
            email,
            phone,
            game_slugs,
            decide_at_venue,
            date,
            time_slot,
            duration,
            snacks,
            notes,
        }
    }
}

/// Price summary plus the advisory validation state, returned on every
/// quote request.
#[derive(Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub hourly_rate: u32,
    pub session_charge: u64,
    pub snacks_subtotal: u64,
    pub total: u64,
    pub validation: ValidationResult,
}

#[derive(Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct BookingAcceptedResponse {
    pub reference: Uuid,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decide_at_venue_discards_explicit_picks() {
        let req = BookingDraftRequest {
            game_slugs: vec!["valorant".into()],
            decide_at_venue: true,
            ..BookingDraftRequest::default()
        };
        let draft = BookingDraft::from(req);
        assert_eq!(draft.game_choice, GameChoice::DecideAtVenue);
    }

    #[test]
    fn duplicate_slugs_collapse_into_a_set() {
        let req = BookingDraftRequest {
            game_slugs: vec!["csgo".into(), "csgo".into(), "apex".into()],
            ..BookingDraftRequest::default()
        };
        let draft = BookingDraft::from(req);
        assert_eq!(
            draft.game_choice,
            GameChoice::Explicit(BTreeSet::from(["apex".into(), "csgo".into()]))
        );
    }

    #[test]
    fn request_deserializes_with_camel_case_keys_and_defaults() {
        let req: BookingDraftRequest = serde_json::from_str(
            r#"{
                "fullName": "Jane",
                "email": "jane@x.com",
                "gameSlugs": ["valorant"],
                "date": "2030-01-01",
                "timeSlot": "14:00",
                "duration": 2,
                "snacks": {"fries": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(req.full_name, "Jane");
        assert!(req.phone.is_empty());
        assert!(!req.decide_at_venue);
        assert_eq!(req.snacks.get(&SnackId::from("fries")), Some(&2));
    }

    #[test]
    fn oversized_duration_fails_the_structural_bound() {
        let req = BookingDraftRequest {
            duration: 5,
            ..BookingDraftRequest::default()
        };
        assert!(req.validate(&()).is_err());
    }
}
