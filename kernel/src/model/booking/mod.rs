use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::id::{GameSlug, SnackId};

pub mod event;

/// What the guest wants to play. Choosing games and deferring the choice to
/// the venue are mutually exclusive by construction; the only invalid state
/// left is `Explicit` with an empty set, which validation rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameChoice {
    Explicit(BTreeSet<GameSlug>),
    DecideAtVenue,
}

impl Default for GameChoice {
    fn default() -> Self {
        Self::Explicit(BTreeSet::new())
    }
}

impl GameChoice {
    /// True when the requirement "a game is chosen" is satisfied.
    pub fn is_made(&self) -> bool {
        match self {
            Self::Explicit(slugs) => !slugs.is_empty(),
            Self::DecideAtVenue => true,
        }
    }

    /// Explicitly chosen slugs, in stable order. Empty for decide-at-venue.
    pub fn slugs(&self) -> Vec<&GameSlug> {
        match self {
            Self::Explicit(slugs) => slugs.iter().collect(),
            Self::DecideAtVenue => Vec::new(),
        }
    }
}

/// The in-progress booking form state for one guest session. Created empty
/// (or pre-populated from a deep-linked game), mutated field by field, and
/// discarded after submission. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub game_choice: GameChoice,
    pub date: Option<NaiveDate>,
    /// `"HH:MM"` slot token, empty until picked.
    pub time_slot: String,
    /// Whole hours, 0 until picked. The request boundary caps this at 4.
    pub duration: u32,
    /// Requested quantity per snack; an entry with quantity 0 is treated as
    /// absent everywhere.
    pub snacks: BTreeMap<SnackId, u32>,
    pub notes: String,
}

impl BookingDraft {
    /// Empty draft with a single game pre-selected (deep-link entry point).
    pub fn preselected(slug: GameSlug) -> Self {
        Self {
            game_choice: GameChoice::Explicit(BTreeSet::from([slug])),
            ..Self::default()
        }
    }

    /// Adds `delta` to a snack quantity, clamping at zero on the way down.
    pub fn adjust_snack(&mut self, id: SnackId, delta: i64) {
        let current = i64::from(self.snacks.get(&id).copied().unwrap_or(0));
        let next = (current + delta).max(0) as u32;
        if next == 0 {
            self.snacks.remove(&id);
        } else {
            self.snacks.insert(id, next);
        }
    }
}

/// Field keys of the booking form, used to address validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    FullName,
    Email,
    Phone,
    GameSlugs,
    Date,
    TimeSlot,
    Duration,
}

/// Outcome of validating a draft: overall flag plus one human-readable
/// message per currently-invalid field. Recomputed in full on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: BTreeMap<BookingField, String>,
}

impl ValidationResult {
    pub fn from_errors(errors: BTreeMap<BookingField, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
