use derive_new::new;
use uuid::Uuid;

use crate::model::{
    booking::{BookingDraft, GameChoice},
    game::Game,
    snack::Snack,
};

/// Text shown in the payload when the guest defers the game choice.
pub const DECIDE_AT_VENUE_TEXT: &str = "Decide at venue";

/// Flat, human-readable payload forwarded to the external form-processing
/// service once a draft has passed validation. Network transport is the
/// forms gateway's job; this type only renders the fields.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SubmitBooking {
    pub reference: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub games: String,
    pub date: String,
    pub time_slot: String,
    pub duration: u32,
    pub total: u64,
    pub snacks: String,
    pub notes: String,
}

impl SubmitBooking {
    /// Renders a validated draft into the outbound payload. `selected_games`
    /// are the already-resolved catalog entries for the draft's slugs.
    pub fn from_draft(
        draft: &BookingDraft,
        selected_games: &[Game],
        snack_catalog: &[Snack],
        total: u64,
    ) -> Self {
        let games = match &draft.game_choice {
            GameChoice::DecideAtVenue => DECIDE_AT_VENUE_TEXT.to_string(),
            GameChoice::Explicit(_) => selected_games
                .iter()
                .map(|g| g.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        };

        let snacks = draft
            .snacks
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .filter_map(|(id, qty)| {
                snack_catalog
                    .iter()
                    .find(|s| &s.id == id)
                    .map(|s| format!("{} x{qty}", s.name))
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self::new(
            Uuid::new_v4(),
            draft.full_name.clone(),
            draft.email.clone(),
            draft.phone.clone(),
            games,
            draft.date.map(|d| d.to_string()).unwrap_or_default(),
            draft.time_slot.clone(),
            draft.duration,
            total,
            snacks,
            draft.notes.clone(),
        )
    }

    /// Field set posted to the form endpoint.
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("reference", self.reference.to_string()),
            ("name", self.full_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("games", self.games.clone()),
            ("date", self.date.clone()),
            ("timeSlot", self.time_slot.clone()),
            ("duration", format!("{} hour(s)", self.duration)),
            ("total", self.total.to_string()),
            ("snacks", self.snacks.clone()),
            ("notes", self.notes.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::id::SnackId;

    fn snack(id: &str, name: &str, price: u32) -> Snack {
        Snack {
            id: SnackId::from(id),
            name: name.into(),
            price,
            icon: None,
        }
    }

    fn game(slug: &str, title: &str) -> Game {
        Game {
            slug: slug.into(),
            title: title.into(),
            platform: "PC".into(),
            price_per_hour: 80,
            description: None,
        }
    }

    #[test]
    fn renders_selected_game_titles() {
        let draft = BookingDraft {
            game_choice: GameChoice::Explicit(BTreeSet::from([
                "valorant".into(),
                "fifa24".into(),
            ])),
            ..BookingDraft::default()
        };
        let selected = [game("fifa24", "FIFA 24"), game("valorant", "Valorant")];
        let event = SubmitBooking::from_draft(&draft, &selected, &[], 0);
        assert_eq!(event.games, "FIFA 24, Valorant");
    }

    #[test]
    fn renders_decide_at_venue() {
        let draft = BookingDraft {
            game_choice: GameChoice::DecideAtVenue,
            ..BookingDraft::default()
        };
        let event = SubmitBooking::from_draft(&draft, &[], &[], 0);
        assert_eq!(event.games, DECIDE_AT_VENUE_TEXT);
    }

    #[test]
    fn renders_only_nonzero_known_snacks() {
        let mut draft = BookingDraft::default();
        draft.snacks.insert("fries".into(), 2);
        draft.snacks.insert("soda".into(), 0);
        draft.snacks.insert("ghost".into(), 3);

        let catalog = [snack("fries", "Fries", 80), snack("soda", "Soda", 60)];
        let event = SubmitBooking::from_draft(&draft, &[], &catalog, 0);
        assert_eq!(event.snacks, "Fries x2");
    }

    #[test]
    fn form_fields_carry_the_computed_total() {
        let draft = BookingDraft {
            duration: 2,
            ..BookingDraft::default()
        };
        let event = SubmitBooking::from_draft(&draft, &[], &[], 358);
        let fields = event.to_form_fields();
        let total = fields.iter().find(|(k, _)| *k == "total").unwrap();
        assert_eq!(total.1, "358");
        let duration = fields.iter().find(|(k, _)| *k == "duration").unwrap();
        assert_eq!(duration.1, "2 hour(s)");
    }
}
