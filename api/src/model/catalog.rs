use chrono::NaiveDate;
use kernel::model::{
    game::Game,
    id::{GameSlug, SnackId},
    slot::TimeSlot,
    snack::Snack,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesResponse {
    pub items: Vec<GameResponse>,
}

impl From<Vec<Game>> for GamesResponse {
    fn from(value: Vec<Game>) -> Self {
        Self {
            items: value.into_iter().map(GameResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub slug: GameSlug,
    pub title: String,
    pub platform: String,
    pub price_per_hour: u32,
    pub description: Option<String>,
}

impl From<Game> for GameResponse {
    fn from(value: Game) -> Self {
        let Game {
            slug,
            title,
            platform,
            price_per_hour,
            description,
        } = value;
        Self {
            slug,
            title,
            platform,
            price_per_hour,
            description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnacksResponse {
    pub items: Vec<SnackResponse>,
}

impl From<Vec<Snack>> for SnacksResponse {
    fn from(value: Vec<Snack>) -> Self {
        Self {
            items: value.into_iter().map(SnackResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackResponse {
    pub id: SnackId,
    pub name: String,
    pub price: u32,
    pub icon: Option<String>,
}

impl From<Snack> for SnackResponse {
    fn from(value: Snack) -> Self {
        let Snack {
            id,
            name,
            price,
            icon,
        } = value;
        Self {
            id,
            name,
            price,
            icon,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotListQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub items: Vec<SlotResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub id: String,
    pub label: String,
    pub available: bool,
}

impl SlotResponse {
    pub fn with_availability(slot: TimeSlot, available: bool) -> Self {
        let TimeSlot { id, label } = slot;
        Self {
            id,
            label,
            available,
        }
    }
}
