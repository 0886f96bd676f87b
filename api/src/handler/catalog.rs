use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::{id::GameSlug, slot::generate_slots};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::catalog::{
    GameResponse, GamesResponse, SlotListQuery, SlotResponse, SlotsResponse, SnacksResponse,
};

pub async fn show_game_list(State(registry): State<AppRegistry>) -> AppResult<Json<GamesResponse>> {
    registry
        .catalog_repository()
        .find_all_games()
        .await
        .map(GamesResponse::from)
        .map(Json)
}

pub async fn show_game(
    Path(slug): Path<GameSlug>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GameResponse>> {
    registry
        .catalog_repository()
        .find_game_by_slug(&slug)
        .await
        .and_then(|game| match game {
            Some(game) => Ok(Json(game.into())),
            None => Err(AppError::EntityNotFound("game not found".into())),
        })
}

pub async fn show_snack_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SnacksResponse>> {
    registry
        .catalog_repository()
        .find_all_snacks()
        .await
        .map(SnacksResponse::from)
        .map(Json)
}

/// Lists the day's slots with availability resolved against the schedule
/// store for the queried date.
pub async fn show_slot_list(
    Query(query): Query<SlotListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotsResponse>> {
    let hours = &registry.app_config().hours;
    let booked = registry
        .schedule_repository()
        .booked_slots(query.date)
        .await?;

    let items = generate_slots(hours.open_hour, hours.close_hour)
        .into_iter()
        .map(|slot| {
            let available = !booked.contains(&slot.id);
            SlotResponse::with_availability(slot, available)
        })
        .collect();

    Ok(Json(SlotsResponse {
        date: query.date,
        items,
    }))
}
