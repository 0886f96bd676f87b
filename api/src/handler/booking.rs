use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::booking::{event::SubmitBooking, BookingDraft};
use kernel::{pricing, validation};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{
    BookingAcceptedResponse, BookingDraftRequest, BookingDraftResponse, DraftQuery, QuoteResponse,
};

/// Fresh draft for a new session. A known deep-linked slug pre-selects that
/// game; an unknown or absent one starts the draft empty.
pub async fn show_draft(
    Query(query): Query<DraftQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingDraftResponse>> {
    let draft = match query.game {
        Some(slug) => registry
            .catalog_repository()
            .find_game_by_slug(&slug)
            .await?
            .map(|game| BookingDraft::preselected(game.slug))
            .unwrap_or_default(),
        None => BookingDraft::default(),
    };
    Ok(Json(draft.into()))
}

/// Prices the draft and reports its advisory validation state. Always 200:
/// an incomplete draft is a normal state of the form, not a request error.
pub async fn quote_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<BookingDraftRequest>,
) -> AppResult<Json<QuoteResponse>> {
    req.validate(&())?;

    let hourly_rate = registry.app_config().pricing.hourly_rate;
    let draft = BookingDraft::from(req);
    let snacks = registry.catalog_repository().find_all_snacks().await?;

    let total = pricing::total(&draft, &snacks, hourly_rate);
    let snacks_subtotal = pricing::snacks_subtotal(&draft, &snacks);
    let session_charge = total - snacks_subtotal;

    Ok(Json(QuoteResponse::new(
        hourly_rate,
        session_charge,
        snacks_subtotal,
        total,
        validation::validate(&draft),
    )))
}

/// Accepts a completed draft: validates, prices, forwards the payload to the
/// external form service and takes the slot in the schedule store.
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<BookingDraftRequest>,
) -> AppResult<axum::response::Response> {
    req.validate(&())?;

    let draft = BookingDraft::from(req);

    let result = validation::validate(&draft);
    if !result.valid {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(result)).into_response());
    }

    // An explicitly chosen slug must still exist in the catalog.
    let mut selected_games = Vec::new();
    for slug in draft.game_choice.slugs() {
        let game = registry
            .catalog_repository()
            .find_game_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("unknown game: {slug}")))?;
        selected_games.push(game);
    }

    let snacks = registry.catalog_repository().find_all_snacks().await?;
    let total = pricing::total(&draft, &snacks, registry.app_config().pricing.hourly_rate);

    let event = SubmitBooking::from_draft(&draft, &selected_games, &snacks, total);
    let reference = event.reference;

    registry.forms_gateway().submit(event).await?;

    if let Some(date) = draft.date {
        registry
            .schedule_repository()
            .mark_booked(date, &draft.time_slot)
            .await?;
    }

    Ok((
        StatusCode::CREATED,
        Json(BookingAcceptedResponse::new(reference, total)),
    )
        .into_response())
}
