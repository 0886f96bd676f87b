use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::catalog::{show_game, show_game_list, show_slot_list, show_snack_list};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    let games_routers = Router::new()
        .route("/", get(show_game_list))
        .route("/:slug", get(show_game));

    Router::new()
        .nest("/games", games_routers)
        .route("/snacks", get(show_snack_list))
        .route("/slots", get(show_slot_list))
}
