use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{quote_booking, register_booking, show_draft};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking))
        .route("/draft", get(show_draft))
        .route("/quote", post(quote_booking));

    Router::new().nest("/bookings", bookings_routers)
}
