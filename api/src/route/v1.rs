use axum::Router;
use registry::AppRegistry;

use super::{
    booking::build_booking_routers, catalog::build_catalog_routers, echo::build_echo_routers,
    health::build_health_check_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_catalog_routers())
        .merge(build_booking_routers())
        .merge(build_echo_routers());
    Router::new().nest("/api/v1", router)
}
