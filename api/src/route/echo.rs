use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::echo::ws_echo;

pub fn build_echo_routers() -> Router<AppRegistry> {
    Router::new().route("/echo", get(ws_echo))
}
