use axum::{Router, routing::get};

use super::handlers::classify_ws::classify_ws;
use crate::application::http::server::app_state::AppState;

pub fn classification_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/ws/classify", state.args.server.root_path),
        get(classify_ws),
    )
}
