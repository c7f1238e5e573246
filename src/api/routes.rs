use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    match_records::{get_match_records, submit_match_record},
    players::{create_player, get_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/players", get(get_players).post(create_player))
        .route(
            "/api/v1/match-records",
            get(get_match_records).post(submit_match_record),
        )
        .with_state(state)
}
