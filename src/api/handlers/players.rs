use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{CreatePlayerRequest, PlayerResponse};
use crate::database::{self, Player};

#[derive(Deserialize)]
pub struct PlayerQuery {
    pub search_name: Option<String>,
}

fn to_response(player: Player) -> PlayerResponse {
    PlayerResponse {
        id: player.id,
        name: player.name,
        rank: player.rank,
        pt: player.pt,
    }
}

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerQuery>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let pattern = query.search_name.unwrap_or_default();
    match database::players::search_by_name(&mut conn, &pattern) {
        Ok(players) => {
            let items: Vec<PlayerResponse> = players.into_iter().map(to_response).collect();
            Json(items).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePlayerRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Name is required").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::players::create_player(&mut conn, request.name.trim()) {
        Ok(player) => Json(to_response(player)).into_response(),
        Err(e) => error_response(e),
    }
}
