use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::AppConfig;
use crate::errors::LeagueError;

pub mod match_records;
pub mod players;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

/// Map domain errors to status codes; everything else is a 500.
pub fn error_response(err: anyhow::Error) -> Response {
    match err.downcast_ref::<LeagueError>() {
        Some(LeagueError::PlayerNotFound) => {
            (StatusCode::NOT_FOUND, "Player not found").into_response()
        }
        Some(LeagueError::InvalidMatchComposition(reason)) => {
            (StatusCode::BAD_REQUEST, reason.clone()).into_response()
        }
        Some(LeagueError::PlayerNameTaken) => {
            (StatusCode::CONFLICT, "Player name already exists").into_response()
        }
        Some(LeagueError::InsufficientPoints) => {
            (StatusCode::BAD_REQUEST, "Not enough points").into_response()
        }
        Some(LeagueError::RoomNotConfigured) => {
            (StatusCode::CONFLICT, "Room is not fully seated").into_response()
        }
        None => {
            log::error!("Unhandled error: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Unknown error").into_response()
        }
    }
}
