use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{MatchRecordResponse, SubmitMatchRequest};
use crate::services::match_service::MatchService;

#[derive(Deserialize)]
pub struct MatchRecordQuery {
    pub name: String,
}

pub async fn get_match_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MatchRecordQuery>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let service = MatchService::new(state.config.clone());
    match service.match_history(&mut conn, &query.name) {
        Ok(records) => {
            let items: Vec<MatchRecordResponse> =
                records.into_iter().map(MatchRecordResponse::from).collect();
            Json(items).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn submit_match_record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitMatchRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let match_type = request.match_type;
    let seats = request.into_seats();

    let service = MatchService::new(state.config.clone());
    match service.submit_match(&mut conn, &seats, match_type) {
        Ok(stored) => Json(MatchRecordResponse::from(stored)).into_response(),
        Err(e) => error_response(e),
    }
}
