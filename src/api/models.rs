use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::StoredMatchRecord;
use crate::domain::{MatchType, Rank, StartDirection};
use crate::services::match_service::SeatInput;

#[derive(Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub rank: Rank,
    pub pt: i32,
}

/// A match submission: four seat results plus the session length.
#[derive(Deserialize)]
pub struct SubmitMatchRequest {
    pub record_1: SeatInput,
    pub record_2: SeatInput,
    pub record_3: SeatInput,
    pub record_4: SeatInput,
    #[serde(default = "default_match_type")]
    pub match_type: MatchType,
}

fn default_match_type() -> MatchType {
    MatchType::South
}

impl SubmitMatchRequest {
    pub fn into_seats(self) -> [SeatInput; 4] {
        [self.record_1, self.record_2, self.record_3, self.record_4]
    }
}

#[derive(Serialize)]
pub struct SeatResponse {
    pub player_name: String,
    pub points: i32,
    pub start_direction: StartDirection,
    pub rank: Rank,
    pub pt: i32,
}

#[derive(Serialize)]
pub struct MatchRecordResponse {
    pub id: i64,
    pub match_type: MatchType,
    pub created_at: NaiveDateTime,
    pub records: Vec<SeatResponse>,
}

impl From<StoredMatchRecord> for MatchRecordResponse {
    fn from(stored: StoredMatchRecord) -> Self {
        Self {
            id: stored.record.id,
            match_type: stored.record.match_type,
            created_at: stored.record.created_at,
            records: stored
                .seats
                .into_iter()
                .map(|seat| SeatResponse {
                    player_name: seat.player_name,
                    points: seat.points,
                    start_direction: seat.start_direction,
                    rank: seat.rank,
                    pt: seat.pt_delta,
                })
                .collect(),
        }
    }
}
