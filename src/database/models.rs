use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::domain::{MatchType, Rank, StartDirection};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub rank: Rank,
    pub pt: i32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct MatchRecordRow {
    pub id: i64,
    pub match_type: MatchType,
    pub created_at: NaiveDateTime,
}

/// One seat of a stored match, with the player name joined in.
#[derive(Debug, Clone)]
pub struct MatchSeatRow {
    pub player_id: i64,
    pub player_name: String,
    pub points: i32,
    pub start_direction: StartDirection,
    pub rank: Rank,
    pub pt_delta: i32,
}

/// A seat row as written during match submission.
#[derive(Debug, Clone)]
pub struct NewMatchSeat {
    pub player_id: i64,
    pub points: i32,
    pub start_direction: StartDirection,
    pub rank: Rank,
    pub pt_delta: i32,
}

#[derive(Debug, Clone)]
pub struct StoredMatchRecord {
    pub record: MatchRecordRow,
    pub seats: Vec<MatchSeatRow>,
}

// Closed enums go through their text form in SQLite.

impl ToSql for Rank {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Rank {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Rank::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown rank: {text}").into()))
    }
}

impl ToSql for MatchType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for MatchType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        MatchType::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown match type: {text}").into()))
    }
}

impl ToSql for StartDirection {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for StartDirection {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        StartDirection::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown start direction: {text}").into()))
    }
}
