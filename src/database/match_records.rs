use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use super::models::{MatchRecordRow, MatchSeatRow, NewMatchSeat, StoredMatchRecord};
use crate::domain::MatchType;

/// Insert a scored match and its four seat rows. Plain inserts; the caller
/// owns the transaction boundary around the whole submission.
pub fn insert_match_record(
    conn: &Connection,
    match_type: MatchType,
    created_at: NaiveDateTime,
    seats: &[NewMatchSeat; 4],
) -> Result<MatchRecordRow> {
    let record: MatchRecordRow = conn
        .query_row(
            "INSERT INTO match_records (match_type, created_at) VALUES (?1, ?2) RETURNING id, match_type, created_at",
            params![match_type, created_at],
            |row| {
                Ok(MatchRecordRow {
                    id: row.get(0)?,
                    match_type: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .context("Failed to insert match record")?;

    for seat in seats {
        conn.execute(
            "INSERT INTO match_seats (match_record_id, player_id, points, start_direction, rank, pt_delta) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                seat.player_id,
                seat.points,
                seat.start_direction,
                seat.rank,
                seat.pt_delta
            ],
        )
        .context("Failed to insert match seat")?;
    }

    Ok(record)
}

/// All matches a player took part in, newest first, seats with player names
/// resolved.
pub fn list_by_player_id(conn: &Connection, player_id: i64) -> Result<Vec<StoredMatchRecord>> {
    let sql = "
        SELECT DISTINCT r.id, r.match_type, r.created_at
        FROM match_records r
        JOIN match_seats s ON s.match_record_id = r.id
        WHERE s.player_id = ?1
        ORDER BY r.created_at DESC, r.id DESC
    ";

    let records = {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![player_id], |row| {
                Ok(MatchRecordRow {
                    id: row.get(0)?,
                    match_type: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to query match records by player")?;
        rows
    };

    records
        .into_iter()
        .map(|record| {
            let seats = load_seats(conn, record.id)?;
            Ok(StoredMatchRecord { record, seats })
        })
        .collect()
}

/// The four seat rows of a stored match, in submission order.
pub fn load_seats(conn: &Connection, match_record_id: i64) -> Result<Vec<MatchSeatRow>> {
    let sql = "
        SELECT s.player_id, p.name, s.points, s.start_direction, s.rank, s.pt_delta
        FROM match_seats s
        JOIN players p ON p.id = s.player_id
        WHERE s.match_record_id = ?1
        ORDER BY s.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_record_id], |row| {
            Ok(MatchSeatRow {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
                points: row.get(2)?,
                start_direction: row.get(3)?,
                rank: row.get(4)?,
                pt_delta: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load match seats")?;

    Ok(rows)
}
