use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::domain::Rank;
use crate::errors::LeagueError;

const PLAYER_COLUMNS: &str = "id, name, rank, pt, created_at";

/// Insert a new player at the bottom of the ladder with no pt.
pub fn create_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (name, rank, pt) VALUES (?1, ?2, 0) RETURNING {PLAYER_COLUMNS}"
    );

    conn.query_row(&sql, params![name, Rank::Novice1], parse_player_row)
        .map_err(|e| {
            if is_unique_violation(&e) {
                LeagueError::PlayerNameTaken.into()
            } else {
                anyhow::Error::new(e).context("Failed to insert new player")
            }
        })
}

fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE name = ?1");

    conn.query_row(&sql, params![name], parse_player_row)
        .optional()
        .context("Failed to query player by name")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

/// Case-insensitive substring search; an empty pattern lists everyone.
pub fn search_by_name(conn: &Connection, pattern: &str) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE name LIKE ?1 COLLATE NOCASE ORDER BY name"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![format!("%{pattern}%")], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Persist the ladder position computed by rank progression.
pub fn update_rank_and_pt(conn: &Connection, id: i64, rank: Rank, pt: i32) -> Result<()> {
    let updated = conn
        .execute(
            "UPDATE players SET rank = ?1, pt = ?2 WHERE id = ?3",
            params![rank, pt, id],
        )
        .context("Failed to update player rank and pt")?;

    if updated == 0 {
        return Err(LeagueError::PlayerNotFound.into());
    }
    Ok(())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        rank: row.get(2)?,
        pt: row.get(3)?,
        created_at: row.get(4)?,
    })
}
