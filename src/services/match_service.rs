use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::database::{self, DbConn, NewMatchSeat, Player, StoredMatchRecord};
use crate::domain::{MatchType, StartDirection};
use crate::errors::LeagueError;
use crate::scoring::{apply_pt_delta, calculate_pt_deltas, ScoreEntry};

/// One seat of a submitted match, as it arrives from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatInput {
    pub player_name: String,
    pub points: i32,
    pub start_direction: StartDirection,
}

/// Validates and scores submitted matches and applies the results to the
/// ladder. The service itself does no scoring arithmetic; that lives in
/// `scoring`.
pub struct MatchService {
    config: AppConfig,
}

impl MatchService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Full submission pipeline: validate, resolve players, score, move
    /// every player along the ladder, persist, return the stored record.
    ///
    /// The ladder updates and the record inserts share one transaction, so
    /// a failure anywhere leaves no player moved without a match behind it.
    pub fn submit_match(
        &self,
        conn: &mut DbConn,
        seats: &[SeatInput; 4],
        match_type: MatchType,
    ) -> Result<StoredMatchRecord> {
        self.validate_composition(seats)?;

        let tx = conn
            .transaction()
            .context("Failed to open match submission transaction")?;

        let players = self.resolve_players(&tx, seats)?;

        let entries = [
            ScoreEntry {
                points: seats[0].points,
                rank: players[0].rank,
            },
            ScoreEntry {
                points: seats[1].points,
                rank: players[1].rank,
            },
            ScoreEntry {
                points: seats[2].points,
                rank: players[2].rank,
            },
            ScoreEntry {
                points: seats[3].points,
                rank: players[3].rank,
            },
        ];
        let deltas = calculate_pt_deltas(&entries, match_type);

        let mut seat_rows = Vec::with_capacity(4);
        for ((seat, player), &delta) in seats.iter().zip(players.iter()).zip(deltas.iter()) {
            let (new_rank, new_pt) = apply_pt_delta(player.rank, player.pt, delta);
            database::players::update_rank_and_pt(&tx, player.id, new_rank, new_pt)?;

            seat_rows.push(NewMatchSeat {
                player_id: player.id,
                points: seat.points,
                start_direction: seat.start_direction,
                rank: player.rank,
                pt_delta: delta,
            });
        }
        let seat_rows: [NewMatchSeat; 4] = seat_rows
            .try_into()
            .unwrap_or_else(|_| unreachable!("four seats in, four seat rows out"));

        let record = database::match_records::insert_match_record(
            &tx,
            match_type,
            Utc::now().naive_utc(),
            &seat_rows,
        )?;
        tx.commit().context("Failed to commit match submission")?;

        let stored_seats = database::match_records::load_seats(conn, record.id)?;

        info!(
            "Recorded {:?} match {} with deltas {:?}",
            match_type, record.id, deltas
        );
        Ok(StoredMatchRecord {
            record,
            seats: stored_seats,
        })
    }

    /// A player's match history, newest first.
    pub fn match_history(
        &self,
        conn: &mut DbConn,
        player_name: &str,
    ) -> Result<Vec<StoredMatchRecord>> {
        let player = database::players::find_by_name(conn, player_name)?
            .ok_or(LeagueError::PlayerNotFound)?;
        database::match_records::list_by_player_id(conn, player.id)
    }

    fn validate_composition(&self, seats: &[SeatInput; 4]) -> Result<()> {
        let mut seen = [false; 4];
        for seat in seats {
            let idx = seat.start_direction.seat_index();
            if seen[idx] {
                return Err(LeagueError::InvalidMatchComposition(format!(
                    "duplicate start direction: {}",
                    seat.start_direction.as_str()
                ))
                .into());
            }
            seen[idx] = true;
        }
        // Four seats with no duplicates covers every direction exactly once.

        let total: i32 = seats.iter().map(|s| s.points).sum();
        let pool = self.config.match_rules.table_point_pool;
        if total != pool {
            return Err(LeagueError::InvalidMatchComposition(format!(
                "points sum to {total}, expected {pool}"
            ))
            .into());
        }

        Ok(())
    }

    fn resolve_players(
        &self,
        conn: &rusqlite::Connection,
        seats: &[SeatInput; 4],
    ) -> Result<[Player; 4]> {
        let mut players = Vec::with_capacity(4);
        for seat in seats {
            let player = database::players::find_by_name(conn, &seat.player_name)?
                .ok_or(LeagueError::PlayerNotFound)?;
            players.push(player);
        }
        Ok(players
            .try_into()
            .unwrap_or_else(|_| unreachable!("four seats resolve to four players")))
    }
}
