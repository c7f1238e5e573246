use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Round, StartDirection, STARTING_POINTS};
use crate::errors::LeagueError;

/// Points committed to the pot by a riichi declaration.
pub const RIICHI_STAKE: i32 = 1000;

/// A seated player inside a live session. Table points only; ladder pt is a
/// different currency and never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPlayer {
    pub id: String,
    pub name: String,
    pub points: i32,
}

impl RoomPlayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points: STARTING_POINTS,
        }
    }
}

/// Live state of one table: four seats, the current hand, the honba counter
/// and the riichi pot.
///
/// A session is a plain value owned by one caller per live game; it is not
/// safe for concurrent mutation and is never persisted. Independent sessions
/// share nothing.
#[derive(Debug, Clone, Default)]
pub struct RoomSession {
    seats: [Option<RoomPlayer>; 4],
    round: Round,
    honba: u32,
    riichi_pot: i32,
}

impl RoomSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every seat and return to East 1 with no honba and an empty pot.
    pub fn reset(&mut self) {
        self.seats = [None, None, None, None];
        self.round = Round::East1;
        self.honba = 0;
        self.riichi_pot = 0;
    }

    pub fn seat_player(&mut self, direction: StartDirection, player: RoomPlayer) {
        self.seats[direction.seat_index()] = Some(player);
    }

    pub fn player_at(&self, direction: StartDirection) -> Option<&RoomPlayer> {
        self.seats[direction.seat_index()].as_ref()
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn honba(&self) -> u32 {
        self.honba
    }

    pub fn riichi_pot(&self) -> i32 {
        self.riichi_pot
    }

    fn require_configured(&self) -> Result<()> {
        if self.seats.iter().any(|seat| seat.is_none()) {
            return Err(LeagueError::RoomNotConfigured.into());
        }
        Ok(())
    }

    /// Deduct the riichi stake from a seat and add it to the pot.
    ///
    /// Refused with `InsufficientPoints` when the seat holds less than the
    /// stake, unless the table allows negative scores.
    pub fn declare_riichi(
        &mut self,
        direction: StartDirection,
        allow_negative_points: bool,
    ) -> Result<()> {
        let seat = self.seats[direction.seat_index()]
            .as_mut()
            .ok_or(LeagueError::RoomNotConfigured)?;

        if seat.points < RIICHI_STAKE && !allow_negative_points {
            return Err(LeagueError::InsufficientPoints.into());
        }
        seat.points -= RIICHI_STAKE;
        self.riichi_pot += RIICHI_STAKE;
        debug!("{} declared riichi, pot at {}", seat.name, self.riichi_pot);
        Ok(())
    }

    /// The seat currently dealing. The hand number within the half selects
    /// the seat; the same four-seat cycle runs in both halves.
    pub fn dealer_seat(&self) -> Result<&RoomPlayer> {
        self.require_configured()?;
        let index = self.round.hand_number() - 1;
        self.seats[index]
            .as_ref()
            .ok_or_else(|| LeagueError::RoomNotConfigured.into())
    }

    /// Settle an exhaustive draw given which seats were tenpai, in seat
    /// order (East, South, West, North).
    ///
    /// Honba always increments. Tenpai seats collect from noten seats:
    /// nothing moves at 0 or 4 tenpai, one tenpai seat collects 1000 from
    /// each other seat, two tenpai seats each collect 1500 from the noten
    /// seat paired with them in seat order, three tenpai seats collect 1000
    /// each from the single noten seat. The round advances only when the
    /// dealer was noten.
    pub fn settle_draw(&mut self, tenpai: [bool; 4]) -> Result<()> {
        self.require_configured()?;

        self.honba += 1;

        let ready: Vec<usize> = (0..4).filter(|&i| tenpai[i]).collect();
        let noten: Vec<usize> = (0..4).filter(|&i| !tenpai[i]).collect();

        match ready.len() {
            1 => {
                for &i in &noten {
                    self.transfer(i, ready[0], 1000);
                }
            }
            2 => {
                for (&from, &to) in noten.iter().zip(ready.iter()) {
                    self.transfer(from, to, 1500);
                }
            }
            3 => {
                for &i in &ready {
                    self.transfer(noten[0], i, 1000);
                }
            }
            // 0 or 4 tenpai: no points move.
            _ => {}
        }

        let dealer_index = self.round.hand_number() - 1;
        if !tenpai[dealer_index] {
            self.round = self.round.next();
        }
        debug!(
            "Draw settled, round {:?}, honba {}",
            self.round, self.honba
        );
        Ok(())
    }

    fn transfer(&mut self, from: usize, to: usize, amount: i32) {
        if let Some(seat) = self.seats[from].as_mut() {
            seat.points -= amount;
        }
        if let Some(seat) = self.seats[to].as_mut() {
            seat.points += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_session() -> RoomSession {
        let mut session = RoomSession::new();
        for (i, direction) in StartDirection::ALL.iter().enumerate() {
            session.seat_player(
                *direction,
                RoomPlayer::new(format!("p{i}"), format!("Player {i}")),
            );
        }
        session
    }

    fn points(session: &RoomSession) -> [i32; 4] {
        StartDirection::ALL.map(|d| session.player_at(d).unwrap().points)
    }

    fn assert_league_error(result: Result<()>, expected: LeagueError) {
        let err = result.unwrap_err();
        assert_eq!(err.downcast_ref::<LeagueError>(), Some(&expected));
    }

    #[test]
    fn test_reset_returns_to_east_1() {
        let mut session = configured_session();
        session.settle_draw([false, true, false, false]).unwrap();
        session.reset();
        assert_eq!(session.round(), Round::East1);
        assert_eq!(session.honba(), 0);
        assert_eq!(session.riichi_pot(), 0);
        assert!(session.player_at(StartDirection::East).is_none());
    }

    #[test]
    fn test_riichi_moves_stake_to_pot() {
        let mut session = configured_session();
        session.declare_riichi(StartDirection::East, false).unwrap();
        assert_eq!(session.player_at(StartDirection::East).unwrap().points, 24000);
        assert_eq!(session.riichi_pot(), 1000);
    }

    #[test]
    fn test_riichi_with_exactly_the_stake_succeeds() {
        let mut session = configured_session();
        let mut player = RoomPlayer::new("p0", "Player 0");
        player.points = 1000;
        session.seat_player(StartDirection::East, player);

        session.declare_riichi(StartDirection::East, false).unwrap();
        assert_eq!(session.player_at(StartDirection::East).unwrap().points, 0);
        assert_eq!(session.riichi_pot(), 1000);
    }

    #[test]
    fn test_riichi_below_the_stake_is_refused() {
        let mut session = configured_session();
        let mut player = RoomPlayer::new("p0", "Player 0");
        player.points = 999;
        session.seat_player(StartDirection::East, player);

        assert_league_error(
            session.declare_riichi(StartDirection::East, false),
            LeagueError::InsufficientPoints,
        );
        assert_eq!(session.riichi_pot(), 0);

        // Allowing negative scores lets the stake through.
        session.declare_riichi(StartDirection::East, true).unwrap();
        assert_eq!(session.player_at(StartDirection::East).unwrap().points, -1);
    }

    #[test]
    fn test_operations_require_all_seats() {
        let mut session = RoomSession::new();
        session.seat_player(StartDirection::East, RoomPlayer::new("p0", "Player 0"));

        assert!(session.dealer_seat().is_err());
        assert_league_error(
            session.settle_draw([true, false, false, false]),
            LeagueError::RoomNotConfigured,
        );
    }

    #[test]
    fn test_dealer_rotates_on_hand_number_in_both_halves() {
        let mut session = configured_session();
        assert_eq!(session.dealer_seat().unwrap().id, "p0");

        // Dealer noten each time: round advances through East 4 into the
        // South half, where the same seat cycle restarts.
        for expected in ["p1", "p2", "p3", "p0", "p1"] {
            session.settle_draw([false, false, false, false]).unwrap();
            assert_eq!(session.dealer_seat().unwrap().id, expected);
        }
    }

    #[test]
    fn test_draw_with_one_tenpai_seat() {
        let mut session = configured_session();
        session.settle_draw([false, true, false, false]).unwrap();
        assert_eq!(points(&session), [24000, 28000, 24000, 24000]);
        assert_eq!(session.honba(), 1);
    }

    #[test]
    fn test_draw_with_two_tenpai_seats_pairs_in_order() {
        let mut session = configured_session();
        session.settle_draw([true, false, true, false]).unwrap();
        // First noten (South) pays first tenpai (East), second noten
        // (North) pays second tenpai (West).
        assert_eq!(points(&session), [26500, 23500, 26500, 23500]);
    }

    #[test]
    fn test_draw_with_three_tenpai_seats() {
        let mut session = configured_session();
        session.settle_draw([true, true, false, true]).unwrap();
        assert_eq!(points(&session), [26000, 26000, 22000, 26000]);
    }

    #[test]
    fn test_draw_with_zero_or_four_tenpai_moves_nothing() {
        let mut session = configured_session();
        session.settle_draw([false, false, false, false]).unwrap();
        session.settle_draw([true, true, true, true]).unwrap();
        assert_eq!(points(&session), [25000; 4]);
        assert_eq!(session.honba(), 2);
    }

    #[test]
    fn test_tenpai_dealer_keeps_the_round() {
        let mut session = configured_session();
        session.settle_draw([true, false, false, false]).unwrap();
        assert_eq!(session.round(), Round::East1);
        assert_eq!(session.honba(), 1);

        session.settle_draw([false, true, false, false]).unwrap();
        assert_eq!(session.round(), Round::East2);
    }

    #[test]
    fn test_round_never_wraps_past_south_4() {
        let mut session = configured_session();
        for _ in 0..10 {
            session.settle_draw([false, false, false, false]).unwrap();
        }
        assert_eq!(session.round(), Round::South4);
    }
}
