use thiserror::Error;

/// Domain error kinds the caller can recover from. Everything else travels
/// as plain `anyhow` context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    /// A player name or id did not resolve to a stored player.
    #[error("player not found")]
    PlayerNotFound,

    /// Duplicate/missing start direction, or points not summing to the
    /// fixed table pool.
    #[error("invalid match composition: {0}")]
    InvalidMatchComposition(String),

    /// A player name is already taken.
    #[error("player name already exists")]
    PlayerNameTaken,

    /// A riichi stake was declared without enough table points and negative
    /// scores were not allowed.
    #[error("not enough points to declare riichi")]
    InsufficientPoints,

    /// A settlement operation ran before all four seats were set.
    #[error("room is not fully seated")]
    RoomNotConfigured,
}
