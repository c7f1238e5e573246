use crate::domain::Rank;

/// Fixed placement bonus/malus for positions 1 through 4. Zero-sum by
/// construction, independent of rank or stakes level.
pub const UMA: [i32; 4] = [15, 5, -5, -15];

/// One seat's raw result as fed to the scoring engine.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEntry {
    /// Final table points, part of the fixed 100000 pool.
    pub points: i32,
    /// The player's rank at match time.
    pub rank: Rank,
}
