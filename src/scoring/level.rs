use crate::domain::{MatchLevel, MatchType, Rank};

use super::ladder::rank_order;

/// The stakes tier a rank plays at.
pub fn rank_to_level(rank: Rank) -> MatchLevel {
    match rank {
        Rank::Novice1 | Rank::Novice2 | Rank::Novice3 => MatchLevel::Bronze,
        Rank::Practitioner1 | Rank::Practitioner2 | Rank::Practitioner3 => MatchLevel::Silver,
        Rank::Expert1 | Rank::Expert2 | Rank::Expert3 => MatchLevel::Gold,
        Rank::Elite1 | Rank::Elite2 | Rank::Elite3 => MatchLevel::Jade,
        Rank::Sage1 | Rank::Sage2 | Rank::Sage3 => MatchLevel::Throne,
    }
}

/// Recommended minimum rank for a table of the given level. A weaker player
/// seated above their tier takes fourth-place penalties at this rank.
pub fn level_min_rank(level: MatchLevel) -> Rank {
    match level {
        MatchLevel::Bronze => Rank::Novice1,
        MatchLevel::Silver => Rank::Practitioner1,
        MatchLevel::Gold => Rank::Expert1,
        MatchLevel::Jade => Rank::Elite1,
        MatchLevel::Throne => Rank::Sage1,
    }
}

/// Match level of a table is the highest tier among the four players.
pub fn resolve_level(ranks: &[Rank; 4]) -> MatchLevel {
    ranks
        .iter()
        .map(|&r| rank_to_level(r))
        .max()
        .unwrap_or(MatchLevel::Bronze)
}

/// Extra pt awarded to first and second place, by level and session length.
pub fn bonus_table(level: MatchLevel, match_type: MatchType) -> [i32; 2] {
    match (level, match_type) {
        (MatchLevel::Bronze, MatchType::East) => [10, 5],
        (MatchLevel::Bronze, MatchType::South) => [20, 10],
        (MatchLevel::Silver, MatchType::East) => [20, 10],
        (MatchLevel::Silver, MatchType::South) => [40, 20],
        (MatchLevel::Gold, MatchType::East) => [40, 20],
        (MatchLevel::Gold, MatchType::South) => [80, 40],
        (MatchLevel::Jade, MatchType::East) => [55, 30],
        (MatchLevel::Jade, MatchType::South) => [110, 55],
        (MatchLevel::Throne, MatchType::East) => [60, 30],
        (MatchLevel::Throne, MatchType::South) => [120, 60],
    }
}

/// Fourth-place penalty magnitude for a rank, to be subtracted.
pub fn fourth_place_penalty(rank: Rank, match_type: MatchType) -> i32 {
    let (east, south) = match rank {
        Rank::Novice1 | Rank::Novice2 | Rank::Novice3 => (0, 0),
        Rank::Practitioner1 => (10, 20),
        Rank::Practitioner2 => (20, 40),
        Rank::Practitioner3 => (30, 60),
        Rank::Expert1 => (40, 80),
        Rank::Expert2 => (50, 100),
        Rank::Expert3 => (60, 120),
        Rank::Elite1 => (80, 165),
        Rank::Elite2 => (90, 180),
        Rank::Elite3 => (100, 195),
        Rank::Sage1 => (110, 210),
        Rank::Sage2 => (120, 225),
        Rank::Sage3 => (130, 240),
    };
    match match_type {
        MatchType::East => east,
        MatchType::South => south,
    }
}

/// Rank used for the fourth-place penalty: the player's own rank, lifted to
/// the table's recommended minimum when they sit below it.
pub fn effective_penalty_rank(rank: Rank, level: MatchLevel) -> Rank {
    let min_rank = level_min_rank(level);
    if rank_order(rank) < rank_order(min_rank) {
        min_rank
    } else {
        rank
    }
}
