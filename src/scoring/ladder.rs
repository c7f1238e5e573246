use crate::domain::Rank;

/// Per-rank pt configuration: the pt a player enters this rank with when
/// promoted from below, and the pt threshold that promotes them out of it.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    pub initial_pt: i32,
    pub promotion_pt: i32,
}

/// Ladder positions, lowest to highest.
pub const RANK_ORDER: [Rank; 15] = [
    Rank::Novice1,
    Rank::Novice2,
    Rank::Novice3,
    Rank::Practitioner1,
    Rank::Practitioner2,
    Rank::Practitioner3,
    Rank::Expert1,
    Rank::Expert2,
    Rank::Expert3,
    Rank::Elite1,
    Rank::Elite2,
    Rank::Elite3,
    Rank::Sage1,
    Rank::Sage2,
    Rank::Sage3,
];

pub fn rank_config(rank: Rank) -> RankConfig {
    let (initial_pt, promotion_pt) = match rank {
        Rank::Novice1 => (0, 10),
        Rank::Novice2 => (0, 40),
        Rank::Novice3 => (0, 100),
        Rank::Practitioner1 => (150, 300),
        Rank::Practitioner2 => (200, 400),
        Rank::Practitioner3 => (250, 500),
        Rank::Expert1 => (300, 600),
        Rank::Expert2 => (350, 700),
        Rank::Expert3 => (500, 1000),
        Rank::Elite1 => (700, 1400),
        Rank::Elite2 => (800, 1600),
        Rank::Elite3 => (900, 1800),
        Rank::Sage1 => (1000, 2000),
        Rank::Sage2 => (1500, 3000),
        Rank::Sage3 => (2250, 4500),
    };
    RankConfig {
        initial_pt,
        promotion_pt,
    }
}

/// Ladder index of a rank, 0 for Novice1 through 14 for Sage3.
pub fn rank_order(rank: Rank) -> usize {
    RANK_ORDER
        .iter()
        .position(|&r| r == rank)
        .unwrap_or_default()
}

/// The rank above, or the rank itself at the top of the ladder.
pub fn next_rank(rank: Rank) -> Rank {
    let idx = rank_order(rank);
    *RANK_ORDER.get(idx + 1).unwrap_or(&rank)
}

/// The rank below, or the rank itself at the bottom of the ladder.
pub fn previous_rank(rank: Rank) -> Rank {
    let idx = rank_order(rank);
    if idx == 0 {
        rank
    } else {
        RANK_ORDER[idx - 1]
    }
}

pub fn is_highest(rank: Rank) -> bool {
    rank == *RANK_ORDER.last().unwrap_or(&Rank::Sage3)
}

pub fn is_lowest(rank: Rank) -> bool {
    rank == RANK_ORDER[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_total_over_all_ranks() {
        for (idx, &rank) in RANK_ORDER.iter().enumerate() {
            assert_eq!(rank_order(rank), idx);
        }
    }

    #[test]
    fn test_next_and_previous_saturate_at_ends() {
        assert_eq!(next_rank(Rank::Sage3), Rank::Sage3);
        assert_eq!(previous_rank(Rank::Novice1), Rank::Novice1);
        assert_eq!(next_rank(Rank::Novice3), Rank::Practitioner1);
        assert_eq!(previous_rank(Rank::Expert1), Rank::Practitioner3);
    }

    #[test]
    fn test_initial_pt_stays_below_promotion_pt() {
        for &rank in &RANK_ORDER {
            let config = rank_config(rank);
            assert!(config.initial_pt < config.promotion_pt, "{:?}", rank);
        }
    }
}
