use log::debug;

use crate::domain::Rank;

use super::ladder::{is_highest, is_lowest, next_rank, previous_rank, rank_config, RANK_ORDER};

/// Tiers that can drop a rank on a pt deficit. Novice and Practitioner are
/// floor-only: their pt clamps at 0 instead.
fn is_demotable(rank: Rank) -> bool {
    !matches!(
        rank,
        Rank::Novice1
            | Rank::Novice2
            | Rank::Novice3
            | Rank::Practitioner1
            | Rank::Practitioner2
            | Rank::Practitioner3
    )
}

/// Apply a pt delta to a player's (rank, pt), carrying overflow and deficit
/// across rank boundaries until stable.
///
/// A large gain can cascade through several promotions, each carrying the
/// excess over the threshold into the next rank on top of its initial pt; a
/// deficit demotes non-entry tiers, carrying the shortfall below the new
/// rank's initial pt. The loop is bounded by the ladder height even though
/// the table alone guarantees termination. The result is always in
/// `[0, promotion_pt(new_rank)]`.
pub fn apply_pt_delta(rank: Rank, pt: i32, delta: i32) -> (Rank, i32) {
    let mut current_rank = rank;
    let mut current_pt = pt + delta;

    for _ in 0..RANK_ORDER.len() {
        let config = rank_config(current_rank);

        if current_pt >= config.promotion_pt && !is_highest(current_rank) {
            let excess = current_pt - config.promotion_pt;
            current_rank = next_rank(current_rank);
            current_pt = rank_config(current_rank).initial_pt + excess;
        } else if current_pt < 0 && !is_lowest(current_rank) && is_demotable(current_rank) {
            let deficit = -current_pt;
            current_rank = previous_rank(current_rank);
            current_pt = rank_config(current_rank).initial_pt - deficit;
        } else {
            break;
        }
    }

    // Terminal normalization: entry tiers and the bottom rank never go
    // negative, and Sage3 pt is capped at its threshold.
    if current_pt < 0 {
        current_pt = 0;
    }
    let ceiling = rank_config(current_rank).promotion_pt;
    if is_highest(current_rank) && current_pt > ceiling {
        current_pt = ceiling;
    }

    if current_rank != rank {
        debug!(
            "Rank change {} -> {} (pt {})",
            rank.as_str(),
            current_rank.as_str(),
            current_pt
        );
    }

    (current_rank, current_pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gain_without_promotion() {
        assert_eq!(apply_pt_delta(Rank::Expert1, 100, 50), (Rank::Expert1, 150));
    }

    #[test]
    fn test_promotion_carries_excess() {
        // Novice1 promotes at 10; excess 5 lands on Novice2's initial 0.
        assert_eq!(apply_pt_delta(Rank::Novice1, 0, 15), (Rank::Novice2, 5));
        // Practitioner3 promotes at 500 into Expert1 (initial 300).
        assert_eq!(
            apply_pt_delta(Rank::Practitioner3, 480, 40),
            (Rank::Expert1, 320)
        );
    }

    #[test]
    fn test_large_gain_cascades_through_promotions() {
        // 0 + 200 from Novice1: promote at 10 (excess 190), at 40
        // (excess 150), at 100 (excess 50), landing on Practitioner1's
        // initial 150.
        assert_eq!(apply_pt_delta(Rank::Novice1, 0, 200), (Rank::Practitioner1, 200));
    }

    #[test]
    fn test_demotion_carries_deficit() {
        // Expert2 at 10 losing 50: deficit 40 under Expert1's initial 300.
        assert_eq!(apply_pt_delta(Rank::Expert2, 10, -50), (Rank::Expert1, 260));
    }

    #[test]
    fn test_entry_tiers_clamp_at_zero() {
        // Practitioner1 never demotes to Novice3.
        assert_eq!(
            apply_pt_delta(Rank::Practitioner1, 20, -100),
            (Rank::Practitioner1, 0)
        );
        assert_eq!(apply_pt_delta(Rank::Novice2, 5, -40), (Rank::Novice2, 0));
    }

    #[test]
    fn test_lowest_rank_clamps_at_zero() {
        assert_eq!(apply_pt_delta(Rank::Novice1, 0, -30), (Rank::Novice1, 0));
    }

    #[test]
    fn test_highest_rank_caps_at_threshold() {
        let ceiling = rank_config(Rank::Sage3).promotion_pt;
        assert_eq!(
            apply_pt_delta(Rank::Sage3, ceiling - 10, 500),
            (Rank::Sage3, ceiling)
        );
    }

    #[test]
    fn test_promotion_is_not_reversible_at_the_boundary() {
        // Gaining past a threshold and immediately losing the same amount
        // does not return to the original rank: the demotion lands relative
        // to the lower rank's initial pt, not the promotion point.
        let (rank, pt) = apply_pt_delta(Rank::Expert2, 690, 20);
        assert_eq!((rank, pt), (Rank::Expert3, 510));
        let (back_rank, back_pt) = apply_pt_delta(rank, pt, -20);
        assert_eq!((back_rank, back_pt), (Rank::Expert3, 490));
    }

    #[test]
    fn test_result_is_always_normalized() {
        let deltas = [-5000, -300, -1, 0, 1, 300, 5000, 100000];
        for &rank in &RANK_ORDER {
            for &delta in &deltas {
                let (new_rank, new_pt) = apply_pt_delta(rank, rank_config(rank).initial_pt, delta);
                assert!(new_pt >= 0);
                assert!(new_pt <= rank_config(new_rank).promotion_pt);
            }
        }
    }
}
