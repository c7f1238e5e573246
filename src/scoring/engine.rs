use log::debug;

use crate::domain::{MatchType, STARTING_POINTS};

use super::level::{bonus_table, effective_penalty_rank, fourth_place_penalty, resolve_level};
use super::types::{ScoreEntry, UMA};

/// Convert four raw results into four pt deltas, returned in input order.
///
/// Positions are assigned by table points descending; equal points keep the
/// earlier input entry in the higher position. The pt for a position is
/// `ceil((points - 25000) / 1000) + uma + bonus`, where the bonus term is
/// positive for the top two, zero for third and a rank-dependent penalty for
/// fourth. Uma and bonus cancel across the table; the ceiling term may leave
/// a drift of a few pt.
pub fn calculate_pt_deltas(entries: &[ScoreEntry; 4], match_type: MatchType) -> [i32; 4] {
    let ranks = [
        entries[0].rank,
        entries[1].rank,
        entries[2].rank,
        entries[3].rank,
    ];
    let level = resolve_level(&ranks);
    debug!("Scoring {:?} match at level {:?}", match_type, level);

    // Stable sort: ties keep input order, earlier entry takes the higher
    // position.
    let mut order: Vec<usize> = (0..4).collect();
    order.sort_by(|&a, &b| entries[b].points.cmp(&entries[a].points));

    let bonuses = bonus_table(level, match_type);

    let mut deltas = [0i32; 4];
    for (position, &original_index) in order.iter().enumerate() {
        let entry = entries[original_index];
        let precise = ceil_div(entry.points - STARTING_POINTS, 1000);
        let uma = UMA[position];

        let bonus = match position {
            0 | 1 => bonuses[position],
            2 => 0,
            _ => {
                let penalty_rank = effective_penalty_rank(entry.rank, level);
                -fourth_place_penalty(penalty_rank, match_type)
            }
        };

        deltas[original_index] = precise + uma + bonus;
    }

    deltas
}

/// Integer ceiling division, correct for negative numerators.
fn ceil_div(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) != 0 {
        quotient + 1
    } else {
        quotient
    }
}
