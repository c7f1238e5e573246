use serde::{Deserialize, Serialize};

/// Table points every seat holds at the start of a match. The four seats
/// together always carry four times this pool.
pub const STARTING_POINTS: i32 = 25000;

/// The 15-step rank ladder: 5 tiers of 3 sub-levels each, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "novice_1")]
    Novice1,
    #[serde(rename = "novice_2")]
    Novice2,
    #[serde(rename = "novice_3")]
    Novice3,
    #[serde(rename = "practitioner_1")]
    Practitioner1,
    #[serde(rename = "practitioner_2")]
    Practitioner2,
    #[serde(rename = "practitioner_3")]
    Practitioner3,
    #[serde(rename = "expert_1")]
    Expert1,
    #[serde(rename = "expert_2")]
    Expert2,
    #[serde(rename = "expert_3")]
    Expert3,
    #[serde(rename = "elite_1")]
    Elite1,
    #[serde(rename = "elite_2")]
    Elite2,
    #[serde(rename = "elite_3")]
    Elite3,
    #[serde(rename = "sage_1")]
    Sage1,
    #[serde(rename = "sage_2")]
    Sage2,
    #[serde(rename = "sage_3")]
    Sage3,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Novice1 => "novice_1",
            Rank::Novice2 => "novice_2",
            Rank::Novice3 => "novice_3",
            Rank::Practitioner1 => "practitioner_1",
            Rank::Practitioner2 => "practitioner_2",
            Rank::Practitioner3 => "practitioner_3",
            Rank::Expert1 => "expert_1",
            Rank::Expert2 => "expert_2",
            Rank::Expert3 => "expert_3",
            Rank::Elite1 => "elite_1",
            Rank::Elite2 => "elite_2",
            Rank::Elite3 => "elite_3",
            Rank::Sage1 => "sage_1",
            Rank::Sage2 => "sage_2",
            Rank::Sage3 => "sage_3",
        }
    }

    pub fn parse(s: &str) -> Option<Rank> {
        let rank = match s {
            "novice_1" => Rank::Novice1,
            "novice_2" => Rank::Novice2,
            "novice_3" => Rank::Novice3,
            "practitioner_1" => Rank::Practitioner1,
            "practitioner_2" => Rank::Practitioner2,
            "practitioner_3" => Rank::Practitioner3,
            "expert_1" => Rank::Expert1,
            "expert_2" => Rank::Expert2,
            "expert_3" => Rank::Expert3,
            "elite_1" => Rank::Elite1,
            "elite_2" => Rank::Elite2,
            "elite_3" => Rank::Elite3,
            "sage_1" => Rank::Sage1,
            "sage_2" => Rank::Sage2,
            "sage_3" => Rank::Sage3,
            _ => return None,
        };
        Some(rank)
    }
}

/// Session length: an East match ends after the East hands, a South match
/// plays both halves. Selects which bonus/penalty column applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    East,
    South,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::East => "east",
            MatchType::South => "south",
        }
    }

    pub fn parse(s: &str) -> Option<MatchType> {
        match s {
            "east" => Some(MatchType::East),
            "south" => Some(MatchType::South),
            _ => None,
        }
    }
}

/// The seat a player starts the match in. Exactly one of each per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartDirection {
    East,
    South,
    West,
    North,
}

impl StartDirection {
    pub const ALL: [StartDirection; 4] = [
        StartDirection::East,
        StartDirection::South,
        StartDirection::West,
        StartDirection::North,
    ];

    /// Seat index in table order, East first.
    pub fn seat_index(&self) -> usize {
        match self {
            StartDirection::East => 0,
            StartDirection::South => 1,
            StartDirection::West => 2,
            StartDirection::North => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StartDirection::East => "east",
            StartDirection::South => "south",
            StartDirection::West => "west",
            StartDirection::North => "north",
        }
    }

    pub fn parse(s: &str) -> Option<StartDirection> {
        match s {
            "east" => Some(StartDirection::East),
            "south" => Some(StartDirection::South),
            "west" => Some(StartDirection::West),
            "north" => Some(StartDirection::North),
            _ => None,
        }
    }
}

/// Stakes tier of a table, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Bronze,
    Silver,
    Gold,
    Jade,
    Throne,
}

/// The 8 hands of a full session. Strictly ordered, terminal at South 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    East1,
    East2,
    East3,
    East4,
    South1,
    South2,
    South3,
    South4,
}

impl Default for Round {
    fn default() -> Self {
        Round::East1
    }
}

impl Round {
    /// The hand after this one. South 4 has no successor and stays put.
    pub fn next(&self) -> Round {
        match self {
            Round::East1 => Round::East2,
            Round::East2 => Round::East3,
            Round::East3 => Round::East4,
            Round::East4 => Round::South1,
            Round::South1 => Round::South2,
            Round::South2 => Round::South3,
            Round::South3 => Round::South4,
            Round::South4 => Round::South4,
        }
    }

    /// Hand number within the current half, 1 through 4. The dealer seat
    /// cycles on this number alone; the half never shifts the rotation.
    pub fn hand_number(&self) -> usize {
        match self {
            Round::East1 | Round::South1 => 1,
            Round::East2 | Round::South2 => 2,
            Round::East3 | Round::South3 => 3,
            Round::East4 | Round::South4 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_roundtrips_through_text() {
        for s in ["novice_1", "practitioner_3", "sage_3"] {
            let rank = Rank::parse(s).unwrap();
            assert_eq!(rank.as_str(), s);
        }
        assert!(Rank::parse("grandmaster_1").is_none());
    }

    #[test]
    fn test_round_is_terminal_at_south_4() {
        assert_eq!(Round::East4.next(), Round::South1);
        assert_eq!(Round::South4.next(), Round::South4);
    }

    #[test]
    fn test_dealer_cycle_repeats_across_halves() {
        assert_eq!(Round::East1.hand_number(), Round::South1.hand_number());
        assert_eq!(Round::East3.hand_number(), 3);
    }
}
