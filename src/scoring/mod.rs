pub mod engine;
pub mod ladder;
pub mod level;
pub mod progression;
pub mod types;

pub use engine::calculate_pt_deltas;
pub use progression::apply_pt_delta;
pub use types::{ScoreEntry, UMA};
