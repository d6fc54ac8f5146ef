//! Command implementations

pub mod play;
pub mod score;
pub mod simulate;

pub use play::{PlayConfig, run_play};
pub use score::{ScoreConfig, ScoreResult, ScoreRule, score_guess};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
