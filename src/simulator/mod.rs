//! Birthday-paradox jukebox simulator.
//!
//! Runs many independent trials that each play random songs until one
//! repeats, then aggregates:
//! - Total and average songs played before a duplicate
//! - The most played song and the rest of its artist's catalog
//! - The opening draws of the first trial
//!
//! Runs are reproducible: the default draw source is a ChaCha8 RNG seeded
//! from `SimConfig::seed`.

mod config;
mod draws;
mod play_counts;
mod report;
mod runner;

pub use config::{SimConfig, DEFAULT_PREVIEW_LEN, DEFAULT_SEED};
pub use draws::DrawSource;
pub use play_counts::{PlayCounts, SongPlays};
pub use report::{SimReport, TrialSpan};
pub use runner::{run_simulation, run_trials, run_trials_with_preview};
