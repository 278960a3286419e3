//! Jukebox - birthday-paradox simulation over a song catalog.
//!
//! This module exposes the catalog and simulator for testing and external use.

pub mod build_info;
pub mod catalog;
pub mod errors;
pub mod simulator;

pub use catalog::{Catalog, Song};
pub use errors::{JukeboxError, Result};
pub use simulator::{run_simulation, SimConfig, SimReport};
