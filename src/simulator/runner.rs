//! Draw-until-repeat trial loop.
//!
//! Each trial draws songs uniformly, with replacement, until a song comes up
//! a second time within the same trial. Every draw, the repeat included, is
//! counted in the play table.

use super::config::{SimConfig, DEFAULT_PREVIEW_LEN};
use super::draws::DrawSource;
use super::play_counts::PlayCounts;
use super::report::{SimReport, TrialSpan};
use crate::catalog::{Catalog, Song};
use crate::errors::{JukeboxError, Result};
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Run the full simulation with a ChaCha8 source seeded from `config`.
pub fn run_simulation(config: &SimConfig, catalog: &Catalog) -> Result<SimReport> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    debug!(
        "Simulation config: {} trials, seed {}, preview {}",
        config.num_trials, config.seed, config.preview_len
    );
    run_trials_with_preview(catalog, config.num_trials, config.preview_len, &mut rng)
}

/// Run `num_trials` trials drawing from `draws` and aggregate the results.
pub fn run_trials<D>(catalog: &Catalog, num_trials: u32, draws: &mut D) -> Result<SimReport>
where
    D: DrawSource + ?Sized,
{
    run_trials_with_preview(catalog, num_trials, DEFAULT_PREVIEW_LEN, draws)
}

/// Same as [`run_trials`], recording up to `preview_len` draws of trial 0.
pub fn run_trials_with_preview<D>(
    catalog: &Catalog,
    num_trials: u32,
    preview_len: usize,
    draws: &mut D,
) -> Result<SimReport>
where
    D: DrawSource + ?Sized,
{
    if num_trials == 0 {
        return Err(JukeboxError::InvalidArgument(
            "number of trials must be positive".to_string(),
        ));
    }
    if catalog.is_empty() {
        return Err(JukeboxError::EmptyCatalog);
    }

    info!(
        "Running {} trials against {} songs",
        num_trials,
        catalog.len()
    );

    let mut stats = SimStats::new(catalog.len(), preview_len);
    let mut span: Option<TrialSpan> = None;

    for trial_idx in 0..num_trials {
        let trial_len = stats.simulate_single_trial(catalog, draws, trial_idx == 0)?;
        trace!("Trial {} ended after {} draws", trial_idx, trial_len);

        span.get_or_insert(TrialSpan::new(trial_len))
            .include(trial_len);
    }

    let span = span.unwrap_or(TrialSpan::new(0));
    let report = SimReport::from_counts(
        catalog,
        num_trials,
        &stats.play_counts,
        stats.first_draws,
        span,
    )?;

    info!(
        "Simulation finished: {} draws, {} per trial on average",
        report.total_draws, report.avg_draws_to_duplicate
    );
    Ok(report)
}

/// Counters shared by every trial of one run.
struct SimStats {
    play_counts: PlayCounts,
    first_draws: Vec<Song>,
    preview_len: usize,
    // Reused across trials to avoid reallocating
    seen: HashSet<usize>,
}

impl SimStats {
    fn new(catalog_len: usize, preview_len: usize) -> Self {
        Self {
            play_counts: PlayCounts::new(catalog_len),
            first_draws: Vec::with_capacity(preview_len),
            preview_len,
            seen: HashSet::new(),
        }
    }

    /// Draw until a repeat and return how many draws the trial took.
    fn simulate_single_trial<D>(
        &mut self,
        catalog: &Catalog,
        draws: &mut D,
        record_preview: bool,
    ) -> Result<u64>
    where
        D: DrawSource + ?Sized,
    {
        self.seen.clear();
        let mut trial_len = 0;

        loop {
            let index = draws.draw_index(catalog.len());
            let song = catalog.song_at(index)?;

            self.play_counts.record(index);
            trial_len += 1;

            if !self.seen.insert(index) {
                return Ok(trial_len);
            }

            if record_preview && self.first_draws.len() < self.preview_len {
                self.first_draws.push(song.clone());
            }
        }
    }
}
