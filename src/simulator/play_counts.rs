//! Per-song play counter table.

use crate::catalog::{Catalog, Song};
use serde::{Deserialize, Serialize};

/// A song paired with the number of times it was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPlays {
    pub song: Song,
    pub plays: u64,
}

/// Play counters indexed by catalog position.
///
/// Created zeroed for one run and only ever incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCounts {
    counts: Vec<u64>,
}

impl PlayCounts {
    pub fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Count one draw of the song at `index`.
    pub fn record(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    pub fn get(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counters, i.e. the number of draws recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Index of the highest counter. Ties go to the lowest index.
    pub fn most_played_index(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (idx, &count) in self.counts.iter().enumerate() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((idx, count)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Pair every counter with its song, in catalog order.
    pub fn with_songs(&self, catalog: &Catalog) -> Vec<SongPlays> {
        catalog
            .songs()
            .iter()
            .zip(&self.counts)
            .map(|(song, &plays)| SongPlays {
                song: song.clone(),
                plays,
            })
            .collect()
    }
}
