//! Simulation report generation.

use super::play_counts::{PlayCounts, SongPlays};
use crate::catalog::{Catalog, Song};
use crate::errors::{JukeboxError, Result};
use serde::Serialize;

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub num_trials: u32,
    pub catalog_size: usize,

    // Aggregated stats
    pub total_draws: u64,
    /// `ceil(total_draws / num_trials)`
    pub avg_draws_to_duplicate: u64,
    pub shortest_trial: u64,
    pub longest_trial: u64,

    /// Opening draws of the first trial, repeat excluded
    pub first_draws: Vec<Song>,

    pub most_played: SongPlays,
    /// Every song by the most played artist, sorted by title
    pub artist_songs: Vec<SongPlays>,

    /// Final counter for every song, in catalog order
    pub play_counts: Vec<SongPlays>,
}

/// Per-trial length extremes gathered while the trials run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSpan {
    pub shortest: u64,
    pub longest: u64,
}

impl TrialSpan {
    pub fn new(first_len: u64) -> Self {
        Self {
            shortest: first_len,
            longest: first_len,
        }
    }

    pub fn include(&mut self, len: u64) {
        self.shortest = self.shortest.min(len);
        self.longest = self.longest.max(len);
    }
}

impl SimReport {
    /// Build a report from the finished counter table.
    pub fn from_counts(
        catalog: &Catalog,
        num_trials: u32,
        counts: &PlayCounts,
        first_draws: Vec<Song>,
        span: TrialSpan,
    ) -> Result<Self> {
        if num_trials == 0 {
            return Err(JukeboxError::InvalidArgument(
                "number of trials must be positive".to_string(),
            ));
        }

        let most_idx = counts
            .most_played_index()
            .ok_or(JukeboxError::EmptyCatalog)?;
        let play_counts = counts.with_songs(catalog);
        let most_played = play_counts
            .get(most_idx)
            .cloned()
            .ok_or(JukeboxError::IndexOutOfRange {
                index: most_idx,
                len: play_counts.len(),
            })?;

        let mut artist_songs: Vec<SongPlays> = play_counts
            .iter()
            .filter(|entry| entry.song.artist() == most_played.song.artist())
            .cloned()
            .collect();
        artist_songs.sort_by(|a, b| a.song.cmp(&b.song));

        let total_draws = counts.total();

        Ok(Self {
            num_trials,
            catalog_size: catalog.len(),
            total_draws,
            avg_draws_to_duplicate: total_draws.div_ceil(u64::from(num_trials)),
            shortest_trial: span.shortest,
            longest_trial: span.longest,
            first_draws,
            most_played,
            artist_songs,
            play_counts,
        })
    }

    /// Final play count for a song, if it is in the catalog.
    pub fn plays_for(&self, song: &Song) -> Option<u64> {
        self.play_counts
            .iter()
            .find(|entry| &entry.song == song)
            .map(|entry| entry.plays)
    }

    /// List the first recorded draws.
    pub fn first_draws_text(&self) -> String {
        let mut text = format!(
            "\tPrinting first {} songs played...\n",
            self.first_draws.len()
        );
        for song in &self.first_draws {
            text.push_str(&format!("\t\t{}\n", song));
        }
        text
    }

    /// Generate a text report of the aggregate statistics.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("Displaying simulation statistics:\n");
        report.push_str(&format!(
            "\tNumber of simulations run: {}\n",
            self.num_trials
        ));
        report.push_str(&format!(
            "\tTotal number of songs played: {}\n",
            self.total_draws
        ));
        report.push_str(&format!(
            "\tAverage number of songs played per simulation to get duplicate: {}\n",
            self.avg_draws_to_duplicate
        ));
        report.push_str(&format!(
            "\tShortest / longest simulation: {} / {} songs\n",
            self.shortest_trial, self.longest_trial
        ));
        report.push_str(&format!(
            "\tMost played song: \"{}\" by \"{}\"\n",
            self.most_played.song.title(),
            self.most_played.song.artist()
        ));
        report.push_str(&format!(
            "\tAll songs alphabetically by \"{}\":\n",
            self.most_played.song.artist()
        ));
        for entry in &self.artist_songs {
            report.push_str(&format!(
                "\t\t\"{}\" with {} plays\n",
                entry.song.title(),
                entry.plays
            ));
        }

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Catalog, PlayCounts) {
        let catalog = Catalog::from_songs(vec![
            Song::new("A", "Y"),
            Song::new("B", "Z"),
            Song::new("A", "X"),
        ]);
        let mut counts = PlayCounts::new(catalog.len());
        counts.record(2);
        counts.record(0);
        counts.record(2);
        (catalog, counts)
    }

    #[test]
    fn test_report_generation() {
        let (catalog, counts) = scenario();
        let report =
            SimReport::from_counts(&catalog, 1, &counts, vec![], TrialSpan::new(3)).unwrap();

        assert_eq!(report.total_draws, 3);
        assert_eq!(report.avg_draws_to_duplicate, 3);
        assert_eq!(report.catalog_size, 3);
        assert_eq!(report.most_played.song, Song::new("A", "X"));
        assert_eq!(report.most_played.plays, 2);
        assert_eq!(
            report.artist_songs,
            vec![
                SongPlays {
                    song: Song::new("A", "X"),
                    plays: 2
                },
                SongPlays {
                    song: Song::new("A", "Y"),
                    plays: 1
                },
            ]
        );
        assert_eq!(report.plays_for(&Song::new("B", "Z")), Some(0));
        assert_eq!(report.plays_for(&Song::new("C", "W")), None);
    }

    #[test]
    fn test_average_rounds_up() {
        let (catalog, counts) = scenario();
        // 3 draws over 2 trials -> 1.5 -> 2
        let report =
            SimReport::from_counts(&catalog, 2, &counts, vec![], TrialSpan::new(1)).unwrap();
        assert_eq!(report.avg_draws_to_duplicate, 2);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let (catalog, counts) = scenario();
        let err =
            SimReport::from_counts(&catalog, 0, &counts, vec![], TrialSpan::new(0)).unwrap_err();
        assert!(matches!(err, JukeboxError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_table_rejected() {
        let catalog = Catalog::default();
        let err = SimReport::from_counts(&catalog, 1, &PlayCounts::new(0), vec![], TrialSpan::new(0))
            .unwrap_err();
        assert!(matches!(err, JukeboxError::EmptyCatalog));
    }

    #[test]
    fn test_trial_span_tracks_extremes() {
        let mut span = TrialSpan::new(4);
        span.include(2);
        span.include(9);
        span.include(5);
        assert_eq!(span, TrialSpan { shortest: 2, longest: 9 });
    }

    #[test]
    fn test_text_report() {
        let (catalog, counts) = scenario();
        let first = vec![Song::new("A", "X"), Song::new("A", "Y")];
        let report =
            SimReport::from_counts(&catalog, 1, &counts, first, TrialSpan::new(3)).unwrap();

        let text = report.to_text();
        assert!(text.contains("Number of simulations run: 1\n"));
        assert!(text.contains("Total number of songs played: 3\n"));
        assert!(text.contains("to get duplicate: 3\n"));
        assert!(text.contains("Most played song: \"X\" by \"A\"\n"));
        assert!(text.contains("All songs alphabetically by \"A\":\n"));

        let x_line = text.find("\"X\" with 2 plays").unwrap();
        let y_line = text.find("\"Y\" with 1 plays").unwrap();
        assert!(x_line < y_line);

        let preview = report.first_draws_text();
        assert!(preview.starts_with("\tPrinting first 2 songs played...\n"));
        assert!(preview.contains("\t\tArtist: A, Title: Y\n"));
    }

    #[test]
    fn test_json_report() {
        let (catalog, counts) = scenario();
        let report =
            SimReport::from_counts(&catalog, 1, &counts, vec![], TrialSpan::new(3)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["total_draws"], 3);
        assert_eq!(value["most_played"]["song"]["artist"], "A");
        assert_eq!(value["artist_songs"].as_array().unwrap().len(), 2);
    }
}
