use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry.
///
/// Equality and hashing cover both fields. Ordering is by artist, then by
/// title, using plain byte-wise string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Song {
    // Field order drives the derived `Ord`.
    artist: String,
    title: String,
}

impl Song {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Artist: {}, Title: {}", self.artist, self.title)
    }
}
