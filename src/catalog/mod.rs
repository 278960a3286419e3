//! Song catalog: the fixed set of songs the jukebox draws from.

pub mod loader;
pub mod types;

pub use types::Song;

use crate::errors::{JukeboxError, Result};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An immutable, duplicate-free list of songs.
///
/// Songs keep the order in which they were first seen, so a catalog built
/// from the same source always indexes the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from songs, collapsing structural duplicates.
    pub fn from_songs<I>(songs: I) -> Self
    where
        I: IntoIterator<Item = Song>,
    {
        let mut seen = HashSet::new();
        let songs = songs
            .into_iter()
            .filter(|song| seen.insert(song.clone()))
            .collect();
        Self { songs }
    }

    /// Load a catalog from a `<SEP>`-delimited file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| JukeboxError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records = loader::read_songs(BufReader::new(file), path)?;
        let record_count = records.len();
        let catalog = Self::from_songs(records);
        info!(
            "Loaded {} songs from {} ({} records)",
            catalog.len(),
            path.display(),
            record_count
        );
        Ok(catalog)
    }

    /// Load a catalog from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let records = loader::read_songs(reader, Path::new("<reader>"))?;
        Ok(Self::from_songs(records))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song at a 0-based catalog position.
    pub fn song_at(&self, index: usize) -> Result<&Song> {
        self.songs.get(index).ok_or(JukeboxError::IndexOutOfRange {
            index,
            len: self.songs.len(),
        })
    }

    /// Read-only view of every song in catalog order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn first(&self) -> Option<&Song> {
        self.songs.first()
    }

    pub fn last(&self) -> Option<&Song> {
        self.songs.last()
    }

    /// Catalog position of a song, if present.
    pub fn position(&self, song: &Song) -> Option<usize> {
        self.songs.iter().position(|s| s == song)
    }
}
