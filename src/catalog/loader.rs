//! Parsing of `<SEP>`-delimited catalog records.
//!
//! Each line is one record. Fields 2 and 3 (0-indexed) hold the artist and
//! the title; the remaining fields are track and release identifiers that
//! the simulator never looks at.

use super::types::Song;
use crate::errors::{JukeboxError, Result};
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Field separator used by the catalog source.
pub const FIELD_SEPARATOR: &str = "<SEP>";

const ARTIST_FIELD: usize = 2;
const TITLE_FIELD: usize = 3;

/// Parse a single record. Blank lines yield `None`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_no: usize) -> Result<Option<Song>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() <= TITLE_FIELD {
        return Err(JukeboxError::MalformedRecord {
            line: line_no,
            fields: fields.len(),
        });
    }

    Ok(Some(Song::new(fields[ARTIST_FIELD], fields[TITLE_FIELD])))
}

/// Read every record from `reader`, in source order, duplicates included.
///
/// `origin` names the source in I/O errors.
pub fn read_songs<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Song>> {
    let mut songs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| JukeboxError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

        match parse_record(&line, idx + 1)? {
            Some(song) => songs.push(song),
            None => debug!("Skipping blank line {} in {}", idx + 1, origin.display()),
        }
    }

    if songs.is_empty() {
        return Err(JukeboxError::EmptySource);
    }

    Ok(songs)
}
