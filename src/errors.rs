use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog or running the simulation.
///
/// Nothing in the crate recovers from these; they propagate to the caller,
/// which reports them and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum JukeboxError {
    /// The catalog source could not be opened or read
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog source contained no records
    #[error("catalog source contains no songs")]
    EmptySource,

    /// A record had fewer fields than artist and title require
    #[error("line {line}: expected at least 4 `<SEP>` fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    /// The simulation was given a catalog with no songs
    #[error("cannot simulate an empty catalog")]
    EmptyCatalog,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A catalog position outside `0..len` was requested
    #[error("catalog index {index} out of range for {len} songs")]
    IndexOutOfRange { index: usize, len: usize },
}

impl JukeboxError {
    /// True for failures raised by the catalog loader rather than the simulator.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            JukeboxError::Io { .. } | JukeboxError::EmptySource | JukeboxError::MalformedRecord { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, JukeboxError>;
