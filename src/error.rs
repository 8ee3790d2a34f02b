use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The name is not in the event catalog.
    #[error("unknown performance counter `{0}`")]
    UnknownCounter(String),

    /// The kernel refused to open the counter.
    #[error("could not open performance counter `{name}`: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The counter exists but the active stopwatch cannot collect it.
    #[error("performance counter `{0}` is not supported on this platform")]
    Unsupported(String),

    /// Reading from a released counter handle.
    #[error("trying to read from an invalid counter handle")]
    InvalidHandle,

    #[error("expected {expected} bytes from counter read, got {got}")]
    ShortRead { expected: usize, got: usize },

    #[error(transparent)]
    Os(#[from] io::Error),

    #[error(transparent)]
    State(#[from] StateError),
}

impl Error {
    /// Whether the failure came from missing privileges rather than missing hardware.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Open { source, .. } | Error::Os(source) => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

/// Stopwatch operation called in the wrong run state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("cannot add counters while measurements are running")]
    AddWhileRunning,
    #[error("cannot start performance counters; already running")]
    AlreadyRunning,
    #[error("trying to stop non-running performance counters")]
    NotRunning,
    #[error("cannot get counts while counters are active")]
    ReadWhileRunning,
}
