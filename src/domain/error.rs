//! Domain errors for the group rotation tool.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration and I/O errors.
///
/// Every variant aborts the process before any search worker starts; none
/// of them can occur once the search is running.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("either --students or --names is required")]
    MissingParticipants,

    #[error("--rounds is required when searching")]
    MissingRounds,

    #[error("at least 2 participants are required, got {0}")]
    TooFewParticipants(usize),

    #[error("--rounds must be at least 1")]
    ZeroRounds,

    #[error("failed to read names file {path}: {source}")]
    NamesUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("names file {0} contains no names")]
    EmptyNames(PathBuf),

    #[error("failed to read session file {path}: {source}")]
    SessionUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed session file {path}: {source}")]
    SessionMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("session file {0} contains no rounds")]
    EmptySession(PathBuf),

    #[error("failed to open output file {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A round could not be completed even at the maximum repeat tolerance.
///
/// This is the search's normal infeasibility signal, not a user-visible
/// error: the worker that hits it throws away its attempt and starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unused participant satisfies the repeat tolerance")]
pub struct Infeasible;
