//! Reading previously produced session files.
//!
//! The persisted format is the raw session structure as JSON: an array of
//! rounds, each an array of groups, each an array of participant indices.
//! `--input` reads one of these back for re-rendering without searching.

use std::fs;
use std::path::Path;

use crate::domain::error::ConfigError;
use crate::domain::models::Session;

/// Load and validate a session file.
pub fn load_session(path: &Path) -> Result<Session, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SessionUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let session: Session =
        serde_json::from_str(&raw).map_err(|source| ConfigError::SessionMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    if session.is_empty() {
        return Err(ConfigError::EmptySession(path.to_path_buf()));
    }
    Ok(session)
}
