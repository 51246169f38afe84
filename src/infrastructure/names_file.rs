//! Loading participant names from a newline-delimited file.

use std::fs;
use std::path::Path;

use crate::domain::error::ConfigError;
use crate::domain::models::Roster;

/// Read one name per line, skipping blank lines. The number of names found
/// becomes the participant count.
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::NamesUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let names: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if names.is_empty() {
        return Err(ConfigError::EmptyNames(path.to_path_buf()));
    }
    Ok(Roster::from_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_names_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Ada\nGrace\n\nKatherine\n").unwrap();

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name(0), "Ada");
        assert_eq!(roster.name(2), "Katherine");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_roster(Path::new("/nonexistent/names.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::NamesUnreadable { .. }));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_roster(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyNames(_)));
    }
}
