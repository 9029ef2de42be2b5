//! Persisted address list.
//!
//! The list is a plain text file, one address per line, sorted and
//! newline-terminated. It is read whole and overwritten whole.

use crate::error::CheckerError;
use crate::models::AddressSet;
use std::path::Path;

/// Read the address list, or an empty set if it has not been written yet.
pub fn read_address_list_or_default(path: &Path) -> Result<AddressSet, CheckerError> {
    match read_address_list(path) {
        Err(CheckerError::MissingPersistedSet { .. }) => {
            log::info!("No address list at {}, starting empty", path.display());
            Ok(AddressSet::new())
        }
        other => other,
    }
}

/// Read the address list; fails if no expansion has written it.
pub fn read_address_list(path: &Path) -> Result<AddressSet, CheckerError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            log::warn!("Address list not found: {}", path.display());
            CheckerError::MissingPersistedSet {
                path: path.to_path_buf(),
            }
        } else {
            CheckerError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let set = AddressSet::from_lines(&text);
    log::info!("Read {} addresses from {}", set.len(), path.display());
    Ok(set)
}

/// Overwrite the address list with the full sorted set.
pub fn write_address_list(path: &Path, set: &AddressSet) -> Result<(), CheckerError> {
    log::info!("Writing {} addresses to {}", set.len(), path.display());
    std::fs::write(path, set.to_persisted_string()).map_err(|source| CheckerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_ips.txt");
        let err = read_address_list(&path).unwrap_err();
        assert!(matches!(err, CheckerError::MissingPersistedSet { .. }));
    }

    #[test]
    fn test_missing_list_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_ips.txt");
        let set = read_address_list_or_default(&path).expect("empty set");
        assert!(set.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_ips.txt");
        let set = AddressSet::from_lines("10.0.0.2\n10.0.0.10\n");
        write_address_list(&path, &set).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "10.0.0.10\n10.0.0.2\n");
        assert_eq!(read_address_list(&path).unwrap(), set);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_ips.txt");
        std::fs::write(&path, "stale\nlines\nhere\n").unwrap();
        write_address_list(&path, &AddressSet::from_lines("1.1.1.1\n")).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.1.1.1\n");
    }
}
