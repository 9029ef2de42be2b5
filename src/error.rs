//! Error taxonomy for expansion and membership checks.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    /// A range or CIDR line could not be parsed. Recovered per line.
    #[error("Error processing: {line} ({reason})")]
    MalformedRangeLine { line: String, reason: String },

    /// The range file or batch-check file does not exist.
    #[error("File not found: {}", .path.display())]
    MissingInputFile { path: PathBuf },

    /// A check was requested before any expansion wrote the address list.
    #[error("CDN IP list does not exist. Run the script with a range file first.")]
    MissingPersistedSet { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckerError {
    /// Wrap an I/O error, mapping `NotFound` to [`CheckerError::MissingInputFile`].
    pub fn from_input_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CheckerError::MissingInputFile { path }
        } else {
            CheckerError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_maps_to_missing_input() {
        let err = CheckerError::from_input_io(
            "ranges.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, CheckerError::MissingInputFile { .. }));
        assert_eq!(err.to_string(), "File not found: ranges.txt");
    }

    #[test]
    fn test_other_io_kept() {
        let err = CheckerError::from_input_io(
            "ranges.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CheckerError::Io { .. }));
    }

    #[test]
    fn test_malformed_display() {
        let err = CheckerError::MalformedRangeLine {
            line: "abc-def".to_string(),
            reason: "Invalid address abc".to_string(),
        };
        assert_eq!(err.to_string(), "Error processing: abc-def (Invalid address abc)");
    }
}
