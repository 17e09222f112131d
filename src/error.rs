//! Error types for htmltag
//!
//! Building and rendering nodes never fails. Errors only come from the
//! checked constructors and from writing rendered output to disk.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tag name must not be empty")]
    EmptyName,

    #[error("cannot write to file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_empty_name_display() {
        assert_eq!(Error::EmptyName.to_string(), "tag name must not be empty");
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = Error::io(
            "out/index.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = err.to_string();
        assert!(display.contains("out/index.html"));
        assert!(display.contains("denied"));
        assert!(err.source().is_some());
    }
}
