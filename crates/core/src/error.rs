//! Typed error types for the pipeline.

use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};

/// Pipeline failures. The scanner itself never fails; every variant here is
/// an I/O condition around it.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DecommentError {
    /// The target path does not exist.
    #[error("path does not exist: {}", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The target path exists but could not be inspected.
    #[error("cannot access {}", path.display())]
    Access {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading a source file failed.
    #[error("failed to read {}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Writing the stripped text back failed. The original file is untouched.
    #[error("failed to write {}", path.display())]
    Write {
        /// The file being replaced.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl DecommentError {
    /// The path the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Access { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// The message with its source chain, e.g.
    /// `failed to read a.js: permission denied`.
    pub fn describe(&self) -> String {
        let mut msg = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            source = err.source();
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_source() {
        let err = DecommentError::Read {
            path: PathBuf::from("a.js"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "failed to read a.js");
        assert_eq!(err.describe(), "failed to read a.js: permission denied");
        assert_eq!(err.path(), Path::new("a.js"));
    }

    #[test]
    fn not_found_has_no_source() {
        let err = DecommentError::NotFound {
            path: PathBuf::from("missing"),
        };
        assert_eq!(err.describe(), "path does not exist: missing");
    }

    #[test]
    fn access_keeps_os_error() {
        let err = DecommentError::Access {
            path: PathBuf::from("locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.describe(), "cannot access locked: permission denied");
        assert_eq!(err.path(), Path::new("locked"));
    }
}
