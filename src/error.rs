// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Graft
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Graft operations
#[derive(Error, Debug)]
pub enum GraftError {
    /// An input document could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid YAML, or its root has the wrong shape
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    /// The overlay carries no usable identity
    #[error("malformed overlay: {0}")]
    MalformedOverlay(String),

    /// The merged tree could not be re-encoded
    #[error("failed to serialize merged manifest: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Graft operations
pub type Result<T> = std::result::Result<T, GraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_includes_path() {
        let err = GraftError::Read {
            path: PathBuf::from("/tmp/base.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("/tmp/base.yaml"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_parse_error_names_document() {
        let source = serde_yaml::from_str::<serde_yaml::Mapping>("- just\n- a\n- list")
            .expect_err("list should not parse as a mapping");
        let err = GraftError::Parse {
            what: "base document",
            source,
        };
        assert!(err.to_string().contains("base document"));
    }

    #[test]
    fn test_malformed_overlay_display() {
        let err = GraftError::MalformedOverlay("document has no top-level key".to_string());
        assert!(err.to_string().contains("malformed overlay"));
        assert!(err.to_string().contains("no top-level key"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GraftError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_debug() {
        let err = GraftError::MalformedOverlay("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("MalformedOverlay"));
    }
}
