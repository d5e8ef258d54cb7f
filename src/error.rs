//! Unified error types for trackpack.
//!
//! This module provides a single [`TrackpackError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Per-item parse failures are not errors: a block with an unparsable header
//! timestamp is dropped and counted, a message without a track link simply
//! contributes nothing, and a malformed name passes through canonicalization
//! unchanged. The only failures that surface as [`TrackpackError`] are a
//! defective input stream (I/O) and, at the CLI layer, an input that yields
//! nothing recognizable at all.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for trackpack operations.
///
/// # Example
///
/// ```rust
/// use trackpack::error::Result;
/// use trackpack::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TrackpackError>;

/// The error type for all trackpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or known-names file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input doesn't match the expected structure.
    ///
    /// This occurs when a transcript contains no recognizable message
    /// headers at all. Individual unparsable blocks inside an otherwise
    /// valid transcript are dropped, not reported here.
    #[error("Invalid {format} format{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidFormat {
        /// The format that was expected (e.g., "WhatsApp TXT")
        format: &'static str,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TrackpackError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TrackpackError::InvalidFormat {
            format,
            message: message.into(),
            path: None,
        }
    }

    /// Creates an invalid format error carrying the offending file path.
    pub fn invalid_format_in(
        format: &'static str,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        TrackpackError::InvalidFormat {
            format,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TrackpackError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TrackpackError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
