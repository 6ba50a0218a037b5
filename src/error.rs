//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library, following the pattern used by crates like `csv` and
//! `serde_json`: library users get typed errors they can match on, application
//! users get clear messages, and source chains remain available for debugging.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::Platform;

/// A specialized [`Result`] type for chatstats operations.
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
///
/// Parser errors abort the failing file immediately and carry enough context
/// (row/record index, raw content) for a user-facing message referencing the
/// offending input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A timestamp value did not match the expected source format.
    ///
    /// For Discord this means the raw string did not match
    /// `YYYY-MM-DDTHH:MM:SS.ffffff` + offset; for Instagram it means
    /// `timestamp_ms` was not an integer.
    #[error("invalid timestamp format: {input}")]
    InvalidTimestamp {
        /// The raw timestamp value as it appeared in the export.
        input: String,
    },

    /// A Discord CSV row was structurally unusable.
    ///
    /// Raised when a row has fewer than 4 columns or its timestamp column
    /// fails normalization. Discord parsing is fail-fast: the first
    /// malformed row aborts the whole file.
    #[error("malformed Discord row {row_index} ({reason}): {raw}")]
    MalformedRow {
        /// Zero-based row index, counting the header as row 0.
        row_index: usize,
        /// The raw row, comma-joined, for error reporting.
        raw: String,
        /// What was wrong with the row.
        reason: String,
    },

    /// An Instagram message object was missing a structurally required field.
    ///
    /// `sender_name` and `timestamp_ms` are required; a message missing
    /// either is an error, not a silent skip.
    #[error("malformed Instagram record at index {index}: {reason}")]
    MalformedRecord {
        /// Zero-based index into the `messages` array.
        index: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// An export contained no rows at all (not even a header).
    #[error("{format} export is empty or missing a header")]
    EmptySource {
        /// The format that was expected (e.g., "Discord CSV").
        format: &'static str,
    },

    /// A file's extension matches no supported export kind.
    #[error("unsupported file type: {} (expected .csv or .json)", path.display())]
    UnsupportedFileType {
        /// The offending path.
        path: PathBuf,
    },

    /// A message author matched neither participant's handle.
    ///
    /// Only raised under [`UnknownPolicy::Fail`](crate::attribution::UnknownPolicy).
    #[error("author {author:?} on {platform} matches neither user1 nor user2")]
    UnattributedAuthor {
        /// The author handle as it appeared in the export.
        author: String,
        /// The platform the message came from.
        platform: Platform,
    },

    /// CSV-level error (unreadable quoting, write failure).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON-level error (invalid document, serialization failure).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidTimestamp {
            input: input.into(),
        }
    }

    /// Creates a malformed Discord row error.
    pub fn malformed_row(
        row_index: usize,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ChatstatsError::MalformedRow {
            row_index,
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed Instagram record error.
    pub fn malformed_record(index: usize, reason: impl Into<String>) -> Self {
        ChatstatsError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Creates an empty source error.
    pub fn empty_source(format: &'static str) -> Self {
        ChatstatsError::EmptySource { format }
    }

    /// Creates an unsupported file type error.
    pub fn unsupported_file_type(path: impl Into<PathBuf>) -> Self {
        ChatstatsError::UnsupportedFileType { path: path.into() }
    }

    /// Creates an unattributed author error.
    pub fn unattributed(author: impl Into<String>, platform: Platform) -> Self {
        ChatstatsError::UnattributedAuthor {
            author: author.into(),
            platform,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a timestamp format error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatstatsError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is a malformed row/record error.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ChatstatsError::MalformedRow { .. } | ChatstatsError::MalformedRecord { .. }
        )
    }

    /// Returns `true` if this is an empty source error.
    pub fn is_empty_source(&self) -> bool {
        matches!(self, ChatstatsError::EmptySource { .. })
    }

    /// Returns `true` if this is an attribution failure.
    pub fn is_unattributed(&self) -> bool {
        matches!(self, ChatstatsError::UnattributedAuthor { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
