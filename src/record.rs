//! The canonical message record and its source platform.
//!
//! Both platform parsers convert their native export formats into
//! [`CanonicalMessage`], enabling uniform attribution and aggregation
//! regardless of source.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// A supported source platform.
///
/// Exactly two platforms exist; together with the two participant
/// identities they span the 3×3 statistics matrix.
///
/// # Example
///
/// ```
/// use chatstats::record::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("discord").unwrap(), Platform::Discord);
/// // Aliases are supported
/// assert_eq!(Platform::from_str("ig").unwrap(), Platform::Instagram);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Discord CSV export (header row + `[?, author, timestamp, content]`).
    #[serde(alias = "dc")]
    Discord,

    /// Instagram JSON export from a Meta data download.
    #[serde(alias = "ig")]
    Instagram,
}

impl Platform {
    /// Returns the lowercase key used in mappings and statistics rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Discord => "discord",
            Platform::Instagram => "instagram",
        }
    }

    /// Returns the file extension exports from this platform use.
    pub fn extension(self) -> &'static str {
        match self {
            Platform::Discord => "csv",
            Platform::Instagram => "json",
        }
    }

    /// Detects the export kind from a file path's extension.
    ///
    /// `.csv` is a Discord export, `.json` an Instagram export (both
    /// case-insensitive). Anything else is
    /// [`UnsupportedFileType`](ChatstatsError::UnsupportedFileType).
    ///
    /// # Errors
    ///
    /// Returns an error when the extension is missing or unrecognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Platform::Discord),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Platform::Instagram),
            _ => Err(ChatstatsError::unsupported_file_type(path)),
        }
    }

    /// Returns both platforms in statistics-matrix order.
    pub fn all() -> &'static [Platform] {
        &[Platform::Discord, Platform::Instagram]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discord" | "dc" => Ok(Platform::Discord),
            "instagram" | "ig" => Ok(Platform::Instagram),
            _ => Err(format!(
                "Unknown platform: '{s}'. Expected one of: discord, dc, instagram, ig"
            )),
        }
    }
}

/// The platform-agnostic normalized representation of one message.
///
/// Produced by the platform parsers, consumed by the attribution resolver
/// and the statistics aggregator, then handed to the caller as plain data.
/// Records are owned by the ingestion batch that produced them and are not
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMessage {
    /// Which export the message came from.
    pub platform: Platform,

    /// The author handle exactly as it appears in the source file.
    pub author: String,

    /// Epoch seconds, UTC. Derived from a successfully parsed source
    /// timestamp; timezone information is flattened away.
    pub timestamp: i64,

    /// Message text.
    pub content: String,
}

impl CanonicalMessage {
    /// Creates a new canonical message.
    pub fn new(
        platform: Platform,
        author: impl Into<String>,
        timestamp: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            author: author.into(),
            timestamp,
            content: content.into(),
        }
    }

    /// Number of Unicode scalar values in the content.
    pub fn char_count(&self) -> i64 {
        self.content.chars().count() as i64
    }

    /// Number of whitespace-delimited tokens in the content.
    pub fn word_count(&self) -> i64 {
        self.content.split_whitespace().count() as i64
    }
}
