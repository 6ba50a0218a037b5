//! Export parsers for the two supported platforms.
//!
//! Each parser converts the raw text of one export file into a sequence of
//! [`CanonicalMessage`] records, applying format validation and the
//! platform's noise filtering. Parsing is synchronous and in-memory: the
//! caller hands over already-buffered content.
//!
//! # Example
//!
//! ```
//! use chatstats::parsers::{ExportParser, create_parser};
//! use chatstats::record::Platform;
//!
//! let parser = create_parser(Platform::Instagram);
//! let records = parser.parse_str(r#"{"messages": []}"#).unwrap();
//! assert!(records.is_empty());
//! ```

mod discord;
mod instagram;

pub use discord::DiscordParser;
pub use instagram::InstagramParser;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::record::{CanonicalMessage, Platform};

/// Trait for parsing chat exports into canonical records.
pub trait ExportParser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the platform this parser handles.
    fn platform(&self) -> Platform;

    /// Parses export content from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatstatsError`](crate::error::ChatstatsError) describing
    /// the first unusable row or record; on error no partial record list is
    /// produced.
    fn parse_str(&self, content: &str) -> Result<Vec<CanonicalMessage>>;

    /// Parses a chat export file.
    ///
    /// Convenience wrapper that reads the file and delegates to
    /// [`parse_str`](ExportParser::parse_str).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`](crate::error::ChatstatsError::Io) when
    /// the file cannot be read, otherwise whatever `parse_str` returns.
    fn parse(&self, path: &Path) -> Result<Vec<CanonicalMessage>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }
}

/// Creates a parser for the specified platform.
pub fn create_parser(platform: Platform) -> Box<dyn ExportParser> {
    match platform {
        Platform::Discord => Box::new(DiscordParser::new()),
        Platform::Instagram => Box::new(InstagramParser::new()),
    }
}
