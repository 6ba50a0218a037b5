//! Discord CSV export parser.
//!
//! Expects comma-separated rows in the shape `[id, author, timestamp,
//! content, ...]` with a leading header row. Parsing is fail-fast: the
//! first unusable row aborts the whole file and the caller sees one error
//! referencing that row.

use crate::error::{ChatstatsError, Result};
use crate::record::{CanonicalMessage, Platform};
use crate::timestamp::parse_discord_timestamp;

const AUTHOR_COLUMN: usize = 1;
const TIMESTAMP_COLUMN: usize = 2;
const CONTENT_COLUMN: usize = 3;

/// Parser for Discord CSV exports.
pub struct DiscordParser;

impl DiscordParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DiscordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl super::ExportParser for DiscordParser {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn platform(&self) -> Platform {
        Platform::Discord
    }

    fn parse_str(&self, content: &str) -> Result<Vec<CanonicalMessage>> {
        // Headers are handled manually so the header row participates in
        // the row numbering; `flexible` lets short rows through to our own
        // column check instead of a csv-level length error.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = reader.records().enumerate();

        // The first row is the header, discarded unconditionally.
        let Some((_, header)) = rows.next() else {
            return Err(ChatstatsError::empty_source("Discord CSV"));
        };
        header?;

        let mut messages = Vec::new();

        for (row_index, result) in rows {
            let record = result?;
            let raw = || record.iter().collect::<Vec<_>>().join(",");

            if record.len() < 4 {
                return Err(ChatstatsError::malformed_row(
                    row_index,
                    raw(),
                    format!("expected at least 4 columns, found {}", record.len()),
                ));
            }

            let author = &record[AUTHOR_COLUMN];
            let timestamp = parse_discord_timestamp(&record[TIMESTAMP_COLUMN])
                .map_err(|e| ChatstatsError::malformed_row(row_index, raw(), e.to_string()))?;
            let content = &record[CONTENT_COLUMN];

            messages.push(CanonicalMessage::new(
                Platform::Discord,
                author,
                timestamp,
                content,
            ));
        }

        Ok(messages)
    }
}
