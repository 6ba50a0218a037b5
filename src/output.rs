//! Output writers for canonical records and statistics rows.
//!
//! Both outputs are plain data; these helpers serialize them for the CLI
//! and for embedding callers that want files rather than values. JSON via
//! `serde_json`, CSV via the `csv` crate with explicit headers.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::record::CanonicalMessage;
use crate::stats::StatsRow;

/// Serializes any output value to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ChatstatsError::Json`](crate::error::ChatstatsError::Json) on
/// serialization failure.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes any output value to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization or the write fails.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = to_json(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn stats_rows<W: io::Write>(writer: &mut csv::Writer<W>, rows: &[StatsRow]) -> Result<()> {
    writer.write_record([
        "identity",
        "platform",
        "message_count",
        "character_count",
        "word_count",
        "avg_message_length",
        "avg_word_length",
        "avg_words_per_message",
    ])?;

    for row in rows {
        writer.write_record([
            row.identity_key.as_str(),
            row.platform_key.as_str(),
            &row.message_count.to_string(),
            &row.character_count.to_string(),
            &row.word_count.to_string(),
            &row.avg_message_length.to_string(),
            &row.avg_word_length.to_string(),
            &row.avg_words_per_message.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes statistics rows to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `identity`, `platform`, `message_count`, `character_count`,
///   `word_count`, `avg_message_length`, `avg_word_length`,
///   `avg_words_per_message`
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_stats_csv(rows: &[StatsRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    stats_rows(&mut writer, rows)
}

/// Renders statistics rows as a CSV string.
///
/// # Errors
///
/// Returns an error on a CSV-level failure.
pub fn to_stats_csv(rows: &[StatsRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    stats_rows(&mut writer, rows)?;
    let bytes = writer
        .into_inner()
        .map_err(io::Error::other)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Writes canonical records to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `platform`, `author`, `timestamp`, `content`
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_messages_csv(records: &[CanonicalMessage], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["platform", "author", "timestamp", "content"])?;
    for record in records {
        writer.write_record([
            record.platform.as_str(),
            &record.author,
            &record.timestamp.to_string(),
            &record.content,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
