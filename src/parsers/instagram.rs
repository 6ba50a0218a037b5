//! Instagram JSON export parser.
//!
//! Reads the `messages` array of a Meta data-download document. Contentless
//! messages and quiet-mode system notices are noise and are dropped
//! silently; a message that survives the noise filter but lacks
//! `sender_name` or `timestamp_ms` is structurally broken and aborts the
//! file (fail-fast, no partial output).

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChatstatsError, Result};
use crate::record::{CanonicalMessage, Platform};
use crate::timestamp::epoch_seconds_from_millis;

/// Trailing text of the platform-generated quiet-mode notice. Not real
/// message content.
const QUIET_MODE_SUFFIX: &str =
    "wasn't notified about this message because they're in quiet mode.";

/// Instagram export wrapper. An absent `messages` key means an empty
/// conversation, not an error.
#[derive(Debug, Deserialize)]
struct InstagramExport {
    #[serde(default)]
    messages: Vec<Value>,
}

/// Parser for Instagram JSON exports.
pub struct InstagramParser;

impl InstagramParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InstagramParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` when a message object carries no usable content: the
/// `content` field is absent, not a string, empty, or a quiet-mode notice.
fn is_noise(message: &Value) -> bool {
    match message.get("content").and_then(Value::as_str) {
        None | Some("") => true,
        Some(content) => content.ends_with(QUIET_MODE_SUFFIX),
    }
}

impl super::ExportParser for InstagramParser {
    fn name(&self) -> &'static str {
        "Instagram"
    }

    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn parse_str(&self, content: &str) -> Result<Vec<CanonicalMessage>> {
        let export: InstagramExport = serde_json::from_str(content)?;

        let mut messages = Vec::new();

        for (index, message) in export.messages.iter().enumerate() {
            // Noise filtering comes before the structural checks: a
            // contentless record missing sender_name is dropped, not an
            // error.
            if is_noise(message) {
                continue;
            }

            let sender = message
                .get("sender_name")
                .and_then(Value::as_str)
                .ok_or_else(|| ChatstatsError::malformed_record(index, "missing sender_name"))?;

            let timestamp_ms = message
                .get("timestamp_ms")
                .ok_or_else(|| ChatstatsError::malformed_record(index, "missing timestamp_ms"))?;
            let timestamp_ms = timestamp_ms
                .as_i64()
                .ok_or_else(|| ChatstatsError::invalid_timestamp(timestamp_ms.to_string()))?;

            let text = message
                .get("content")
                .and_then(Value::as_str)
                .unwrap_or_default();

            messages.push(CanonicalMessage::new(
                Platform::Instagram,
                sender,
                epoch_seconds_from_millis(timestamp_ms),
                text,
            ));
        }

        Ok(messages)
    }
}
