//! The ingestion batch pipeline.
//!
//! One batch is one Discord file plus one-or-more Instagram files plus one
//! username mapping, processed start-to-finish with no suspension points
//! and no shared state. Independent batches can run on separate threads
//! without coordination; each owns its inputs and produces its own
//! immutable output.

use crate::attribution::UnknownPolicy;
use crate::error::Result;
use crate::mapping::UsernameMapping;
use crate::parsers::{DiscordParser, ExportParser, InstagramParser};
use crate::record::CanonicalMessage;
use crate::stats::{StatsRow, aggregate};

/// Everything a batch produces: the canonical records in ingestion order
/// and the 9-row statistics matrix. Plain data, ready for persistence.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub records: Vec<CanonicalMessage>,
    pub stats: Vec<StatsRow>,
}

/// Accumulates export files for one batch, then aggregates.
///
/// # Example
///
/// ```
/// use chatstats::batch::IngestBatch;
/// use chatstats::mapping::{PlatformHandles, UsernameMapping};
///
/// let mapping = UsernameMapping::new(
///     PlatformHandles::new("alice#1234", "alice.ig"),
///     PlatformHandles::new("bob#5678", "bob.ig"),
/// );
///
/// let mut batch = IngestBatch::new(mapping);
/// batch.add_instagram_json(r#"{"messages": [
///     {"sender_name": "alice.ig", "timestamp_ms": 1000, "content": "hi"}
/// ]}"#)?;
/// let output = batch.finish()?;
/// assert_eq!(output.records.len(), 1);
/// assert_eq!(output.stats.len(), 9);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub struct IngestBatch {
    mapping: UsernameMapping,
    unknown_policy: UnknownPolicy,
    records: Vec<CanonicalMessage>,
}

impl IngestBatch {
    /// Creates an empty batch with the default unknown-author policy
    /// ([`UnknownPolicy::Fail`]).
    pub fn new(mapping: UsernameMapping) -> Self {
        Self {
            mapping,
            unknown_policy: UnknownPolicy::default(),
            records: Vec::new(),
        }
    }

    /// Sets what the aggregator does with authors matching neither
    /// participant.
    #[must_use]
    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    /// Parses one Discord CSV export and appends its records.
    ///
    /// # Errors
    ///
    /// Fail-fast per file: on error nothing from this file is appended.
    pub fn add_discord_csv(&mut self, content: &str) -> Result<usize> {
        let parsed = DiscordParser::new().parse_str(content)?;
        let count = parsed.len();
        self.records.extend(parsed);
        Ok(count)
    }

    /// Parses one Instagram JSON export and appends its records.
    ///
    /// # Errors
    ///
    /// Fail-fast per file: on error nothing from this file is appended.
    pub fn add_instagram_json(&mut self, content: &str) -> Result<usize> {
        let parsed = InstagramParser::new().parse_str(content)?;
        let count = parsed.len();
        self.records.extend(parsed);
        Ok(count)
    }

    /// The canonical records accumulated so far, in ingestion order.
    pub fn records(&self) -> &[CanonicalMessage] {
        &self.records
    }

    /// Runs the statistics aggregator and consumes the batch.
    ///
    /// # Errors
    ///
    /// Returns [`UnattributedAuthor`](crate::error::ChatstatsError::UnattributedAuthor)
    /// under [`UnknownPolicy::Fail`] when a record's author matches neither
    /// participant.
    pub fn finish(self) -> Result<BatchOutput> {
        let stats = aggregate(&self.records, &self.mapping, self.unknown_policy)?;
        Ok(BatchOutput {
            records: self.records,
            stats,
        })
    }
}
