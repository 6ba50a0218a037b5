//! # chatstats
//!
//! A Rust library for normalizing personal-chat exports from Discord (CSV)
//! and Instagram (JSON) into one canonical record shape, attributing each
//! message to one of two anonymized participants, and computing a 3×3
//! matrix of descriptive statistics over participant/platform combinations.
//!
//! ## Overview
//!
//! The pipeline is: raw export text → platform parsers → canonical records
//! → attribution → statistics aggregation. The library has no network or
//! database dependency; callers hand in already-buffered file content plus
//! a [`UsernameMapping`](mapping::UsernameMapping) and get back plain data
//! ([`CanonicalMessage`](record::CanonicalMessage) records and exactly nine
//! [`StatsRow`](stats::StatsRow) values per batch).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::batch::IngestBatch;
//! use chatstats::mapping::{PlatformHandles, UsernameMapping};
//!
//! fn main() -> chatstats::Result<()> {
//!     let mapping = UsernameMapping::new(
//!         PlatformHandles::new("alice#1234", "alice.ig"),
//!         PlatformHandles::new("bob#5678", "bob.ig"),
//!     );
//!
//!     let mut batch = IngestBatch::new(mapping);
//!     batch.add_instagram_json(r#"{"messages": [
//!         {"sender_name": "alice.ig", "timestamp_ms": 1705315800000, "content": "Hey!"}
//!     ]}"#)?;
//!
//!     let output = batch.finish()?;
//!     assert_eq!(output.stats.len(), 9);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`batch`] — [`IngestBatch`](batch::IngestBatch), the batch pipeline
//! - [`record`] — [`CanonicalMessage`](record::CanonicalMessage), [`Platform`](record::Platform)
//! - [`timestamp`] — Discord timestamp normalization, millisecond conversion
//! - [`mapping`] — [`UsernameMapping`](mapping::UsernameMapping)
//! - [`attribution`] — [`resolve`](attribution::resolve), [`UnknownPolicy`](attribution::UnknownPolicy)
//! - [`parsers`] — [`DiscordParser`](parsers::DiscordParser), [`InstagramParser`](parsers::InstagramParser)
//! - [`stats`] — [`aggregate`](stats::aggregate), [`StatsRow`](stats::StatsRow)
//! - [`output`] — JSON/CSV writers for records and stats rows
//! - [`error`] — [`ChatstatsError`], [`Result`]

pub mod attribution;
pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod mapping;
pub mod output;
pub mod parsers;
pub mod record;
pub mod stats;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use record::{CanonicalMessage, Platform};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attribution::{Attribution, Identity, UnknownPolicy, resolve};
    pub use crate::batch::{BatchOutput, IngestBatch};
    pub use crate::error::{ChatstatsError, Result};
    pub use crate::mapping::{PlatformHandles, UsernameMapping};
    pub use crate::parsers::{DiscordParser, ExportParser, InstagramParser, create_parser};
    pub use crate::record::{CanonicalMessage, Platform};
    pub use crate::stats::{IdentityKey, PlatformKey, StatsRow, aggregate};
    pub use crate::timestamp::{epoch_seconds_from_millis, parse_discord_timestamp};
}
