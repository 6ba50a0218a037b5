//! Mapping author handles to the two anonymized identities.
//!
//! Attribution is exact handle equality against the caller-supplied
//! [`UsernameMapping`]. An author matching neither handle is surfaced as
//! [`Attribution::Unknown`] rather than silently absorbed into a
//! participant; what happens to unknowns is the caller's choice via
//! [`UnknownPolicy`].

use serde::{Deserialize, Serialize};

use crate::mapping::UsernameMapping;
use crate::record::CanonicalMessage;

/// One of the two anonymized participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    User1,
    User2,
}

impl Identity {
    /// Returns the key used in statistics rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Identity::User1 => "user1",
            Identity::User2 => "user2",
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one message's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// Author matched a participant's handle on the message's platform.
    Known(Identity),
    /// Author matched neither handle.
    Unknown,
}

/// What the aggregator does with [`Attribution::Unknown`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Abort the batch with
    /// [`UnattributedAuthor`](crate::error::ChatstatsError::UnattributedAuthor).
    /// This is the default: with exactly two participants an unmatched
    /// handle almost always means a typo in the mapping.
    #[default]
    Fail,

    /// Drop unattributed records from aggregation entirely. Keeps the
    /// marginal sums of the 9-row table consistent.
    Exclude,

    /// Count unattributed records as `user2`. Reproduces the original
    /// system's fallback behavior.
    #[serde(rename = "user2")]
    AssumeUser2,
}

/// Resolves a message's author against the mapping.
///
/// Compares `record.author` to the `user1` handle for the record's
/// platform, then to the `user2` handle. Equality is exact: handles are the
/// raw strings from the source files, case and all.
pub fn resolve(record: &CanonicalMessage, mapping: &UsernameMapping) -> Attribution {
    if record.author == mapping.user1.on(record.platform) {
        Attribution::Known(Identity::User1)
    } else if record.author == mapping.user2.on(record.platform) {
        Attribution::Known(Identity::User2)
    } else {
        Attribution::Unknown
    }
}
