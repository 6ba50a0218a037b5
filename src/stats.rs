//! The combinatorial statistics aggregator.
//!
//! For one ingestion batch, computes the 3×3 matrix of (identity ∈ {user1,
//! user2, both}) × (platform ∈ {discord, instagram, both}) message, character
//! and word counts plus three derived ratios. Exactly 9 rows come out, in a
//! fixed order, and they form a consistent marginal-sum table.

use serde::{Deserialize, Serialize};

use crate::attribution::{Attribution, Identity, UnknownPolicy, resolve};
use crate::error::{ChatstatsError, Result};
use crate::mapping::UsernameMapping;
use crate::record::{CanonicalMessage, Platform};

/// Identity axis of a statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKey {
    User1,
    User2,
    BothUsers,
}

impl IdentityKey {
    /// Returns the key string used in output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            IdentityKey::User1 => "user1",
            IdentityKey::User2 => "user2",
            IdentityKey::BothUsers => "both_users",
        }
    }
}

impl From<Option<Identity>> for IdentityKey {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(Identity::User1) => IdentityKey::User1,
            Some(Identity::User2) => IdentityKey::User2,
            None => IdentityKey::BothUsers,
        }
    }
}

/// Platform axis of a statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKey {
    Discord,
    Instagram,
    BothPlatforms,
}

impl PlatformKey {
    /// Returns the key string used in output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformKey::Discord => "discord",
            PlatformKey::Instagram => "instagram",
            PlatformKey::BothPlatforms => "both_platforms",
        }
    }
}

impl From<Option<Platform>> for PlatformKey {
    fn from(platform: Option<Platform>) -> Self {
        match platform {
            Some(Platform::Discord) => PlatformKey::Discord,
            Some(Platform::Instagram) => PlatformKey::Instagram,
            None => PlatformKey::BothPlatforms,
        }
    }
}

/// One row of the 9-row statistics matrix.
///
/// Immutable once emitted. For a fixed identity the `both_platforms` row's
/// counts equal the sum of the `discord` and `instagram` rows, and
/// symmetrically across identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub identity_key: IdentityKey,
    pub platform_key: PlatformKey,
    pub message_count: i64,
    pub character_count: i64,
    pub word_count: i64,
    /// `character_count / message_count`, 0 when there are no messages.
    pub avg_message_length: f64,
    /// `character_count / word_count`, 0 when there are no messages or no
    /// words. Never NaN or infinite.
    pub avg_word_length: f64,
    /// `word_count / message_count`, 0 when there are no messages.
    pub avg_words_per_message: f64,
}

/// The fixed enumeration of the 9 identity/platform combinations, in output
/// order. `None` means "both".
pub const COMBINATIONS: [(Option<Identity>, Option<Platform>); 9] = [
    (Some(Identity::User1), Some(Platform::Discord)),
    (Some(Identity::User1), Some(Platform::Instagram)),
    (Some(Identity::User1), None),
    (Some(Identity::User2), Some(Platform::Discord)),
    (Some(Identity::User2), Some(Platform::Instagram)),
    (Some(Identity::User2), None),
    (None, Some(Platform::Discord)),
    (None, Some(Platform::Instagram)),
    (None, None),
];

fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Computes the 9-row statistics matrix for one batch.
///
/// Each record is attributed once via [`resolve`]; `policy` decides what
/// happens to authors matching neither participant. Under
/// [`UnknownPolicy::Exclude`] unattributed records are dropped before any
/// bucket is counted, which keeps the marginal sums consistent.
///
/// # Errors
///
/// Returns [`ChatstatsError::UnattributedAuthor`] for the first unmatched
/// author under [`UnknownPolicy::Fail`]. With attributable records the
/// computation cannot fail: the zero-count guards eliminate division errors.
pub fn aggregate(
    records: &[CanonicalMessage],
    mapping: &UsernameMapping,
    policy: UnknownPolicy,
) -> Result<Vec<StatsRow>> {
    let mut attributed: Vec<(Identity, &CanonicalMessage)> = Vec::with_capacity(records.len());

    for record in records {
        match resolve(record, mapping) {
            Attribution::Known(identity) => attributed.push((identity, record)),
            Attribution::Unknown => match policy {
                UnknownPolicy::Fail => {
                    return Err(ChatstatsError::unattributed(
                        record.author.clone(),
                        record.platform,
                    ));
                }
                UnknownPolicy::Exclude => {}
                UnknownPolicy::AssumeUser2 => attributed.push((Identity::User2, record)),
            },
        }
    }

    let rows = COMBINATIONS
        .iter()
        .map(|&(identity, platform)| {
            let mut message_count = 0;
            let mut character_count = 0;
            let mut word_count = 0;

            for (record_identity, record) in &attributed {
                let identity_matches = identity.is_none_or(|i| *record_identity == i);
                let platform_matches = platform.is_none_or(|p| record.platform == p);
                if identity_matches && platform_matches {
                    message_count += 1;
                    character_count += record.char_count();
                    word_count += record.word_count();
                }
            }

            StatsRow {
                identity_key: identity.into(),
                platform_key: platform.into(),
                message_count,
                character_count,
                word_count,
                avg_message_length: ratio(character_count, message_count),
                avg_word_length: if message_count == 0 {
                    0.0
                } else {
                    ratio(character_count, word_count)
                },
                avg_words_per_message: ratio(word_count, message_count),
            }
        })
        .collect();

    Ok(rows)
}
