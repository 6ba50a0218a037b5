//! The username mapping supplied by the caller.
//!
//! One mapping covers one ingestion batch: exactly two identities, exactly
//! two platforms, four raw handle strings as they appear in the source
//! files. The shape is fixed at the type level so a missing handle is a
//! construction-time error rather than a runtime lookup failure.

use serde::{Deserialize, Serialize};

use crate::record::Platform;

/// The per-platform handles of one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformHandles {
    /// Author name as it appears in the Discord CSV.
    pub discord: String,

    /// `sender_name` as it appears in the Instagram JSON.
    pub instagram: String,
}

impl PlatformHandles {
    /// Creates handles for one participant.
    pub fn new(discord: impl Into<String>, instagram: impl Into<String>) -> Self {
        Self {
            discord: discord.into(),
            instagram: instagram.into(),
        }
    }

    /// Returns the handle used on the given platform.
    pub fn on(&self, platform: Platform) -> &str {
        match platform {
            Platform::Discord => &self.discord,
            Platform::Instagram => &self.instagram,
        }
    }
}

/// Maps the two anonymized participants to their raw author handles.
///
/// Supplied once per batch and read-only during processing.
///
/// # Example
///
/// ```
/// use chatstats::mapping::{PlatformHandles, UsernameMapping};
///
/// let mapping = UsernameMapping::new(
///     PlatformHandles::new("alice#1234", "alice.ig"),
///     PlatformHandles::new("bob#5678", "bob.ig"),
/// );
/// assert_eq!(mapping.user1.discord, "alice#1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameMapping {
    /// Handles of the first participant.
    pub user1: PlatformHandles,

    /// Handles of the second participant.
    pub user2: PlatformHandles,
}

impl UsernameMapping {
    /// Creates a mapping from both participants' handles.
    pub fn new(user1: PlatformHandles, user2: PlatformHandles) -> Self {
        Self { user1, user2 }
    }

    /// Loads a mapping from its JSON representation.
    ///
    /// ```json
    /// {
    ///   "user1": {"discord": "alice#1234", "instagram": "alice.ig"},
    ///   "user2": {"discord": "bob#5678", "instagram": "bob.ig"}
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Json`](crate::error::ChatstatsError) when a
    /// key is missing or the document is not valid JSON.
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
