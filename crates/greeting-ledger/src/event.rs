//! Notification events emitted on committed mutations.
//!
//! Events are append-only facts handed to the external sink; delivery and
//! durability are its concern. One shape per emitting mutation, each carrying
//! the commit timestamp (Unix ms).

use greeting_ledger_core::{GreetingId, Principal};
use serde::{Deserialize, Serialize};

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A personal greeting was set or overwritten.
    GreetingSet {
        user: Principal,
        message: String,
        timestamp: i64,
    },

    /// A public greeting was created.
    PublicGreetingCreated {
        id: GreetingId,
        sender: Principal,
        message: String,
        category: String,
        language: String,
        timestamp: i64,
    },

    /// A public greeting received a like.
    GreetingLiked {
        id: GreetingId,
        liker: Principal,
        /// Like count after this like was applied.
        new_like_count: u64,
        timestamp: i64,
    },

    /// A direct greeting slot was written.
    DirectGreetingSent {
        sender: Principal,
        recipient: Principal,
        timestamp: i64,
    },

    /// A profile was created or updated through the profile operation.
    UserProfileUpdated {
        user: Principal,
        username: String,
        timestamp: i64,
    },

    /// The owner verified a user.
    UserVerified {
        user: Principal,
        timestamp: i64,
    },
}

impl LedgerEvent {
    /// The commit timestamp carried by every event shape.
    pub fn timestamp(&self) -> i64 {
        match self {
            LedgerEvent::GreetingSet { timestamp, .. }
            | LedgerEvent::PublicGreetingCreated { timestamp, .. }
            | LedgerEvent::GreetingLiked { timestamp, .. }
            | LedgerEvent::DirectGreetingSent { timestamp, .. }
            | LedgerEvent::UserProfileUpdated { timestamp, .. }
            | LedgerEvent::UserVerified { timestamp, .. } => *timestamp,
        }
    }
}
