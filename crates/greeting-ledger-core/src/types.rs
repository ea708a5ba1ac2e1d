//! Strong type definitions for the Greeting Ledger.
//!
//! Identifiers are newtypes to prevent misuse at compile time. The records
//! here are plain data: all mutation rules live in the ledger crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque caller identity, supplied by the external identity provider.
///
/// The ledger never authenticates a principal itself; it only compares them.
/// The empty handle is the null sentinel: the provider never issues it, and
/// operations that need a concrete target reject it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an identity handle issued by the provider.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The null principal. Never a real caller; rejected wherever a concrete
    /// target is required.
    pub fn null() -> Self {
        Self(String::new())
    }

    /// Whether this is the null sentinel.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw handle.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// Identifier of a public greeting. Ids are allocated from 1 upward and never
/// reused; 0 is the "no such record" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreetingId(pub u64);

impl GreetingId {
    /// The sentinel id. Never denotes a real record.
    pub const ZERO: Self = Self(0);

    /// The first id ever allocated.
    pub const FIRST: Self = Self(1);

    /// The id allocated after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The raw counter value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GreetingId({})", self.0)
    }
}

impl fmt::Display for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GreetingId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A categorized public greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGreeting {
    /// The greeting text, 1-500 bytes.
    pub message: String,
    /// Who created it. Immutable. A record "exists" iff this is non-null.
    pub sender: Principal,
    /// Creation time, Unix ms. Immutable.
    pub timestamp: i64,
    /// Number of distinct likers. Only ever increases.
    pub like_count: u64,
    /// Member of the supported-category set at creation time.
    pub category: String,
    /// Member of the supported-language set at creation time.
    pub language: String,
}

/// Per-principal profile record.
///
/// `join_date == 0` is the "profile does not exist yet" sentinel; every
/// profile mutation branches on it to decide create-vs-update. A zero-valued
/// profile is also what lookups return for principals that never interacted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Chosen display name, 0-50 bytes. Empty until set.
    pub username: String,
    /// Free-form bio, 0-200 bytes.
    pub bio: String,
    /// Number of personal-greeting sets by this principal. Never decreases.
    pub total_greetings: u64,
    /// Likes received across this principal's public greetings. Never decreases.
    pub total_likes: u64,
    /// Set by the owner, never cleared.
    pub is_verified: bool,
    /// Unix ms of the first interaction that created this profile. 0 = absent.
    pub join_date: i64,
}

impl UserProfile {
    /// Whether this profile has actually been created.
    pub fn exists(&self) -> bool {
        self.join_date != 0
    }
}

/// Aggregate counters reported by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Count of populated greeting-id slots scanning 1..=counter.
    ///
    /// Known inconsistency: despite the name, this counts greeting records,
    /// not distinct senders. Consumers depend on the exported name and the
    /// literal count, so both are kept as-is.
    pub total_users: u64,
    /// Running total of public greetings ever created.
    pub total_public_greetings: u64,
    /// Size of the supported-category set.
    pub category_count: u64,
    /// Size of the supported-language set.
    pub language_count: u64,
}
