//! # Greeting Ledger
//!
//! A single-process ledger for user-authored greetings: personal greetings,
//! categorized public greetings, direct messages between principals, and
//! lightweight social state (likes, profiles, verification).
//!
//! ## Overview
//!
//! The ledger owns all state-management logic: entity stores, mutation rules,
//! validation, access control, and the read-side ranking queries. Everything
//! else is an external collaborator behind a port:
//!
//! - **Identity**: every operation receives a caller [`Principal`]; the
//!   ledger compares, never authenticates.
//! - **Value transfer**: [`TransferService`] settles fees and owner sweeps.
//! - **Notifications**: [`EventSink`] receives one [`LedgerEvent`] per
//!   committed mutation.
//! - **Time**: [`Clock`] stamps records and events.
//!
//! ## Key Rules
//!
//! - Mutations are all-or-nothing: validation and external transfers happen
//!   before any store is touched.
//! - Nothing is ever deleted; greetings, likes, and profiles are permanent.
//! - The pause gate refuses all non-admin mutations; queries always run.
//!
//! ## Usage
//!
//! ```rust
//! use greeting_ledger::{Ledger, LedgerConfig, Principal};
//! use greeting_ledger::ports::{MemoryTreasury, RecordingSink, SystemClock};
//!
//! let owner = Principal::new("owner");
//! let mut ledger = Ledger::new(
//!     owner.clone(),
//!     LedgerConfig::default(),
//!     MemoryTreasury::new(),
//!     RecordingSink::new(),
//!     SystemClock,
//! );
//!
//! let alice = Principal::new("alice");
//! let id = ledger
//!     .create_public_greeting(&alice, "Hello!", "general", "en")
//!     .unwrap();
//! assert_eq!(ledger.public_greeting(id).unwrap().message, "Hello!");
//! ```
//!
//! For shared use across threads, wrap the ledger in a
//! [`SharedLedger`]: writes serialize, reads run concurrently.

pub mod error;
pub mod event;
pub mod ledger;
pub mod ports;
pub mod shared;

// Re-export the core crate for convenience
pub use greeting_ledger_core as core;

pub use error::{LedgerError, Result};
pub use event::LedgerEvent;
pub use ledger::{Ledger, MOST_LIKED_LIMIT, RECENT_LIMIT};
pub use ports::{Clock, EventSink, TransferError, TransferService};
pub use shared::SharedLedger;

// Re-export commonly used core types
pub use greeting_ledger_core::{
    GreetingId, LedgerConfig, LedgerStats, Principal, PublicGreeting, UserProfile,
    ValidationError,
};
