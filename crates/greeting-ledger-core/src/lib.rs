//! # Greeting Ledger Core
//!
//! Pure primitives for the Greeting Ledger: identifiers, entity records,
//! configuration, and input validation.
//!
//! This crate contains no I/O, no clocks, no logging. It is plain data and
//! pure checks; all mutation rules live in the `greeting-ledger` crate.
//!
//! ## Key Types
//!
//! - [`Principal`] - Opaque caller identity from the external provider
//! - [`GreetingId`] - Monotonic public-greeting identifier (1-based, 0 = none)
//! - [`PublicGreeting`] / [`UserProfile`] - The canonical entity records
//! - [`LedgerConfig`] - Owner-adjustable fee, default text, and supported sets

pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::LedgerConfig;
pub use error::ValidationError;
pub use types::{GreetingId, LedgerStats, Principal, PublicGreeting, UserProfile};
pub use validation::{is_member, validate_principal, validate_text};
