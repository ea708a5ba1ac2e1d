//! # Greeting Ledger Testkit
//!
//! Testing utilities for the Greeting Ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a ledger wired to recording ports and a manual clock,
//!   with seeding helpers for ranking scenarios
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use greeting_ledger_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let ids = fixture.seed_greetings(5);
//! fixture.like_times(ids[2], 3);
//! assert_eq!(fixture.ledger.most_liked_greetings(), vec![ids[2]]);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use greeting_ledger_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn personal_set_accepts_in_bounds_text(text in generators::personal_greeting()) {
//!         let mut fixture = TestFixture::new();
//!         let alice = fixture.principal("alice");
//!         prop_assert!(fixture.ledger.set_personal_greeting(&alice, &text, 0).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{TestFixture, TestLedger};
