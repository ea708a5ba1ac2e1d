//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a ledger wired to recording
//! ports and a manual clock, plus seeding helpers for ranking scenarios.

use greeting_ledger::ports::{ManualClock, MemoryTreasury, RecordingSink};
use greeting_ledger::{GreetingId, Ledger, LedgerConfig, LedgerEvent, Principal};

/// The ledger type every fixture builds.
pub type TestLedger = Ledger<MemoryTreasury, RecordingSink, ManualClock>;

/// A test fixture: a fresh ledger with deterministic time and recording ports.
pub struct TestFixture {
    pub owner: Principal,
    pub ledger: TestLedger,
}

impl TestFixture {
    /// Create a fixture with the default configuration. The clock starts at
    /// 1000 ms so join dates never collide with the absence sentinel.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a fixture with a specific configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        let owner = Principal::new("owner");
        let ledger = Ledger::new(
            owner.clone(),
            config,
            MemoryTreasury::new(),
            RecordingSink::new(),
            ManualClock::new(1_000),
        );
        Self { owner, ledger }
    }

    /// A deterministic principal for a human-readable name.
    pub fn principal(&self, name: &str) -> Principal {
        Principal::new(name)
    }

    /// Advance the ledger clock.
    pub fn tick(&self, millis: i64) {
        self.ledger.clock().advance(millis);
    }

    /// Create `count` public greetings from one sender, one clock tick apart.
    ///
    /// Returns the allocated ids in creation order.
    pub fn seed_greetings(&mut self, count: usize) -> Vec<GreetingId> {
        let sender = self.principal("seeder");
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let id = self
                .ledger
                .create_public_greeting(&sender, &format!("greeting {i}"), "general", "en")
                .expect("seeding with default config cannot fail");
            self.tick(1);
            ids.push(id);
        }
        ids
    }

    /// Apply `count` likes from distinct likers to one greeting.
    pub fn like_times(&mut self, id: GreetingId, count: usize) {
        for i in 0..count {
            let liker = self.principal(&format!("liker-{id}-{i}"));
            self.ledger
                .like_greeting(&liker, id)
                .expect("distinct likers cannot collide");
        }
    }

    /// Every event emitted so far, in order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.ledger.events().events
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
