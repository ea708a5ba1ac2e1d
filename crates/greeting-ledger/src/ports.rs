//! Collaborator ports: the seams the ledger depends on but does not implement.
//!
//! Value transfer, event delivery, and the clock are external concerns. Each
//! is a synchronous trait: the call either confirms before the mutation
//! commits or fails and aborts the whole mutation. In-memory reference
//! implementations live here for tests and embedding.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use greeting_ledger_core::Principal;
use thiserror::Error;

use crate::event::LedgerEvent;

/// Failure reported by the value-transfer collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value transfer rejected: {reason}")]
pub struct TransferError {
    pub reason: String,
}

impl TransferError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The value-transfer service.
///
/// The ledger decides *whether* and *how much* to move; settlement is the
/// service's concern. Both calls are part of the triggering mutation's atomic
/// unit: the ledger invokes them before touching any store, so a failure
/// leaves prior state unchanged.
pub trait TransferService {
    /// Take a tendered fee from the caller into held custody.
    fn deposit(&mut self, from: &Principal, amount: u64) -> Result<(), TransferError>;

    /// Sweep an amount from held custody to the owner.
    fn transfer_to_owner(&mut self, amount: u64) -> Result<(), TransferError>;
}

/// The notification sink. Append-only; delivery is the sink's concern.
pub trait EventSink {
    fn emit(&mut self, event: LedgerEvent);
}

/// Timestamp source, Unix milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

// ─────────────────────────────────────────────────────────────────────────
// Reference Implementations
// ─────────────────────────────────────────────────────────────────────────

/// In-memory treasury that records every movement.
///
/// Primarily for tests: `fail_next` makes the next call fail, to exercise the
/// all-or-nothing abort path.
#[derive(Debug, Default)]
pub struct MemoryTreasury {
    /// (from, amount) per deposit, in call order.
    pub deposits: Vec<(Principal, u64)>,
    /// Amount per owner sweep, in call order.
    pub sweeps: Vec<u64>,
    /// When set, the next call fails and clears the flag.
    pub fail_next: bool,
}

impl MemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_failure(&mut self) -> Result<(), TransferError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(TransferError::new("injected failure"));
        }
        Ok(())
    }
}

impl TransferService for MemoryTreasury {
    fn deposit(&mut self, from: &Principal, amount: u64) -> Result<(), TransferError> {
        self.take_failure()?;
        self.deposits.push((from.clone(), amount));
        Ok(())
    }

    fn transfer_to_owner(&mut self, amount: u64) -> Result<(), TransferError> {
        self.take_failure()?;
        self.sweeps.push(amount);
        Ok(())
    }
}

/// Sink that keeps every emitted event, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<LedgerEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently emitted event, if any.
    pub fn last(&self) -> Option<&LedgerEvent> {
        self.events.last()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// Sink that drops everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: LedgerEvent) {}
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Deterministic clock for tests. Starts at 1 so the first interaction never
/// collides with the join-date absence sentinel.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
