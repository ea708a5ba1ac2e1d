//! Thread-safe wrapper around a ledger instance.
//!
//! Mutations serialize through the write lock, matching the single-writer
//! execution model the ledger semantics assume; queries take the read lock
//! and run concurrently against the latest committed state. Queries return
//! owned values because nothing may borrow across the lock.

use std::sync::{Arc, RwLock};

use greeting_ledger_core::{
    GreetingId, LedgerConfig, LedgerStats, Principal, PublicGreeting, UserProfile,
};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::ports::{Clock, EventSink, TransferService};

/// A shareable handle to a ledger.
///
/// Cloning the handle shares the underlying instance.
pub struct SharedLedger<T: TransferService, E: EventSink, C: Clock> {
    inner: Arc<RwLock<Ledger<T, E, C>>>,
}

impl<T: TransferService, E: EventSink, C: Clock> Clone for SharedLedger<T, E, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: TransferService, E: EventSink, C: Clock> SharedLedger<T, E, C> {
    /// Wrap a ledger for shared use.
    pub fn new(ledger: Ledger<T, E, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Run a closure against the ledger under the write lock.
    ///
    /// Escape hatch for multi-step admin sequences that must be atomic.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Ledger<T, E, C>) -> R) -> R {
        f(&mut self.inner.write().unwrap())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (write lock)
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_personal_greeting(
        &self,
        caller: &Principal,
        text: &str,
        tendered: u64,
    ) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .set_personal_greeting(caller, text, tendered)
    }

    pub fn create_public_greeting(
        &self,
        caller: &Principal,
        message: &str,
        category: &str,
        language: &str,
    ) -> Result<GreetingId> {
        self.inner
            .write()
            .unwrap()
            .create_public_greeting(caller, message, category, language)
    }

    pub fn like_greeting(&self, caller: &Principal, id: GreetingId) -> Result<()> {
        self.inner.write().unwrap().like_greeting(caller, id)
    }

    pub fn send_direct_greeting(
        &self,
        caller: &Principal,
        recipient: &Principal,
        message: &str,
    ) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .send_direct_greeting(caller, recipient, message)
    }

    pub fn update_profile(&self, caller: &Principal, username: &str, bio: &str) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .update_profile(caller, username, bio)
    }

    pub fn verify_user(&self, caller: &Principal, target: &Principal) -> Result<()> {
        self.inner.write().unwrap().verify_user(caller, target)
    }

    pub fn set_default_greeting(&self, caller: &Principal, text: &str) -> Result<()> {
        self.inner.write().unwrap().set_default_greeting(caller, text)
    }

    pub fn set_update_fee(&self, caller: &Principal, amount: u64) -> Result<()> {
        self.inner.write().unwrap().set_update_fee(caller, amount)
    }

    pub fn add_category(&self, caller: &Principal, value: &str) -> Result<()> {
        self.inner.write().unwrap().add_category(caller, value)
    }

    pub fn add_language(&self, caller: &Principal, value: &str) -> Result<()> {
        self.inner.write().unwrap().add_language(caller, value)
    }

    pub fn pause(&self, caller: &Principal) -> Result<()> {
        self.inner.write().unwrap().pause(caller)
    }

    pub fn unpause(&self, caller: &Principal) -> Result<()> {
        self.inner.write().unwrap().unpause(caller)
    }

    pub fn withdraw(&self, caller: &Principal) -> Result<u64> {
        self.inner.write().unwrap().withdraw(caller)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries (read lock)
    // ─────────────────────────────────────────────────────────────────────

    pub fn personal_greeting(&self, user: &Principal) -> String {
        self.inner.read().unwrap().personal_greeting(user).to_string()
    }

    pub fn public_greeting(&self, id: GreetingId) -> Result<PublicGreeting> {
        self.inner.read().unwrap().public_greeting(id).cloned()
    }

    pub fn user_profile(&self, user: &Principal) -> UserProfile {
        self.inner.read().unwrap().user_profile(user)
    }

    pub fn greetings_by_category(&self, category: &str) -> Result<Vec<GreetingId>> {
        self.inner
            .read()
            .unwrap()
            .greetings_by_category(category)
            .map(<[GreetingId]>::to_vec)
    }

    pub fn user_greetings(&self, user: &Principal) -> Vec<GreetingId> {
        self.inner.read().unwrap().user_greetings(user).to_vec()
    }

    pub fn direct_greeting(&self, sender: &Principal, recipient: &Principal) -> String {
        self.inner
            .read()
            .unwrap()
            .direct_greeting(sender, recipient)
            .to_string()
    }

    pub fn most_liked_greetings(&self) -> Vec<GreetingId> {
        self.inner.read().unwrap().most_liked_greetings()
    }

    pub fn recent_greetings(&self) -> Vec<GreetingId> {
        self.inner.read().unwrap().recent_greetings()
    }

    pub fn stats(&self) -> LedgerStats {
        self.inner.read().unwrap().stats()
    }

    pub fn is_paused(&self) -> bool {
        self.inner.read().unwrap().is_paused()
    }

    pub fn config(&self) -> LedgerConfig {
        self.inner.read().unwrap().config().clone()
    }

    pub fn held_balance(&self) -> u64 {
        self.inner.read().unwrap().held_balance()
    }

    pub fn greeting_counter(&self) -> GreetingId {
        self.inner.read().unwrap().greeting_counter()
    }
}
