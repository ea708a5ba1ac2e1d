//! The Ledger: canonical state, mutation rules, and ranking queries.
//!
//! One `Ledger` value holds everything: entity stores, secondary indexes,
//! configuration, and the collaborator ports. There is no ambient state, so
//! independent instances coexist and tests are deterministic.
//!
//! Mutations run to completion with exclusive access (`&mut self`); queries
//! never mutate. External transfer calls happen before any store is touched,
//! so a refused transfer aborts the whole mutation with prior state unchanged.

use std::collections::{BTreeMap, HashMap, HashSet};

use greeting_ledger_core::{
    is_member, validate_principal, validate_text, GreetingId, LedgerConfig, LedgerStats,
    Principal, PublicGreeting, UserProfile, ValidationError,
};

use greeting_ledger_core::validation::{
    BIO_MAX, BIO_MIN, DIRECT_GREETING_MAX, DIRECT_GREETING_MIN, PERSONAL_GREETING_MAX,
    PERSONAL_GREETING_MIN, PUBLIC_GREETING_MAX, PUBLIC_GREETING_MIN, USERNAME_MAX, USERNAME_MIN,
};

use crate::error::{LedgerError, Result};
use crate::event::LedgerEvent;
use crate::ports::{Clock, EventSink, TransferService};

/// Maximum entries returned by the top-liked query.
pub const MOST_LIKED_LIMIT: usize = 10;

/// Maximum entries returned by the recent query.
pub const RECENT_LIMIT: usize = 20;

/// The greeting ledger.
///
/// Generic over its collaborator ports, the way the rest of the system treats
/// them: value transfer settles externally, events are delivered externally,
/// and the clock is injected so tests control time.
pub struct Ledger<T: TransferService, E: EventSink, C: Clock> {
    owner: Principal,
    config: LedgerConfig,
    paused: bool,

    /// Personal greeting per principal. Absence means "use the default".
    personal: HashMap<Principal, String>,
    /// Profiles. `join_date == 0` entries are counter shells, not profiles.
    profiles: HashMap<Principal, UserProfile>,
    /// Public greetings by id. Ids are dense: 1..=id_counter, never deleted.
    greetings: BTreeMap<GreetingId, PublicGreeting>,
    /// At most one like per (greeting, liker) pair.
    likes: HashSet<(GreetingId, Principal)>,
    /// Latest direct message per ordered (sender, recipient) pair.
    direct: HashMap<(Principal, Principal), String>,
    /// Ids per sender, in creation order.
    by_sender: HashMap<Principal, Vec<GreetingId>>,
    /// Ids per category, in creation order.
    by_category: HashMap<String, Vec<GreetingId>>,

    /// Last allocated id; 0 before the first greeting.
    id_counter: GreetingId,
    total_public_greetings: u64,
    /// Fees deposited with the transfer service and not yet swept.
    held_balance: u64,

    transfers: T,
    events: E,
    clock: C,
}

impl<T: TransferService, E: EventSink, C: Clock> Ledger<T, E, C> {
    /// Create an empty ledger owned by `owner`.
    pub fn new(owner: Principal, config: LedgerConfig, transfers: T, events: E, clock: C) -> Self {
        Self {
            owner,
            config,
            paused: false,
            personal: HashMap::new(),
            profiles: HashMap::new(),
            greetings: BTreeMap::new(),
            likes: HashSet::new(),
            direct: HashMap::new(),
            by_sender: HashMap::new(),
            by_category: HashMap::new(),
            id_counter: GreetingId::ZERO,
            total_public_greetings: 0,
            held_balance: 0,
            transfers,
            events,
            clock,
        }
    }

    /// The owning principal.
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Whether gated mutations are currently refused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Fees held for the owner, not yet swept.
    pub fn held_balance(&self) -> u64 {
        self.held_balance
    }

    /// Last allocated greeting id (0 before the first greeting).
    pub fn greeting_counter(&self) -> GreetingId {
        self.id_counter
    }

    /// The event sink, for inspection in tests and embedders.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// The transfer service, for inspection in tests and embedders.
    pub fn transfers(&self) -> &T {
        &self.transfers
    }

    /// The clock, so tests driving a manual clock can advance it.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ─────────────────────────────────────────────────────────────────────
    // Gate
    // ─────────────────────────────────────────────────────────────────────

    fn gate(&self) -> Result<()> {
        if self.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    fn require_owner(&self, caller: &Principal) -> Result<()> {
        if caller != &self.owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutation Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Set or overwrite the caller's personal greeting.
    ///
    /// The first set is free; every later set requires `tendered` to cover
    /// the configured update fee. A positive tender is deposited with the
    /// transfer service before any state changes.
    pub fn set_personal_greeting(
        &mut self,
        caller: &Principal,
        text: &str,
        tendered: u64,
    ) -> Result<()> {
        self.gate()?;
        validate_text(
            "personal greeting",
            text,
            PERSONAL_GREETING_MIN,
            PERSONAL_GREETING_MAX,
        )?;

        if self.personal.contains_key(caller) && tendered < self.config.update_fee {
            return Err(LedgerError::InsufficientFunds {
                tendered,
                required: self.config.update_fee,
            });
        }

        if tendered > 0 {
            self.transfers.deposit(caller, tendered).map_err(|e| {
                tracing::warn!(user = %caller, amount = tendered, "fee deposit refused, aborting");
                e
            })?;
            self.held_balance += tendered;
        }

        let now = self.now();
        self.personal.insert(caller.clone(), text.to_string());

        let profile = self.profiles.entry(caller.clone()).or_default();
        if !profile.exists() {
            profile.join_date = now;
        }
        profile.total_greetings += 1;

        tracing::debug!(user = %caller, "personal greeting set");
        self.events.emit(LedgerEvent::GreetingSet {
            user: caller.clone(),
            message: text.to_string(),
            timestamp: now,
        });
        Ok(())
    }

    /// Create a public greeting and return its id.
    pub fn create_public_greeting(
        &mut self,
        caller: &Principal,
        message: &str,
        category: &str,
        language: &str,
    ) -> Result<GreetingId> {
        self.gate()?;
        validate_text(
            "public greeting",
            message,
            PUBLIC_GREETING_MIN,
            PUBLIC_GREETING_MAX,
        )?;
        if !is_member(&self.config.categories, category) {
            return Err(ValidationError::UnknownCategory(category.to_string()).into());
        }
        if !is_member(&self.config.languages, language) {
            return Err(ValidationError::UnknownLanguage(language.to_string()).into());
        }

        let id = self.id_counter.next();
        let now = self.now();
        self.greetings.insert(
            id,
            PublicGreeting {
                message: message.to_string(),
                sender: caller.clone(),
                timestamp: now,
                like_count: 0,
                category: category.to_string(),
                language: language.to_string(),
            },
        );
        self.by_sender.entry(caller.clone()).or_default().push(id);
        self.by_category
            .entry(category.to_string())
            .or_default()
            .push(id);
        self.id_counter = id;
        self.total_public_greetings += 1;

        tracing::debug!(id = %id, sender = %caller, category, "public greeting created");
        self.events.emit(LedgerEvent::PublicGreetingCreated {
            id,
            sender: caller.clone(),
            message: message.to_string(),
            category: category.to_string(),
            language: language.to_string(),
            timestamp: now,
        });
        Ok(id)
    }

    /// Like a public greeting. One like per principal per greeting; senders
    /// cannot like their own.
    pub fn like_greeting(&mut self, caller: &Principal, id: GreetingId) -> Result<()> {
        self.gate()?;

        let greeting = self
            .greetings
            .get_mut(&id)
            .ok_or(LedgerError::GreetingNotFound(id))?;
        if &greeting.sender == caller {
            return Err(LedgerError::SelfReferential("cannot like own greeting"));
        }
        let like_key = (id, caller.clone());
        if self.likes.contains(&like_key) {
            return Err(LedgerError::AlreadyLiked {
                id,
                liker: caller.clone(),
            });
        }

        self.likes.insert(like_key);
        greeting.like_count += 1;
        let new_like_count = greeting.like_count;
        let sender = greeting.sender.clone();
        // Raw counter bump: this intentionally does not create a profile, so
        // the join-date sentinel still reads "absent" for the sender.
        self.profiles.entry(sender).or_default().total_likes += 1;

        tracing::debug!(id = %id, liker = %caller, new_like_count, "greeting liked");
        self.events.emit(LedgerEvent::GreetingLiked {
            id,
            liker: caller.clone(),
            new_like_count,
            timestamp: self.now(),
        });
        Ok(())
    }

    /// Send (or overwrite) the direct greeting from `caller` to `recipient`.
    ///
    /// Only the latest message per ordered pair is retained; (A,B) and (B,A)
    /// are independent slots.
    pub fn send_direct_greeting(
        &mut self,
        caller: &Principal,
        recipient: &Principal,
        message: &str,
    ) -> Result<()> {
        self.gate()?;
        validate_principal("recipient", recipient)?;
        if recipient == caller {
            return Err(LedgerError::SelfReferential(
                "cannot send a direct greeting to oneself",
            ));
        }
        validate_text(
            "direct greeting",
            message,
            DIRECT_GREETING_MIN,
            DIRECT_GREETING_MAX,
        )?;

        self.direct
            .insert((caller.clone(), recipient.clone()), message.to_string());

        self.events.emit(LedgerEvent::DirectGreetingSent {
            sender: caller.clone(),
            recipient: recipient.clone(),
            timestamp: self.now(),
        });
        Ok(())
    }

    /// Create or update the caller's profile.
    pub fn update_profile(&mut self, caller: &Principal, username: &str, bio: &str) -> Result<()> {
        self.gate()?;
        validate_text("username", username, USERNAME_MIN, USERNAME_MAX)?;
        validate_text("bio", bio, BIO_MIN, BIO_MAX)?;

        let now = self.now();
        let profile = self.profiles.entry(caller.clone()).or_default();
        if !profile.exists() {
            profile.join_date = now;
        }
        profile.username = username.to_string();
        profile.bio = bio.to_string();

        self.events.emit(LedgerEvent::UserProfileUpdated {
            user: caller.clone(),
            username: username.to_string(),
            timestamp: now,
        });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Admin Operations (owner-only; allowed while paused)
    // ─────────────────────────────────────────────────────────────────────

    /// Mark a user's profile as verified.
    pub fn verify_user(&mut self, caller: &Principal, target: &Principal) -> Result<()> {
        self.require_owner(caller)?;
        let now = self.now();
        let profile = self
            .profiles
            .get_mut(target)
            .filter(|p| p.exists())
            .ok_or_else(|| LedgerError::ProfileNotFound(target.clone()))?;
        profile.is_verified = true;

        self.events.emit(LedgerEvent::UserVerified {
            user: target.clone(),
            timestamp: now,
        });
        Ok(())
    }

    /// Replace the default greeting returned for principals that never set one.
    pub fn set_default_greeting(&mut self, caller: &Principal, text: &str) -> Result<()> {
        self.require_owner(caller)?;
        if text.is_empty() {
            return Err(ValidationError::EmptyValue("default greeting").into());
        }
        self.config.default_greeting = text.to_string();
        Ok(())
    }

    /// Replace the personal-greeting update fee.
    pub fn set_update_fee(&mut self, caller: &Principal, amount: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.config.update_fee = amount;
        Ok(())
    }

    /// Append a category to the supported set.
    pub fn add_category(&mut self, caller: &Principal, value: &str) -> Result<()> {
        self.require_owner(caller)?;
        if value.is_empty() {
            return Err(ValidationError::EmptyValue("category").into());
        }
        if is_member(&self.config.categories, value) {
            return Err(LedgerError::CategoryExists(value.to_string()));
        }
        self.config.categories.push(value.to_string());
        Ok(())
    }

    /// Append a language to the supported set.
    pub fn add_language(&mut self, caller: &Principal, value: &str) -> Result<()> {
        self.require_owner(caller)?;
        if value.is_empty() {
            return Err(ValidationError::EmptyValue("language").into());
        }
        if is_member(&self.config.languages, value) {
            return Err(LedgerError::LanguageExists(value.to_string()));
        }
        self.config.languages.push(value.to_string());
        Ok(())
    }

    /// Refuse all gated mutations until [`Ledger::unpause`].
    pub fn pause(&mut self, caller: &Principal) -> Result<()> {
        self.require_owner(caller)?;
        self.paused = true;
        tracing::info!("ledger paused");
        Ok(())
    }

    /// Resume gated mutations.
    pub fn unpause(&mut self, caller: &Principal) -> Result<()> {
        self.require_owner(caller)?;
        self.paused = false;
        tracing::info!("ledger unpaused");
        Ok(())
    }

    /// Sweep the full held balance to the owner.
    pub fn withdraw(&mut self, caller: &Principal) -> Result<u64> {
        self.require_owner(caller)?;
        if self.held_balance == 0 {
            return Err(LedgerError::NothingToWithdraw);
        }
        let amount = self.held_balance;
        self.transfers.transfer_to_owner(amount).map_err(|e| {
            tracing::warn!(amount, "owner sweep refused, aborting");
            e
        })?;
        self.held_balance = 0;
        tracing::debug!(amount, "held balance swept to owner");
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query Operations (never gated, never mutate)
    // ─────────────────────────────────────────────────────────────────────

    /// The user's personal greeting, or the default if never set.
    pub fn personal_greeting(&self, user: &Principal) -> &str {
        self.personal
            .get(user)
            .map(String::as_str)
            .unwrap_or(&self.config.default_greeting)
    }

    /// A public greeting by id.
    pub fn public_greeting(&self, id: GreetingId) -> Result<&PublicGreeting> {
        self.greetings
            .get(&id)
            .ok_or(LedgerError::GreetingNotFound(id))
    }

    /// The user's profile, zero-valued if never created. Matches the lazy
    /// creation semantics: absence is not an error.
    pub fn user_profile(&self, user: &Principal) -> UserProfile {
        self.profiles.get(user).cloned().unwrap_or_default()
    }

    /// All greeting ids in a known category, in creation order.
    pub fn greetings_by_category(&self, category: &str) -> Result<&[GreetingId]> {
        if !is_member(&self.config.categories, category) {
            return Err(ValidationError::UnknownCategory(category.to_string()).into());
        }
        Ok(self
            .by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    /// All greeting ids created by `user`, in creation order.
    pub fn user_greetings(&self, user: &Principal) -> &[GreetingId] {
        self.by_sender.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The latest direct greeting from `sender` to `recipient`, or "" if none.
    pub fn direct_greeting(&self, sender: &Principal, recipient: &Principal) -> &str {
        self.direct
            .get(&(sender.clone(), recipient.clone()))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Up to 10 greeting ids by descending like count.
    ///
    /// Fixed-slot insertion ranking: ids are scanned ascending, and a later
    /// id displaces a placed one only on *strictly greater* like count. Two
    /// consequences callers rely on: equal-like ties keep the
    /// earliest-created id higher, and zero-like greetings never surface
    /// (the slots start at zero likes). Do not swap in a generic sort; the
    /// boundary behavior at the last slot differs.
    pub fn most_liked_greetings(&self) -> Vec<GreetingId> {
        let mut top_ids = [GreetingId::ZERO; MOST_LIKED_LIMIT];
        let mut top_likes = [0u64; MOST_LIKED_LIMIT];

        for (&id, greeting) in &self.greetings {
            let likes = greeting.like_count;
            for slot in 0..MOST_LIKED_LIMIT {
                if likes > top_likes[slot] {
                    for k in ((slot + 1)..MOST_LIKED_LIMIT).rev() {
                        top_ids[k] = top_ids[k - 1];
                        top_likes[k] = top_likes[k - 1];
                    }
                    top_ids[slot] = id;
                    top_likes[slot] = likes;
                    break;
                }
            }
        }

        top_ids
            .iter()
            .copied()
            .filter(|&id| id != GreetingId::ZERO)
            .collect()
    }

    /// Up to 20 greeting ids in reverse creation order.
    pub fn recent_greetings(&self) -> Vec<GreetingId> {
        let mut out = Vec::with_capacity(RECENT_LIMIT);
        let mut raw = self.id_counter.value();
        while raw > 0 && out.len() < RECENT_LIMIT {
            let id = GreetingId(raw);
            if self.greetings.contains_key(&id) {
                out.push(id);
            }
            raw -= 1;
        }
        out
    }

    /// Aggregate counters.
    ///
    /// `total_users` counts populated greeting slots scanning 1..=counter,
    /// not distinct senders; see [`LedgerStats::total_users`].
    pub fn stats(&self) -> LedgerStats {
        let mut populated = 0u64;
        for raw in 1..=self.id_counter.value() {
            if let Some(greeting) = self.greetings.get(&GreetingId(raw)) {
                if !greeting.sender.is_null() {
                    populated += 1;
                }
            }
        }
        LedgerStats {
            total_users: populated,
            total_public_greetings: self.total_public_greetings,
            category_count: self.config.categories.len() as u64,
            language_count: self.config.languages.len() as u64,
        }
    }
}
