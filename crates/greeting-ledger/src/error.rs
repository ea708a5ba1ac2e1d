//! Error types for ledger operations.

use greeting_ledger_core::{GreetingId, Principal, ValidationError};
use thiserror::Error;

use crate::ports::TransferError;

/// Errors surfaced by mutation and query operations.
///
/// Every error is terminal for the single operation that raised it: no
/// partial state is ever committed, and nothing is retried locally.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Text length, emptiness, membership, or principal validation failed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Reference to a greeting id that was never allocated.
    #[error("greeting {0} not found")]
    GreetingNotFound(GreetingId),

    /// Operation requires a profile that was never created.
    #[error("no profile for {0}")]
    ProfileNotFound(Principal),

    /// Non-owner invoked an owner-only operation.
    #[error("caller is not the owner")]
    Unauthorized,

    /// Duplicate like from the same principal on the same greeting.
    #[error("{liker} already liked greeting {id}")]
    AlreadyLiked { id: GreetingId, liker: Principal },

    /// Category already a member of the supported set.
    #[error("category already supported: {0}")]
    CategoryExists(String),

    /// Language already a member of the supported set.
    #[error("language already supported: {0}")]
    LanguageExists(String),

    /// Liking one's own greeting, or messaging oneself.
    #[error("operation targets the caller itself: {0}")]
    SelfReferential(&'static str),

    /// Tendered amount below the configured update fee.
    #[error("tendered {tendered}, update fee is {required}")]
    InsufficientFunds { tendered: u64, required: u64 },

    /// Gated mutation invoked while the ledger is paused.
    #[error("ledger is paused")]
    Paused,

    /// Nothing held to withdraw.
    #[error("no held balance to withdraw")]
    NothingToWithdraw,

    /// The external value-transfer collaborator refused or failed the
    /// transfer; the whole mutation aborts with prior state unchanged.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
