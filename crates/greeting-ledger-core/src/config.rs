//! Runtime configuration for a ledger instance.

use serde::{Deserialize, Serialize};

/// Owner-adjustable configuration carried by every ledger instance.
///
/// The category and language sets are append-only ordered sets: the owner can
/// add members but never remove or reorder them, so greetings created under an
/// older set remain valid forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fee required to overwrite an existing personal greeting. The first set
    /// is always free.
    pub update_fee: u64,
    /// Greeting returned for principals that never set one.
    pub default_greeting: String,
    /// Supported public-greeting categories, in insertion order.
    pub categories: Vec<String>,
    /// Supported public-greeting languages, in insertion order.
    pub languages: Vec<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            update_fee: 0,
            default_greeting: "Hello, World!".to_string(),
            categories: vec![
                "general".to_string(),
                "birthday".to_string(),
                "holiday".to_string(),
                "motivational".to_string(),
                "funny".to_string(),
            ],
            languages: vec![
                "en".to_string(),
                "es".to_string(),
                "fr".to_string(),
                "de".to_string(),
                "zh".to_string(),
            ],
        }
    }
}
