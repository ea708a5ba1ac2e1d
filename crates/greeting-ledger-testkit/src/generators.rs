//! Proptest generators for property-based testing.

use greeting_ledger::{GreetingId, LedgerConfig, Principal};
use proptest::prelude::*;

use greeting_ledger::core::validation::{
    PERSONAL_GREETING_MAX, PUBLIC_GREETING_MAX,
};

/// Generate a non-null principal.
pub fn principal() -> impl Strategy<Value = Principal> {
    "[a-z][a-z0-9]{2,15}".prop_map(Principal::new)
}

/// Generate a raw greeting id, including ids that were never allocated.
pub fn greeting_id() -> impl Strategy<Value = GreetingId> {
    (0u64..=1_000u64).prop_map(GreetingId)
}

/// Generate ASCII text whose byte length is within `[min, max]`.
pub fn text_in_bounds(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'z'), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a valid personal greeting (1-280 bytes).
pub fn personal_greeting() -> impl Strategy<Value = String> {
    text_in_bounds(1, PERSONAL_GREETING_MAX)
}

/// Generate a valid public greeting message (1-500 bytes).
pub fn public_message() -> impl Strategy<Value = String> {
    text_in_bounds(1, PUBLIC_GREETING_MAX)
}

/// Generate text that violates a `[min, max]` byte bound: either empty or
/// one byte past the maximum.
pub fn text_out_of_bounds(min: usize, max: usize) -> impl Strategy<Value = String> {
    if min == 0 {
        Just("x".repeat(max + 1)).boxed()
    } else {
        prop_oneof![
            Just(String::new()),
            Just("x".repeat(max + 1)),
        ]
        .boxed()
    }
}

/// Pick a category from the default configuration.
pub fn category() -> impl Strategy<Value = String> {
    prop::sample::select(LedgerConfig::default().categories)
}

/// Pick a language from the default configuration.
pub fn language() -> impl Strategy<Value = String> {
    prop::sample::select(LedgerConfig::default().languages)
}

/// Generate `count` distinct principals.
pub fn distinct_principals(count: usize) -> impl Strategy<Value = Vec<Principal>> {
    Just(
        (0..count)
            .map(|i| Principal::new(format!("user{i}")))
            .collect(),
    )
}
