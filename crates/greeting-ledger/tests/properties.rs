//! Property-based tests over ledger operations.

use greeting_ledger::core::validation::{PERSONAL_GREETING_MAX, PUBLIC_GREETING_MAX};
use greeting_ledger::{GreetingId, LedgerError};
use greeting_ledger_testkit::{generators, TestFixture};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ids_are_strictly_increasing_from_one(
        count in 1usize..30,
        sender in generators::principal(),
        message in generators::public_message(),
        category in generators::category(),
        language in generators::language(),
    ) {
        let mut fixture = TestFixture::new();
        let mut last = GreetingId::ZERO;
        for i in 0..count {
            let id = fixture
                .ledger
                .create_public_greeting(&sender, &message, &category, &language)
                .unwrap();
            prop_assert_eq!(id, GreetingId(i as u64 + 1));
            prop_assert!(id > last);
            last = id;
        }
        prop_assert_eq!(fixture.ledger.greeting_counter(), last);
    }

    #[test]
    fn stored_public_greetings_round_trip(
        sender in generators::principal(),
        message in generators::public_message(),
        category in generators::category(),
        language in generators::language(),
    ) {
        let mut fixture = TestFixture::new();
        let id = fixture
            .ledger
            .create_public_greeting(&sender, &message, &category, &language)
            .unwrap();

        let stored = fixture.ledger.public_greeting(id).unwrap();
        prop_assert_eq!(&stored.message, &message);
        prop_assert_eq!(&stored.sender, &sender);
        prop_assert_eq!(&stored.category, &category);
        prop_assert_eq!(&stored.language, &language);
        prop_assert_eq!(stored.like_count, 0);
    }

    #[test]
    fn personal_set_accepts_exactly_in_bounds_text(
        text in generators::text_in_bounds(1, PERSONAL_GREETING_MAX),
        sender in generators::principal(),
    ) {
        let mut fixture = TestFixture::new();
        prop_assert!(fixture.ledger.set_personal_greeting(&sender, &text, 0).is_ok());
        prop_assert_eq!(fixture.ledger.personal_greeting(&sender), text.as_str());
    }

    #[test]
    fn personal_set_rejects_out_of_bounds_text(
        text in generators::text_out_of_bounds(1, PERSONAL_GREETING_MAX),
        sender in generators::principal(),
    ) {
        let mut fixture = TestFixture::new();
        let err = fixture
            .ledger
            .set_personal_greeting(&sender, &text, 0)
            .unwrap_err();
        prop_assert!(matches!(err, LedgerError::InvalidInput(_)));
        // Rejection leaves no trace: the default greeting still applies.
        prop_assert_eq!(
            fixture.ledger.personal_greeting(&sender),
            "Hello, World!"
        );
    }

    #[test]
    fn public_message_rejects_out_of_bounds_text(
        text in generators::text_out_of_bounds(1, PUBLIC_GREETING_MAX),
        sender in generators::principal(),
    ) {
        let mut fixture = TestFixture::new();
        prop_assert!(fixture
            .ledger
            .create_public_greeting(&sender, &text, "general", "en")
            .is_err());
        prop_assert_eq!(fixture.ledger.greeting_counter(), GreetingId::ZERO);
    }

    #[test]
    fn like_count_equals_number_of_distinct_likers(count in 1usize..25) {
        let mut fixture = TestFixture::new();
        let ids = fixture.seed_greetings(1);
        fixture.like_times(ids[0], count);

        prop_assert_eq!(
            fixture.ledger.public_greeting(ids[0]).unwrap().like_count,
            count as u64
        );

        // A second like from any of those likers is rejected.
        let repeat = fixture.principal(&format!("liker-{}-0", ids[0]));
        prop_assert!(
            matches!(
                fixture.ledger.like_greeting(&repeat, ids[0]),
                Err(LedgerError::AlreadyLiked { .. })
            ),
            "expected Err(LedgerError::AlreadyLiked)"
        );
    }

    #[test]
    fn ranking_is_sorted_and_capped(
        greeting_count in 1usize..15,
        like_seed in prop::collection::vec(0usize..6, 1..15),
    ) {
        let mut fixture = TestFixture::new();
        let ids = fixture.seed_greetings(greeting_count);
        for (i, &likes) in like_seed.iter().enumerate().take(greeting_count) {
            fixture.like_times(ids[i], likes);
        }

        let ranked = fixture.ledger.most_liked_greetings();
        prop_assert!(ranked.len() <= 10);

        let like_count = |id: GreetingId| {
            fixture.ledger.public_greeting(id).unwrap().like_count
        };
        for pair in ranked.windows(2) {
            let (a, b) = (like_count(pair[0]), like_count(pair[1]));
            // Descending by likes; equal likes keep creation order.
            prop_assert!(a > b || (a == b && pair[0] < pair[1]));
        }
        // Zero-like greetings never rank.
        for &id in &ranked {
            prop_assert!(like_count(id) > 0);
        }
    }

    #[test]
    fn recent_is_a_descending_suffix_of_creation(count in 0usize..30) {
        let mut fixture = TestFixture::new();
        fixture.seed_greetings(count);

        let recent = fixture.ledger.recent_greetings();
        prop_assert_eq!(recent.len(), count.min(20));
        for (offset, &id) in recent.iter().enumerate() {
            prop_assert_eq!(id, GreetingId((count - offset) as u64));
        }
    }
}
