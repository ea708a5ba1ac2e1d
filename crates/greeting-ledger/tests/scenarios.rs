//! End-to-end scenarios over a full ledger instance.

use greeting_ledger::{GreetingId, LedgerError, Principal};
use greeting_ledger_testkit::TestFixture;

#[test]
fn unknown_user_gets_the_current_default_greeting_exactly() {
    let mut fixture = TestFixture::new();
    let stranger = fixture.principal("stranger");

    assert_eq!(fixture.ledger.personal_greeting(&stranger), "Hello, World!");

    let owner = fixture.owner.clone();
    fixture
        .ledger
        .set_default_greeting(&owner, "Bonjour!")
        .unwrap();
    assert_eq!(fixture.ledger.personal_greeting(&stranger), "Bonjour!");
}

#[test]
fn fee_lifecycle_from_first_set_to_withdraw() {
    let mut fixture = TestFixture::new();
    let owner = fixture.owner.clone();
    let alice = fixture.principal("alice");

    fixture.ledger.set_update_fee(&owner, 100).unwrap();

    // First set never requires a fee.
    fixture.ledger.set_personal_greeting(&alice, "hi", 0).unwrap();

    // Repeat set under the fee fails and commits nothing.
    let err = fixture
        .ledger
        .set_personal_greeting(&alice, "changed", 99)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    assert_eq!(fixture.ledger.personal_greeting(&alice), "hi");

    // Covering the fee deposits it and overwrites the text.
    fixture
        .ledger
        .set_personal_greeting(&alice, "changed", 100)
        .unwrap();
    assert_eq!(fixture.ledger.personal_greeting(&alice), "changed");
    assert_eq!(fixture.ledger.held_balance(), 100);

    let swept = fixture.ledger.withdraw(&owner).unwrap();
    assert_eq!(swept, 100);
    assert_eq!(fixture.ledger.held_balance(), 0);
    assert_eq!(fixture.ledger.transfers().sweeps, vec![100]);
}

#[test]
fn tie_break_keeps_the_earlier_greeting_on_top() {
    // Twelve greetings; ids 1 and 5 tie at 3 likes, all others get fewer.
    let mut fixture = TestFixture::new();
    let ids = fixture.seed_greetings(12);
    assert_eq!(ids[0], GreetingId(1));

    fixture.like_times(GreetingId(5), 3);
    fixture.like_times(GreetingId(1), 3);
    fixture.like_times(GreetingId(2), 2);
    fixture.like_times(GreetingId(9), 1);

    let ranked = fixture.ledger.most_liked_greetings();
    assert_eq!(
        ranked,
        vec![GreetingId(1), GreetingId(5), GreetingId(2), GreetingId(9)]
    );

    // The order of liking never matters, only like counts and creation order:
    // id 1 outranks id 5 even though id 5 reached 3 likes first.
    let pos_1 = ranked.iter().position(|&id| id == GreetingId(1)).unwrap();
    let pos_5 = ranked.iter().position(|&id| id == GreetingId(5)).unwrap();
    assert!(pos_1 < pos_5);
}

#[test]
fn ranking_is_capped_at_ten_with_ties_resolved_at_the_boundary() {
    let mut fixture = TestFixture::new();
    let _ids = fixture.seed_greetings(12);

    // Ids 1..=8 get descending like counts 9..=2; ids 9..=12 all tie at 1.
    for raw in 1..=8u64 {
        fixture.like_times(GreetingId(raw), (10 - raw) as usize);
    }
    for raw in 9..=12u64 {
        fixture.like_times(GreetingId(raw), 1);
    }

    let ranked = fixture.ledger.most_liked_greetings();
    assert_eq!(ranked.len(), 10);
    // The two boundary slots go to the earliest-created of the tied group.
    assert_eq!(ranked[8], GreetingId(9));
    assert_eq!(ranked[9], GreetingId(10));
    assert!(!ranked.contains(&GreetingId(11)));
    assert!(!ranked.contains(&GreetingId(12)));
}

#[test]
fn recent_matches_the_most_recent_twenty_creations() {
    let mut fixture = TestFixture::new();
    let ids = fixture.seed_greetings(25);

    let recent = fixture.ledger.recent_greetings();
    assert_eq!(recent.len(), 20);
    let expected: Vec<_> = ids.iter().rev().take(20).copied().collect();
    assert_eq!(recent, expected);
}

#[test]
fn recent_is_short_when_few_greetings_exist() {
    let mut fixture = TestFixture::new();
    assert!(fixture.ledger.recent_greetings().is_empty());

    let ids = fixture.seed_greetings(3);
    assert_eq!(
        fixture.ledger.recent_greetings(),
        vec![ids[2], ids[1], ids[0]]
    );
}

#[test]
fn pausing_refuses_mutations_until_unpaused() {
    let mut fixture = TestFixture::new();
    let owner = fixture.owner.clone();
    let alice = fixture.principal("alice");

    fixture.ledger.pause(&owner).unwrap();
    let err = fixture
        .ledger
        .create_public_greeting(&alice, "hello", "general", "en")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Paused));

    fixture.ledger.unpause(&owner).unwrap();
    let id = fixture
        .ledger
        .create_public_greeting(&alice, "hello", "general", "en")
        .unwrap();
    assert_eq!(id, GreetingId(1));
}

#[test]
fn direct_greetings_overwrite_and_stay_asymmetric() {
    let mut fixture = TestFixture::new();
    let a = fixture.principal("a");
    let b = fixture.principal("b");

    fixture.ledger.send_direct_greeting(&a, &b, "hi").unwrap();
    fixture.ledger.send_direct_greeting(&a, &b, "yo").unwrap();

    assert_eq!(fixture.ledger.direct_greeting(&a, &b), "yo");
    assert_eq!(fixture.ledger.direct_greeting(&b, &a), "");

    fixture.ledger.send_direct_greeting(&b, &a, "hello back").unwrap();
    assert_eq!(fixture.ledger.direct_greeting(&a, &b), "yo");
    assert_eq!(fixture.ledger.direct_greeting(&b, &a), "hello back");
}

#[test]
fn new_category_accepts_greetings_and_old_ones_remain() {
    let mut fixture = TestFixture::new();
    let owner = fixture.owner.clone();
    let alice = fixture.principal("alice");

    let before = fixture
        .ledger
        .create_public_greeting(&alice, "old", "general", "en")
        .unwrap();

    fixture.ledger.add_category(&owner, "seasonal").unwrap();
    let after = fixture
        .ledger
        .create_public_greeting(&alice, "new", "seasonal", "en")
        .unwrap();

    assert_eq!(
        fixture.ledger.greetings_by_category("seasonal").unwrap(),
        &[after]
    );
    assert_eq!(
        fixture.ledger.greetings_by_category("general").unwrap(),
        &[before]
    );
}

#[test]
fn event_timestamps_follow_the_clock() {
    let mut fixture = TestFixture::new();
    let alice = fixture.principal("alice");

    fixture.ledger.set_personal_greeting(&alice, "hi", 0).unwrap();
    fixture.tick(500);
    fixture
        .ledger
        .create_public_greeting(&alice, "hello", "general", "en")
        .unwrap();

    let events = fixture.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].timestamp(), 1_000);
    assert_eq!(events[1].timestamp(), 1_500);
}

#[test]
fn verification_survives_later_profile_updates() {
    let mut fixture = TestFixture::new();
    let owner = fixture.owner.clone();
    let alice = fixture.principal("alice");

    fixture.ledger.update_profile(&alice, "alice", "v1").unwrap();
    fixture.ledger.verify_user(&owner, &alice).unwrap();
    fixture.ledger.update_profile(&alice, "alice", "v2").unwrap();

    let profile = fixture.ledger.user_profile(&alice);
    assert!(profile.is_verified);
    assert_eq!(profile.bio, "v2");
}

#[test]
fn stats_report_slots_and_set_sizes() {
    let mut fixture = TestFixture::new();
    fixture.seed_greetings(4);

    let stats = fixture.ledger.stats();
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.total_public_greetings, 4);
    assert_eq!(stats.category_count, 5);
    assert_eq!(stats.language_count, 5);
}

#[test]
fn owner_is_not_exempt_from_content_rules() {
    let mut fixture = TestFixture::new();
    let owner = fixture.owner.clone();
    let other = fixture.principal("other");

    // The owner writes content under the same rules as everyone else.
    let id = fixture
        .ledger
        .create_public_greeting(&owner, "hello", "general", "en")
        .unwrap();
    assert!(matches!(
        fixture.ledger.like_greeting(&owner, id),
        Err(LedgerError::SelfReferential(_))
    ));
    fixture.ledger.like_greeting(&other, id).unwrap();

    // And non-owners never reach admin surfaces.
    assert!(matches!(
        fixture.ledger.set_update_fee(&other, 1),
        Err(LedgerError::Unauthorized)
    ));
    assert!(matches!(
        fixture.ledger.add_language(&Principal::null(), "pt"),
        Err(LedgerError::Unauthorized)
    ));
}
