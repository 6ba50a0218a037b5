//! Property-based tests for the statistics aggregator.
//!
//! These generate random canonical-record sets to check the invariants of
//! the 9-row combination matrix.

use proptest::prelude::*;

use chatstats::prelude::*;

fn mapping() -> UsernameMapping {
    UsernameMapping::new(
        PlatformHandles::new("alice#1234", "alice.ig"),
        PlatformHandles::new("bob#5678", "bob.ig"),
    )
}

/// Generate a random attributable record (author always matches a handle).
fn arb_record() -> impl Strategy<Value = CanonicalMessage> {
    (
        prop::bool::ANY,
        prop::bool::ANY,
        // Fast: select from predefined contents
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "How are you?".to_string(),
            "one two three four".to_string(),
            "Привет мир".to_string(),
            String::new(),
            "   ".to_string(),
            "🎉🔥 emoji".to_string(),
        ]),
        0i64..2_000_000_000,
    )
        .prop_map(|(is_user1, is_discord, content, timestamp)| {
            let platform = if is_discord {
                Platform::Discord
            } else {
                Platform::Instagram
            };
            let author = match (is_user1, is_discord) {
                (true, true) => "alice#1234",
                (true, false) => "alice.ig",
                (false, true) => "bob#5678",
                (false, false) => "bob.ig",
            };
            CanonicalMessage::new(platform, author, timestamp, content)
        })
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<CanonicalMessage>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

fn row<'a>(rows: &'a [StatsRow], i: IdentityKey, p: PlatformKey) -> &'a StatsRow {
    rows.iter()
        .find(|r| r.identity_key == i && r.platform_key == p)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Always exactly 9 rows, always in the fixed enumeration order.
    #[test]
    fn always_nine_rows_in_order(records in arb_records(30)) {
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Fail).unwrap();
        prop_assert_eq!(rows.len(), 9);
        prop_assert_eq!(rows[0].identity_key, IdentityKey::User1);
        prop_assert_eq!(rows[0].platform_key, PlatformKey::Discord);
        prop_assert_eq!(rows[8].identity_key, IdentityKey::BothUsers);
        prop_assert_eq!(rows[8].platform_key, PlatformKey::BothPlatforms);
    }

    /// Identity marginals sum to the both_users row for every count.
    #[test]
    fn identity_marginals_sum(records in arb_records(30)) {
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Fail).unwrap();
        for platform in [PlatformKey::Discord, PlatformKey::Instagram, PlatformKey::BothPlatforms] {
            let u1 = row(&rows, IdentityKey::User1, platform);
            let u2 = row(&rows, IdentityKey::User2, platform);
            let both = row(&rows, IdentityKey::BothUsers, platform);
            prop_assert_eq!(u1.message_count + u2.message_count, both.message_count);
            prop_assert_eq!(u1.character_count + u2.character_count, both.character_count);
            prop_assert_eq!(u1.word_count + u2.word_count, both.word_count);
        }
    }

    /// Platform marginals sum to the both_platforms row for every count.
    #[test]
    fn platform_marginals_sum(records in arb_records(30)) {
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Fail).unwrap();
        for identity in [IdentityKey::User1, IdentityKey::User2, IdentityKey::BothUsers] {
            let dc = row(&rows, identity, PlatformKey::Discord);
            let ig = row(&rows, identity, PlatformKey::Instagram);
            let both = row(&rows, identity, PlatformKey::BothPlatforms);
            prop_assert_eq!(dc.message_count + ig.message_count, both.message_count);
            prop_assert_eq!(dc.character_count + ig.character_count, both.character_count);
            prop_assert_eq!(dc.word_count + ig.word_count, both.word_count);
        }
    }

    /// Ratios are finite everywhere and exactly zero for empty buckets.
    #[test]
    fn ratios_are_finite_and_guarded(records in arb_records(30)) {
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Fail).unwrap();
        for r in &rows {
            prop_assert!(r.avg_message_length.is_finite());
            prop_assert!(r.avg_word_length.is_finite());
            prop_assert!(r.avg_words_per_message.is_finite());
            if r.message_count == 0 {
                prop_assert_eq!(r.avg_message_length, 0.0);
                prop_assert_eq!(r.avg_word_length, 0.0);
                prop_assert_eq!(r.avg_words_per_message, 0.0);
            }
        }
    }

    /// The grand-total row counts every record exactly once.
    #[test]
    fn grand_total_counts_everything(records in arb_records(30)) {
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Fail).unwrap();
        let total = row(&rows, IdentityKey::BothUsers, PlatformKey::BothPlatforms);
        prop_assert_eq!(total.message_count, records.len() as i64);
        let expected_words: i64 = records.iter().map(CanonicalMessage::word_count).sum();
        prop_assert_eq!(total.word_count, expected_words);
    }

    /// Excluding unknowns never counts more than attributable records.
    #[test]
    fn exclude_policy_never_overcounts(records in arb_records(30), strangers in 0usize..5) {
        let mut records = records;
        for i in 0..strangers {
            records.push(CanonicalMessage::new(Platform::Discord, format!("stranger{i}"), 0, "?"));
        }
        let attributable = records.len() - strangers;
        let rows = aggregate(&records, &mapping(), UnknownPolicy::Exclude).unwrap();
        let total = row(&rows, IdentityKey::BothUsers, PlatformKey::BothPlatforms);
        prop_assert_eq!(total.message_count, attributable as i64);
    }
}
