//! End-to-end tests for the ingestion, normalization and aggregation pipeline.

use std::fs;

use chatstats::prelude::*;

fn mapping() -> UsernameMapping {
    UsernameMapping::new(
        PlatformHandles::new("alice#1234", "alice.ig"),
        PlatformHandles::new("bob#5678", "bob.ig"),
    )
}

const DISCORD_CSV: &str = "AuthorID,Author,Date,Content\n\
    111,alice#1234,2023-01-02T03:04:05.123456+00:00,morning!\n\
    222,bob#5678,2023-01-02T03:05:06.000000789+00:00,hey hey\n\
    111,alice#1234,2023-01-02T03:06:07.500000+00:00,\"how was the trip, then?\"\n";

const INSTAGRAM_JSON: &str = r#"{
  "participants": [{"name": "alice.ig"}, {"name": "bob.ig"}],
  "messages": [
    {"sender_name": "bob.ig", "timestamp_ms": 1705315920000,
     "content": "alice.ig wasn't notified about this message because they're in quiet mode."},
    {"sender_name": "bob.ig", "timestamp_ms": 1705315860000, "content": "are you around?"},
    {"sender_name": "alice.ig", "timestamp_ms": 1705315800000, "content": "yes!"},
    {"sender_name": "alice.ig", "timestamp_ms": 1705315980000}
  ]
}"#;

fn run_batch() -> BatchOutput {
    let mut batch = IngestBatch::new(mapping());
    batch.add_discord_csv(DISCORD_CSV).unwrap();
    batch.add_instagram_json(INSTAGRAM_JSON).unwrap();
    batch.finish().unwrap()
}

#[test]
fn full_pipeline_produces_records_and_nine_rows() {
    let output = run_batch();

    // 3 discord rows + 2 instagram messages (notice and contentless dropped)
    assert_eq!(output.records.len(), 5);
    assert_eq!(output.stats.len(), 9);
}

#[test]
fn canonical_records_are_normalized() {
    let output = run_batch();

    let discord = &output.records[0];
    assert_eq!(discord.platform, Platform::Discord);
    assert_eq!(discord.author, "alice#1234");
    assert_eq!(discord.timestamp, 1_672_628_645);
    assert_eq!(discord.content, "morning!");

    let instagram = &output.records[3];
    assert_eq!(instagram.platform, Platform::Instagram);
    assert_eq!(instagram.author, "bob.ig");
    assert_eq!(instagram.timestamp, 1_705_315_860);
}

#[test]
fn quiet_mode_notice_never_reaches_the_stats() {
    let output = run_batch();
    assert!(
        output
            .records
            .iter()
            .all(|r| !r.content.contains("quiet mode"))
    );
}

#[test]
fn marginal_sums_hold_across_identities_and_platforms() {
    let output = run_batch();
    let rows = &output.stats;

    let by_key = |i: IdentityKey, p: PlatformKey| {
        rows.iter()
            .find(|r| r.identity_key == i && r.platform_key == p)
            .unwrap()
    };

    let total = by_key(IdentityKey::BothUsers, PlatformKey::BothPlatforms);
    assert_eq!(total.message_count, 5);

    let u1 = by_key(IdentityKey::User1, PlatformKey::BothPlatforms);
    let u2 = by_key(IdentityKey::User2, PlatformKey::BothPlatforms);
    assert_eq!(u1.message_count + u2.message_count, total.message_count);
    assert_eq!(u1.word_count + u2.word_count, total.word_count);
    assert_eq!(
        u1.character_count + u2.character_count,
        total.character_count
    );

    let dc = by_key(IdentityKey::BothUsers, PlatformKey::Discord);
    let ig = by_key(IdentityKey::BothUsers, PlatformKey::Instagram);
    assert_eq!(dc.message_count, 3);
    assert_eq!(ig.message_count, 2);
    assert_eq!(dc.message_count + ig.message_count, total.message_count);
}

#[test]
fn truncated_timestamps_agree() {
    let long = parse_discord_timestamp("2023-05-01T12:00:00.123456789+02:00").unwrap();
    let short = parse_discord_timestamp("2023-05-01T12:00:00.123456+02:00").unwrap();
    assert_eq!(long, short);
}

#[test]
fn header_only_discord_file_is_not_a_crash() {
    let mut batch = IngestBatch::new(mapping());
    let count = batch.add_discord_csv("AuthorID,Author,Date,Content\n").unwrap();
    assert_eq!(count, 0);
}

#[test]
fn empty_discord_file_is_empty_source() {
    let mut batch = IngestBatch::new(mapping());
    let err = batch.add_discord_csv("").unwrap_err();
    assert!(err.is_empty_source());
}

#[test]
fn malformed_discord_row_reports_its_index() {
    let parser = DiscordParser::new();
    let err = parser
        .parse_str("AuthorID,Author,Date,Content\n1,2,bad-timestamp\n")
        .unwrap_err();
    match err {
        ChatstatsError::MalformedRow { row_index, .. } => assert_eq!(row_index, 1),
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn parsing_from_disk_works() {
    let dir = tempfile::tempdir().unwrap();

    let discord_path = dir.path().join("chat.csv");
    fs::write(&discord_path, DISCORD_CSV).unwrap();
    let instagram_path = dir.path().join("message_1.json");
    fs::write(&instagram_path, INSTAGRAM_JSON).unwrap();

    assert_eq!(
        Platform::from_path(&discord_path).unwrap(),
        Platform::Discord
    );
    assert_eq!(
        Platform::from_path(&instagram_path).unwrap(),
        Platform::Instagram
    );

    let discord = create_parser(Platform::Discord);
    assert_eq!(discord.parse(&discord_path).unwrap().len(), 3);

    let instagram = create_parser(Platform::Instagram);
    assert_eq!(instagram.parse(&instagram_path).unwrap().len(), 2);
}

#[test]
fn unknown_author_is_an_explicit_outcome() {
    let csv = "AuthorID,Author,Date,Content\n\
        999,charlie#0000,2023-01-02T03:04:05.000000+00:00,who am I\n";

    let mut batch = IngestBatch::new(mapping());
    batch.add_discord_csv(csv).unwrap();
    let err = batch.finish().unwrap_err();
    assert!(err.is_unattributed());
    assert!(err.to_string().contains("charlie#0000"));
}

#[test]
fn legacy_fallback_attributes_unknowns_to_user2() {
    let csv = "AuthorID,Author,Date,Content\n\
        999,charlie#0000,2023-01-02T03:04:05.000000+00:00,who am I\n";

    let mut batch = IngestBatch::new(mapping()).with_unknown_policy(UnknownPolicy::AssumeUser2);
    batch.add_discord_csv(csv).unwrap();
    let output = batch.finish().unwrap();

    let u2_total = output
        .stats
        .iter()
        .find(|r| r.identity_key == IdentityKey::User2 && r.platform_key == PlatformKey::Discord)
        .unwrap();
    assert_eq!(u2_total.message_count, 1);
}
