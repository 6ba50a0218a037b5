//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;

use chatstats::batch::IngestBatch;
use chatstats::cli::{Args, OutputFormat};
use chatstats::mapping::{PlatformHandles, UsernameMapping};
use chatstats::output::{write_json, write_messages_csv, write_stats_csv};
use chatstats::record::Platform;
use chatstats::{ChatstatsError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let mapping = load_mapping(&args)?;

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Discord:   {}", args.discord.display());
    for path in &args.instagram {
        println!("📂 Instagram: {}", path.display());
    }
    println!("💾 Output:    {}", args.output.display());
    println!("📄 Format:    {}", args.format);
    println!();

    // File-kind validation up front, before any parsing work
    expect_kind(&args.discord, Platform::Discord)?;
    for path in &args.instagram {
        expect_kind(path, Platform::Instagram)?;
    }

    let mut batch = IngestBatch::new(mapping).with_unknown_policy(args.unknown.into());

    println!("⏳ Parsing Discord CSV...");
    let content = fs::read_to_string(&args.discord)?;
    let count = batch.add_discord_csv(&content)?;
    println!("   {count} messages");

    for path in &args.instagram {
        println!("⏳ Parsing Instagram JSON ({})...", path.display());
        let content = fs::read_to_string(path)?;
        let count = batch.add_instagram_json(&content)?;
        println!("   {count} messages");
    }

    println!("🧮 Aggregating statistics...");
    let output = batch.finish()?;

    match args.format {
        OutputFormat::Csv => write_stats_csv(&output.stats, &args.output)?,
        OutputFormat::Json => write_json(&output.stats, &args.output)?,
    }

    if let Some(ref messages_path) = args.messages {
        if messages_path.extension().is_some_and(|e| e == "csv") {
            write_messages_csv(&output.records, messages_path)?;
        } else {
            write_json(&output.records, messages_path)?;
        }
        println!("💬 Records written to {}", messages_path.display());
    }

    println!();
    println!("✅ Done! Statistics saved to {}", args.output.display());
    println!();
    println!("📊 Summary:");
    println!("   Records:  {} messages", output.records.len());
    println!("   Rows:     {} combinations", output.stats.len());
    if let Some(total) = output.stats.last() {
        println!("   Total:    {} messages, {} words", total.message_count, total.word_count);
    }

    Ok(())
}

/// Builds the mapping from --mapping or from the four handle flags.
fn load_mapping(args: &Args) -> Result<UsernameMapping> {
    if let Some(ref path) = args.mapping {
        let content = fs::read_to_string(path)?;
        return UsernameMapping::from_json(&content);
    }

    match (
        &args.user1_discord,
        &args.user1_instagram,
        &args.user2_discord,
        &args.user2_instagram,
    ) {
        (Some(u1d), Some(u1i), Some(u2d), Some(u2i)) => Ok(UsernameMapping::new(
            PlatformHandles::new(u1d, u1i),
            PlatformHandles::new(u2d, u2i),
        )),
        _ => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "pass --mapping FILE or all four of --user1-discord, --user1-instagram, \
             --user2-discord, --user2-instagram",
        )
        .into()),
    }
}

/// Rejects a file whose extension does not match the expected export kind.
fn expect_kind(path: &Path, expected: Platform) -> Result<()> {
    if Platform::from_path(path)? == expected {
        Ok(())
    } else {
        Err(ChatstatsError::unsupported_file_type(path))
    }
}
