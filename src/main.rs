//! # trackpack CLI
//!
//! Command-line interface for the trackpack library.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use trackpack::cli::Args;
use trackpack::core::organize;
use trackpack::parsers::WhatsAppParser;
use trackpack::{Result, TrackpackError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("🎵 trackpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:  {}", args.input);
    if let Some(ref names) = args.known_names {
        println!("📋 Known:  {}", names);
    }
    println!();

    // Step 1: Parse the export
    println!("📖 Parsing chat export...");
    let parse_start = Instant::now();
    let parser = WhatsAppParser::new();
    let (messages, stats) = parser.parse_with_stats(Path::new(&args.input))?;
    println!(
        "   {} messages from {} lines ({} blocks dropped, {:.2}s)",
        stats.messages_parsed,
        stats.lines_read,
        stats.blocks_dropped,
        parse_start.elapsed().as_secs_f64()
    );

    if messages.is_empty() {
        return Err(TrackpackError::invalid_format_in(
            "WhatsApp TXT",
            "no recognizable message headers found",
            &args.input,
        ));
    }

    // Step 2: Load known playlist names, if provided
    let known_names = match args.known_names {
        Some(ref path) => read_known_names(Path::new(path))?,
        None => HashSet::new(),
    };
    if !known_names.is_empty() {
        println!("📋 {} existing playlist names loaded", known_names.len());
    }

    // Step 3: Organize
    println!("🗂️  Organizing Friday playlists...");
    let drafts = organize(&messages, &known_names);

    println!();
    if drafts.is_empty() {
        println!("✨ Nothing to create: every Friday playlist already exists.");
    } else {
        println!("✨ {} playlist(s) to create:", drafts.len());
        for draft in &drafts {
            println!("   {} — {} track(s)", draft.name(), draft.track_count());
            if args.tracks {
                for uri in draft.track_uris() {
                    println!("      {}", uri);
                }
            }
        }
    }

    println!();
    println!("⏱️  Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

fn read_known_names(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
