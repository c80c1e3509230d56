// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and build the contents API client
// 3. Fetch the directory listing (and classify it for `media`)
// 4. Print a table or JSON
// 5. Exit with proper code (0 = found something, 1 = nothing found, 2 = error)
//
// A failed fetch always exits with 2, so it can never be mistaken for a
// directory with no media in it.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - fetcher settings
mod github; // src/github/ - contents API client
mod logging; // src/logging.rs - tracing setup
mod media; // src/media/ - media classification

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use reqwest::StatusCode;
use tracing::info;

use cli::{Cli, Commands, TargetArgs};
use config::FetchConfig;
use github::{ContentsClient, EntryKind, RepoEntry, RepoLocation};
use media::{MediaItem, MediaSummary, MediaType};

const EXIT_FOUND: i32 = 0;
const EXIT_NOTHING_FOUND: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // A second subscriber can only exist in tests; ignore that case
    logging::init(cli.verbose).ok();

    let config = FetchConfig::new(&cli.api_url, cli.timeout).context("Invalid configuration")?;
    let client = ContentsClient::new(&config).context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Media(target) => handle_media(&client, &target).await,
        Commands::Entries(target) => handle_entries(&client, &target).await,
    }
}

// Handles the 'media' subcommand: fetch, classify, print
async fn handle_media(client: &ContentsClient, target: &TargetArgs) -> Result<i32> {
    let entries = fetch_listing(client, target).await?;
    let items = media::classify(&entries);

    info!(
        entries = entries.len(),
        media = items.len(),
        "classified directory listing"
    );

    if target.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!(
            "No images or videos found in {} ({} entries listed)",
            display_path(&target.path),
            entries.len()
        );
    } else {
        print_media_table(&items);
    }

    Ok(exit_code_for(items.len()))
}

// Handles the 'entries' subcommand: fetch and print the raw listing
async fn handle_entries(client: &ContentsClient, target: &TargetArgs) -> Result<i32> {
    let entries = fetch_listing(client, target).await?;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("{} is empty", display_path(&target.path));
    } else {
        print_entries_table(&entries);
    }

    Ok(exit_code_for(entries.len()))
}

async fn fetch_listing(client: &ContentsClient, target: &TargetArgs) -> Result<Vec<RepoEntry>> {
    let location = RepoLocation::parse(&target.repo)?;

    let result = match target.git_ref.as_deref() {
        Some(git_ref) => {
            client
                .fetch_at(&location.owner, &location.repo, &target.path, Some(git_ref))
                .await
        }
        None => client.fetch(&location.owner, &location.repo, &target.path).await,
    };

    if let Err(err) = &result {
        if err.status() == Some(StatusCode::NOT_FOUND) {
            eprintln!(
                "Hint: check the owner, repository, path and --ref \
                 (private repositories are not supported)"
            );
        }
    }

    let entries = result.with_context(|| {
        format!("Could not list {} in {}", display_path(&target.path), location)
    })?;

    Ok(entries)
}

fn exit_code_for(found: usize) -> i32 {
    if found > 0 {
        EXIT_FOUND
    } else {
        EXIT_NOTHING_FOUND
    }
}

fn display_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "the repository root".to_string()
    } else {
        format!("'{}'", trimmed)
    }
}

fn print_media_table(items: &[MediaItem]) {
    println!("{:<40} {:<10} {}", "NAME", "TYPE", "URL");
    println!("{}", "=".repeat(100));

    for item in items {
        println!(
            "{:<40} {:<10} {}",
            truncate(&item.name, 40),
            format_media_type(item.media_type),
            item.url
        );
    }

    println!();

    let summary = MediaSummary::of(items);
    println!("📊 Summary:");
    println!("   🖼️  Images: {}", summary.images);
    println!("   🎬 Videos: {}", summary.videos);
    println!("   📋 Total: {}", summary.total());
}

fn print_entries_table(entries: &[RepoEntry]) {
    println!("{:<40} {:<6} {}", "NAME", "KIND", "PATH");
    println!("{}", "=".repeat(100));

    for entry in entries {
        let kind = match entry.kind {
            EntryKind::File => "file",
            EntryKind::Directory => "dir",
        };
        println!("{:<40} {:<6} {}", truncate(&entry.name, 40), kind, entry.path);
    }

    println!();

    let dirs = entries.iter().filter(|e| !e.is_file()).count();
    println!("📋 {} file(s), {} director(ies)", entries.len() - dirs, dirs);
}

fn format_media_type(media_type: MediaType) -> String {
    match media_type {
        MediaType::Image => format!("🖼️  {}", media_type.as_str()),
        MediaType::Video => format!("🎬 {}", media_type.as_str()),
    }
}

// Shortens `text` to at most `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
