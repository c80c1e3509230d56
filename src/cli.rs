// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
//   repo-media media   <REPO> [PATH] [--ref REF] [--json]
//   repo-media entries <REPO> [PATH] [--ref REF] [--json]
//
// Global options (--api-url, --timeout, --verbose) can go before or after
// the subcommand.
// =============================================================================

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-media",
    version,
    about = "List the images and videos stored in a GitHub repository directory",
    long_about = "repo-media lists one directory of a GitHub repository through the contents API \
                  and shows the .jpg/.png images and .mp4 videos it contains, with their download URLs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API (use your GitHub Enterprise URL here)
    #[arg(long, global = true, env = "REPO_MEDIA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the images and videos in a repository directory
    ///
    /// Example: repo-media media octo/gallery media
    Media(TargetArgs),

    /// List every entry (files and directories) in a repository directory
    ///
    /// Example: repo-media entries https://github.com/octo/gallery media --json
    Entries(TargetArgs),
}

// Arguments shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Repository as owner/repo or a GitHub URL (e.g., https://github.com/user/repo)
    pub repo: String,

    /// Directory inside the repository (default: repository root)
    #[arg(default_value = "")]
    pub path: String,

    /// Branch, tag or commit to list (default: the repository's default branch)
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}
