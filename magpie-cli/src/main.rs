// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Magpie CLI - fetch your bookmarks, bookmark folders, and likes.
//!
//! # Examples
//!
//! ```bash
//! # Latest 100 bookmarks
//! magpie bookmarks --count 100
//!
//! # Every bookmark, as JSON
//! magpie bookmarks --all --format json --pretty
//!
//! # List bookmark folders
//! magpie folders
//!
//! # Contents of one folder
//! magpie folder 1749412345678901234 --all
//!
//! # Likes for the logged-in account
//! magpie likes --count 50
//! ```

mod commands;
mod credentials;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{bookmarks, folder, folders, likes};

// ============================================================================
// CLI Definition
// ============================================================================

/// Magpie CLI - timeline collection fetching.
#[derive(Parser)]
#[command(name = "magpie")]
#[command(about = "Fetch bookmarks, bookmark folders, and likes from X")]
#[command(long_about = r#"
Magpie fetches timeline collections from X using your browser session.

Credentials come from flags or the environment:
  MAGPIE_COOKIE   full Cookie header from a logged-in browser session
  MAGPIE_CSRF     x-csrf-token (the ct0 cookie value)
  MAGPIE_BEARER   bearer token (defaults to the public web-app token)

Examples:
  magpie bookmarks --count 100   # Latest 100 bookmarks
  magpie bookmarks --all         # Every bookmark
  magpie folders                 # List bookmark folders
  magpie folder <id> --all       # Contents of one folder
  magpie likes --format json     # Likes as JSON
"#)]
#[command(version)]
#[command(author = "Magpie Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Cookie header value (overrides MAGPIE_COOKIE).
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// CSRF token (overrides MAGPIE_CSRF).
    #[arg(long, global = true)]
    pub csrf: Option<String>,

    /// Bearer token (overrides MAGPIE_BEARER).
    #[arg(long, global = true)]
    pub bearer: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the bookmarks timeline.
    #[command(visible_alias = "b")]
    Bookmarks(commands::FetchArgs),

    /// List bookmark folders.
    Folders,

    /// Fetch the contents of one bookmark folder.
    Folder(folder::FolderArgs),

    /// Fetch the likes timeline.
    #[command(visible_alias = "l")]
    Likes(likes::LikesArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Missing or invalid credentials.
    CredentialsMissing = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("magpie=debug,info")
    } else {
        EnvFilter::new("magpie=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Bookmarks(args) => bookmarks::run(args, &cli).await,
        Commands::Folders => folders::run(&cli).await,
        Commands::Folder(args) => folder::run(args, &cli).await,
        Commands::Likes(args) => likes::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        let code = if credentials::is_credentials_error(&e) {
            ExitCode::CredentialsMissing
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
