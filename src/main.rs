//! examscout CLI
//!
//! Prompts for (or takes) an exam name, fetches best-effort info from all
//! configured sources, and prints a formatted report.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use examscout::{
    error::Result,
    models::Config,
    pipeline::{FetchOptions, fetch_exam_info},
    report,
};

/// examscout - Universal Exam Info Fetcher
#[derive(Parser, Debug)]
#[command(
    name = "examscout",
    version,
    about = "Fetch exam summary, syllabus, pattern, videos, books, and PYQ links"
)]
struct Cli {
    /// Exam name to look up (prompts interactively when omitted)
    query: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, default_value = "examscout.toml")]
    config: PathBuf,

    /// Skip video and playlist lookup
    #[arg(long)]
    no_videos: bool,

    /// Skip book and PYQ link lookup
    #[arg(long)]
    no_books: bool,

    /// Print the aggregate as pretty JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Read the exam name from the CLI argument or an interactive prompt.
fn read_query(cli_query: Option<String>) -> Result<String> {
    if let Some(query) = cli_query {
        return Ok(query.trim().to_string());
    }

    print!("Enter exam name (e.g., NEET, JEE Main, CLAT, UPSC, CUET, SSC CGL): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("Universal Exam Info Fetcher (Wikipedia + videos + books + solved PYQs)");

    let config = Config::load_or_default(&cli.config);
    config.validate()?;
    let config = Arc::new(config);

    let query = read_query(cli.query)?;
    if query.is_empty() {
        println!("No query entered. Exiting.");
        return Ok(());
    }

    let options = FetchOptions {
        include_videos: !cli.no_videos,
        include_books: !cli.no_books,
    };

    let info = fetch_exam_info(config, &query, options).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("\n{}", report::render(&info));
    }

    Ok(())
}
