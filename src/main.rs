//! Almanac main entry point
//!
//! Command-line interface for the blog archiver. The blog URL and target
//! years can be passed as flags or entered interactively; everything else
//! comes from an optional TOML config file.

use almanac::config::{load_config, Config, CrawlRequest};
use almanac::crawler::crawl;
use almanac::render::render_corpus;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Almanac: archive a blog year by year
///
/// Crawls every post of the requested years into a JSON snapshot, then
/// renders one HTML document per year. Re-running against an existing
/// snapshot skips the crawl entirely.
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(version)]
#[command(about = "Archive a blog year by year", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base address of the blog (prompted for when omitted)
    #[arg(long, value_name = "URL")]
    blog_url: Option<String>,

    /// Comma-separated years to archive (prompted for when omitted)
    #[arg(long, value_delimiter = ',', value_name = "YEARS")]
    years: Vec<i32>,

    /// Override the snapshot path from the config
    #[arg(long, value_name = "FILE")]
    snapshot: Option<String>,

    /// Override the render output directory from the config
    #[arg(long, value_name = "DIR")]
    render_dir: Option<String>,

    /// Skip rendering, only build or load the snapshot
    #[arg(long)]
    no_render: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(snapshot) = cli.snapshot {
        config.output.snapshot_path = snapshot;
    }
    if let Some(render_dir) = cli.render_dir {
        config.output.render_dir = render_dir;
    }

    let blog_url = match cli.blog_url {
        Some(url) => url,
        None => prompt("Enter the blog URL: ")?,
    };

    let years = if cli.years.is_empty() {
        parse_years(&prompt("Enter years range (comma-separated): ")?)?
    } else {
        cli.years
    };

    let request = CrawlRequest { blog_url, years };

    let corpus = crawl(config.clone(), request)
        .await
        .context("crawl failed")?;

    if cli.no_render {
        tracing::info!("Skipping render stage");
        return Ok(());
    }

    render_corpus(&corpus, Path::new(&config.output.render_dir))
        .await
        .context("render failed")?;

    println!("Archive complete.");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("almanac=info,warn"),
            1 => EnvFilter::new("almanac=debug,info"),
            2 => EnvFilter::new("almanac=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reads one trimmed line from stdin after printing a prompt
fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses a comma-separated year list
fn parse_years(input: &str) -> anyhow::Result<Vec<i32>> {
    input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .with_context(|| format!("invalid year '{}'", part.trim()))
        })
        .collect()
}
