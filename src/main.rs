//! bigtree - walk a directory tree and shout when it gets too big.
//!
//! Usage:
//!   bigtree check [PATH] -t 100MB   Report if the tree exceeds the threshold
//!   bigtree dump [PATH]             Dump the tree as nested JSON
//!   bigtree --help                  Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};

use bigtree_report::{BigTreeDetector, ConsoleReporter, DebugToolReporter, TreeDumper};
use bigtree_walk::LocalFs;

#[derive(Parser)]
#[command(
    name = "bigtree",
    version,
    about = "Walk a directory tree and shout when it gets too big",
    long_about = "bigtree recursively walks a directory tree, sums the file sizes it\n\
                  finds, and reports when the total exceeds a threshold."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a tree and report if it exceeds a size threshold
    Check {
        /// Path to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Size threshold (e.g., "500", "10KB", "1.5GB")
        #[arg(short, long, default_value = "1GB")]
        threshold: String,

        /// Output format for the report
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Walk a tree and dump the nested listing as JSON
    Dump {
        /// Path to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            path,
            threshold,
            format,
        } => run_check(&path, &threshold, format).await,
        Command::Dump { path, output } => run_dump(&path, output).await,
    }
}

/// Walk a tree and report if its total size exceeds the threshold.
async fn run_check(path: &PathBuf, threshold: &str, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;
    let threshold_bytes = parse_size(threshold)?;

    let outcome = match format {
        OutputFormat::Text => {
            let mut detector =
                BigTreeDetector::new(LocalFs::new(), ConsoleReporter::new(), threshold_bytes);
            detector.detect(&path).await
        }
        OutputFormat::Json => {
            let reporter = DebugToolReporter::new(std::io::stdout());
            let mut detector = BigTreeDetector::new(LocalFs::new(), reporter, threshold_bytes);
            detector.detect(&path).await
        }
    };
    let outcome = outcome.with_context(|| format!("Walk failed for {}", path.display()))?;

    // The reporter already displayed the excess; only the quiet case
    // needs a summary line.
    if outcome.is_none() {
        eprintln!("{}: within threshold ({threshold})", path.display());
    }

    Ok(())
}

/// Walk a tree and dump the nested listing.
async fn run_dump(path: &PathBuf, output: Option<PathBuf>) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;

    let mut dumper = TreeDumper::new(LocalFs::new(), ConsoleReporter::new());
    let tree = dumper
        .dump(&path)
        .await
        .with_context(|| format!("Walk failed for {}", path.display()))?;

    let json = serde_json::to_string_pretty(&tree)?;
    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Dumped to {}", output_path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

/// Parse a size string (e.g., "500", "10KB", "1.5GB").
fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num, multiplier) = if s.ends_with("GB") || s.ends_with("G") {
        (trim_unit(&s)?, 1024 * 1024 * 1024)
    } else if s.ends_with("MB") || s.ends_with("M") {
        (trim_unit(&s)?, 1024 * 1024)
    } else if s.ends_with("KB") || s.ends_with("K") {
        (trim_unit(&s)?, 1024)
    } else if s.ends_with("B") {
        (trim_unit(&s)?, 1)
    } else if s.chars().all(|c| c.is_ascii_digit()) {
        (s.parse()?, 1)
    } else {
        bail!("Invalid size: {s}");
    };

    Ok((num * multiplier as f64) as u64)
}

fn trim_unit(s: &str) -> Result<f64> {
    let num = s.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.');
    if num.is_empty() {
        bail!("Invalid size: {s}");
    }
    Ok(num.parse()?)
}
