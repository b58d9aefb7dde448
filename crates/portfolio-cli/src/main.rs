//! Portfolio CLI
//!
//! Offline tooling over portfolio-core: check a CMS dump before deploying it
//! and replay scripted input traces through the page runtime.
//!
//! ## Usage
//!
//! ```bash
//! # Normalize a CMS dump and report what was dropped
//! portfolio validate dump.json
//!
//! # Fail on duplicates or malformed records
//! portfolio validate dump.json --strict
//!
//! # Navigation sections the dump produces
//! portfolio sections dump.json
//!
//! # Replay a trace and print every runtime event
//! portfolio replay trace.json --drain
//!
//! # Print the effective timing configuration
//! portfolio --config timings.json config
//! ```

mod trace;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::{CmsDump, PortfolioConfig};

use crate::trace::{replay, ReplayOptions, Trace};

/// Portfolio site tooling
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio site tooling - content validation and trace replay")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Timing configuration (JSON; missing fields take defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a CMS dump and report counts, duplicates and malformed records
    Validate {
        /// CMS dump (JSON)
        file: PathBuf,

        /// Exit with an error if anything was dropped
        #[arg(long)]
        strict: bool,
    },

    /// Print the navigation sections a CMS dump produces, in page order
    Sections {
        /// CMS dump (JSON)
        file: PathBuf,
    },

    /// Replay a scripted input trace and print the runtime events
    Replay {
        /// Trace document (JSON)
        file: PathBuf,

        /// Keep firing timers after the last step until none remain
        #[arg(long)]
        drain: bool,

        /// Also report inputs whose default action was prevented
        #[arg(long)]
        show_prevented: bool,
    },

    /// Print the effective timing configuration
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<PortfolioConfig> {
    match path {
        Some(path) => {
            let json = read_file(path)?;
            PortfolioConfig::from_json(&json)
                .with_context(|| format!("Invalid configuration in {}", path.display()))
        }
        None => Ok(PortfolioConfig::default()),
    }
}

fn load_dump(path: &Path) -> Result<CmsDump> {
    let json = read_file(path)?;
    CmsDump::from_json(&json).with_context(|| format!("Invalid CMS dump in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { file, strict } => {
            let report = load_dump(&file)?.normalize();
            let data = &report.data;

            println!("Content: {}", file.display());
            println!();
            println!(
                "  Projects: {} (featured: {})",
                data.projects.len(),
                data.featured_projects().len()
            );
            println!("  Skill categories: {}", data.skills.len());
            println!("  Work experiences: {}", data.work_experiences.len());
            if report.how_i_work_fallback {
                println!("  How I work: {} (static fallback)", data.how_i_work.len());
            } else {
                println!("  How I work: {}", data.how_i_work.len());
            }
            println!();
            println!("  Duplicates dropped: {}", report.duplicates);
            println!("  Malformed records: {}", report.malformed);

            if strict && (report.duplicates > 0 || report.malformed > 0) {
                anyhow::bail!(
                    "{} duplicate and {} malformed record(s) in {}",
                    report.duplicates,
                    report.malformed,
                    file.display()
                );
            }
            println!();
            println!("OK");
        }

        Commands::Sections { file } => {
            let data = load_dump(&file)?.normalize().data;
            for section in data.sections().iter() {
                println!("{}", section.fragment());
            }
        }

        Commands::Replay {
            file,
            drain,
            show_prevented,
        } => {
            let trace = Trace::from_json(&read_file(&file)?)?;
            let lines = replay(
                &trace,
                config,
                ReplayOptions {
                    drain,
                    show_prevented,
                },
            )?;
            for line in lines {
                println!("{:>7}ms  {}", line.at.as_millis(), line.text);
            }
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
