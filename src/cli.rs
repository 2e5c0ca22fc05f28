//! Command-line interface components.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::BlmConfig;
use crate::observer::TracingObserver;
use crate::parser::BlmParser;
use crate::stats::ProcessingStats;

#[derive(Parser, Debug)]
#[command(name = "blm")]
#[command(about = "Parse BLM property-listing files into JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// BLM file, or a directory of BLM files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Include the HIP document group in each record
    #[arg(long)]
    pub include_hips: bool,

    /// Scan subdirectories when INPUT is a directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Continue with the remaining files when one fails to parse
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors and skip the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("blm_parser={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<BlmConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Using config file: {}", path.display());
            BlmConfig::from_file(path)?
        }
        None => BlmConfig::default(),
    };

    if args.compact {
        config.pretty = false;
    }
    if args.include_hips {
        config.include_hips = true;
    }
    if args.recursive {
        config.recursive = true;
    }
    if args.keep_going {
        config.fail_fast = false;
    }

    config.validate()?;
    Ok(config)
}

/// Find the BLM files named by `input`, sorted by path
pub fn discover_inputs(input: &Path, config: &BlmConfig) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        anyhow::bail!("Input not found: {}", input.display());
    }

    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(input).max_depth(max_depth) {
        let entry = entry.context("Failed to walk input directory")?;
        if entry.file_type().is_file() && config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Discovered {} BLM files in {}", files.len(), input.display());
    Ok(files)
}

/// Parse one file into its rendered JSON records
pub fn convert_file(path: &Path, config: &BlmConfig) -> Result<Vec<Value>> {
    let label = path.display().to_string();
    let records = BlmParser::from_path(path)
        .with_observer(TracingObserver::for_source(label))
        .parse()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    records
        .iter()
        .map(|record| {
            serde_json::to_value(record.rendered(config.include_hips))
                .with_context(|| format!("Failed to render property {}", record.id()))
        })
        .collect()
}

/// Main entry point for the `blm` binary
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args)?;
    let config = load_configuration(&args)?;

    let start_time = Instant::now();
    let inputs = discover_inputs(&args.input, &config)?;
    let single_file = args.input.is_file();

    let mut stats = ProcessingStats::new();
    let progress = progress_bar(inputs.len(), args.quiet || single_file);
    let mut converted = Map::new();

    for path in &inputs {
        progress.set_message(file_label(path));
        match convert_file(path, &config) {
            Ok(records) => {
                stats.record_success(records.len());
                converted.insert(path.display().to_string(), Value::Array(records));
            }
            Err(error) if !config.fail_fast => {
                warn!("{:#}", error);
                stats.record_failure(path.clone(), format!("{:#}", error));
            }
            Err(error) => {
                progress.abandon();
                return Err(error);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let output = if single_file {
        converted
            .into_iter()
            .next()
            .map_or(Value::Array(Vec::new()), |(_, records)| records)
    } else {
        Value::Object(converted)
    };
    write_output(&output, args.output.as_deref(), config.pretty)?;

    stats.processing_time_ms = start_time.elapsed().as_millis();
    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden || len < 2 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_output(value: &Value, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

fn print_summary(stats: &ProcessingStats) {
    eprintln!("{}", "Processing Summary".bright_green().bold());
    eprintln!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        eprintln!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
        for (path, error) in &stats.failures {
            eprintln!("    {} {}", path.display().to_string().bright_black(), error);
        }
    }
    eprintln!(
        "  {} {}",
        "Total records:".bright_cyan(),
        stats.total_records.to_string().bright_white().bold()
    );
}
