//! Command implementations for the purchase-order ingester CLI
//!
//! This module contains command execution, logging setup and report
//! formatting. File reading happens here; the parsing library itself stays
//! free of I/O.

use crate::app::services::po_csv_parser::{ParseResult, PoCsvParser};
use crate::cli::args::{CheckDateArgs, Commands, OutputFormat, ParseArgs};
use crate::constants::LOG_TARGET;
use anyhow::{Context, Result};
use bigdecimal::{BigDecimal, Zero};
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Maximum number of skip messages shown in the human report
const REPORTED_ERRORS: usize = 10;

/// Run a subcommand and return the process exit code
pub fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Parse(args) => run_parse(&args),
        Commands::CheckDate(args) => Ok(run_check_date(&args)),
    }
}

/// Parse an extract from disk and print the result
fn run_parse(args: &ParseArgs) -> Result<i32> {
    setup_logging(args.get_log_level(), args.quiet);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.build_config()?;
    debug!("Loaded configuration: {:?}", config);

    let text = std::fs::read_to_string(&args.input_path)
        .with_context(|| format!("Failed to read {}", args.input_path.display()))?;

    info!("Parsing purchase-order extract: {}", args.input_path.display());
    let start_time = Instant::now();
    let result = PoCsvParser::with_config(config).parse_str(&text)?;
    let elapsed = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => print!("{}", format_human_report(&result, elapsed)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result.orders)
                .context("Failed to serialize purchase orders")?
        ),
    }

    Ok(0)
}

/// Validate a single date; exit code 1 when it is not a calendar date
fn run_check_date(args: &CheckDateArgs) -> i32 {
    match crate::parse_date(&args.date) {
        Some(date) => {
            println!("{} {}", "valid".green().bold(), date.format("%Y-%m-%d"));
            0
        }
        None => {
            println!("{} {}", "invalid".red().bold(), args.date);
            1
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Render the human-readable parse report
pub fn format_human_report(result: &ParseResult, elapsed: Duration) -> String {
    let stats = &result.stats;

    let mut lines = vec![
        String::new(),
        "Purchase Order Ingestion Complete".bold().to_string(),
        "-".repeat(40),
        format!("  Rows read:         {}", stats.total_records),
        format!(
            "  Orders accepted:   {}",
            stats.orders_parsed.to_string().green()
        ),
        format!("  Rows skipped:      {}", stats.records_skipped),
        format!("  Success rate:      {:.1}%", stats.success_rate()),
        format!("  Processing time:   {:.2?}", elapsed),
    ];

    if !result.orders.is_empty() {
        let amount = result
            .orders
            .iter()
            .fold(BigDecimal::zero(), |sum, o| sum + &o.total_amount);
        let tax = result
            .orders
            .iter()
            .fold(BigDecimal::zero(), |sum, o| sum + o.total_tax());
        lines.push(format!("  Total amount:      {}", amount));
        lines.push(format!("  Tax columns total: {}", tax));
    }

    if stats.numeric_fallbacks > 0 {
        lines.push(format!(
            "  {} {} numeric value(s) could not be read and were set to 0",
            "warning:".yellow(),
            stats.numeric_fallbacks
        ));
    }

    if !stats.errors.is_empty() {
        lines.push(String::new());
        lines.push("Skipped rows:".to_string());
        lines.extend(
            stats
                .errors
                .iter()
                .take(REPORTED_ERRORS)
                .map(|message| format!("  - {}", message)),
        );
        let hidden = stats.records_skipped.saturating_sub(REPORTED_ERRORS);
        if hidden > 0 {
            lines.push(format!("  ... and {} more", hidden));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
