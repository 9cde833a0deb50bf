//! Command-line argument definitions for the purchase-order ingester
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::IngestConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the purchase-order ingester
///
/// Reads vendor purchase-order CSV extracts and reports the validated records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "po-ingest",
    version,
    about = "Validate vendor purchase-order CSV extracts",
    long_about = "Parses vendor purchase-order CSV extracts into validated records. Rows with an \
                  invalid date are skipped; an extract missing required columns is rejected."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a CSV extract and print the accepted purchase orders
    Parse(ParseArgs),
    /// Check whether a D/M/Y date string is a valid calendar date
    CheckDate(CheckDateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// CSV extract to parse
    #[arg(value_name = "FILE")]
    pub input_path: PathBuf,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Field delimiter (overrides the configuration file)
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check-date command
#[derive(Debug, Clone, Parser)]
pub struct CheckDateArgs {
    /// Date in D/M/Y form, e.g. 29/02/2024
    #[arg(value_name = "DATE")]
    pub date: String,
}

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON array of purchase orders
    Json,
}

impl ParseArgs {
    /// Validate command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the ingestion configuration: file values first, then CLI overrides
    pub fn build_config(&self) -> Result<IngestConfig> {
        let mut config = match &self.config_file {
            Some(path) => IngestConfig::from_toml_file(path)?,
            None => IngestConfig::default(),
        };

        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_args(argv: &[&str]) -> ParseArgs {
        match Args::try_parse_from(argv).unwrap().command {
            Some(Commands::Parse(args)) => args,
            other => panic!("expected parse command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_command_defaults() {
        let args = parse_args(&["po-ingest", "parse", "orders.csv"]);

        assert_eq!(args.input_path, PathBuf::from("orders.csv"));
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(args.delimiter.is_none());
    }

    #[test]
    fn test_parse_command_options() {
        let args = parse_args(&[
            "po-ingest", "parse", "orders.csv", "--format", "json", "-d", ";", "-vv",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.delimiter, Some(';'));
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_format_values() {
        let human = parse_args(&["po-ingest", "parse", "orders.csv", "-f", "human"]);
        assert_eq!(human.output_format, OutputFormat::Human);

        assert!(Args::try_parse_from(["po-ingest", "parse", "x.csv", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["po-ingest", "parse", "x.csv", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_check_date_command() {
        let args = Args::try_parse_from(["po-ingest", "check-date", "29/02/2024"]).unwrap();
        match args.command {
            Some(Commands::CheckDate(check)) => assert_eq!(check.date, "29/02/2024"),
            other => panic!("expected check-date command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["po-ingest"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_log_levels() {
        let mut args = parse_args(&["po-ingest", "parse", "orders.csv"]);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_validate_missing_input() {
        let args = parse_args(&["po-ingest", "parse", "/nonexistent/orders.csv"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_build_config_with_override() {
        let mut config_file = NamedTempFile::new().unwrap();
        writeln!(config_file, "delimiter = \"\\t\"").unwrap();
        writeln!(config_file, "max_recorded_errors = 7").unwrap();
        let input = NamedTempFile::new().unwrap();

        let path = config_file.path().to_str().unwrap();
        let input_path = input.path().to_str().unwrap();

        let args = parse_args(&["po-ingest", "parse", input_path, "-c", path]);
        assert!(args.validate().is_ok());
        let config = args.build_config().unwrap();
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.max_recorded_errors, 7);

        let args = parse_args(&["po-ingest", "parse", input_path, "-c", path, "-d", "|"]);
        let config = args.build_config().unwrap();
        assert_eq!(config.delimiter, '|');
        assert_eq!(config.max_recorded_errors, 7);
    }

    #[test]
    fn test_build_config_rejects_quote_delimiter() {
        let args = parse_args(&["po-ingest", "parse", "orders.csv", "-d", "\""]);
        assert!(args.build_config().is_err());
    }
}
