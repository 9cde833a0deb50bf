use clap::Parser;
use po_ingest::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("po-ingest - Purchase Order Extract Validator");
    println!("============================================");
    println!();
    println!("Parse vendor purchase-order CSV extracts into validated records.");
    println!();
    println!("USAGE:");
    println!("    po-ingest <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse         Parse a CSV extract and report accepted purchase orders");
    println!("    check-date    Check whether a D/M/Y date is a valid calendar date");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize an extract:");
    println!("    po-ingest parse orders.csv");
    println!();
    println!("    # Print accepted records as JSON, semicolon-delimited input:");
    println!("    po-ingest parse orders.csv --format json --delimiter ';'");
    println!();
    println!("    # Validate a date:");
    println!("    po-ingest check-date 29/02/2024");
    println!();
    println!("For detailed help on any command, use:");
    println!("    po-ingest <COMMAND> --help");
}
