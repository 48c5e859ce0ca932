//! CLI tool for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! cardcheck validate "4532 0151 1283 0366"
//!
//! # JSON output, same shape as the REST API
//! cardcheck validate 4532015112830366 --output json
//!
//! # Detect the scheme only
//! cardcheck scheme 5425233430109903
//!
//! # Mask for logging
//! cardcheck mask 4532015112830366
//! ```

use std::process::ExitCode;

use cardcheck::{
    detect_scheme, luhn_check, mask_for_logging, sanitize, validate_card_number,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Payment card number validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number (length, digits, Luhn, scheme)
    Validate {
        /// Card number to validate (separators allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect the card scheme from the prefix
    Scheme {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Mask a card number for logging
    Mask {
        /// Card number to mask
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Scheme { card_number } => cmd_scheme(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Mask { card_number } => cmd_mask(&card_number),
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> ExitCode {
    match validate_card_number(card_number) {
        Ok(result) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: {}", if result.is_valid { "yes" } else { "no" });
                    println!("Scheme: {}", result.scheme.name());
                    println!("Message: {}", result.message);
                }
                OutputFormat::Json => print_json(&result),
            }
            if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            match output {
                OutputFormat::Text => println!("Error: {}", e),
                OutputFormat::Json => print_json(&serde_json::json!({ "error": e.to_string() })),
            }
            ExitCode::from(2)
        }
    }
}

fn cmd_scheme(card_number: &str) -> ExitCode {
    let digits = sanitize(card_number);
    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        return ExitCode::from(2);
    }

    let scheme = detect_scheme(&digits);
    println!("Detected Scheme: {} ({})", scheme.name(), scheme);
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if luhn_check(&sanitize(card_number)) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::from(1)
    }
}

fn cmd_mask(card_number: &str) -> ExitCode {
    println!("{}", mask_for_logging(&sanitize(card_number)));
    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
