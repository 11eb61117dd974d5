//! Command-line interface for parex
//! This binary processes parenthesized character expressions line by line:
//! each line is `<expression>[/<operation-codes>[/<ignored>]]`, and each line
//! produces exactly one output in input order.
//!
//! Usage:
//!   parex [`<path>`] [--format `<format>`]  - Process a file, or stdin when no path is given

use clap::{Arg, Command};
use std::fs;
use std::io::Read;

use parex::parex::processor::{process_input, OutputFormat};

fn main() {
    let matches = Command::new("parex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and transform parenthesized character expressions")
        .arg(
            Arg::new("path")
                .help("Path to the input file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'treeviz')")
                .default_value("text"),
        )
        .get_matches();

    let format = match OutputFormat::from_string(matches.get_one::<String>("format").unwrap()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!(
                "Error: {} (available: {})",
                e,
                OutputFormat::available_formats().join(", ")
            );
            std::process::exit(1);
        }
    };

    let input = match matches.get_one::<String>("path") {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
    };

    let input = match input {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match process_input(&input, &format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
