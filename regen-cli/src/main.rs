//! Command-line interface for regen
//! Generates all strings from the regular expression of a finite language.
//!
//! Usage:
//!   regen `<pattern>` [--format `<format>`] [--unique]
//!
//! Example:
//!   regen "r(8|9|1[0-5])(b|w|d)?"
//!   // Output:
//!   // r10
//!   // r10b
//!   // r10d
//!   // r10w
//!   // ...
//!   // r9w

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("regen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate all strings from the regular expression of a finite language")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("Regular expression describing a finite language (no '*', '+', '.', anchors)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' (one string per line) or 'json'")
                .default_value("text"),
        )
        .arg(
            Arg::new("unique")
                .long("unique")
                .short('u')
                .help("Drop duplicate strings from the output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let pattern = matches
        .get_one::<String>("pattern")
        .expect("pattern is required");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let mut strings = regen::enumerate(pattern).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    strings.sort();
    if matches.get_flag("unique") {
        strings.dedup();
    }

    match format.as_str() {
        "text" => {
            for s in &strings {
                println!("{}", s);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&strings).unwrap_or_else(|e| {
                eprintln!("Error formatting output: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        fmt => {
            eprintln!("Format '{}' not supported", fmt);
            eprintln!("Available formats: text, json");
            std::process::exit(1);
        }
    }
}
