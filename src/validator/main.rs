//! Standalone validator for personality manifest files.
//!
//! Checks that a manifest parses, defines all four personalities, and
//! fills in every display attribute. Also previews the reply each
//! personality would give.

use std::process::ExitCode;

use clap::Parser;

use neurahive_bot::brain::generate_response;
use neurahive_bot::config::{ManifestError, PersonalityTable};

/// Personality manifest validator.
#[derive(Parser, Debug)]
#[command(name = "validate_manifest")]
#[command(about = "Validates personality manifest files for the NeuraHive bot")]
#[command(version)]
struct Args {
    /// Path to the JSON manifest to validate.
    #[arg(short, long, default_value = "agents_manifest.json")]
    file: String,

    /// Generate an example manifest at the specified path.
    #[arg(long)]
    generate_example: Option<String>,

    /// Show a sample reply for each personality.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Handle example generation
    if let Some(output_path) = args.generate_example {
        return generate_example(&output_path);
    }

    validate_manifest(&args.file, args.verbose)
}

fn generate_example(output_path: &str) -> ExitCode {
    let example = PersonalityTable::default();

    match example.save_to_file(output_path) {
        Ok(()) => {
            println!("✓ Example manifest written to: {output_path}");
            println!("\nThe file contains the {} built-in personalities.", example.iter().count());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write example file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate_manifest(path: &str, verbose: bool) -> ExitCode {
    println!("Validating: {path}\n");

    let table = match PersonalityTable::load_from_file(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("✗ Failed to load manifest: {e}");
            if let ManifestError::MissingPersonality(key) = e {
                eprintln!("  Add a \"{key}\" entry; partial manifests are rejected as a whole.");
            }
            eprintln!("  The bot would fall back to its built-in personalities.");
            return ExitCode::FAILURE;
        }
    };

    let mut warnings = 0;

    for (key, record) in table.iter() {
        println!(
            "[{key}] {} {} ({}, {})",
            record.emoji, record.archetype, record.tone, record.operating_style
        );

        let empty = record.empty_fields();
        if empty.is_empty() {
            if verbose {
                println!("  ✓ OK");
            }
        } else {
            warnings += empty.len();
            println!("  ⚠ Empty: {}", empty.join(", "));
        }

        if verbose {
            println!("  → {}", generate_response(key, record, "hello"));
        }
    }

    println!();

    if warnings == 0 {
        println!("✓ All {} personalities are valid!", table.iter().count());
    } else {
        println!("✓ Manifest is usable, with {warnings} empty attribute(s)");
    }

    ExitCode::SUCCESS
}
