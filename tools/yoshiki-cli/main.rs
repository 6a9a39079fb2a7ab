use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use yoshiki::prelude::*;

/// Inspect and verify serialized form definition documents.
#[derive(Parser)]
#[command(name = "yoshiki-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of a form document: model metadata and field table.
    Inspect { file: String },
    /// Deserialize a document, re-serialize it, and verify the round trip.
    Check { file: String },
    /// List the field type codes known to the built-in registry.
    Codes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let serializer = FormSerializer::new();

    match cli.command {
        Command::Inspect { file } => {
            let text = fs::read_to_string(&file)?;
            let form = serializer.deserialize(&text)?;

            println!("Form '{}' (id: {})", form.name, form.id);
            println!("{} field(s):", form.fields.len());
            for field in &form.fields {
                println!("  - {}", field);
            }

            let duplicates = form.duplicate_field_ids();
            if !duplicates.is_empty() {
                println!("warning: duplicate field ids: {}", duplicates.join(", "));
            }
        }
        Command::Check { file } => {
            let text = fs::read_to_string(&file)?;
            let form = serializer.deserialize(&text)?;
            let reserialized = serializer.serialize(&form)?;
            let restored = serializer.deserialize(&reserialized)?;

            if restored != form {
                return Err("round trip did not reproduce the form".into());
            }
            println!(
                "OK: '{}' round-trips cleanly ({} fields)",
                form.name,
                form.fields.len()
            );
        }
        Command::Codes => {
            let mut codes: Vec<_> = serializer.registry().codes().collect();
            codes.sort_unstable();
            for code in codes {
                println!("{}", code);
            }
        }
    }

    Ok(())
}
