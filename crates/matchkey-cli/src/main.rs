//! Matchkey — normalize and hash user identity payloads from the command line.

use std::path::PathBuf;

use anyhow::Context;
use matchkey_core::EngineConfig;
use matchkey_identity::{normalize, UserDataHasher};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hash,
    Normalize,
}

fn print_help() {
    println!("Matchkey — PII normalization and hashing for conversion APIs");
    println!();
    println!("Usage: matchkey <command> [file] [--config <path>]");
    println!();
    println!("Commands:");
    println!("  hash [file]              Print hashed match keys for each payload");
    println!("  normalize [file]         Print normalized payloads");
    println!("  help                     Show this help message");
    println!();
    println!("Payloads are read from <file> or stdin: a JSON array, a single");
    println!("object, or newline-delimited objects.");
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut command = None;
    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            "hash" if command.is_none() => command = Some(Command::Hash),
            "normalize" if command.is_none() => command = Some(Command::Normalize),
            _ if command.is_some() && input.is_none() => input = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Unknown argument: {}. Use 'matchkey help' for usage.", arg);
                std::process::exit(1);
            }
        }
    }

    let Some(command) = command else {
        print_help();
        std::process::exit(1);
    };

    let config = match &config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::from_env(),
    };
    info!("Device id casing: {}", config.device_id_casing);

    let payloads = payload::read(input.as_deref()).context("Failed to read payloads")?;
    info!("Read {} payloads", payloads.records().len());

    let output = match command {
        Command::Hash => {
            let hasher = UserDataHasher::new(config);
            let hashed: Vec<_> = payloads.records().iter().map(|r| hasher.derive(r)).collect();
            payload::render(&payloads, &hashed)?
        }
        Command::Normalize => {
            let normalized: Vec<_> = payloads.records().iter().cloned().map(normalize).collect();
            payload::render(&payloads, &normalized)?
        }
    };

    println!("{}", output);
    Ok(())
}
