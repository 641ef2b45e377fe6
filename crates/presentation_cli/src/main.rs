//! BFFH user database checker
//!
//! Validates a FabAccess `users.toml` before the BFFH server loads it and
//! prints a human-readable report.

#![allow(clippy::print_stdout)]

mod report;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use application::ValidationEngine;
use clap::Parser;
use infrastructure::{AppConfig, TomlUserDatabase, init_logging};

/// BFFH user database checker
#[derive(Parser)]
#[command(name = "bffh-userdb-check")]
#[command(author, version, about = "Validate a BFFH users.toml user database", long_about = None)]
struct Cli {
    /// Path of the users.toml user database file
    #[arg(long)]
    db: Option<PathBuf>,

    /// Configuration file (default: ./userdb-check.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the database to check: the `--db` argument, else the default file if
/// it exists
fn resolve_database_path(db: Option<PathBuf>, default_path: &Path) -> Option<PathBuf> {
    if let Some(path) = db {
        return Some(path);
    }

    println!("No custom users.toml given. You may add it with '--db </path/to/users.toml>'");
    if default_path.is_file() {
        println!(
            "Found default file: {}. Using this ...",
            default_path.display()
        );
        Some(default_path.to_path_buf())
    } else {
        None
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    init_logging(log_filter_from_verbosity(cli.verbose))?;

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    let Some(path) = resolve_database_path(cli.db, &config.database.default_path) else {
        println!("Error: no (default) users.toml file given or found. Cannot continue!");
        process::exit(1);
    };

    let source = TomlUserDatabase::new(path);
    let engine = ValidationEngine::new(config.policy.credential_policy());

    let mut stdout = std::io::stdout().lock();
    let passed = report::check_database(&engine, &source, &mut stdout)?;
    if !passed {
        process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn explicit_db_wins_over_default() {
        let resolved = resolve_database_path(
            Some(PathBuf::from("/tmp/custom.toml")),
            Path::new("/etc/bffh/users.toml"),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn existing_default_is_used() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = resolve_database_path(None, file.path());
        assert_eq!(resolved.as_deref(), Some(file.path()));
    }

    #[test]
    fn missing_default_resolves_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_database_path(None, &dir.path().join("users.toml")).is_none());
    }

    #[test]
    fn cli_accepts_all_flags() {
        let cli = Cli::try_parse_from([
            "bffh-userdb-check",
            "--db",
            "users.toml",
            "--config",
            "check.toml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("users.toml")));
        assert_eq!(cli.config, Some(PathBuf::from("check.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
