//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use sqlitepp::ConnectionConfig;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database to open: a file path, `sqlite://` URL or `:memory:`
    ///
    /// If not specified, the connection is resolved from:
    ///   1. .sqlitepp.json in the current directory
    ///   2. SQLITEPP_DATABASE_URL or SQLITEPP_PATH
    ///   3. ./sqlitepp.sqlite
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Resolve the connection configuration, preferring an explicit `--db`.
pub fn resolve_config(explicit: Option<PathBuf>) -> sqlitepp::Result<ConnectionConfig> {
    if let Some(path) = explicit {
        return ConnectionConfig::from_url(&path.to_string_lossy());
    }

    let cwd = std::env::current_dir().map_err(|e| sqlitepp::Error::Config {
        message: format!("Cannot determine the current directory: {}", e),
    })?;
    ConnectionConfig::resolve(&cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sqlitepp::DatabaseTarget;

    #[rstest]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from(["sqlitepp", "get", "apples", "--db", ":memory:", "-o", "json", "-vv"]).unwrap();
        assert_eq!(args.db, Some(PathBuf::from(":memory:")));
        assert!(matches!(args.format, OutputFormat::Json));
        assert_eq!(args.verbose, 2);
    }

    #[rstest]
    fn test_defaults() {
        let args = Args::try_parse_from(["sqlitepp", "init"]).unwrap();
        assert_eq!(args.db, None);
        assert!(matches!(args.format, OutputFormat::Table));
        assert_eq!(args.verbose, 0);
    }

    #[rstest]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["sqlitepp", "init", "-o", "toon"]).is_err());
    }

    #[rstest]
    #[case(":memory:", DatabaseTarget::Memory)]
    #[case("sqlite:///tmp/kv.db", DatabaseTarget::File(PathBuf::from("/tmp/kv.db")))]
    #[case("./kv.sqlite", DatabaseTarget::File(PathBuf::from("./kv.sqlite")))]
    fn test_resolve_explicit_db(#[case] db: &str, #[case] expected: DatabaseTarget) {
        let config = resolve_config(Some(PathBuf::from(db))).unwrap();
        assert_eq!(config.target, expected);
    }
}
