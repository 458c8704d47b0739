mod execute;
mod output;

use clap::Args;

/// Create the key/quantity table
///
/// Sets `PRAGMA user_version = 0` and creates the `kv` table if it does not
/// exist yet. Existing rows are kept.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlitepp init                     # Use the resolved database
  sqlitepp --db ./kv.sqlite init    # Initialize a specific file
")]
pub struct InitCmd {}
