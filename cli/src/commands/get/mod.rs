mod cli_tests;
mod execute;
mod output;

use clap::Args;

/// Show the quantity stored for a key
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlitepp get apples
  sqlitepp get apples -o json
")]
pub struct GetCmd {
    /// Key to look up
    pub key: String,
}
