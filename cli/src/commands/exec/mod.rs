mod execute;
mod output;

use clap::Args;

/// Run raw SQL against the database
///
/// Arguments are joined with spaces, so the SQL may be quoted as one argument
/// or left unquoted. Several `;`-separated statements run in order.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlitepp exec \"DELETE FROM kv WHERE quantity = 0\"
  sqlitepp exec --no-wait \"PRAGMA journal_mode = WAL\"
")]
pub struct ExecCmd {
    /// SQL to run
    #[arg(required = true, num_args = 1..)]
    pub sql: Vec<String>,

    /// Fail immediately if the database is busy instead of retrying
    #[arg(long)]
    pub no_wait: bool,
}
