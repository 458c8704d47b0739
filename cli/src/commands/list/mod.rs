mod execute;
mod output;

use clap::Args;

/// List keys in ascending order
///
/// Stops reading as soon as `--limit` entries have been collected.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlitepp list                 # First 100 keys
  sqlitepp list --from m -l 10  # 10 keys starting at \"m\"
")]
pub struct ListCmd {
    /// Start listing at this key (inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Maximum number of entries to return (1-10000)
    #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..=10000))]
    pub limit: u32,
}
