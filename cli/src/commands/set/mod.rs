mod execute;
mod output;

use clap::Args;

/// Insert or update the quantity stored for a key
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlitepp set apples 12                  # Store 12 apples
  sqlitepp set flour 500 --quantity-type 2
")]
pub struct SetCmd {
    /// Key to store
    pub key: String,

    /// Quantity for the key
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,

    /// Application-defined unit of the quantity
    #[arg(long, default_value_t = 0)]
    pub quantity_type: i32,
}
