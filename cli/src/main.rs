use clap::Parser;

mod cli;
mod commands;
mod logging;
pub mod output;
#[macro_use]
mod test_macros;
use cli::Args;
use sqlitepp::Connection;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let config = cli::resolve_config(args.db)?;
    let conn = Connection::from_config(&config)?;
    let output = args.command.run(&conn, args.format)?;
    println!("{}", output);
    Ok(())
}
