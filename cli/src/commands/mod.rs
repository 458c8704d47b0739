//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl running typed statements against the connection
//! - An `Outputable` impl for its result

mod exec;
mod get;
mod init;
mod list;
mod set;

pub use exec::ExecCmd;
pub use get::GetCmd;
pub use init::InitCmd;
pub use list::ListCmd;
pub use set::SetCmd;

use clap::Subcommand;
use sqlitepp::Connection;
use std::error::Error;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the key/quantity table and reset the schema version
    Init(InitCmd),

    /// Insert or update a key's quantity
    Set(SetCmd),

    /// Show the quantity stored for a key
    Get(GetCmd),

    /// List keys in order
    List(ListCmd),

    /// Run raw SQL statements
    Exec(ExecCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, conn: &Connection, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Init(cmd) => Ok(cmd.execute(conn)?.format(format)),
            Command::Set(cmd) => Ok(cmd.execute(conn)?.format(format)),
            Command::Get(cmd) => Ok(cmd.execute(conn)?.format(format)),
            Command::List(cmd) => Ok(cmd.execute(conn)?.format(format)),
            Command::Exec(cmd) => Ok(cmd.execute(conn)?.format(format)),
        }
    }
}
