//! Compile-time typed prepared statements over embedded SQLite.
//!
//! A statement declares its result columns as a tuple of registry types and
//! receives each row as positional arguments of a callback:
//!
//! ```
//! use sqlitepp::{Connection, StrView};
//!
//! let conn = Connection::open_in_memory()?;
//! let mut stmt = conn.statement::<(i64, StrView)>("SELECT ?, ?");
//! stmt.execute((42i64, "answer"), |n: i64, label: &str| {
//!     assert_eq!((n, label), (42, "answer"));
//!     true
//! })?;
//! # Ok::<(), sqlitepp::Error>(())
//! ```

pub mod busy;
pub mod config;
pub mod connection;
pub mod error;
pub mod flags;
pub mod logging;
mod raw;
pub mod result_code;
pub mod schema;
pub mod statement;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used items
pub use busy::{BackoffConfig, BusyPolicy};
pub use config::{ConfigFile, ConnectionConfig, DatabaseTarget};
pub use connection::Connection;
pub use error::{Error, Result};
pub use flags::{OpenFlags, PrepareFlags};
pub use logging::Logger;
pub use raw::{Binder, Reader};
pub use result_code::ResultCode;
pub use statement::Statement;
pub use types::{Bind, Blob, BytesView, Params, ReadColumn, ResultRow, RowHandler, StrView};
