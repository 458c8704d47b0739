//! Error type shared by every layer of the crate.
//!
//! Two families of failure exist:
//! - **generic** errors are contract violations detected before the engine is
//!   consulted (binding too many values, reading past the last column, a
//!   closed handle, a bad configuration);
//! - **coded** errors carry the engine's [`ResultCode`] and its diagnostic
//!   message.

use std::ffi::{CStr, c_int};
use std::path::PathBuf;

use rusqlite::ffi;
use thiserror::Error;

use crate::result_code::ResultCode;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tried to bind parameter {index} but the statement only has {max} parameter slot(s)")]
    BindOverflow { index: usize, max: usize },

    #[error("Tried to read column {index} but the row only has {count} column(s)")]
    ReadOverflow { index: usize, count: usize },

    #[error("Query text of {len} bytes is too long for the engine")]
    QueryTooLong { len: usize },

    #[error("Column {index} does not hold valid UTF-8 text")]
    InvalidUtf8 { index: usize },

    #[error("Database connection is not open")]
    NotOpen,

    #[error("Invalid database path '{}'", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{context}: {message} [{code}]")]
    Sqlite {
        code: ResultCode,
        context: &'static str,
        message: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Build a coded error from a raw status and an already-copied message.
    pub fn sqlite(code: c_int, context: &'static str, message: impl Into<String>) -> Self {
        Error::Sqlite {
            code: ResultCode::from_raw(code),
            context,
            message: message.into(),
        }
    }

    /// Build a coded error, copying the connection's current diagnostic.
    ///
    /// Falls back to the engine's generic description of `code` when no
    /// connection handle is available.
    pub(crate) fn from_handle(db: *mut ffi::sqlite3, code: c_int, context: &'static str) -> Self {
        let message = if db.is_null() {
            errstr(code)
        } else {
            // SAFETY: db is a live connection handle; errmsg never returns
            // null and the string is copied before any further engine call.
            unsafe { copy_c_str(ffi::sqlite3_errmsg(db)) }
        };
        Error::sqlite(code, context, message)
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config { message: message.into() }
    }

    /// The engine result code, for coded errors only.
    pub fn code(&self) -> Option<ResultCode> {
        match self {
            Error::Sqlite { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether this is a transient busy condition worth retrying.
    pub fn is_busy(&self) -> bool {
        self.code().is_some_and(ResultCode::is_transient_busy)
    }

    /// Whether this error was raised by the crate rather than the engine.
    pub fn is_generic(&self) -> bool {
        self.code().is_none()
    }
}

/// The engine's static English description of a result code.
pub(crate) fn errstr(code: c_int) -> String {
    // SAFETY: sqlite3_errstr returns a pointer to a static string.
    unsafe { copy_c_str(ffi::sqlite3_errstr(code)) }
}

/// Copy a NUL-terminated engine string into an owned `String`.
///
/// # Safety
/// `ptr` must be null or point at a NUL-terminated string that stays valid for
/// the duration of the call.
pub(crate) unsafe fn copy_c_str(ptr: *const std::ffi::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: guaranteed by the caller.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
