//! Ownership of one engine session.

use std::ffi::CString;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};

use rusqlite::ffi;
use tracing::{debug, warn};

use crate::busy::BusyPolicy;
use crate::config::{ConnectionConfig, DatabaseTarget};
use crate::error::{Error, Result, errstr};
use crate::flags::{OpenFlags, PrepareFlags, default_open_flags};
use crate::raw::{RawStatement, Step};
use crate::statement::Statement;
use crate::types::ResultRow;

const MEMORY_PATH: &str = ":memory:";

/// An open (or never-opened) database session.
///
/// The handle is released exactly once, by [`Connection::close`] or on drop.
/// Statements borrow the connection, so it cannot be closed or dropped while
/// one is alive.
#[derive(Debug, Default)]
pub struct Connection {
    db: Option<NonNull<ffi::sqlite3>>,
    path: Option<PathBuf>,
    busy: BusyPolicy,
}

impl Connection {
    /// Open a database file (or `:memory:`).
    pub fn open(path: impl AsRef<Path>, flags: OpenFlags) -> Result<Self> {
        let path = path.as_ref();
        let c_path = path
            .to_str()
            .and_then(|p| CString::new(p).ok())
            .ok_or_else(|| Error::InvalidPath { path: path.to_path_buf() })?;

        let mut db = ptr::null_mut();
        // SAFETY: c_path is NUL-terminated; db receives a handle even on most
        // failures, which is closed below.
        let rc = unsafe { ffi::sqlite3_open_v2(c_path.as_ptr(), &mut db, flags.bits(), ptr::null()) };

        let Some(handle) = NonNull::new(db) else {
            return Err(Error::sqlite(rc, "Failed to open database", errstr(rc)));
        };

        if rc != ffi::SQLITE_OK {
            let err = Error::from_handle(db, rc, "Failed to open database");
            // SAFETY: the half-open handle has no statements and is never
            // used again.
            unsafe {
                ffi::sqlite3_close(db);
            }
            debug!(path = %path.display(), error = %err, "Open failed");
            return Err(err);
        }

        // SAFETY: handle is live. Extended codes distinguish e.g. a UNIQUE
        // violation from other constraint failures.
        unsafe {
            ffi::sqlite3_extended_result_codes(handle.as_ptr(), 1);
        }
        debug!(path = %path.display(), "Opened database");

        Ok(Self {
            db: Some(handle),
            path: Some(path.to_path_buf()),
            busy: BusyPolicy::default(),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(MEMORY_PATH, default_open_flags())
    }

    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        let conn = match &config.target {
            DatabaseTarget::File(path) => Self::open(path, config.open_flags)?,
            DatabaseTarget::Memory => Self::open(MEMORY_PATH, config.open_flags)?,
        };
        Ok(conn.with_busy_policy(config.busy.clone()))
    }

    #[must_use]
    pub fn with_busy_policy(mut self, busy: BusyPolicy) -> Self {
        self.busy = busy;
        self
    }

    pub fn busy_policy(&self) -> &BusyPolicy {
        &self.busy
    }

    pub fn is_open(&self) -> bool {
        self.db.is_some()
    }

    /// Path the connection was opened with.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn handle(&self) -> Result<NonNull<ffi::sqlite3>> {
        self.db.ok_or(Error::NotOpen)
    }

    /// Release the session. Safe to call more than once.
    pub fn close(&mut self) {
        let Some(db) = self.db.take() else {
            return;
        };
        // SAFETY: db is live and taken out of self, so it is closed once.
        // Statements borrow the connection, so none can still be unfinalized.
        let rc = unsafe { ffi::sqlite3_close(db.as_ptr()) };
        if rc == ffi::SQLITE_OK {
            debug!(path = ?self.path, "Closed database");
        } else {
            warn!(path = ?self.path, code = rc, "Failed to close database");
        }
    }

    /// Run SQL that produces no rows of interest.
    ///
    /// `sql` may hold several `;`-separated statements, which run in order.
    /// While `wait` is true a busy database is retried according to the
    /// connection's busy policy; otherwise busy is returned as an error.
    pub fn execute(&self, sql: &str, wait: bool) -> Result<()> {
        let db = self.handle()?;
        let mut rest = sql;

        while !rest.trim().is_empty() {
            // Compiling reads the schema, which can itself report busy.
            let compile = || RawStatement::prepare(db.as_ptr(), rest, PrepareFlags::NONE);
            let (raw, consumed) = if wait {
                self.busy.retry("prepare", compile)?
            } else {
                compile()?
            };
            loop {
                let step = if wait {
                    self.busy.retry("execute", || raw.step())?
                } else {
                    raw.step()?
                };
                if step == Step::Done {
                    break;
                }
            }
            if consumed == 0 {
                break;
            }
            rest = rest.get(consumed..).unwrap_or_default();
        }
        Ok(())
    }

    /// `PRAGMA name = value`.
    pub fn pragma(&self, name: &str, value: impl Display) -> Result<()> {
        self.execute(&format!("PRAGMA {name} = {value}"), true)
    }

    /// Read an integer pragma, such as `user_version`.
    pub fn pragma_query_i64(&self, name: &str) -> Result<i64> {
        let mut value = 0;
        self.statement::<(i64,)>(format!("PRAGMA {name}"))
            .execute((), |v: i64| {
                value = v;
                false
            })?;
        Ok(value)
    }

    /// A statement that compiles on first use.
    pub fn statement<R: ResultRow>(&self, query: impl Into<String>) -> Statement<'_, R> {
        Statement::new(self, query, PrepareFlags::NONE)
    }

    pub fn statement_with_flags<R: ResultRow>(
        &self,
        query: impl Into<String>,
        flags: PrepareFlags,
    ) -> Statement<'_, R> {
        Statement::new(self, query, flags)
    }

    /// A statement compiled now, so syntax errors surface immediately.
    pub fn prepare<R: ResultRow>(&self, query: impl Into<String>) -> Result<Statement<'_, R>> {
        let mut statement = self.statement(query);
        statement.prepare()?;
        Ok(statement)
    }

    pub fn last_insert_rowid(&self) -> Result<i64> {
        let db = self.handle()?;
        // SAFETY: db is live.
        Ok(unsafe { ffi::sqlite3_last_insert_rowid(db.as_ptr()) })
    }

    /// Rows changed by the most recent INSERT, UPDATE or DELETE.
    pub fn changes(&self) -> Result<u64> {
        let db = self.handle()?;
        // SAFETY: db is live.
        let changes = unsafe { ffi::sqlite3_changes64(db.as_ptr()) };
        Ok(u64::try_from(changes).unwrap_or(0))
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
