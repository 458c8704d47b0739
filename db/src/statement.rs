//! Prepared statements with a compile-time result signature.
//!
//! A [`Statement`] owns its query text and the tuple type `R` describing each
//! result row. It is compiled once, on first use or by an explicit
//! [`Statement::prepare`], and can then be executed any number of times:
//!
//! ```
//! use sqlitepp::{Connection, StrView};
//!
//! let conn = Connection::open_in_memory()?;
//! conn.execute("CREATE TABLE kv (key TEXT, quantity INT)", true)?;
//!
//! let mut insert = conn.statement::<()>("INSERT INTO kv VALUES (?, ?)");
//! insert.execute(("apples", 3i64), || true)?;
//! insert.execute(("pears", 5i64), || true)?;
//!
//! let mut total = 0;
//! let mut select = conn.statement::<(i64, StrView)>("SELECT quantity, key FROM kv");
//! select.execute((), |quantity: i64, _key: &str| {
//!     total += quantity;
//!     true
//! })?;
//! assert_eq!(total, 8);
//! # Ok::<(), sqlitepp::Error>(())
//! ```

use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::connection::Connection;
use crate::error::Result;
use crate::flags::PrepareFlags;
use crate::raw::{Binder, RawStatement, Reader, Step};
use crate::types::{Params, ResultRow, RowHandler};

pub struct Statement<'conn, R: ResultRow> {
    conn: &'conn Connection,
    query: String,
    flags: PrepareFlags,
    raw: Option<RawStatement>,
    _row: PhantomData<fn() -> R>,
}

impl<'conn, R: ResultRow> Statement<'conn, R> {
    pub(crate) fn new(conn: &'conn Connection, query: impl Into<String>, flags: PrepareFlags) -> Self {
        Self {
            conn,
            query: query.into(),
            flags,
            raw: None,
            _row: PhantomData,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query
    }

    pub fn flags(&self) -> PrepareFlags {
        self.flags
    }

    pub fn is_prepared(&self) -> bool {
        self.raw.is_some()
    }

    /// Parameter slots in the query, once prepared.
    pub fn parameter_count(&self) -> Option<usize> {
        self.raw.as_ref().map(RawStatement::parameter_count)
    }

    /// Result columns produced by the query, once prepared.
    pub fn column_count(&self) -> Option<usize> {
        self.raw.as_ref().map(RawStatement::column_count)
    }

    /// Compile the query. Calling this again is a no-op.
    pub fn prepare(&mut self) -> Result<()> {
        self.compiled().map(|_| ())
    }

    fn compiled(&mut self) -> Result<&RawStatement> {
        let raw = match self.raw.take() {
            Some(raw) => raw,
            None => self.compile()?,
        };
        Ok(self.raw.insert(raw))
    }

    fn compile(&self) -> Result<RawStatement> {
        let db = self.conn.handle()?;
        let (raw, consumed) = self
            .conn
            .busy_policy()
            .retry("prepare", || RawStatement::prepare(db.as_ptr(), &self.query, self.flags))?;

        let rest = self.query.get(consumed..).unwrap_or_default();
        if !rest.trim().is_empty() {
            warn!(ignored = rest.trim(), "Only the first SQL statement of the query is compiled");
        }
        if raw.column_count() != R::ARITY {
            debug!(
                query = %self.query,
                columns = raw.column_count(),
                arity = R::ARITY,
                "Result signature does not match the query's column count"
            );
        }

        debug!(query = %self.query, parameters = raw.parameter_count(), "Prepared statement");
        Ok(raw)
    }

    /// Bind `params`, then step through the results.
    ///
    /// Each row is read into `R`'s values and handed to `handler`, which
    /// returns `true` to continue or `false` to stop early. Busy steps are
    /// retried according to the connection's [`crate::BusyPolicy`]; any
    /// other engine failure ends the execution with a coded error. Rows
    /// already handed to the handler stay delivered.
    pub fn execute<P, H>(&mut self, params: P, mut handler: H) -> Result<()>
    where
        P: Params,
        H: RowHandler<R>,
    {
        let conn = self.conn;
        let raw = self.compiled()?;

        raw.reset();
        raw.clear_bindings();
        let _rewind = Rewind(raw);

        let mut binder = Binder::new(raw);
        params.bind_all(&mut binder)?;

        loop {
            let step = conn.busy_policy().retry("step", || raw.step()).inspect_err(|err| {
                debug!(error = %err, "Step failed");
            })?;

            match step {
                Step::Row => {
                    let mut reader = Reader::new(raw);
                    let values = R::read_row(&mut reader)?;
                    if !handler.handle_row(values) {
                        return Ok(());
                    }
                }
                Step::Done => return Ok(()),
            }
        }
    }
}

/// Resets the engine statement when execution ends, so locks held by a
/// partially stepped statement are released.
struct Rewind<'a>(&'a RawStatement);

impl Drop for Rewind<'_> {
    fn drop(&mut self) {
        self.0.reset();
    }
}

impl<R: ResultRow> std::fmt::Debug for Statement<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statement")
            .field("query", &self.query)
            .field("flags", &self.flags)
            .field("prepared", &self.raw.is_some())
            .finish()
    }
}
