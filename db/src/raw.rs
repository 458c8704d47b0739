//! Thin owners of engine statement handles.
//!
//! [`RawStatement`] owns one compiled `sqlite3_stmt` and finalizes it exactly
//! once when dropped. [`Binder`] and [`Reader`] are the cursors the type
//! registry works through: a binder walks the parameter slots of one
//! execution, a reader walks the columns of one row.

use std::ffi::{c_char, c_int, c_uchar};
use std::ptr;

use rusqlite::ffi;

use crate::error::{Error, Result};
use crate::flags::PrepareFlags;

/// Outcome of one successful `sqlite3_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Row,
    Done,
}

#[derive(Debug)]
pub(crate) struct RawStatement {
    /// Null when the compiled text held no statement (only whitespace or
    /// comments); such a statement is always done.
    ptr: *mut ffi::sqlite3_stmt,
    db: *mut ffi::sqlite3,
    param_count: usize,
}

impl RawStatement {
    /// Compile the first statement in `sql`.
    ///
    /// Returns the statement and the byte offset of the uncompiled remainder.
    pub(crate) fn prepare(db: *mut ffi::sqlite3, sql: &str, flags: PrepareFlags) -> Result<(Self, usize)> {
        let len = c_int::try_from(sql.len()).map_err(|_| Error::QueryTooLong { len: sql.len() })?;

        let mut stmt = ptr::null_mut();
        let mut tail: *const c_char = ptr::null();
        // SAFETY: db is a live handle owned by the calling connection, and the
        // engine reads at most `len` bytes of `sql`.
        let rc = unsafe {
            ffi::sqlite3_prepare_v3(db, sql.as_ptr().cast(), len, flags.bits(), &mut stmt, &mut tail)
        };
        if rc != ffi::SQLITE_OK {
            return Err(Error::from_handle(db, rc, "Failed to prepare statement"));
        }

        let consumed = if tail.is_null() {
            sql.len()
        } else {
            (tail as usize).saturating_sub(sql.as_ptr() as usize).min(sql.len())
        };
        // SAFETY: returns 0 for a null statement.
        let param_count = unsafe { ffi::sqlite3_bind_parameter_count(stmt) };

        Ok((
            Self {
                ptr: stmt,
                db,
                param_count: usize::try_from(param_count).unwrap_or(0),
            },
            consumed,
        ))
    }

    pub(crate) fn step(&self) -> Result<Step> {
        if self.ptr.is_null() {
            return Ok(Step::Done);
        }
        // SAFETY: ptr is a live statement owned by self.
        match unsafe { ffi::sqlite3_step(self.ptr) } {
            ffi::SQLITE_ROW => Ok(Step::Row),
            ffi::SQLITE_DONE => Ok(Step::Done),
            rc => Err(Error::from_handle(self.db, rc, "Failed to step statement")),
        }
    }

    /// Rewind to the start. Bound values are kept.
    pub(crate) fn reset(&self) {
        // SAFETY: sqlite3_reset accepts null and live statements. The status
        // it returns repeats the last step error, which was already reported.
        unsafe {
            ffi::sqlite3_reset(self.ptr);
        }
    }

    pub(crate) fn clear_bindings(&self) {
        if !self.ptr.is_null() {
            // SAFETY: ptr is a live statement owned by self.
            unsafe {
                ffi::sqlite3_clear_bindings(self.ptr);
            }
        }
    }

    pub(crate) fn parameter_count(&self) -> usize {
        self.param_count
    }

    pub(crate) fn column_count(&self) -> usize {
        // SAFETY: returns 0 for a null statement.
        let count = unsafe { ffi::sqlite3_column_count(self.ptr) };
        usize::try_from(count).unwrap_or(0)
    }
}

impl Drop for RawStatement {
    fn drop(&mut self) {
        // SAFETY: finalize accepts null; ptr is never used again.
        unsafe {
            ffi::sqlite3_finalize(self.ptr);
        }
        self.ptr = ptr::null_mut();
    }
}

/// Cursor over the positional parameter slots of one execution.
///
/// Slots are filled left to right. Binding more values than the statement has
/// slots fails with [`Error::BindOverflow`] before the engine is called.
pub struct Binder<'stmt> {
    stmt: &'stmt RawStatement,
    position: usize,
}

impl<'stmt> Binder<'stmt> {
    pub(crate) fn new(stmt: &'stmt RawStatement) -> Self {
        Self { stmt, position: 0 }
    }

    /// Number of values bound so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn parameter_count(&self) -> usize {
        self.stmt.param_count
    }

    /// The 1-based engine slot for the next value.
    fn next_slot(&self) -> Result<c_int> {
        if self.position >= self.stmt.param_count {
            return Err(Error::BindOverflow {
                index: self.position + 1,
                max: self.stmt.param_count,
            });
        }
        c_int::try_from(self.position + 1).map_err(|_| Error::BindOverflow {
            index: self.position + 1,
            max: self.stmt.param_count,
        })
    }

    fn advance(&mut self, rc: c_int) -> Result<()> {
        if rc != ffi::SQLITE_OK {
            return Err(Error::from_handle(self.stmt.db, rc, "Failed to bind parameter"));
        }
        self.position += 1;
        Ok(())
    }

    pub fn bind_i32(&mut self, value: i32) -> Result<()> {
        let slot = self.next_slot()?;
        // SAFETY: slot is within the discovered parameter count.
        let rc = unsafe { ffi::sqlite3_bind_int(self.stmt.ptr, slot, value) };
        self.advance(rc)
    }

    pub fn bind_i64(&mut self, value: i64) -> Result<()> {
        let slot = self.next_slot()?;
        // SAFETY: as above.
        let rc = unsafe { ffi::sqlite3_bind_int64(self.stmt.ptr, slot, value) };
        self.advance(rc)
    }

    pub fn bind_f64(&mut self, value: f64) -> Result<()> {
        let slot = self.next_slot()?;
        // SAFETY: as above.
        let rc = unsafe { ffi::sqlite3_bind_double(self.stmt.ptr, slot, value) };
        self.advance(rc)
    }

    /// Bind text. The engine copies it, so `value` may be dropped right after.
    pub fn bind_text(&mut self, value: &str) -> Result<()> {
        let slot = self.next_slot()?;
        // SAFETY: the engine copies `value.len()` bytes before returning
        // (SQLITE_TRANSIENT).
        let rc = unsafe {
            ffi::sqlite3_bind_text64(
                self.stmt.ptr,
                slot,
                value.as_ptr().cast(),
                value.len() as u64,
                ffi::SQLITE_TRANSIENT(),
                ffi::SQLITE_UTF8 as c_uchar,
            )
        };
        self.advance(rc)
    }

    /// Bind a blob. The engine copies it, so `value` may be dropped right
    /// after.
    pub fn bind_blob(&mut self, value: &[u8]) -> Result<()> {
        let slot = self.next_slot()?;
        // SAFETY: the engine copies `value.len()` bytes before returning
        // (SQLITE_TRANSIENT).
        let rc = unsafe {
            ffi::sqlite3_bind_blob64(
                self.stmt.ptr,
                slot,
                value.as_ptr().cast(),
                value.len() as u64,
                ffi::SQLITE_TRANSIENT(),
            )
        };
        self.advance(rc)
    }
}

/// Cursor over the columns of the current row.
///
/// Borrowed text and bytes stay valid until the statement is stepped, reset
/// or finalized, which never happens while the row handler runs.
pub struct Reader<'row> {
    stmt: &'row RawStatement,
    position: usize,
    count: usize,
}

impl<'row> Reader<'row> {
    pub(crate) fn new(stmt: &'row RawStatement) -> Self {
        Self {
            stmt,
            position: 0,
            count: stmt.column_count(),
        }
    }

    /// Index of the next column to read.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn column_count(&self) -> usize {
        self.count
    }

    fn next_column(&self) -> Result<c_int> {
        if self.position >= self.count {
            return Err(Error::ReadOverflow {
                index: self.position,
                count: self.count,
            });
        }
        // count came from a c_int, so position fits.
        Ok(self.position as c_int)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let column = self.next_column()?;
        // SAFETY: column is within the row's column count.
        let value = unsafe { ffi::sqlite3_column_int(self.stmt.ptr, column) };
        self.position += 1;
        Ok(value)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let column = self.next_column()?;
        // SAFETY: as above.
        let value = unsafe { ffi::sqlite3_column_int64(self.stmt.ptr, column) };
        self.position += 1;
        Ok(value)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let column = self.next_column()?;
        // SAFETY: as above.
        let value = unsafe { ffi::sqlite3_column_double(self.stmt.ptr, column) };
        self.position += 1;
        Ok(value)
    }

    /// Borrow a text column. SQL NULL reads as `""`.
    pub fn read_str(&mut self) -> Result<&'row str> {
        let column = self.next_column()?;
        // SAFETY: column is in range; bytes must be read after the text
        // pointer so the length matches the converted value.
        let bytes = unsafe {
            let text = ffi::sqlite3_column_text(self.stmt.ptr, column);
            let len = ffi::sqlite3_column_bytes(self.stmt.ptr, column);
            borrow_bytes(text, len)
        };
        let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { index: self.position })?;
        self.position += 1;
        Ok(text)
    }

    /// Borrow a blob column. SQL NULL reads as an empty slice.
    pub fn read_bytes(&mut self) -> Result<&'row [u8]> {
        let column = self.next_column()?;
        // SAFETY: as in read_str.
        let bytes = unsafe {
            let blob = ffi::sqlite3_column_blob(self.stmt.ptr, column);
            let len = ffi::sqlite3_column_bytes(self.stmt.ptr, column);
            borrow_bytes(blob.cast(), len)
        };
        self.position += 1;
        Ok(bytes)
    }
}

/// # Safety
/// `data` must be null or point at `len` bytes that outlive `'a`.
unsafe fn borrow_bytes<'a>(data: *const u8, len: c_int) -> &'a [u8] {
    match usize::try_from(len) {
        Ok(len) if !data.is_null() && len > 0 => {
            // SAFETY: guaranteed by the caller.
            unsafe { std::slice::from_raw_parts(data, len) }
        }
        _ => &[],
    }
}
