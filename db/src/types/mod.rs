//! Compile-time registry from Rust types to engine bind and read calls.
//!
//! A type can be bound as a parameter if it implements [`Bind`], and read from
//! a result column if a marker implementing [`ReadColumn`] exists for it.
//! Anything else is rejected by the compiler:
//!
//! ```compile_fail
//! use sqlitepp::Connection;
//!
//! let conn = Connection::open_in_memory().unwrap();
//! let mut stmt = conn.statement::<(i64,)>("SELECT ?");
//! // u16 has no registry entry.
//! stmt.execute((7u16,), |_: i64| true).unwrap();
//! ```
//!
//! | Logical type          | Bind               | Read marker → value         |
//! |-----------------------|--------------------|-----------------------------|
//! | 32-bit integer        | `i32`              | `i32` → `i32`               |
//! | 64-bit integer        | `i64`              | `i64` → `i64`               |
//! | double                | `f64`              | `f64` → `f64`               |
//! | text                  | `String`, `&str`   | [`StrView`] → `&'row str`   |
//! | bytes                 | [`Blob`]           | [`BytesView`] → `&'row [u8]`|

mod tuples;

pub use tuples::{Params, ResultRow, RowHandler};

use crate::error::Result;
use crate::raw::{Binder, Reader};

/// A value that can fill one parameter slot.
pub trait Bind {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()>;
}

/// A marker describing how to read one result column.
///
/// `Value<'row>` may borrow from the current row.
pub trait ReadColumn {
    type Value<'row>;

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<Self::Value<'row>>;
}

/// Bytes bound as a blob rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob<'a>(pub &'a [u8]);

/// Reads a text column as `&'row str` without copying.
#[derive(Debug)]
pub enum StrView {}

/// Reads a blob column as `&'row [u8]` without copying.
#[derive(Debug)]
pub enum BytesView {}

impl Bind for i32 {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_i32(*self)
    }
}

impl Bind for i64 {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_i64(*self)
    }
}

impl Bind for f64 {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_f64(*self)
    }
}

impl Bind for str {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_text(self)
    }
}

impl Bind for String {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_text(self)
    }
}

impl Bind for Blob<'_> {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        binder.bind_blob(self.0)
    }
}

impl<T: Bind + ?Sized> Bind for &T {
    fn bind(&self, binder: &mut Binder<'_>) -> Result<()> {
        (**self).bind(binder)
    }
}

impl ReadColumn for i32 {
    type Value<'row> = i32;

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<i32> {
        reader.read_i32()
    }
}

impl ReadColumn for i64 {
    type Value<'row> = i64;

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<i64> {
        reader.read_i64()
    }
}

impl ReadColumn for f64 {
    type Value<'row> = f64;

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<f64> {
        reader.read_f64()
    }
}

impl ReadColumn for StrView {
    type Value<'row> = &'row str;

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<&'row str> {
        reader.read_str()
    }
}

impl ReadColumn for BytesView {
    type Value<'row> = &'row [u8];

    fn read_column<'row>(reader: &mut Reader<'row>) -> Result<&'row [u8]> {
        reader.read_bytes()
    }
}
