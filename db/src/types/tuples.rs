//! Tuple impls for parameter lists, result rows and row handlers.
//!
//! Arity 0 through 12 is supported. Values are bound and read strictly left to
//! right, in declaration order.

use super::{Bind, ReadColumn};
use crate::error::Result;
use crate::raw::{Binder, Reader};

/// An ordered list of values bound to a statement's parameter slots.
pub trait Params {
    fn bind_all(&self, binder: &mut Binder<'_>) -> Result<()>;
}

/// The declared column types of a statement's result rows.
pub trait ResultRow {
    /// Number of columns read from each row.
    const ARITY: usize;

    type Values<'row>;

    fn read_row<'row>(reader: &mut Reader<'row>) -> Result<Self::Values<'row>>;
}

/// A callback receiving one row's values as positional arguments.
///
/// Implemented for every `FnMut(A::Value, B::Value, ..) -> bool` matching the
/// row's declared types. Returning `false` stops the execution.
pub trait RowHandler<R: ResultRow> {
    fn handle_row<'row>(&mut self, values: <R as ResultRow>::Values<'row>) -> bool;
}

impl Params for () {
    fn bind_all(&self, _binder: &mut Binder<'_>) -> Result<()> {
        Ok(())
    }
}

impl ResultRow for () {
    const ARITY: usize = 0;

    type Values<'row> = ();

    fn read_row<'row>(_reader: &mut Reader<'row>) -> Result<Self::Values<'row>> {
        Ok(())
    }
}

impl<F> RowHandler<()> for F
where
    F: FnMut() -> bool,
{
    fn handle_row<'row>(&mut self, _values: <() as ResultRow>::Values<'row>) -> bool {
        self()
    }
}

macro_rules! impl_tuples {
    ($arity:literal; $($idx:tt $name:ident $var:ident),+) => {
        impl<$($name: Bind),+> Params for ($($name,)+) {
            fn bind_all(&self, binder: &mut Binder<'_>) -> Result<()> {
                $( self.$idx.bind(binder)?; )+
                Ok(())
            }
        }

        impl<$($name: ReadColumn),+> ResultRow for ($($name,)+) {
            const ARITY: usize = $arity;

            type Values<'row> = ($($name::Value<'row>,)+);

            fn read_row<'row>(reader: &mut Reader<'row>) -> Result<Self::Values<'row>> {
                Ok(($($name::read_column(reader)?,)+))
            }
        }

        impl<Func, $($name),+> RowHandler<($($name,)+)> for Func
        where
            $($name: ReadColumn,)+
            Func: for<'row> FnMut($($name::Value<'row>),+) -> bool,
        {
            fn handle_row<'row>(&mut self, values: <($($name,)+) as ResultRow>::Values<'row>) -> bool {
                let ($($var,)+) = values;
                self($($var),+)
            }
        }
    };
}

impl_tuples!(1; 0 A a);
impl_tuples!(2; 0 A a, 1 B b);
impl_tuples!(3; 0 A a, 1 B b, 2 C c);
impl_tuples!(4; 0 A a, 1 B b, 2 C c, 3 D d);
impl_tuples!(5; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e);
impl_tuples!(6; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f);
impl_tuples!(7; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g);
impl_tuples!(8; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h);
impl_tuples!(9; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i);
impl_tuples!(10; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j);
impl_tuples!(11; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j, 10 K k);
impl_tuples!(12; 0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j, 10 K k, 11 L l);
