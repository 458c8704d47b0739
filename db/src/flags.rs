//! Flags passed to the engine when opening a connection or compiling a
//! statement.

use std::ops::{BitOr, BitOrAssign};

pub use rusqlite::OpenFlags;

/// Flags used by [`crate::Connection::open`] when none are given.
pub fn default_open_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
}

/// Flags for `sqlite3_prepare_v3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrepareFlags(u32);

impl PrepareFlags {
    pub const NONE: PrepareFlags = PrepareFlags(0);
    /// Hint that the statement will be kept and reused many times.
    pub const PERSISTENT: PrepareFlags = PrepareFlags(0x01);
    /// Accepted for compatibility; the engine ignores it.
    pub const NORMALIZE: PrepareFlags = PrepareFlags(0x02);
    /// Fail to compile if the statement uses a virtual table.
    pub const NO_VTAB: PrepareFlags = PrepareFlags(0x04);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: PrepareFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PrepareFlags {
    type Output = PrepareFlags;

    fn bitor(self, rhs: PrepareFlags) -> PrepareFlags {
        PrepareFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PrepareFlags {
    fn bitor_assign(&mut self, rhs: PrepareFlags) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_prepare_flags_combine() {
        let mut flags = PrepareFlags::PERSISTENT | PrepareFlags::NO_VTAB;
        assert_eq!(flags.bits(), 0x05);
        assert!(flags.contains(PrepareFlags::PERSISTENT));
        assert!(!flags.contains(PrepareFlags::NORMALIZE));

        flags |= PrepareFlags::NORMALIZE;
        assert_eq!(flags.bits(), 0x07);
        assert_eq!(PrepareFlags::default(), PrepareFlags::NONE);
    }

    #[rstest]
    fn test_default_open_flags() {
        let flags = default_open_flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(!flags.contains(OpenFlags::SQLITE_OPEN_READ_ONLY));
    }
}
