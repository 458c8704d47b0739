//! Result codes reported by the SQLite engine.
//!
//! Every primary and extended code is listed with its numeric value. Codes the
//! engine may add in later releases map to [`ResultCode::Unknown`], which is
//! never treated as success.

use std::fmt;

macro_rules! result_codes {
    ($( $(#[$meta:meta])* $variant:ident = $value:literal => $c_name:ident, )+) => {
        /// A primary or extended SQLite result code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ResultCode {
            $( $(#[$meta])* $variant, )+
            /// A code this crate does not know about.
            Unknown(i32),
        }

        impl ResultCode {
            /// Map a raw engine status to its code.
            pub fn from_raw(code: i32) -> Self {
                match code {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }

            /// The numeric value the engine uses for this code.
            pub fn raw(self) -> i32 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(code) => code,
                }
            }

            /// The C identifier of this code, e.g. `SQLITE_CONSTRAINT_UNIQUE`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => concat!("SQLITE_", stringify!($c_name)), )+
                    Self::Unknown(_) => "SQLITE_UNKNOWN",
                }
            }
        }
    };
}

result_codes! {
    Ok = 0 => OK,
    Error = 1 => ERROR,
    Internal = 2 => INTERNAL,
    Perm = 3 => PERM,
    Abort = 4 => ABORT,
    Busy = 5 => BUSY,
    Locked = 6 => LOCKED,
    NoMem = 7 => NOMEM,
    ReadOnly = 8 => READONLY,
    Interrupt = 9 => INTERRUPT,
    IoErr = 10 => IOERR,
    Corrupt = 11 => CORRUPT,
    NotFound = 12 => NOTFOUND,
    Full = 13 => FULL,
    CantOpen = 14 => CANTOPEN,
    Protocol = 15 => PROTOCOL,
    Empty = 16 => EMPTY,
    Schema = 17 => SCHEMA,
    TooBig = 18 => TOOBIG,
    Constraint = 19 => CONSTRAINT,
    Mismatch = 20 => MISMATCH,
    Misuse = 21 => MISUSE,
    NoLfs = 22 => NOLFS,
    Auth = 23 => AUTH,
    Format = 24 => FORMAT,
    Range = 25 => RANGE,
    NotADb = 26 => NOTADB,
    Notice = 27 => NOTICE,
    Warning = 28 => WARNING,
    /// `sqlite3_step` produced a row.
    Row = 100 => ROW,
    /// `sqlite3_step` finished executing.
    Done = 101 => DONE,

    ErrorMissingCollSeq = 257 => ERROR_MISSING_COLLSEQ,
    ErrorRetry = 513 => ERROR_RETRY,
    ErrorSnapshot = 769 => ERROR_SNAPSHOT,

    IoErrRead = 266 => IOERR_READ,
    IoErrShortRead = 522 => IOERR_SHORT_READ,
    IoErrWrite = 778 => IOERR_WRITE,
    IoErrFsync = 1034 => IOERR_FSYNC,
    IoErrDirFsync = 1290 => IOERR_DIR_FSYNC,
    IoErrTruncate = 1546 => IOERR_TRUNCATE,
    IoErrFstat = 1802 => IOERR_FSTAT,
    IoErrUnlock = 2058 => IOERR_UNLOCK,
    IoErrRdLock = 2314 => IOERR_RDLOCK,
    IoErrDelete = 2570 => IOERR_DELETE,
    IoErrBlocked = 2826 => IOERR_BLOCKED,
    IoErrNoMem = 3082 => IOERR_NOMEM,
    IoErrAccess = 3338 => IOERR_ACCESS,
    IoErrCheckReservedLock = 3594 => IOERR_CHECKRESERVEDLOCK,
    IoErrLock = 3850 => IOERR_LOCK,
    IoErrClose = 4106 => IOERR_CLOSE,
    IoErrDirClose = 4362 => IOERR_DIR_CLOSE,
    IoErrShmOpen = 4618 => IOERR_SHMOPEN,
    IoErrShmSize = 4874 => IOERR_SHMSIZE,
    IoErrShmLock = 5130 => IOERR_SHMLOCK,
    IoErrShmMap = 5386 => IOERR_SHMMAP,
    IoErrSeek = 5642 => IOERR_SEEK,
    IoErrDeleteNoEnt = 5898 => IOERR_DELETE_NOENT,
    IoErrMmap = 6154 => IOERR_MMAP,
    IoErrGetTempPath = 6410 => IOERR_GETTEMPPATH,
    IoErrConvPath = 6666 => IOERR_CONVPATH,
    IoErrVnode = 6922 => IOERR_VNODE,
    IoErrAuth = 7178 => IOERR_AUTH,
    IoErrBeginAtomic = 7434 => IOERR_BEGIN_ATOMIC,
    IoErrCommitAtomic = 7690 => IOERR_COMMIT_ATOMIC,
    IoErrRollbackAtomic = 7946 => IOERR_ROLLBACK_ATOMIC,
    IoErrData = 8202 => IOERR_DATA,
    IoErrCorruptFs = 8458 => IOERR_CORRUPTFS,

    LockedSharedCache = 262 => LOCKED_SHAREDCACHE,
    LockedVtab = 518 => LOCKED_VTAB,

    BusyRecovery = 261 => BUSY_RECOVERY,
    BusySnapshot = 517 => BUSY_SNAPSHOT,
    BusyTimeout = 773 => BUSY_TIMEOUT,

    CantOpenNoTempDir = 270 => CANTOPEN_NOTEMPDIR,
    CantOpenIsDir = 526 => CANTOPEN_ISDIR,
    CantOpenFullPath = 782 => CANTOPEN_FULLPATH,
    CantOpenConvPath = 1038 => CANTOPEN_CONVPATH,
    CantOpenDirtyWal = 1294 => CANTOPEN_DIRTYWAL,
    CantOpenSymlink = 1550 => CANTOPEN_SYMLINK,

    CorruptVtab = 267 => CORRUPT_VTAB,
    CorruptSequence = 523 => CORRUPT_SEQUENCE,
    CorruptIndex = 779 => CORRUPT_INDEX,

    ReadOnlyRecovery = 264 => READONLY_RECOVERY,
    ReadOnlyCantLock = 520 => READONLY_CANTLOCK,
    ReadOnlyRollback = 776 => READONLY_ROLLBACK,
    ReadOnlyDbMoved = 1032 => READONLY_DBMOVED,
    ReadOnlyCantInit = 1288 => READONLY_CANTINIT,
    ReadOnlyDirectory = 1544 => READONLY_DIRECTORY,

    AbortRollback = 516 => ABORT_ROLLBACK,

    ConstraintCheck = 275 => CONSTRAINT_CHECK,
    ConstraintCommitHook = 531 => CONSTRAINT_COMMITHOOK,
    ConstraintForeignKey = 787 => CONSTRAINT_FOREIGNKEY,
    ConstraintFunction = 1043 => CONSTRAINT_FUNCTION,
    ConstraintNotNull = 1299 => CONSTRAINT_NOTNULL,
    ConstraintPrimaryKey = 1555 => CONSTRAINT_PRIMARYKEY,
    ConstraintTrigger = 1811 => CONSTRAINT_TRIGGER,
    ConstraintUnique = 2067 => CONSTRAINT_UNIQUE,
    ConstraintVtab = 2323 => CONSTRAINT_VTAB,
    ConstraintRowId = 2579 => CONSTRAINT_ROWID,
    ConstraintPinned = 2835 => CONSTRAINT_PINNED,
    ConstraintDataType = 3091 => CONSTRAINT_DATATYPE,

    NoticeRecoverWal = 283 => NOTICE_RECOVER_WAL,
    NoticeRecoverRollback = 539 => NOTICE_RECOVER_ROLLBACK,
    NoticeRbu = 795 => NOTICE_RBU,

    WarningAutoIndex = 284 => WARNING_AUTOINDEX,

    AuthUser = 279 => AUTH_USER,

    OkLoadPermanently = 256 => OK_LOAD_PERMANENTLY,
    OkSymlink = 512 => OK_SYMLINK,
}

impl ResultCode {
    /// The primary code an extended code refines (its low byte).
    pub fn primary(self) -> ResultCode {
        ResultCode::from_raw(self.raw() & 0xff)
    }

    /// Whether this is a primary code rather than an extended one.
    pub fn is_primary(self) -> bool {
        self.raw() & !0xff == 0 && !matches!(self, ResultCode::Unknown(_))
    }

    /// Only `SQLITE_OK` and its extended forms count as success.
    pub fn is_success(self) -> bool {
        !matches!(self, ResultCode::Unknown(_)) && self.primary() == ResultCode::Ok
    }

    /// Busy states that clear once another connection releases its lock.
    ///
    /// `BUSY_SNAPSHOT` is excluded: retrying inside the same read transaction
    /// can never succeed.
    pub fn is_transient_busy(self) -> bool {
        matches!(self, ResultCode::Busy | ResultCode::BusyRecovery)
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        ResultCode::from_raw(code)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, ResultCode::Ok)]
    #[case(5, ResultCode::Busy)]
    #[case(19, ResultCode::Constraint)]
    #[case(101, ResultCode::Done)]
    #[case(2067, ResultCode::ConstraintUnique)]
    #[case(8202, ResultCode::IoErrData)]
    fn test_from_raw_known(#[case] raw: i32, #[case] expected: ResultCode) {
        assert_eq!(ResultCode::from_raw(raw), expected);
        assert_eq!(expected.raw(), raw);
    }

    #[rstest]
    fn test_unknown_code_is_never_success() {
        let code = ResultCode::from_raw(4242);
        assert_eq!(code, ResultCode::Unknown(4242));
        assert!(!code.is_success());
        assert_eq!(code.raw(), 4242);
    }

    #[rstest]
    #[case(ResultCode::ConstraintUnique, ResultCode::Constraint)]
    #[case(ResultCode::BusySnapshot, ResultCode::Busy)]
    #[case(ResultCode::IoErrShortRead, ResultCode::IoErr)]
    #[case(ResultCode::Row, ResultCode::Row)]
    fn test_primary(#[case] code: ResultCode, #[case] primary: ResultCode) {
        assert_eq!(code.primary(), primary);
    }

    #[rstest]
    fn test_row_and_done_are_not_success() {
        assert!(ResultCode::Ok.is_success());
        assert!(ResultCode::OkSymlink.is_success());
        assert!(!ResultCode::Row.is_success());
        assert!(!ResultCode::Done.is_success());
    }

    #[rstest]
    fn test_transient_busy() {
        assert!(ResultCode::Busy.is_transient_busy());
        assert!(ResultCode::BusyRecovery.is_transient_busy());
        assert!(!ResultCode::BusySnapshot.is_transient_busy());
        assert!(!ResultCode::Locked.is_transient_busy());
    }

    #[rstest]
    fn test_display_uses_c_name() {
        assert_eq!(ResultCode::ConstraintUnique.to_string(), "SQLITE_CONSTRAINT_UNIQUE (2067)");
        assert!(ResultCode::Busy.is_primary());
        assert!(!ResultCode::BusyTimeout.is_primary());
    }
}
