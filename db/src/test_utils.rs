//! Shared test utilities for unit and integration tests.
//!
//! Provides an in-memory key/quantity database matching the schema the CLI
//! creates, optionally populated with a small fixture.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::connection::Connection;
pub use crate::schema::KV_SCHEMA;


/// Fixture rows as `(key, quantity)`, in insertion order.
pub const KV_FIXTURE: &[(&str, i64)] = &[("apples", 3), ("bananas", 12), ("cherries", 0), ("dates", 7)];

/// An in-memory database with an empty `kv` table.
pub fn kv_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to open in-memory DB");
    conn.execute(KV_SCHEMA, true).expect("Failed to create kv table");
    conn
}

/// An in-memory database with the `kv` table holding [`KV_FIXTURE`].
pub fn populated_kv_db() -> Connection {
    let conn = kv_db();
    {
        let mut insert = conn.statement::<()>(
            "INSERT INTO kv (key, created, updated, quantity) \
             VALUES (?, datetime('now'), datetime('now'), ?)",
        );
        for (key, quantity) in KV_FIXTURE {
            insert.execute((*key, *quantity), || true).expect("Failed to insert fixture row");
        }
    }
    conn
}

/// A path for an on-disk database inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
pub fn temp_db_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("test.sqlite");
    (dir, path)
}
