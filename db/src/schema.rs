//! Schema of the key/quantity table the `sqlitepp` CLI manages.

/// Creates the `kv` table if it does not exist yet.
pub const KV_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT NOT NULL UNIQUE,
    created DATETIME,
    updated DATETIME,
    quantity INT NOT NULL DEFAULT 0,
    quantity_type SMALLINT DEFAULT 0
)";
