use std::error::Error;

use serde::Serialize;
use sqlitepp::{Connection, StrView};

use super::ListCmd;
use crate::commands::Execute;

/// A single stored key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KvEntry {
    pub key: String,
    pub quantity: i64,
    pub quantity_type: i32,
    pub updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub entries: Vec<KvEntry>,
    /// More entries exist past the limit
    pub truncated: bool,
}

const LIST: &str = "SELECT key, quantity, quantity_type, updated FROM kv WHERE key >= ? ORDER BY key";

impl Execute for ListCmd {
    type Output = ListResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let limit = self.limit as usize;
        let start = self.from.unwrap_or_default();

        let mut entries = Vec::new();
        let mut truncated = false;
        conn.statement::<(StrView, i64, i32, StrView)>(LIST).execute(
            (start.as_str(),),
            |key: &str, quantity: i64, quantity_type: i32, updated: &str| {
                if entries.len() == limit {
                    truncated = true;
                    return false;
                }
                entries.push(KvEntry {
                    key: key.to_string(),
                    quantity,
                    quantity_type,
                    updated: updated.to_string(),
                });
                true
            },
        )?;

        Ok(ListResult { entries, truncated })
    }
}
