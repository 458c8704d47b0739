use std::error::Error;

use serde::Serialize;
use sqlitepp::{Connection, Logger};

use super::SetCmd;
use crate::commands::Execute;

#[derive(Debug, Clone, Serialize)]
pub struct SetResult {
    pub key: String,
    pub quantity: i64,
    pub quantity_type: i32,
    /// Quantity before this update, if the key already existed
    pub previous: Option<i64>,
}

const UPSERT: &str = "INSERT INTO kv (key, created, updated, quantity, quantity_type)
    VALUES (?, datetime('now'), datetime('now'), ?, ?)
    ON CONFLICT(key) DO UPDATE SET
        updated = excluded.updated,
        quantity = excluded.quantity,
        quantity_type = excluded.quantity_type";

impl Execute for SetCmd {
    type Output = SetResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let log = Logger::new("sqlitepp").child("set");

        let mut previous = None;
        conn.statement::<(i64,)>("SELECT quantity FROM kv WHERE key = ?")
            .execute((self.key.as_str(),), |quantity: i64| {
                previous = Some(quantity);
                false
            })?;

        conn.statement::<()>(UPSERT)
            .execute((self.key.as_str(), self.quantity, self.quantity_type), || true)?;
        log.trace(format_args!("{} = {}", self.key, self.quantity));

        Ok(SetResult {
            key: self.key,
            quantity: self.quantity,
            quantity_type: self.quantity_type,
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sqlitepp::StrView;

    #[fixture]
    fn kv() -> Connection {
        sqlitepp::test_utils::kv_db()
    }

    fn stored(conn: &Connection, key: &str) -> Option<(i64, i64, String)> {
        let mut row = None;
        conn.statement::<(i64, i64, StrView)>("SELECT quantity, quantity_type, created FROM kv WHERE key = ?")
            .execute((key,), |quantity: i64, quantity_type: i64, created: &str| {
                row = Some((quantity, quantity_type, created.to_string()));
                false
            })
            .unwrap();
        row
    }

    #[rstest]
    fn test_set_new_key(kv: Connection) {
        let cmd = SetCmd {
            key: "apples".to_string(),
            quantity: 12,
            quantity_type: 1,
        };
        let result = cmd.execute(&kv).expect("Set should succeed");

        assert_eq!(result.previous, None);
        let (quantity, quantity_type, created) = stored(&kv, "apples").expect("Row should exist");
        assert_eq!((quantity, quantity_type), (12, 1));
        assert!(!created.is_empty());
    }

    #[rstest]
    fn test_set_existing_key_updates(kv: Connection) {
        for quantity in [5, -2] {
            SetCmd {
                key: "flour".to_string(),
                quantity,
                quantity_type: 0,
            }
            .execute(&kv)
            .expect("Set should succeed");
        }

        let result = SetCmd {
            key: "flour".to_string(),
            quantity: 9,
            quantity_type: 0,
        }
        .execute(&kv)
        .unwrap();

        assert_eq!(result.previous, Some(-2));
        assert_eq!(stored(&kv, "flour").map(|row| row.0), Some(9));
        assert_eq!(kv.pragma_query_i64("user_version").unwrap(), 0);
    }

    #[rstest]
    fn test_set_without_table_fails() {
        let conn = Connection::open_in_memory().unwrap();
        let cmd = SetCmd {
            key: "apples".to_string(),
            quantity: 1,
            quantity_type: 0,
        };
        let err = cmd.execute(&conn).unwrap_err();
        assert!(err.to_string().contains("no such table"), "{err}");
    }
}
