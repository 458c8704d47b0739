use std::error::Error;

use serde::Serialize;
use sqlitepp::{Connection, StrView};

use super::GetCmd;
use crate::commands::Execute;

#[derive(Debug, Clone, Serialize)]
pub struct GetResult {
    pub key: String,
    pub quantity: Option<i64>,
}

impl Execute for GetCmd {
    type Output = GetResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let mut found = None;
        let mut stmt = conn.statement::<(i64, StrView)>("SELECT quantity, key FROM kv WHERE key = ?");
        stmt.execute((self.key.as_str(),), |quantity: i64, key: &str| {
            found = Some((quantity, key.to_string()));
            true
        })?;

        Ok(match found {
            Some((quantity, key)) => GetResult {
                key,
                quantity: Some(quantity),
            },
            None => GetResult {
                key: self.key,
                quantity: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sqlitepp::test_utils::{KV_FIXTURE, populated_kv_db};

    #[fixture]
    fn populated_db() -> Connection {
        populated_kv_db()
    }

    #[rstest]
    fn test_get_existing_key(populated_db: Connection) {
        let (key, quantity) = KV_FIXTURE[1];
        let result = GetCmd { key: key.to_string() }
            .execute(&populated_db)
            .expect("Get should succeed");

        assert_eq!(result.key, key);
        assert_eq!(result.quantity, Some(quantity));
    }

    #[rstest]
    fn test_get_zero_quantity_is_found(populated_db: Connection) {
        let result = GetCmd { key: "cherries".to_string() }.execute(&populated_db).unwrap();
        assert_eq!(result.quantity, Some(0));
    }

    #[rstest]
    fn test_get_missing_key(populated_db: Connection) {
        let result = GetCmd { key: "durian".to_string() }.execute(&populated_db).unwrap();
        assert_eq!(result.key, "durian");
        assert_eq!(result.quantity, None);
    }

    #[rstest]
    fn test_get_is_exact_match(populated_db: Connection) {
        let result = GetCmd { key: "APPLES".to_string() }.execute(&populated_db).unwrap();
        assert_eq!(result.quantity, None);
    }
}
