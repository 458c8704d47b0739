use std::error::Error;

use serde::Serialize;
use sqlitepp::Connection;

use super::ExecCmd;
use crate::commands::Execute;

#[derive(Debug, Clone, Serialize)]
pub struct ExecResult {
    pub sql: String,
    /// Rows changed by the last INSERT, UPDATE or DELETE
    pub changes: u64,
}

impl Execute for ExecCmd {
    type Output = ExecResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let sql = self.sql.join(" ");
        conn.execute(&sql, !self.no_wait)?;
        let changes = conn.changes()?;
        Ok(ExecResult { sql, changes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sqlitepp::ResultCode;
    use sqlitepp::test_utils::populated_kv_db;

    #[fixture]
    fn populated_db() -> Connection {
        populated_kv_db()
    }

    fn exec(sql: &[&str]) -> ExecCmd {
        ExecCmd {
            sql: sql.iter().map(|s| s.to_string()).collect(),
            no_wait: false,
        }
    }

    #[rstest]
    fn test_exec_reports_changes(populated_db: Connection) {
        let result = exec(&["DELETE FROM kv", "WHERE quantity < 5"]).execute(&populated_db).unwrap();
        assert_eq!(result.sql, "DELETE FROM kv WHERE quantity < 5");
        assert_eq!(result.changes, 2);
    }

    #[rstest]
    fn test_exec_runs_every_statement(populated_db: Connection) {
        exec(&["UPDATE kv SET quantity = 1; UPDATE kv SET quantity_type = 4 WHERE key = 'dates';"])
            .execute(&populated_db)
            .unwrap();

        let mut rows = Vec::new();
        populated_db
            .statement::<(i64, i32)>("SELECT quantity, quantity_type FROM kv ORDER BY key")
            .execute((), |quantity: i64, quantity_type: i32| {
                rows.push((quantity, quantity_type));
                true
            })
            .unwrap();
        assert_eq!(rows, vec![(1, 0), (1, 0), (1, 0), (1, 4)]);
    }

    #[rstest]
    fn test_exec_surfaces_engine_error(populated_db: Connection) {
        let err = exec(&["INSERT INTO kv (key) VALUES ('apples')"])
            .execute(&populated_db)
            .unwrap_err();
        let err = err.downcast::<sqlitepp::Error>().unwrap();
        assert_eq!(err.code(), Some(ResultCode::ConstraintUnique));
    }
}
