use std::error::Error;

use serde::Serialize;
use sqlitepp::schema::KV_SCHEMA;
use sqlitepp::{Connection, Logger};

use super::InitCmd;
use crate::commands::Execute;

#[derive(Debug, Clone, Serialize)]
pub struct InitResult {
    pub table: String,
    pub user_version: i64,
    pub existing_rows: i64,
}

impl Execute for InitCmd {
    type Output = InitResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let log = Logger::new("sqlitepp").child("init");

        conn.pragma("user_version", 0)?;
        conn.execute(KV_SCHEMA, true)?;

        let mut existing_rows = 0;
        conn.statement::<(i64,)>("SELECT count(*) FROM kv").execute((), |count: i64| {
            existing_rows = count;
            false
        })?;
        log.info(format_args!("kv table ready with {} row(s)", existing_rows));

        Ok(InitResult {
            table: "kv".to_string(),
            user_version: conn.pragma_query_i64("user_version")?,
            existing_rows,
        })
    }
}
