use super::execute::ExecResult;
use crate::output::Outputable;

impl Outputable for ExecResult {
    fn to_table(&self) -> String {
        match self.changes {
            1 => "OK (1 row changed)".to_string(),
            n => format!("OK ({n} rows changed)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn one_change() -> ExecResult {
        ExecResult {
            sql: "DELETE FROM kv WHERE key = 'apples'".to_string(),
            changes: 1,
        }
    }

    #[fixture]
    fn no_changes() -> ExecResult {
        ExecResult {
            sql: "PRAGMA user_version = 1".to_string(),
            changes: 0,
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_singular,
        fixture: one_change,
        fixture_type: ExecResult,
        expected: "OK (1 row changed)",
    }

    crate::output_table_test! {
        test_name: test_to_table_plural,
        fixture: no_changes,
        fixture_type: ExecResult,
        expected: "OK (0 rows changed)",
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: one_change,
        fixture_type: ExecResult,
        assertions: {
            "sql": "DELETE FROM kv WHERE key = 'apples'",
            "changes": 1,
        },
    }
}
