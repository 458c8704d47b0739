//! Output formatting for init command results.

use super::execute::InitResult;
use crate::output::Outputable;

impl Outputable for InitResult {
    fn to_table(&self) -> String {
        format!(
            "Initialized table '{}' (user_version = {}, {} existing row(s))",
            self.table, self.user_version, self.existing_rows
        )
    }
}
