//! Output formatting for list command results.

use super::execute::ListResult;
use crate::output::{Outputable, render_columns};

impl Outputable for ListResult {
    fn to_table(&self) -> String {
        if self.entries.is_empty() {
            return "No keys found.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.key.clone(),
                    e.quantity.to_string(),
                    e.quantity_type.to_string(),
                    e.updated.clone(),
                ]
            })
            .collect();

        let mut output = render_columns(&["KEY", "QUANTITY", "TYPE", "UPDATED"], &rows);
        if self.truncated {
            output.push_str(&format!("\n(showing first {} keys)", self.entries.len()));
        }
        output
    }
}
