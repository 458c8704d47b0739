//! Output formatting for get command results.

use super::execute::GetResult;
use crate::output::Outputable;

impl Outputable for GetResult {
    fn to_table(&self) -> String {
        match self.quantity {
            Some(quantity) => format!("{}: {}", self.key, quantity),
            None => format!("{}: not found", self.key),
        }
    }
}
