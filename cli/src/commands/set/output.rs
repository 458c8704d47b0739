//! Output formatting for set command results.

use super::execute::SetResult;
use crate::output::Outputable;

impl Outputable for SetResult {
    fn to_table(&self) -> String {
        match self.previous {
            Some(previous) => format!("{}: {} -> {}", self.key, previous, self.quantity),
            None => format!("{}: {} (new)", self.key, self.quantity),
        }
    }
}
