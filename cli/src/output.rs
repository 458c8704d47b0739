//! Output formatting for command results.
//!
//! Supports two output formats: table (human-readable) and JSON.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }
}

/// Pad `rows` into left-aligned columns under `headers`.
pub fn render_columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(render(separator.iter().map(String::as_str).collect()));
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("name: {}", self.name)
        }
    }

    #[rstest]
    fn test_format_dispatch() {
        let sample = Sample { name: "kv" };
        assert_eq!(sample.format(OutputFormat::Table), "name: kv");
        assert_eq!(sample.format(OutputFormat::Json), "{\n  \"name\": \"kv\"\n}");
    }

    #[rstest]
    fn test_render_columns_aligns_cells() {
        let rows = vec![
            vec!["apples".to_string(), "3".to_string()],
            vec!["kiwi".to_string(), "12".to_string()],
        ];
        let table = render_columns(&["KEY", "QUANTITY"], &rows);
        assert_eq!(
            table,
            "KEY     QUANTITY\n------  --------\napples  3\nkiwi    12"
        );
    }
}
