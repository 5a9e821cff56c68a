//! Per-day CSV metric tables.
//!
//! One CSV file per table under the log directory. The first column holds
//! row names; every call appends one named column (typically `day{n}`),
//! aligned on the existing row order. Cells for names absent from the new
//! column are left empty, and new names gain a padded row. Write failures
//! are warned and swallowed; the orchestrator never reads these tables.

use agora_application::MetricTable;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// CSV-backed [`MetricTable`] adapter.
pub struct CsvMetricTable {
    dir: PathBuf,
}

impl CsvMetricTable {
    /// Create a table sink under `dir`, creating the directory if needed.
    /// Returns `None` if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Option<Self> {
        let dir = dir.as_ref();
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Could not create metric table directory {}: {}", dir.display(), e);
            return None;
        }
        Some(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", table))
    }
}

impl MetricTable for CsvMetricTable {
    fn append_column(&self, table: &str, column: &str, values: &BTreeMap<String, Value>) {
        let path = self.table_path(table);

        let (mut header, mut rows) = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => parse_table(&content),
                Err(e) => {
                    warn!("Could not read metric table {}: {}", path.display(), e);
                    return;
                }
            }
        } else {
            (vec!["name".to_string()], Vec::new())
        };

        header.push(column.to_string());
        let width = header.len();

        // Align the new column on the existing row order
        for row in &mut rows {
            let cell = row
                .first()
                .and_then(|name| values.get(name))
                .map(encode_cell)
                .unwrap_or_default();
            row.push(cell);
            row.resize(width, String::new());
        }

        // New row names get a padded row
        let known: Vec<String> = rows.iter().filter_map(|r| r.first().cloned()).collect();
        for (name, value) in values {
            if known.iter().any(|n| n == name) {
                continue;
            }
            let mut row = vec![name.clone()];
            row.resize(width - 1, String::new());
            row.push(encode_cell(value));
            rows.push(row);
        }

        let mut out = String::new();
        out.push_str(&format_record(&header));
        out.push('\n');
        for row in &rows {
            out.push_str(&format_record(row));
            out.push('\n');
        }

        if let Err(e) = std::fs::write(&path, out) {
            warn!("Could not write metric table {}: {}", path.display(), e);
        }
    }
}

fn encode_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_table(content: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut lines = content.lines().filter(|l| !l.is_empty());
    let header = lines.next().map(split_record).unwrap_or_default();
    let rows = lines.map(split_record).collect();
    (header, rows)
}

/// Minimal CSV record formatting: quote cells containing separators or
/// quotes, doubling embedded quotes.
fn format_record(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn split_record(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    cells.push(current);
    cells
}
