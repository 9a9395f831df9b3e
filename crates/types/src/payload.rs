//! JSON payloads returned by the spreadsheet-backed API.
//!
//! Rows are kept as raw JSON objects; each game interprets its own columns.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One spreadsheet row as returned by the API.
pub type Row = Map<String, Value>;

/// `{ ok, row }` response for a single row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub row: Option<Row>,
}

impl RowResponse {
    /// The row, unless the API flagged the request as failed.
    pub fn into_row(self) -> Option<Row> {
        if self.ok == Some(false) {
            return None;
        }
        self.row
    }
}

/// `{ ok, rows }` response for modes that return several rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowsResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl RowsResponse {
    pub fn into_rows(self) -> Vec<Row> {
        if self.ok == Some(false) {
            return Vec::new();
        }
        self.rows
    }
}

/// Interpret a spreadsheet cell as an on/off flag.
///
/// Cells come back as booleans, numbers or text depending on how the sheet was
/// edited, so `true`, `1`, `"TRUE"`, `"yes"` and `"1"` all count as on.
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    }
}

/// Typed accessors over a [`Row`].
pub trait RowExt {
    /// Trimmed, non-empty text for a column. Numbers are rendered as text.
    fn text(&self, key: &str) -> Option<String>;

    /// Comma separated list, trimmed, empty entries dropped.
    fn list(&self, key: &str) -> Vec<String>;

    /// Integer column (number or numeric text).
    fn int(&self, key: &str) -> Option<i64>;
}

impl RowExt for Row {
    fn text(&self, key: &str) -> Option<String> {
        let s = match self.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.text(key)
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
