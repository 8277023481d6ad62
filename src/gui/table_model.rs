//! Table Model
//! Display-ready text of the filtered view, built once per refresh so the
//! grid does not touch polars while painting.

use crate::config::consts::{MERCHANT_WEBSITE, MISSING, UNIT_PRICE};
use polars::prelude::*;

/// How a column's cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Clickable hyperlink when the value looks like a URL.
    Link,
    /// Right-aligned `$0.00`.
    Currency,
    /// Source row number.
    Index,
}

#[derive(Debug, Clone, Default)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub kinds: Vec<CellKind>,
    /// Column-major cell text.
    pub columns: Vec<Vec<String>>,
    nrows: usize,
}

impl TableModel {
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let mut model = Self {
            nrows: df.height(),
            ..Default::default()
        };

        for (idx, column) in df.get_columns().iter().enumerate() {
            let name = column.name().to_string();
            let kind = match name.as_str() {
                MERCHANT_WEBSITE => CellKind::Link,
                UNIT_PRICE => CellKind::Currency,
                _ if idx == 0 && column.dtype().is_integer() => CellKind::Index,
                _ => CellKind::Text,
            };

            let cells: Vec<String> = if kind == CellKind::Currency {
                column
                    .cast(&DataType::Float64)?
                    .f64()?
                    .into_iter()
                    .map(|v| v.map(format_currency).unwrap_or_default())
                    .collect()
            } else {
                column
                    .cast(&DataType::String)?
                    .str()?
                    .into_iter()
                    .map(|v| v.unwrap_or_default().to_string())
                    .collect()
            };

            model.headers.push(name);
            model.kinds.push(kind);
            model.columns.push(cells);
        }
        Ok(model)
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.columns
            .get(col)
            .and_then(|cells| cells.get(row))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// `$%.2f`
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

/// URL to open for a website cell, if it is one.
pub fn link_target(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == MISSING || value.contains(char::is_whitespace) {
        return None;
    }
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(value.to_string())
    } else if lower.starts_with("www.") {
        Some(format!("https://{value}"))
    } else {
        None
    }
}
