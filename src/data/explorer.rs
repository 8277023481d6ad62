//! Data Explorer Module
//! Filter/search/sort state for the price table. Derives views, never mutates.

use crate::config::consts::ROW_INDEX;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
}

/// "Column contains text" filter, case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilter {
    pub column: String,
    pub needle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column: String,
    pub descending: bool,
}

/// Interactive filter state over the cleaned table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explorer {
    /// Matched against every column.
    pub search: String,
    pub filters: Vec<ColumnFilter>,
    pub sort: Option<SortKey>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.filters.iter().any(|f| !f.needle.trim().is_empty())
    }

    /// Click on a header: sort ascending, then descending, then unsorted.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(key) if key.column == column && !key.descending => Some(SortKey {
                column: key.column,
                descending: true,
            }),
            Some(key) if key.column == column => None,
            _ => Some(SortKey {
                column: column.to_string(),
                descending: false,
            }),
        };
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
    }

    /// Derive the visible rows from `df`.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame, ExplorerError> {
        let mut view = if self.is_active() {
            let mask = self.mask(df)?;
            df.filter(&mask)?
        } else {
            df.clone()
        };

        if let Some(key) = &self.sort {
            if df.get_column_index(&key.column).is_none() {
                return Err(ExplorerError::UnknownColumn(key.column.clone()));
            }
            view = view.sort(
                [key.column.as_str()],
                SortMultipleOptions::default()
                    .with_order_descending(key.descending)
                    .with_maintain_order(true),
            )?;
        }
        Ok(view)
    }

    fn mask(&self, df: &DataFrame) -> Result<BooleanChunked, ExplorerError> {
        let search = self.search.trim().to_lowercase();
        let filters: Vec<(usize, String)> = self
            .filters
            .iter()
            .filter(|f| !f.needle.trim().is_empty())
            .map(|f| {
                df.get_column_index(&f.column)
                    .map(|idx| (idx, f.needle.trim().to_lowercase()))
                    .ok_or_else(|| ExplorerError::UnknownColumn(f.column.clone()))
            })
            .collect::<Result<_, _>>()?;

        // Lowercased text of every cell, column-major. The index column is
        // kept as None so positions line up with the frame.
        let columns: Vec<Option<Vec<String>>> = df
            .get_columns()
            .iter()
            .map(|column| -> Result<_, ExplorerError> {
                if column.name().as_str() == ROW_INDEX {
                    return Ok(None);
                }
                let text = column.cast(&DataType::String)?;
                let values = text
                    .str()?
                    .into_iter()
                    .map(|v| v.unwrap_or_default().to_lowercase())
                    .collect();
                Ok(Some(values))
            })
            .collect::<Result<_, _>>()?;

        let keep: Vec<bool> = (0..df.height())
            .map(|row| {
                let cell = |idx: usize| columns[idx].as_ref().map(|values| values[row].as_str());
                let searched = search.is_empty()
                    || (0..columns.len()).any(|idx| cell(idx).is_some_and(|v| v.contains(&search)));
                searched
                    && filters
                        .iter()
                        .all(|(idx, needle)| cell(*idx).is_some_and(|v| v.contains(needle.as_str())))
            })
            .collect();

        Ok(BooleanChunked::from_slice("mask".into(), &keep))
    }
}
