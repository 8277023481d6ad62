//! Data Cleaner Module
//! Turns the raw price list into the cleaned table shown on the dashboard.
//!
//! Steps run in a fixed order: null-fill, type-fix, price filter, dedup,
//! drop quantity. Reordering them changes the result (deduplicating before
//! the price filter, or after dropping the quantity column, keeps a
//! different set of rows).

use crate::config::consts::*;
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Column '{column}' is not numeric: {source}")]
    NonNumericPrice {
        column: &'static str,
        source: PolarsError,
    },
}

/// Columns the cleaner reads or writes directly.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    DATE,
    MERCHANT_NAME,
    MERCHANT_ADDRESS,
    MERCHANT_NEIGHBORHOOD,
    MERCHANT_AREA,
    MERCHANT_POSTAL_CODE,
    MERCHANT_CATEGORY,
    MERCHANT_PHONE,
    MERCHANT_WEBSITE,
    PRODUCT_DESCRIPTION,
    PRODUCT_SKU,
    PRODUCT_UOM,
    PRODUCT_CATEGORY,
    UNIT_PRICE,
    TOTAL_QUANTITY,
];

/// Handles data cleaning for the price list.
pub struct Cleaner;

impl Cleaner {
    /// Run every cleaning step on a copy of `raw`.
    pub fn clean(raw: &DataFrame) -> Result<DataFrame, CleanerError> {
        Self::require_columns(raw)?;
        let loaded = raw.height();

        let df = Self::fill_and_fix_types(raw)?;
        let df = Self::drop_non_positive_prices(df)?;
        let priced = df.height();
        let df = Self::drop_duplicates(df)?;
        let unique = df.height();
        let df = df.drop(TOTAL_QUANTITY)?;

        debug!(
            "removed {} non-positive prices, {} duplicates",
            loaded - priced,
            priced - unique
        );
        info!("cleaned {} -> {} rows", loaded, df.height());
        Ok(df)
    }

    fn require_columns(df: &DataFrame) -> Result<(), CleanerError> {
        match REQUIRED_COLUMNS
            .iter()
            .find(|name| df.get_column_index(name).is_none())
        {
            Some(name) => Err(CleanerError::MissingColumn(name.to_string())),
            None => Ok(()),
        }
    }

    /// Attach the source row index, fill missing text and make phone a string.
    fn fill_and_fix_types(raw: &DataFrame) -> Result<DataFrame, CleanerError> {
        let mut exprs: Vec<Expr> = NULLABLE_TEXT_COLUMNS
            .iter()
            .map(|name| Self::fill_missing_text(name))
            .collect();
        exprs.push(
            col(MERCHANT_PHONE)
                .cast(DataType::String)
                .fill_null(lit(MISSING))
                .alias(MERCHANT_PHONE),
        );

        let df = raw
            .clone()
            .lazy()
            .with_row_index(ROW_INDEX, None)
            .with_columns(exprs)
            .collect()?;
        Ok(df)
    }

    /// Null or empty values become the sentinel. Non-string columns (postal
    /// codes parsed as integers) are cast to text first.
    fn fill_missing_text(name: &str) -> Expr {
        let text = col(name).cast(DataType::String);
        when(text.clone().is_null().or(text.clone().eq(lit(""))))
            .then(lit(MISSING))
            .otherwise(text)
            .alias(name)
    }

    /// Keep rows with a strictly positive price. Missing prices are dropped too.
    fn drop_non_positive_prices(mut df: DataFrame) -> Result<DataFrame, CleanerError> {
        let price = df
            .column(UNIT_PRICE)?
            .as_materialized_series()
            .strict_cast(&DataType::Float64)
            .map_err(|source| CleanerError::NonNumericPrice {
                column: UNIT_PRICE,
                source,
            })?;
        df.with_column(price)?;

        let filtered = df.lazy().filter(col(UNIT_PRICE).gt(lit(0.0))).collect()?;
        Ok(filtered)
    }

    /// Remove exact duplicates across every data column, first occurrence wins.
    fn drop_duplicates(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let subset: Vec<PlSmallStr> = df
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != ROW_INDEX)
            .cloned()
            .collect();

        let unique = df
            .lazy()
            .unique_stable(Some(subset), UniqueKeepStrategy::First)
            .collect()?;
        Ok(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{raw_frame, row, Row};

    fn strings(df: &DataFrame, name: &str) -> Vec<String> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap_or("<null>").to_string())
            .collect()
    }

    #[test]
    fn example_from_three_rows() {
        let raw = raw_frame(&[
            row("Publix", "Leche", "A", 5.0),
            row("Publix", "Leche", "A", -1.0),
            row("Publix", "Leche", "A", 5.0),
        ]);

        let cleaned = Cleaner::clean(&raw).unwrap();
        assert_eq!(cleaned.height(), 1);
        assert_eq!(strings(&cleaned, PRODUCT_CATEGORY), vec!["A"]);
    }

    #[test]
    fn missing_text_becomes_sentinel() {
        let blank = Row {
            name: None,
            address: Some(""),
            website: None,
            description: None,
            category: None,
            ..row("x", "x", "x", 2.5)
        };
        let cleaned = Cleaner::clean(&raw_frame(&[blank])).unwrap();

        for name in NULLABLE_TEXT_COLUMNS {
            let values = strings(&cleaned, name);
            assert!(values.iter().all(|v| !v.is_empty() && v != "<null>"), "{name}");
        }
        assert_eq!(strings(&cleaned, MERCHANT_NAME), vec![MISSING]);
        assert_eq!(strings(&cleaned, MERCHANT_ADDRESS), vec![MISSING]);
        assert_eq!(strings(&cleaned, PRODUCT_CATEGORY), vec![MISSING]);
    }

    #[test]
    fn phone_is_always_text() {
        let no_phone = Row {
            phone: None,
            ..row("Sedanos", "Pan", "B", 1.0)
        };
        let cleaned = Cleaner::clean(&raw_frame(&[row("Publix", "Pan", "B", 1.0), no_phone])).unwrap();

        assert_eq!(cleaned.column(MERCHANT_PHONE).unwrap().dtype(), &DataType::String);
        assert_eq!(strings(&cleaned, MERCHANT_PHONE), vec!["3055550100", MISSING]);
    }

    #[test]
    fn zero_price_is_removed() {
        let raw = raw_frame(&[
            row("Publix", "Agua", "C", 0.0),
            row("Publix", "Jugo", "C", 0.01),
        ]);
        let cleaned = Cleaner::clean(&raw).unwrap();

        let prices: Vec<f64> = cleaned
            .column(UNIT_PRICE)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(prices, vec![0.01]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_index() {
        let raw = raw_frame(&[
            row("Publix", "Arroz", "D", 3.0),
            row("Publix", "Frijoles", "D", 4.0),
            row("Publix", "Arroz", "D", 3.0),
        ]);
        let cleaned = Cleaner::clean(&raw).unwrap();

        assert_eq!(strings(&cleaned, PRODUCT_DESCRIPTION), vec!["Arroz", "Frijoles"]);
        let index: Vec<u32> = cleaned
            .column(ROW_INDEX)
            .unwrap()
            .cast(&DataType::UInt32)
            .unwrap()
            .u32()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(index, vec![0, 1]);
    }

    #[test]
    fn rows_differing_only_in_quantity_survive_dedup() {
        let mut second = row("Publix", "Arroz", "D", 3.0);
        second.quantity = 7;
        let cleaned = Cleaner::clean(&raw_frame(&[row("Publix", "Arroz", "D", 3.0), second])).unwrap();

        assert_eq!(cleaned.height(), 2);
        assert!(cleaned.get_column_index(TOTAL_QUANTITY).is_none());
    }

    #[test]
    fn null_fill_precedes_dedup() {
        let variant = |name: Option<&'static str>| Row {
            name,
            ..row("_", "Arroz", "D", 3.0)
        };
        let cleaned = Cleaner::clean(&raw_frame(&[
            variant(None),
            variant(Some("")),
            variant(Some(MISSING)),
        ]))
        .unwrap();

        assert_eq!(cleaned.height(), 1);
        assert_eq!(strings(&cleaned, MERCHANT_NAME), vec![MISSING]);
    }

    #[test]
    fn missing_column_is_reported() {
        let raw = raw_frame(&[row("Publix", "Arroz", "D", 3.0)])
            .drop(UNIT_PRICE)
            .unwrap();
        let err = Cleaner::clean(&raw).unwrap_err();
        assert!(matches!(err, CleanerError::MissingColumn(name) if name == UNIT_PRICE));
    }

    #[test]
    fn text_price_is_rejected() {
        let mut raw = raw_frame(&[row("Publix", "Arroz", "D", 3.0)]);
        raw.with_column(Column::new(UNIT_PRICE.into(), ["tres"]))
            .unwrap();
        let err = Cleaner::clean(&raw).unwrap_err();
        assert!(matches!(err, CleanerError::NonNumericPrice { .. }));
    }
}
