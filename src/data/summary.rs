//! Summary Module
//! The four KPI counts shown above the price table.

use crate::config::consts::*;
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// KPI counts over a cleaned price table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Distinct product categories.
    pub categories: usize,
    /// Distinct points of sale, keyed by name immediately followed by address.
    pub stores: usize,
    /// Distinct product descriptions.
    pub products: usize,
    /// Price records, duplicates included.
    pub prices: usize,
}

impl Summary {
    pub fn compute(df: &DataFrame) -> Result<Self, SummaryError> {
        Ok(Self {
            categories: df.column(PRODUCT_CATEGORY)?.n_unique()?,
            stores: Self::count_stores(df)?,
            products: df.column(PRODUCT_DESCRIPTION)?.n_unique()?,
            prices: df.column(UNIT_PRICE)?.len(),
        })
    }

    /// Store identity is the plain concatenation of name and address, so
    /// ("Ab", "c") and ("A", "bc") count once.
    fn count_stores(df: &DataFrame) -> Result<usize, SummaryError> {
        let stores = df
            .clone()
            .lazy()
            .select([concat_str([col(MERCHANT_NAME), col(MERCHANT_ADDRESS)], "", true).alias("store")])
            .collect()?;
        Ok(stores.column("store")?.n_unique()?)
    }

    /// (label, value) pairs in display order.
    pub fn tiles(&self) -> [(&'static str, usize); 4] {
        [
            (LABEL_CATEGORIES, self.categories),
            (LABEL_STORES, self.stores),
            (LABEL_PRODUCTS, self.products),
            (LABEL_PRICES, self.prices),
        ]
    }
}
