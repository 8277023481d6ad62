//! Test fixtures: small price list frames with the full column layout.

use crate::config::consts::*;
use polars::prelude::*;

#[derive(Clone)]
pub struct Row {
    pub name: Option<&'static str>,
    pub address: Option<&'static str>,
    pub website: Option<&'static str>,
    pub phone: Option<i64>,
    pub description: Option<&'static str>,
    pub category: Option<&'static str>,
    pub price: f64,
    pub quantity: i64,
}

pub fn row(name: &'static str, description: &'static str, category: &'static str, price: f64) -> Row {
    Row {
        name: Some(name),
        address: Some("100 Biscayne Blvd"),
        website: Some("https://example.com"),
        phone: Some(3055550100),
        description: Some(description),
        category: Some(category),
        price,
        quantity: 1,
    }
}

/// Build a raw (uncleaned) frame in the CSV's column order.
pub fn raw_frame(rows: &[Row]) -> DataFrame {
    let text = |f: fn(&Row) -> Option<&'static str>| -> Vec<Option<&'static str>> {
        rows.iter().map(f).collect()
    };
    let constant = |value: &'static str| -> Vec<Option<&'static str>> {
        rows.iter().map(|_| Some(value)).collect()
    };

    DataFrame::new(vec![
        Column::new(DATE.into(), constant("2024-03-01")),
        Column::new(MERCHANT_NAME.into(), text(|r| r.name)),
        Column::new(MERCHANT_ADDRESS.into(), text(|r| r.address)),
        Column::new(MERCHANT_NEIGHBORHOOD.into(), constant("Brickell")),
        Column::new(MERCHANT_AREA.into(), constant("Miami")),
        Column::new(MERCHANT_POSTAL_CODE.into(), constant("33131")),
        Column::new(MERCHANT_CATEGORY.into(), constant("Supermercado")),
        Column::new(
            MERCHANT_PHONE.into(),
            rows.iter().map(|r| r.phone).collect::<Vec<_>>(),
        ),
        Column::new(MERCHANT_WEBSITE.into(), text(|r| r.website)),
        Column::new(PRODUCT_DESCRIPTION.into(), text(|r| r.description)),
        Column::new(PRODUCT_SKU.into(), constant("SKU-1")),
        Column::new(PRODUCT_UOM.into(), constant("unidad")),
        Column::new(PRODUCT_CATEGORY.into(), text(|r| r.category)),
        Column::new(
            UNIT_PRICE.into(),
            rows.iter().map(|r| r.price).collect::<Vec<_>>(),
        ),
        Column::new(
            TOTAL_QUANTITY.into(),
            rows.iter().map(|r| r.quantity).collect::<Vec<_>>(),
        ),
    ])
    .unwrap()
}

/// Same layout rendered as CSV text, for loader and pipeline tests.
pub fn raw_csv(rows: &[Row]) -> String {
    let mut out = String::new();
    let header = [
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
    out.push_str(&header.join(","));
    out.push('\n');
    for r in rows {
        let fields = [
            "2024-03-01".to_string(),
            r.name.unwrap_or_default().to_string(),
            r.address.unwrap_or_default().to_string(),
            "Brickell".to_string(),
            "Miami".to_string(),
            "33131".to_string(),
            "Supermercado".to_string(),
            r.phone.map(|p| p.to_string()).unwrap_or_default(),
            r.website.unwrap_or_default().to_string(),
            r.description.unwrap_or_default().to_string(),
            "SKU-1".to_string(),
            "unidad".to_string(),
            r.category.unwrap_or_default().to_string(),
            r.price.to_string(),
            r.quantity.to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}
