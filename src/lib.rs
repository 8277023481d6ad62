//! Price Dashboard - Retail Product Price List Viewer
//!
//! Loads a CSV of product prices, cleans it, computes KPI counts and shows a
//! filterable, downloadable table.

pub mod config;
pub mod data;
pub mod gui;
