//! GUI module - User interface components

mod app;
pub mod content;
mod filter_panel;
mod price_table;
mod table_model;

pub use app::DashboardApp;
pub use filter_panel::{FilterPanel, FilterPanelAction};
pub use price_table::PriceTable;
pub use table_model::{format_currency, link_target, CellKind, TableModel};
