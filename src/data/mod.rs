//! Data module - CSV loading, cleaning, summaries and export

mod cleaner;
mod explorer;
mod export;
mod loader;
mod pipeline;
mod summary;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cleaner::{Cleaner, CleanerError, REQUIRED_COLUMNS};
pub use explorer::{ColumnFilter, Explorer, ExplorerError, SortKey};
pub use export::{CsvExporter, ExportCache, ExportError};
pub use loader::{DataLoader, LoaderError, SourceKey};
pub use pipeline::{Pipeline, PipelineError, Snapshot};
pub use summary::{Summary, SummaryError};
