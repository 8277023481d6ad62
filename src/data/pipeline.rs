//! Pipeline Module
//! Load -> clean -> summarize, re-run in full on every interaction.
//! Only the load and the CSV export are memoized.

use crate::data::{
    Cleaner, CleanerError, DataLoader, ExportCache, ExportError, LoaderError, SourceKey, Summary,
    SummaryError,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, info_span};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Clean(#[from] CleanerError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub source: SourceKey,
    pub table: DataFrame,
    pub summary: Summary,
}

pub struct Pipeline {
    dataset: PathBuf,
    loader: DataLoader,
    exports: ExportCache,
}

impl Pipeline {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            loader: DataLoader::new(),
            exports: ExportCache::new(),
        }
    }

    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    /// Load (cached), clean and summarize the dataset.
    pub fn run(&mut self) -> Result<Snapshot, PipelineError> {
        let _span = info_span!("pipeline", dataset = %self.dataset.display()).entered();

        let raw = self.loader.load(&self.dataset)?;
        let table = Cleaner::clean(raw)?;
        let summary = Summary::compute(&table)?;
        info!(
            "summary {}",
            serde_json::to_string(&summary).unwrap_or_default()
        );
        let source = self
            .loader
            .source_key()
            .cloned()
            .ok_or(LoaderError::NoData)?;

        Ok(Snapshot {
            source,
            table,
            summary,
        })
    }

    /// CSV bytes of the snapshot's cleaned table.
    pub fn export(&mut self, snapshot: &Snapshot) -> Result<Arc<Vec<u8>>, PipelineError> {
        Ok(self.exports.get_or_insert(&snapshot.source, &snapshot.table)?)
    }

    /// Forget both caches; the next run re-reads the file.
    pub fn reload(&mut self) {
        self.loader.invalidate();
        self.exports.clear();
    }

    pub fn read_count(&self) -> usize {
        self.loader.read_count()
    }
}
