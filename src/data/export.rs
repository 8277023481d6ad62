//! CSV Export Module
//! Serializes the cleaned table for download, memoized by source identity.

use crate::data::SourceKey;
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to save {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

pub struct CsvExporter;

impl CsvExporter {
    /// UTF-8 CSV with a header row.
    pub fn to_csv_bytes(df: &DataFrame) -> Result<Vec<u8>, ExportError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut df = df.clone();
        CsvWriter::new(&mut buf)
            .include_header(true)
            .finish(&mut df)?;
        Ok(buf)
    }

    pub fn save(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, bytes).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Last serialized table, keyed by the source it was cleaned from.
#[derive(Default)]
pub struct ExportCache {
    entry: Option<(SourceKey, Arc<Vec<u8>>)>,
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached bytes for `key`, serializing `df` on a miss.
    pub fn get_or_insert(
        &mut self,
        key: &SourceKey,
        df: &DataFrame,
    ) -> Result<Arc<Vec<u8>>, ExportError> {
        if let Some((cached, bytes)) = &self.entry {
            if cached == key {
                debug!("export cache hit");
                return Ok(Arc::clone(bytes));
            }
        }

        let bytes = Arc::new(CsvExporter::to_csv_bytes(df)?);
        debug!("serialized {} rows into {} bytes", df.height(), bytes.len());
        self.entry = Some((key.clone(), Arc::clone(&bytes)));
        Ok(bytes)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
