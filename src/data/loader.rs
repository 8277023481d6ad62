//! CSV Data Loader Module
//! Handles CSV file loading with Polars, memoized by source identity.

use crate::config::consts::NA_TOKENS;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Identity of a source file: where it is and which version of it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl SourceKey {
    /// Read the current identity of `path` from file metadata.
    pub fn of(path: &Path) -> Result<Self, LoaderError> {
        let meta = std::fs::metadata(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !meta.is_file() {
            return Err(LoaderError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file"),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Loads the price list CSV and keeps the last parsed frame.
pub struct DataLoader {
    cached: Option<(SourceKey, DataFrame)>,
    reads: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            cached: None,
            reads: 0,
        }
    }

    /// Load a CSV file, reusing the cached frame while the file is unchanged.
    pub fn load(&mut self, path: &Path) -> Result<&DataFrame, LoaderError> {
        let key = SourceKey::of(path)?;

        let stale = self
            .cached
            .as_ref()
            .map_or(true, |(cached, _)| *cached != key);
        if stale {
            let df = Self::read_csv(path)?;
            self.reads += 1;
            info!(
                "loaded {} rows, {} columns from {}",
                df.height(),
                df.width(),
                path.display()
            );
            self.cached = Some((key, df));
        } else {
            debug!("cache hit for {}", path.display());
        }

        self.cached
            .as_ref()
            .map(|(_, df)| df)
            .ok_or(LoaderError::NoData)
    }

    fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_null_values(Some(NullValues::AllColumns(
                NA_TOKENS.iter().map(|token| (*token).into()).collect(),
            )))
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Key of the frame currently held in the cache.
    pub fn source_key(&self) -> Option<&SourceKey> {
        self.cached.as_ref().map(|(key, _)| key)
    }

    /// Drop the cached frame so the next load re-reads the file.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times the file was actually parsed.
    pub fn read_count(&self) -> usize {
        self.reads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("prices.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn second_load_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "a,b\n1,x\n2,y\n");

        let mut loader = DataLoader::new();
        assert_eq!(loader.load(&path).unwrap().height(), 2);
        assert_eq!(loader.load(&path).unwrap().height(), 2);
        assert_eq!(loader.read_count(), 1);
        assert_eq!(loader.source_key().map(|k| k.path.clone()), Some(path));
    }

    #[test]
    fn changed_file_is_reread() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "a,b\n1,x\n");

        let mut loader = DataLoader::new();
        assert_eq!(loader.load(&path).unwrap().height(), 1);

        // Size changes even when mtime resolution is coarse.
        write_csv(dir.path(), "a,b\n1,x\n2,y\n3,z\n");
        assert_eq!(loader.load(&path).unwrap().height(), 3);
        assert_eq!(loader.read_count(), 2);
    }

    #[test]
    fn invalidate_forces_reread() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "a\n1\n");

        let mut loader = DataLoader::new();
        loader.load(&path).unwrap();
        loader.invalidate();
        assert!(loader.source_key().is_none());
        loader.load(&path).unwrap();
        assert_eq!(loader.read_count(), 2);
    }

    #[test]
    fn na_markers_are_read_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "name,price\nNA,1\n,2\nnull,3\nN/A,4\nPublix,NaN\n");

        let mut loader = DataLoader::new();
        let df = loader.load(&path).unwrap();
        assert_eq!(df.column("name").unwrap().null_count(), 4);
        assert_eq!(df.column("price").unwrap().null_count(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = DataLoader::new();
        let err = loader.load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
