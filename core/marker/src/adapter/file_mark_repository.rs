//! marks.txt をファイルとして読み書きする MarkRepository 実装

use crate::domain::{parse_store, serialize_store, LoadOutcome, MarkError, Record};
use crate::ports::outbound::MarkRepository;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct FileMarkRepository {
    fs: Arc<dyn FileSystem>,
}

impl FileMarkRepository {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn ensure_parent(&self, path: &Path) -> Result<(), MarkError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.fs.create_dir_all(parent).map_err(|e| write_error(path, e))
            }
            _ => Ok(()),
        }
    }
}

fn write_error(path: &Path, e: common::error::Error) -> MarkError {
    MarkError::StoreWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl MarkRepository for FileMarkRepository {
    fn load(&self, path: &Path) -> Result<LoadOutcome, MarkError> {
        let bytes = self.fs.read(path).map_err(|e| MarkError::StoreUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(parse_store(&bytes))
    }

    fn save(&self, path: &Path, records: &[Record]) -> Result<(), MarkError> {
        self.ensure_parent(path)?;
        self.fs
            .write_atomic(path, &serialize_store(records))
            .map_err(|e| write_error(path, e))
    }

    fn ensure_seeded(&self, path: &Path, defaults: &[Record]) -> Result<bool, MarkError> {
        self.ensure_parent(path)?;
        self.fs
            .write_new(path, &serialize_store(defaults))
            .map_err(|e| write_error(path, e))
    }
}
