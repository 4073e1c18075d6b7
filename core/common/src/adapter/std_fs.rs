//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error> {
        std::fs::read(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), Error> {
        let tmp = write_temp_beside(path, contents)?;
        // 一時ファイルは 0600 で作られるので、既存ファイルの権限を引き継ぐ
        if let Ok(meta) = std::fs::metadata(path) {
            let _ = tmp.as_file().set_permissions(meta.permissions());
        }
        tmp.persist(path).map_err(|e| {
            Error::io_msg(format!("Failed to replace '{}': {}", path.display(), e.error))
        })?;
        Ok(())
    }

    fn write_new(&self, path: &Path, contents: &str) -> Result<bool, Error> {
        // 書き終えた一時ファイルを、既存が無いときだけ path に置く
        let tmp = write_temp_beside(path, contents)?;
        match tmp.persist_noclobber(path) {
            Ok(_) => Ok(true),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(Error::io_msg(format!(
                "Failed to create '{}': {}",
                path.display(),
                e.error
            ))),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

/// path と同じディレクトリの一時ファイルに contents を書いて同期する。
/// 失敗時や persist されずに drop されたときは一時ファイルごと消える。
fn write_temp_beside(path: &Path, contents: &str) -> Result<NamedTempFile, Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io_msg(format!(
            "Failed to create temporary file in '{}': {}",
            dir.display(),
            e
        ))
    })?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| {
            Error::io_msg(format!(
                "Failed to write temporary file for '{}': {}",
                path.display(),
                e
            ))
        })?;
    Ok(tmp)
}
