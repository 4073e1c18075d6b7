//! ストアの読み書きをログに記録する MarkRepository のラッパ

use crate::domain::{LoadOutcome, LoadWarning, MarkError, Record};
use crate::ports::outbound::MarkRepository;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

pub struct LoggingMarkRepository {
    inner: Arc<dyn MarkRepository>,
    log: Arc<dyn Log>,
}

impl LoggingMarkRepository {
    pub fn new(inner: Arc<dyn MarkRepository>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("adapter").kind("store"));
    }

    fn emit_warnings(&self, path: &Path, warnings: &[LoadWarning]) {
        for w in warnings {
            self.emit(
                LogRecord::new(LogLevel::Warn, "skipped malformed line")
                    .field("path", path.display().to_string())
                    .field("line", w.line_no)
                    .field("reason", w.message.as_str()),
            );
        }
    }

    fn emit_failure(&self, operation: &str, path: &Path, e: &MarkError) {
        self.emit(
            LogRecord::new(LogLevel::Error, "store operation failed")
                .field("operation", operation)
                .field("path", path.display().to_string())
                .field("error", e.to_string()),
        );
    }

    fn write(&self, operation: &str, path: &Path, count: usize) {
        self.emit(
            LogRecord::new(LogLevel::Info, "store write")
                .field("operation", operation)
                .field("path", path.display().to_string())
                .field("count", count),
        );
    }
}

impl MarkRepository for LoggingMarkRepository {
    fn load(&self, path: &Path) -> Result<LoadOutcome, MarkError> {
        let out = self
            .inner
            .load(path)
            .inspect_err(|e| self.emit_failure("load", path, e))?;
        self.emit(
            LogRecord::new(LogLevel::Info, "store read")
                .field("path", path.display().to_string())
                .field("count", out.records.len())
                .field("warnings", out.warnings.len()),
        );
        self.emit_warnings(path, &out.warnings);
        Ok(out)
    }

    fn save(&self, path: &Path, records: &[Record]) -> Result<(), MarkError> {
        self.inner
            .save(path, records)
            .inspect_err(|e| self.emit_failure("save", path, e))?;
        self.write("save", path, records.len());
        Ok(())
    }

    fn ensure_seeded(&self, path: &Path, defaults: &[Record]) -> Result<bool, MarkError> {
        let seeded = self
            .inner
            .ensure_seeded(path, defaults)
            .inspect_err(|e| self.emit_failure("seed", path, e))?;
        if seeded {
            self.write("seed", path, defaults.len());
        } else {
            self.emit(
                LogRecord::new(LogLevel::Debug, "store exists; not seeding")
                    .field("path", path.display().to_string()),
            );
        }
        Ok(seeded)
    }

    fn append(&self, path: &Path, record: Record) -> Result<(usize, Vec<LoadWarning>), MarkError> {
        let (index, dropped) = self
            .inner
            .append(path, record)
            .inspect_err(|e| self.emit_failure("append", path, e))?;
        self.write("append", path, 1);
        self.emit_warnings(path, &dropped);
        Ok((index, dropped))
    }

    fn remove(&self, path: &Path, index: usize) -> Result<(Record, Vec<LoadWarning>), MarkError> {
        let (removed, dropped) = self
            .inner
            .remove(path, index)
            .inspect_err(|e| self.emit_failure("remove", path, e))?;
        self.write("remove", path, 1);
        self.emit_warnings(path, &dropped);
        Ok((removed, dropped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FileMarkRepository;
    use common::adapter::StdFileSystem;
    use common::error::Error;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Log for MemoryLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn setup() -> (tempfile::TempDir, Arc<MemoryLog>, LoggingMarkRepository) {
        let tmp = tempfile::tempdir().unwrap();
        let log = Arc::new(MemoryLog::default());
        let inner = Arc::new(FileMarkRepository::new(Arc::new(StdFileSystem)));
        let repo = LoggingMarkRepository::new(inner, Arc::clone(&log) as Arc<dyn Log>);
        (tmp, log, repo)
    }

    #[test]
    fn test_load_logs_read_and_warnings() {
        let (tmp, log, repo) = setup();
        let path = tmp.path().join("marks.txt");
        std::fs::write(&path, b"ls\n\xff").unwrap();
        let out = repo.load(&path).unwrap();
        assert_eq!(out.records.len(), 1);

        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "store read");
        assert_eq!(records[1].level, LogLevel::Warn);
        assert_eq!(records[1].fields.as_ref().unwrap()["line"], serde_json::json!(2));
    }

    #[test]
    fn test_failure_is_logged_and_returned() {
        let (tmp, log, repo) = setup();
        let err = repo.load(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, MarkError::StoreUnavailable { .. }));
        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Error);
    }

    #[test]
    fn test_append_logs_single_write() {
        let (tmp, log, repo) = setup();
        let path = tmp.path().join("marks.txt");
        std::fs::write(&path, "ls").unwrap();
        repo.append(&path, Record::new("pwd", "")).unwrap();
        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].fields.as_ref().unwrap()["operation"],
            serde_json::json!("append")
        );
    }
}
