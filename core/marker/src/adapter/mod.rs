//! Outbound ポートの標準実装

mod file_mark_repository;
mod logging_mark_repository;
mod shell_probe;

pub use file_mark_repository::FileMarkRepository;
pub use logging_mark_repository::LoggingMarkRepository;
pub use shell_probe::StdShellProbe;
