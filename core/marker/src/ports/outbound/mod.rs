//! Outbound ポート: アプリが外界（ストアファイル・ログインシェル）を使うための trait

pub mod mark_repository;
pub mod shell_probe;

pub use mark_repository::MarkRepository;
pub use shell_probe::ShellProbe;
