//! ブックマーク操作のエラー
//!
//! ポートはこの型で失敗を返し、usecase 境界で common::error::Error に変換する。

use common::error::Error;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum MarkError {
    /// ストアを読めない（未作成・権限なし）。install で作られている前提。
    #[error("bookmark store unavailable: '{}': {reason} (run `marker install` first)", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    /// ストアへの書き込み失敗
    #[error("failed to write bookmark store '{}': {reason}", .path.display())]
    StoreWrite { path: PathBuf, reason: String },

    /// 解釈できない行
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// プレースホルダ数と値の数が一致しない
    #[error("template has {expected} placeholder(s) but {actual} value(s) were given")]
    ArityMismatch { expected: usize, actual: usize },

    /// position は 1 始まり
    #[error("no bookmark at position {position} (store has {len})")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("your SHELL '{0}' is not supported (bash or zsh required)")]
    UnsupportedShell(String),

    #[error("your bash version is too old: {banner} (bash 4.0+ required)")]
    ShellTooOld { major: u32, banner: String },

    #[error("couldn't extract bash version from: {0}")]
    ShellVersionUnknown(String),
}

impl From<MarkError> for Error {
    fn from(e: MarkError) -> Self {
        let msg = e.to_string();
        match e {
            MarkError::StoreUnavailable { .. } | MarkError::StoreWrite { .. } => Error::io_msg(msg),
            MarkError::MalformedRecord(_) => Error::data(msg),
            MarkError::ArityMismatch { .. } | MarkError::IndexOutOfRange { .. } => {
                Error::invalid_argument(msg)
            }
            MarkError::UnsupportedShell(_)
            | MarkError::ShellTooOld { .. }
            | MarkError::ShellVersionUnknown(_) => Error::env(msg),
        }
    }
}
