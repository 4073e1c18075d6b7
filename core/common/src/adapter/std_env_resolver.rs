//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{DirOverrides, Dirs};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "marker";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self, overrides: &DirOverrides) -> Result<Dirs, Error> {
        let exe = env::current_exe().ok();
        resolve_dirs_with(std_lookup, exe.as_deref(), overrides)
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        resolve_log_file_path_with(std_lookup)
    }
}

/// 空文字列は未設定とみなす
fn std_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 環境変数の参照を関数で受け取る版（テストでプロセス環境を触らずに済む）
pub fn resolve_dirs_with<F>(lookup: F, exe: Option<&Path>, overrides: &DirOverrides) -> Result<Dirs, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let data_dir = match overrides.data_dir.clone() {
        Some(dir) => dir,
        None => lookup("MARKER_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| lookup("XDG_DATA_HOME").map(|x| PathBuf::from(x).join(APP_DIR)))
            .or_else(|| {
                lookup("HOME").map(|h| PathBuf::from(h).join(".local").join("share").join(APP_DIR))
            })
            .ok_or_else(|| Error::env("HOME is not set; set MARKER_DATA_HOME or use --data-dir"))?,
    };

    // <install>/bin/marker を想定し、実行ファイルの 2 つ上をインストール先とみなす
    let install_dir = overrides
        .install_dir
        .clone()
        .or_else(|| lookup("MARKER_HOME").map(PathBuf::from))
        .or_else(|| exe.and_then(|p| p.parent()).and_then(|p| p.parent()).map(Path::to_path_buf));

    Ok(Dirs {
        data_dir,
        install_dir,
    })
}

pub fn resolve_log_file_path_with<F>(lookup: F) -> Result<PathBuf, Error>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("MARKER_LOG_FILE") {
        return Ok(PathBuf::from(path));
    }
    let state_dir = lookup("XDG_STATE_HOME")
        .map(|x| PathBuf::from(x).join(APP_DIR))
        .or_else(|| lookup("HOME").map(|h| PathBuf::from(h).join(".local").join("state").join(APP_DIR)))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(state_dir.join("logs").join("marker.jsonl"))
}
