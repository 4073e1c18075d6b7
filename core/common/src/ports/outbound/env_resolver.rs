//! 環境変数解決 Outbound ポート
//!
//! データディレクトリ・インストールディレクトリ・ログファイルを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{DirOverrides, Dirs};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver`。
pub trait EnvResolver: Send + Sync {
    /// 実行時ディレクトリを解決する
    ///
    /// data_dir の優先順位:
    /// 1. CLI の -d/--data-dir（overrides）
    /// 2. MARKER_DATA_HOME
    /// 3. $XDG_DATA_HOME/marker
    /// 4. $HOME/.local/share/marker
    ///
    /// install_dir: --install-dir > MARKER_HOME > 実行ファイルの 2 つ上のディレクトリ
    fn resolve_dirs(&self, overrides: &DirOverrides) -> Result<Dirs, Error>;

    /// 構造化ログの出力先
    /// MARKER_LOG_FILE > $XDG_STATE_HOME/marker/logs/marker.jsonl > ~/.local/state/marker/logs/marker.jsonl
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
