//! ログインシェル判定 Outbound ポート（install の要件チェック用）

use common::error::Error;

pub trait ShellProbe: Send + Sync {
    /// $SHELL のファイル名部分（例: "bash"）。未設定なら None。
    fn login_shell(&self) -> Option<String>;

    /// `bash --version` の 1 行目
    fn bash_version_banner(&self) -> Result<String, Error>;

    /// macOS か（rc ファイルの選択に使う）
    fn is_macos(&self) -> bool;
}
