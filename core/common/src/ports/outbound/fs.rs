//! ファイルシステム Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem`。
pub trait FileSystem: Send + Sync {
    /// ファイル全体をバイト列で読む（UTF-8 の検証は呼び出し側で行う）
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// 同じディレクトリの一時ファイルに書いてから rename で置き換える。
    /// 読み手は旧内容か新内容のどちらか完全なものだけを見る。
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// ファイルが存在しない場合だけ作成して書き込む。書いたら true、既存なら false。
    /// 書き終えた内容だけが path に現れ、失敗時に途中までのファイルは残らない。
    fn write_new(&self, path: &Path, contents: &str) -> Result<bool, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
