//! ブックマークストア Outbound ポート
//!
//! パスは呼び出し側が明示的に渡す（ポートは環境変数を見ない）。

use crate::domain::{LoadOutcome, LoadWarning, MarkError, Record};
use std::path::Path;

/// marks.txt の読み書き
///
/// 書き込みは一時ファイル + rename で置き換えるため、並行する読み手は
/// 常に完全なファイルを見る。書き手同士は排他しない（後勝ち）。
pub trait MarkRepository: Send + Sync {
    /// 全件読み込む。壊れた行は warnings に入る。ファイルが読めなければ StoreUnavailable。
    fn load(&self, path: &Path) -> Result<LoadOutcome, MarkError>;

    /// 全件を書き戻す
    fn save(&self, path: &Path, records: &[Record]) -> Result<(), MarkError>;

    /// ファイルが無いときだけ defaults を書く。書いたら true。
    fn ensure_seeded(&self, path: &Path, defaults: &[Record]) -> Result<bool, MarkError>;

    /// 末尾に 1 件追加する（重複は許す）。追加した index（0 始まり）と、
    /// 読み込み時に落とした行を返す。
    fn append(&self, path: &Path, record: Record) -> Result<(usize, Vec<LoadWarning>), MarkError> {
        let mut outcome = self.load(path)?;
        outcome.records.push(record);
        self.save(path, &outcome.records)?;
        Ok((outcome.records.len() - 1, outcome.warnings))
    }

    /// index（0 始まり）の 1 件を削除し、削除したレコードと落とした行を返す
    fn remove(&self, path: &Path, index: usize) -> Result<(Record, Vec<LoadWarning>), MarkError> {
        let mut outcome = self.load(path)?;
        if index >= outcome.records.len() {
            return Err(MarkError::IndexOutOfRange {
                position: index + 1,
                len: outcome.records.len(),
            });
        }
        let removed = outcome.records.remove(index);
        self.save(path, &outcome.records)?;
        Ok((removed, outcome.warnings))
    }
}
