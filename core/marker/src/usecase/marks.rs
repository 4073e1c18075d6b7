//! ブックマークの追加・削除のユースケース

use common::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{parse_store, LoadWarning, Record};
use crate::ports::outbound::MarkRepository;

/// add / remove（一覧は SearchUseCase::list）
pub struct MarksUseCase {
    repo: Arc<dyn MarkRepository>,
    marks_path: PathBuf,
}

impl MarksUseCase {
    pub fn new(repo: Arc<dyn MarkRepository>, marks_path: PathBuf) -> Self {
        Self { repo, marks_path }
    }

    /// 末尾に追加し、追加した position（1 始まり）を返す
    ///
    /// 保存後に読み戻して同じレコードにならないもの（改行・末尾の `\r` を含む、
    /// `##` の位置が区切りと衝突する等）は書き込まずにエラーにする。
    pub fn add(&self, template: &str, description: &str) -> Result<(usize, Vec<LoadWarning>), Error> {
        let record = Record::new(template, description);
        if template.trim().is_empty() {
            return Err(Error::invalid_argument("template must not be empty"));
        }
        check_round_trip(&record)?;
        let (index, dropped) = self.repo.append(&self.marks_path, record)?;
        Ok((index + 1, dropped))
    }

    /// position（1 始まり）のブックマークを削除し、削除したものを返す
    pub fn remove(&self, position: usize) -> Result<(Record, Vec<LoadWarning>), Error> {
        if position == 0 {
            return Err(Error::invalid_argument("positions start at 1"));
        }
        Ok(self.repo.remove(&self.marks_path, position - 1)?)
    }
}

/// ストアの読み込みと同じ経路（parse_store）で読み戻して一致するか確かめる
fn check_round_trip(record: &Record) -> Result<(), Error> {
    let line = record.to_line();
    let reread = parse_store(line.as_bytes());
    match reread.records.as_slice() {
        [r] if r == record && reread.warnings.is_empty() => Ok(()),
        [r] => Err(Error::invalid_argument(format!(
            "'{}' cannot be stored: it would read back as template '{}' and description '{}'",
            line.escape_debug(),
            r.template.escape_debug(),
            r.description.escape_debug()
        ))),
        _ => Err(Error::invalid_argument(format!(
            "'{}' cannot be stored: a bookmark must fit on a single line",
            line.escape_debug()
        ))),
    }
}
