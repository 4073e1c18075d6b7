//! ブックマーク 1 件（marks.txt の 1 行）
//!
//! 形式: `template##description`。区切りは最後の `##`。`##` のエスケープは無い。

use serde::Serialize;

use super::error::MarkError;

/// フィールド区切り
pub const FIELD_SEPARATOR: &str = "##";
/// 位置指定のプレースホルダ
pub const PLACEHOLDER: &str = "%%";

/// ブックマーク 1 件
///
/// 識別子は持たず、ストア内の位置で識別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub template: String,
    pub description: String,
}

impl Record {
    pub fn new(template: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            description: description.into(),
        }
    }

    /// template 中の `%%` の数（左から重ならずに数える）
    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }

    /// 1 行に直列化する。description が空なら区切りごと省く。
    pub fn to_line(&self) -> String {
        if self.description.is_empty() {
            self.template.clone()
        } else {
            format!("{}{}{}", self.template, FIELD_SEPARATOR, self.description)
        }
    }
}

/// 1 行を Record に解釈する
///
/// フィールドは trim しない（保存時にそのまま書き戻すため）。
pub fn parse_line(line: &str) -> Result<Record, MarkError> {
    if line.contains('\n') {
        return Err(MarkError::MalformedRecord(
            "record must fit on a single line".to_string(),
        ));
    }
    if line.trim_end().is_empty() {
        return Err(MarkError::MalformedRecord("empty line".to_string()));
    }
    match line.rfind(FIELD_SEPARATOR) {
        Some(pos) => Ok(Record::new(
            &line[..pos],
            &line[pos + FIELD_SEPARATOR.len()..],
        )),
        None => Ok(Record::new(line, "")),
    }
}
