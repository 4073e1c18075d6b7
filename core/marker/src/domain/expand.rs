//! プレースホルダ展開
//!
//! `%%` を左から順に値で置き換える。実行はシェル側の責務。

use super::error::MarkError;
use super::record::{Record, PLACEHOLDER};

/// template を展開した文字列を返す。値の数は `%%` の数と一致しなければならない。
pub fn expand<S: AsRef<str>>(record: &Record, values: &[S]) -> Result<String, MarkError> {
    let expected = record.placeholder_count();
    if values.len() != expected {
        return Err(MarkError::ArityMismatch {
            expected,
            actual: values.len(),
        });
    }
    if expected == 0 {
        return Ok(record.template.clone());
    }

    let mut pieces = record.template.split(PLACEHOLDER);
    let mut out = String::with_capacity(
        record.template.len() + values.iter().map(|v| v.as_ref().len()).sum::<usize>(),
    );
    if let Some(head) = pieces.next() {
        out.push_str(head);
    }
    for (value, piece) in values.iter().zip(pieces) {
        out.push_str(value.as_ref());
        out.push_str(piece);
    }
    Ok(out)
}
