//! marks.txt 全体の読み書き（純粋関数）
//!
//! 壊れた行は読み飛ばして警告に集め、残りのレコードで読み込みを続ける。

use super::record::{parse_line, Record};

/// 読み飛ばした行（line_no は 1 始まり）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub line_no: usize,
    pub message: String,
}

/// 読み込み結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub warnings: Vec<LoadWarning>,
}

/// ファイル内容を解釈する。空白だけの行はスキップ、末尾の `\r` は落とす。
///
/// 落とした空行・`\r`・末尾の改行は LoadOutcome に残らないので、手で編集した
/// ファイルは最初の保存（add / remove）で serialize_store の形に揃えられる。
pub fn parse_store(bytes: &[u8]) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();
    for (i, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let line_no = i + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                outcome.warnings.push(LoadWarning {
                    line_no,
                    message: format!("invalid UTF-8: {}", e),
                });
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => outcome.records.push(record),
            Err(e) => outcome.warnings.push(LoadWarning {
                line_no,
                message: e.to_string(),
            }),
        }
    }
    outcome
}

/// レコード列を直列化する（改行区切り、末尾改行なし）
///
/// parse_store と組み合わせてバイト単位で元に戻るのは、この関数が書いたファイル
/// （空行・CRLF・末尾改行を含まない）に限る。
pub fn serialize_store(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}
