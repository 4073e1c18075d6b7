//! 重複ブックマークのチェック

use common::error::Error;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{LoadWarning, Record};
use crate::ports::outbound::MarkRepository;

/// template と description が完全一致するレコードの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub record: Record,
    /// 1 始まり、昇順
    pub positions: Vec<usize>,
}

pub struct CheckUseCase {
    repo: Arc<dyn MarkRepository>,
    marks_path: PathBuf,
}

impl CheckUseCase {
    pub fn new(repo: Arc<dyn MarkRepository>, marks_path: PathBuf) -> Self {
        Self { repo, marks_path }
    }

    /// 重複の組を最初の出現順に返す
    pub fn duplicates(&self) -> Result<(Vec<DuplicateGroup>, Vec<LoadWarning>), Error> {
        let outcome = self.repo.load(&self.marks_path)?;
        Ok((find_duplicates(&outcome.records), outcome.warnings))
    }
}

fn find_duplicates(records: &[Record]) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut seen: HashMap<&Record, usize> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        match seen.get(record) {
            Some(&g) => groups[g].positions.push(i + 1),
            None => {
                seen.insert(record, groups.len());
                groups.push(DuplicateGroup {
                    record: record.clone(),
                    positions: vec![i + 1],
                });
            }
        }
    }
    groups.retain(|g| g.positions.len() > 1);
    groups
}
