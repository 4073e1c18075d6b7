//! 検索のユースケース（search / list）

use common::error::Error;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{search, LoadWarning, Record};
use crate::ports::outbound::MarkRepository;

/// 表示用の 1 件（position は 1 始まり）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub position: usize,
    pub score: u32,
    #[serde(flatten)]
    pub record: Record,
}

/// 検索結果と、読み込み時に読み飛ばした行
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub hits: Vec<Hit>,
    pub warnings: Vec<LoadWarning>,
}

pub struct SearchUseCase {
    repo: Arc<dyn MarkRepository>,
    marks_path: PathBuf,
}

impl SearchUseCase {
    pub fn new(repo: Arc<dyn MarkRepository>, marks_path: PathBuf) -> Self {
        Self { repo, marks_path }
    }

    /// スコア順の検索結果を返す。limit が None なら全件。
    pub fn run(&self, query: &str, limit: Option<usize>) -> Result<SearchReport, Error> {
        let outcome = self.repo.load(&self.marks_path)?;
        let hits = search(&outcome.records, query)
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|m| Hit {
                position: m.index + 1,
                score: m.score,
                record: m.record.clone(),
            })
            .collect();
        Ok(SearchReport {
            hits,
            warnings: outcome.warnings,
        })
    }

    /// 全件をストア順で返す（空クエリの検索と同じ）
    pub fn list(&self) -> Result<SearchReport, Error> {
        self.run("", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FileMarkRepository;
    use crate::domain::default_records;
    use common::adapter::StdFileSystem;

    fn seeded() -> (tempfile::TempDir, SearchUseCase) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("marks.txt");
        let repo = Arc::new(FileMarkRepository::new(Arc::new(StdFileSystem)));
        repo.save(&path, &default_records()).unwrap();
        (tmp, SearchUseCase::new(repo, path))
    }

    #[test]
    fn test_positions_are_one_based() {
        let (_tmp, uc) = seeded();
        let report = uc.run("tar", None).unwrap();
        assert_eq!(report.hits[0].position, 1);
        assert_eq!(report.hits[1].position, 2);
    }

    #[test]
    fn test_limit() {
        let (_tmp, uc) = seeded();
        assert_eq!(uc.run("", Some(2)).unwrap().hits.len(), 2);
        assert_eq!(uc.run("", None).unwrap().hits.len(), 5);
    }

    #[test]
    fn test_list_is_store_order() {
        let (_tmp, uc) = seeded();
        let positions: Vec<usize> = uc.list().unwrap().hits.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_hit_serializes_flat() {
        let hit = Hit {
            position: 3,
            score: 100,
            record: Record::new("ls", "list"),
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"position": 3, "score": 100, "template": "ls", "description": "list"})
        );
    }

    #[test]
    fn test_missing_store_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = Arc::new(FileMarkRepository::new(Arc::new(StdFileSystem)));
        let uc = SearchUseCase::new(repo, tmp.path().join("marks.txt"));
        let err = uc.run("x", None).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
