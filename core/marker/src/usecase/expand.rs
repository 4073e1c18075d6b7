//! 選択したブックマークを展開するユースケース

use common::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{expand, LoadWarning, MarkError};
use crate::ports::outbound::MarkRepository;

pub struct ExpandUseCase {
    repo: Arc<dyn MarkRepository>,
    marks_path: PathBuf,
}

impl ExpandUseCase {
    pub fn new(repo: Arc<dyn MarkRepository>, marks_path: PathBuf) -> Self {
        Self { repo, marks_path }
    }

    /// position（1 始まり）のブックマークを values で展開する。表示は main の責務。
    pub fn run(&self, position: usize, values: &[String]) -> Result<(String, Vec<LoadWarning>), Error> {
        let outcome = self.repo.load(&self.marks_path)?;
        let record = position
            .checked_sub(1)
            .and_then(|i| outcome.records.get(i))
            .ok_or(MarkError::IndexOutOfRange {
                position,
                len: outcome.records.len(),
            })?;
        let command = expand(record, values)?;
        Ok((command, outcome.warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FileMarkRepository;
    use common::adapter::StdFileSystem;

    fn use_case(body: &str) -> (tempfile::TempDir, ExpandUseCase) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("marks.txt");
        std::fs::write(&path, body).unwrap();
        let repo = Arc::new(FileMarkRepository::new(Arc::new(StdFileSystem)));
        (tmp, ExpandUseCase::new(repo, path))
    }

    #[test]
    fn test_expand_grep_from_file() {
        let (_tmp, uc) = use_case("grep -irn \"%%\" *##grep recursive");
        let (cmd, warnings) = uc.run(1, &["foo".to_string()]).unwrap();
        assert_eq!(cmd, "grep -irn \"foo\" *");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_out_of_range_positions() {
        let (_tmp, uc) = use_case("ls");
        for position in [0, 2] {
            let err = uc.run(position, &[]).unwrap_err();
            assert!(err.is_usage(), "{}", err);
        }
    }

    #[test]
    fn test_arity_mismatch_is_usage_error() {
        let (_tmp, uc) = use_case("tar cvzf %%.tar.gz %%##tar");
        let err = uc.run(1, &["a".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(err.to_string().contains("2 placeholder(s)"));
    }
}
