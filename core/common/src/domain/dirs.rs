//! 実行時ディレクトリ（MARKER_DATA_HOME / XDG 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、marks.txt や shim のパス計算に使う。

use std::path::PathBuf;

/// ブックマークファイル名
pub const MARKS_FILENAME: &str = "marks.txt";
/// シェルから source される shim のファイル名
pub const SHIM_FILENAME: &str = "marker.sh";

/// CLI で明示されたディレクトリ（環境変数より優先）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirOverrides {
    pub data_dir: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
}

/// 解決済みの data / install ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub data_dir: PathBuf,
    /// シェル統合スクリプト（bin/marker.sh）を含むインストール先。解決できないこともある。
    pub install_dir: Option<PathBuf>,
}

impl Dirs {
    /// ブックマークストア（data/marks.txt）
    pub fn marks_file(&self) -> PathBuf {
        self.data_dir.join(MARKS_FILENAME)
    }

    /// shim（data/marker.sh）
    pub fn shim_file(&self) -> PathBuf {
        self.data_dir.join(SHIM_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_data_dir() {
        let dirs = Dirs {
            data_dir: PathBuf::from("/home/u/.local/share/marker"),
            install_dir: None,
        };
        assert_eq!(
            dirs.marks_file(),
            PathBuf::from("/home/u/.local/share/marker/marks.txt")
        );
        assert_eq!(
            dirs.shim_file(),
            PathBuf::from("/home/u/.local/share/marker/marker.sh")
        );
    }
}
