//! marker コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

/// marker のサブコマンド
///
/// position はユーザーに見せる 1 始まりの位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 検索（search [query...]）
    Search {
        query: String,
        json: bool,
        limit: Option<usize>,
    },
    /// 展開して出力（expand <position> [value...]）
    Expand { position: usize, values: Vec<String> },
    /// 追加（add <template> [-D description]）
    Add { template: String, description: String },
    /// 一覧（list）
    List { json: bool },
    /// 削除（remove <position>）
    Remove { position: usize },
    /// 重複チェック（check）
    Check,
    /// shim と marks.txt の準備（install）
    Install { skip_checks: bool },
}

impl Command {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::Expand { .. } => "expand",
            Command::Add { .. } => "add",
            Command::List { .. } => "list",
            Command::Remove { .. } => "remove",
            Command::Check => "check",
            Command::Install { .. } => "install",
        }
    }

    /// ストアを書き換えるコマンドか
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Remove { .. } | Command::Install { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(Command::Check.name(), "check");
        assert_eq!(
            Command::Expand {
                position: 1,
                values: vec![]
            }
            .name(),
            "expand"
        );
    }

    #[test]
    fn test_is_write() {
        assert!(Command::Remove { position: 1 }.is_write());
        assert!(!Command::List { json: false }.is_write());
    }
}
