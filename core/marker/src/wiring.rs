//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem};
use common::domain::{DirOverrides, Dirs};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{FileMarkRepository, LoggingMarkRepository, StdShellProbe};
use crate::cli::Config;
use crate::ports::outbound::{MarkRepository, ShellProbe};
use crate::usecase::{CheckUseCase, ExpandUseCase, InstallUseCase, MarksUseCase, SearchUseCase};

/// 配線で組み立てたユースケース群（main の Command ディスパッチで利用）
pub struct App {
    pub dirs: Dirs,
    pub search_use_case: SearchUseCase,
    pub expand_use_case: ExpandUseCase,
    pub marks_use_case: MarksUseCase,
    pub check_use_case: CheckUseCase,
    pub install_use_case: InstallUseCase,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// CLI の指定をディレクトリ解決の入力に変換する
pub fn overrides_from(config: &Config) -> DirOverrides {
    DirOverrides {
        data_dir: config.data_dir.as_ref().map(PathBuf::from),
        install_dir: config.install_dir.as_ref().map(PathBuf::from),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_marker(overrides: &DirOverrides) -> Result<App, Error> {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| {
            Arc::new(FileJsonLog::new(Arc::new(StdFileSystem), path)) as Arc<dyn Log>
        })
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let dirs = env_resolver.resolve_dirs(overrides)?;
    Ok(wire_with(
        dirs,
        Arc::new(StdFileSystem),
        Arc::new(StdShellProbe),
        logger,
    ))
}

/// 依存を外から渡して App を組み立てる（テストではここに一時ディレクトリやスタブを渡す）
pub fn wire_with(
    dirs: Dirs,
    fs: Arc<dyn FileSystem>,
    probe: Arc<dyn ShellProbe>,
    logger: Arc<dyn Log>,
) -> App {
    let repo: Arc<dyn MarkRepository> = Arc::new(LoggingMarkRepository::new(
        Arc::new(FileMarkRepository::new(Arc::clone(&fs))),
        Arc::clone(&logger),
    ));
    let marks_path = dirs.marks_file();
    App {
        search_use_case: SearchUseCase::new(Arc::clone(&repo), marks_path.clone()),
        expand_use_case: ExpandUseCase::new(Arc::clone(&repo), marks_path.clone()),
        marks_use_case: MarksUseCase::new(Arc::clone(&repo), marks_path.clone()),
        check_use_case: CheckUseCase::new(Arc::clone(&repo), marks_path),
        install_use_case: InstallUseCase::new(
            fs,
            Arc::clone(&repo),
            probe,
            Arc::clone(&logger),
            dirs.clone(),
        ),
        dirs,
        logger,
    }
}
