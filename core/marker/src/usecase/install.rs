//! インストール（marker install）
//!
//! シェルの要件を確認し、データディレクトリに shim（marker.sh）を書き、
//! marks.txt が無ければサンプルで作る。既存の marks.txt は更新時も触らない。

use common::domain::Dirs;
use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{default_records, MarkError};
use crate::ports::outbound::{MarkRepository, ShellProbe};

const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh"];
const MIN_BASH_MAJOR: u32 = 4;

/// インストールの入力
#[derive(Debug, Clone, Default)]
pub struct InstallInput {
    /// シェル・バージョンの確認を省く
    pub skip_checks: bool,
}

/// インストールの結果（main で案内を表示する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub data_dir: PathBuf,
    pub shim_path: PathBuf,
    pub marks_path: PathBuf,
    /// marks.txt をサンプルで作ったか
    pub seeded: bool,
    /// source 行を追記すべき rc ファイル（ホームからの相対）
    pub rc_file: String,
    pub source_line: String,
}

pub struct InstallUseCase {
    fs: Arc<dyn FileSystem>,
    repo: Arc<dyn MarkRepository>,
    probe: Arc<dyn ShellProbe>,
    log: Arc<dyn Log>,
    dirs: Dirs,
}

impl InstallUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        repo: Arc<dyn MarkRepository>,
        probe: Arc<dyn ShellProbe>,
        log: Arc<dyn Log>,
        dirs: Dirs,
    ) -> Self {
        Self {
            fs,
            repo,
            probe,
            log,
            dirs,
        }
    }

    pub fn run(&self, input: &InstallInput) -> Result<InstallReport, Error> {
        let shell = if input.skip_checks {
            self.probe.login_shell()
        } else {
            Some(self.verify_requirements()?)
        };
        let install_dir = self.dirs.install_dir.clone().ok_or_else(|| {
            Error::env("install directory is unknown: set MARKER_HOME or use --install-dir")
        })?;

        let data_dir = self.dirs.data_dir.clone();
        self.fs.create_dir_all(&data_dir)?;

        let shim_path = self.dirs.shim_file();
        self.fs
            .write(&shim_path, &shim_script(&data_dir, &install_dir))?;
        self.emit(
            LogRecord::new(LogLevel::Info, "shim written")
                .field("path", shim_path.display().to_string()),
        );

        let marks_path = self.dirs.marks_file();
        let seeded = self.repo.ensure_seeded(&marks_path, &default_records())?;

        Ok(InstallReport {
            rc_file: rc_file(shell.as_deref(), self.probe.is_macos()),
            source_line: source_line(&shim_path),
            data_dir,
            shim_path,
            marks_path,
            seeded,
        })
    }

    /// 対応シェルか、bash なら 4 以上かを確認し、シェル名を返す
    fn verify_requirements(&self) -> Result<String, Error> {
        let shell = self.probe.login_shell().unwrap_or_default();
        if !SUPPORTED_SHELLS.contains(&shell.as_str()) {
            return Err(MarkError::UnsupportedShell(shell).into());
        }
        if shell == "bash" {
            let banner = self.probe.bash_version_banner()?;
            let major = parse_bash_major(&banner)
                .ok_or_else(|| MarkError::ShellVersionUnknown(banner.clone()))?;
            self.emit(
                LogRecord::new(LogLevel::Debug, "bash version detected")
                    .field("major", major)
                    .field("banner", banner.as_str()),
            );
            if major < MIN_BASH_MAJOR {
                return Err(MarkError::ShellTooOld { major, banner }.into());
            }
        }
        Ok(shell)
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase").kind("install"));
    }
}

/// `GNU bash, version 5.2.15(1)-release ...` から 5 を取り出す
fn parse_bash_major(banner: &str) -> Option<u32> {
    let re = Regex::new(r"version (\d+)").ok()?;
    re.captures(banner)?.get(1)?.as_str().parse().ok()
}

/// シェルから source される shim。環境変数を設定してシェル統合スクリプトを読み込む。
fn shim_script(data_dir: &Path, install_dir: &Path) -> String {
    format!(
        "export MARKER_DATA_HOME=\"{}\"\nexport MARKER_HOME=\"{}\"\nsource ${{MARKER_HOME}}/bin/marker.sh\n",
        data_dir.display(),
        install_dir.display()
    )
}

/// macOS の bash はログインシェルとして .bash_profile を読む
fn rc_file(shell: Option<&str>, is_macos: bool) -> String {
    match shell {
        Some("bash") if is_macos => ".bash_profile".to_string(),
        Some(shell) => format!(".{}rc", shell),
        None => ".profile".to_string(),
    }
}

fn source_line(shim_path: &Path) -> String {
    let shim = shim_path.display();
    format!("[[ -s \"{}\" ]] && source \"{}\"", shim, shim)
}
