//! 配線済みの App を一時ディレクトリで動かすテスト

mod run_app_tests;

use std::path::Path;
use std::sync::Arc;

use common::adapter::{NoopLog, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;

use crate::ports::outbound::ShellProbe;
use crate::wiring::{wire_with, App};

/// ログインシェルと bash のバージョンを固定で返す
pub(crate) struct StubShellProbe {
    pub shell: Option<&'static str>,
    pub banner: &'static str,
    pub macos: bool,
}

impl StubShellProbe {
    pub fn bash(banner: &'static str) -> Self {
        Self {
            shell: Some("bash"),
            banner,
            macos: false,
        }
    }

    pub fn shell(shell: Option<&'static str>) -> Self {
        Self {
            shell,
            banner: "",
            macos: false,
        }
    }
}

impl ShellProbe for StubShellProbe {
    fn login_shell(&self) -> Option<String> {
        self.shell.map(str::to_string)
    }

    fn bash_version_banner(&self) -> Result<String, Error> {
        Ok(self.banner.to_string())
    }

    fn is_macos(&self) -> bool {
        self.macos
    }
}

pub(crate) fn dirs_in(root: &Path) -> Dirs {
    Dirs {
        data_dir: root.join("data"),
        install_dir: Some(root.join("opt/marker")),
    }
}

pub(crate) fn app_with(dirs: Dirs, probe: StubShellProbe) -> App {
    wire_with(
        dirs,
        Arc::new(StdFileSystem),
        Arc::new(probe),
        Arc::new(NoopLog),
    )
}

pub(crate) fn bash5() -> StubShellProbe {
    StubShellProbe::bash("GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)")
}
