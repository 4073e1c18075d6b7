//! 標準のシェル判定実装（$SHELL と `bash --version`）

use crate::ports::outbound::ShellProbe;
use common::error::Error;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Default)]
pub struct StdShellProbe;

impl ShellProbe for StdShellProbe {
    fn login_shell(&self) -> Option<String> {
        let shell = std::env::var("SHELL").ok().filter(|s| !s.is_empty())?;
        Path::new(&shell)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
    }

    fn bash_version_banner(&self) -> Result<String, Error> {
        let output = Command::new("bash")
            .arg("--version")
            .output()
            .map_err(|e| Error::system(format!("Failed to run 'bash --version': {}", e)))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().to_string())
    }

    fn is_macos(&self) -> bool {
        cfg!(target_os = "macos")
    }
}
