//! ドメイン型
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;

pub use dirs::{DirOverrides, Dirs, MARKS_FILENAME, SHIM_FILENAME};
