//! CLI 境界（引数解析のみ。実行は main の Runner）

pub mod args;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
