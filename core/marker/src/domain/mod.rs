//! ドメイン型とルール（ファイル・環境変数には触れない）

pub mod command;
pub mod defaults;
pub mod error;
pub mod expand;
pub mod record;
pub mod search;
pub mod store;

pub use defaults::default_records;
pub use error::MarkError;
pub use expand::expand;
pub use record::Record;
pub use search::search;
pub use store::{parse_store, serialize_store, LoadOutcome, LoadWarning};
