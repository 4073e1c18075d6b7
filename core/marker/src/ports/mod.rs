//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: ブックマークストア・シェル判定の trait（common の FileSystem / Log も利用）

pub mod inbound;
pub mod outbound;
