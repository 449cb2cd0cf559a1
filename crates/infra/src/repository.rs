//! # リポジトリ実装
//!
//! レコードストアへのアクセスをトレイトで抽象化し、PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計（`test-utils` feature の `mock` モジュール）

pub mod playdate_repository;
pub mod sms_log_repository;

pub use playdate_repository::{PlaydateRepository, PostgresPlaydateRepository};
pub use sms_log_repository::{PostgresSmsLogRepository, SmsLog, SmsLogRepository};
