//! # Playdate インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理
//! - **リポジトリ実装**: プレイデートの読み取り、SMS 送信ログの追記
//! - **SMS ゲートウェイ**: Twilio REST API への送信
//!
//! ## 依存関係
//!
//! ```text
//! sms-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - [`sms`] - SMS 送信
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use playdate_infra::{db, repository::PostgresPlaydateRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://service_role@localhost/postgres", "key").await?;
//!     let playdates = PostgresPlaydateRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod sms;

pub use error::InfraError;
