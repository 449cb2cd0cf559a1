//! # Playdate ドメイン層
//!
//! プレイデート（子ども同士の遊びの予定）と SMS 通知に関する
//! ドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! sms-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、SMS ゲートウェイ）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`playdate`] - プレイデートと主催者
//! - [`sms`] - SMS メッセージ種別、宛先電話番号、送信結果
//!
//! ## 使用例
//!
//! ```rust
//! use playdate_domain::{DomainError, sms::SmsMessageType};
//!
//! let message_type = SmsMessageType::parse("confirmation").unwrap();
//! assert_eq!(message_type, SmsMessageType::Confirmation);
//!
//! let error = SmsMessageType::parse("birthday").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod playdate;
pub mod sms;

pub use error::DomainError;
