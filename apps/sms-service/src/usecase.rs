//! # ユースケース層
//!
//! SMS Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと送信を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod sms_notification;

pub use sms_notification::{MessageRenderer, SendSmsInput, SmsNotificationService};
