//! # SMS 通知ユースケース
//!
//! プレイデートの SMS 通知の生成・送信・ログ記録を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによる本文生成
//! - [`service`] - ルックアップ + レンダリング + 送信 + ログ記録の統合サービス

pub mod service;
pub mod template_renderer;

pub use service::{SendSmsInput, SmsNotificationService};
pub use template_renderer::MessageRenderer;
