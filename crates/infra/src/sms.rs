//! # SMS 送信
//!
//! SMS ゲートウェイへの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `SmsSender` trait で SMS 送信を抽象化
//! - **本番実装は Twilio**: REST API（Messages リソース）に同期的に 1 回だけ送信する
//! - **リトライなし**: 一時的な失敗も呼び出し元にそのまま返す

mod twilio;

use async_trait::async_trait;
use playdate_domain::sms::{SmsGatewayError, SmsMessage, SmsReceipt};
pub use twilio::{DEFAULT_TWILIO_API_BASE_URL, TwilioSmsSender};

/// SMS 送信トレイト
///
/// 通知の中核。SMS 送信の具体的な方法を抽象化する。
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// SMS を送信する
    ///
    /// ゲートウェイが受け付けた場合はメッセージ ID とステータスを返す。
    async fn send_sms(&self, message: &SmsMessage) -> Result<SmsReceipt, SmsGatewayError>;
}
