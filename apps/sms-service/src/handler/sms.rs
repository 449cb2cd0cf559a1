//! # SMS 通知ハンドラ
//!
//! プレイデートの SMS 通知を送信するエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /send-sms-notification
//! ```
//!
//! ## リクエスト例
//!
//! ```json
//! {
//!   "playdate_id": "0190a1b2-...",
//!   "phone_number": "+15551234567",
//!   "message_type": "confirmation"
//! }
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! { "success": true, "message": "SMS sent successfully", "sid": "SM..." }
//! ```
//!
//! 失敗時は `{ "error": "..." }`（[`SmsServiceError`] を参照）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::SmsServiceError,
    usecase::{SendSmsInput, SmsNotificationService},
};

/// 成功時の固定メッセージ
pub const SMS_SENT_MESSAGE: &str = "SMS sent successfully";

/// SMS 通知ハンドラーの State
pub struct SmsState {
    pub service: SmsNotificationService,
}

/// SMS 送信リクエスト
///
/// 未指定のフィールドも受け取り、ハンドラで必須チェックを行う。
#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    pub playdate_id:  Option<String>,
    pub phone_number: Option<String>,
    pub message_type: Option<String>,
}

/// SMS 送信レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct SendSmsResponse {
    pub success: bool,
    pub message: String,
    /// ゲートウェイが払い出したメッセージ ID
    pub sid:     String,
}

impl SendSmsRequest {
    fn into_input(self) -> Result<SendSmsInput, SmsServiceError> {
        Ok(SendSmsInput {
            playdate_id:  require("playdate_id", self.playdate_id)?,
            phone_number: require("phone_number", self.phone_number)?,
            message_type: require("message_type", self.message_type)?,
        })
    }
}

fn require(name: &str, value: Option<String>) -> Result<String, SmsServiceError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| SmsServiceError::Validation(format!("{name} は必須です")))
}

/// SMS 通知を送信する
///
/// ## エンドポイント
/// POST /send-sms-notification
#[tracing::instrument(skip_all)]
pub async fn send_sms_notification(
    State(state): State<Arc<SmsState>>,
    payload: Result<Json<SendSmsRequest>, JsonRejection>,
) -> Result<Json<SendSmsResponse>, SmsServiceError> {
    let Json(request) = payload.map_err(|rejection| {
        SmsServiceError::Validation(format!(
            "リクエストボディが不正です: {}",
            rejection.body_text()
        ))
    })?;

    let receipt = state.service.send(request.into_input()?).await?;

    Ok(Json(SendSmsResponse {
        success: true,
        message: SMS_SENT_MESSAGE.to_string(),
        sid:     receipt.sid,
    }))
}
