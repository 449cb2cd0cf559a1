//! # SMS Service アプリケーション構築
//!
//! ルーター定義を担当する。依存の初期化は `main.rs`、
//! テストではモックを注入した State を渡す。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handler::{SmsState, health_check, send_sms_notification};

/// SMS 送信エンドポイントのパス
pub const SEND_SMS_PATH: &str = "/send-sms-notification";

/// ルーターを構築する
pub fn build_app(sms_state: Arc<SmsState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(SEND_SMS_PATH, post(send_sms_notification))
        .with_state(sms_state)
        .layer(TraceLayer::new_for_http())
}
