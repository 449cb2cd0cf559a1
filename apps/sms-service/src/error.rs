//! # SMS Service エラー定義
//!
//! SMS Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 失敗はすべてハンドラの最上位で一度だけ `{ "error": string }` に変換する。
//!
//! | エラー | HTTP ステータス |
//! |-------|----------------|
//! | `Validation` | 400 Bad Request |
//! | `Lookup` / `Gateway` / `Unhandled` | 500 Internal Server Error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use playdate_domain::{DomainError, sms::SmsGatewayError};
use playdate_infra::InfraError;
use playdate_shared::{ErrorResponse, event_log::error};
use thiserror::Error;

/// プレイデートのルックアップ失敗
#[derive(Debug, Error)]
pub enum LookupError {
    /// 該当するプレイデートが存在しない
    #[error("Playdate が見つかりません: {0}")]
    NotFound(String),

    /// レコードストアへの問い合わせに失敗
    #[error("プレイデートの取得に失敗しました: {0}")]
    Store(#[from] InfraError),
}

/// SMS Service で発生するエラー
#[derive(Debug, Error)]
pub enum SmsServiceError {
    /// リクエストの検証失敗
    #[error("{0}")]
    Validation(String),

    /// プレイデートのルックアップ失敗
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// SMS ゲートウェイが送信を拒否した
    #[error("Twilio error: {message}")]
    Gateway { status: u16, message: String },

    /// 上記以外の予期しないエラー
    #[error("{0}")]
    Unhandled(String),
}

impl From<DomainError> for SmsServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound { id, .. } => Self::Lookup(LookupError::NotFound(id)),
        }
    }
}

impl From<InfraError> for SmsServiceError {
    fn from(e: InfraError) -> Self {
        Self::Lookup(LookupError::Store(e))
    }
}

impl From<SmsGatewayError> for SmsServiceError {
    fn from(e: SmsGatewayError) -> Self {
        match e {
            SmsGatewayError::Rejected { status, message } => Self::Gateway { status, message },
            other => Self::Unhandled(other.to_string()),
        }
    }
}

impl SmsServiceError {
    /// HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Lookup(_) | Self::Gateway { .. } | Self::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SmsServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(msg) => {
                tracing::warn!(
                    error.category = error::category::REQUEST,
                    error.kind = error::kind::VALIDATION,
                    "不正なリクエスト: {}",
                    msg
                );
            }
            Self::Lookup(LookupError::NotFound(id)) => {
                tracing::error!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::PLAYDATE_LOOKUP,
                    playdate_id = %id,
                    "プレイデートが見つかりません"
                );
            }
            Self::Lookup(LookupError::Store(e)) => {
                tracing::error!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::PLAYDATE_LOOKUP,
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
            }
            Self::Gateway { status, message } => {
                tracing::error!(
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::SMS_GATEWAY,
                    gateway_status = status,
                    "SMS ゲートウェイエラー: {}",
                    message
                );
            }
            Self::Unhandled(msg) => {
                tracing::error!(
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::INTERNAL,
                    "予期しないエラー: {}",
                    msg
                );
            }
        }

        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn response_body(error: SmsServiceError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validationは400でerrorを返す() {
        let (status, body) =
            response_body(SmsServiceError::Validation("phone_number は必須です".to_string()))
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "phone_number は必須です" }));
    }

    #[tokio::test]
    async fn test_not_foundは500でidを含むerrorを返す() {
        let (status, body) =
            response_body(LookupError::NotFound("p-404".to_string()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "Playdate が見つかりません: p-404" })
        );
    }

    #[tokio::test]
    async fn test_gatewayは500でゲートウェイのメッセージを返す() {
        let error: SmsServiceError = SmsGatewayError::Rejected {
            status:  400,
            message: "Invalid 'To' Phone Number".to_string(),
        }
        .into();

        let (status, body) = response_body(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "Twilio error: Invalid 'To' Phone Number" })
        );
    }

    #[test]
    fn test_通信失敗はunhandledに変換される() {
        let error: SmsServiceError = SmsGatewayError::Network("connection refused".to_string()).into();

        assert!(matches!(error, SmsServiceError::Unhandled(_)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_errorの変換() {
        let validation: SmsServiceError = DomainError::Validation("不正".to_string()).into();
        assert!(matches!(validation, SmsServiceError::Validation(_)));

        let not_found: SmsServiceError = DomainError::NotFound {
            entity_type: "Playdate",
            id:          "abc".to_string(),
        }
        .into();
        assert!(matches!(
            not_found,
            SmsServiceError::Lookup(LookupError::NotFound(ref id)) if id == "abc"
        ));
    }

    #[test]
    fn test_infra_errorはlookupのstoreに変換される() {
        let error: SmsServiceError = InfraError::unexpected("connection reset").into();

        assert!(matches!(error, SmsServiceError::Lookup(LookupError::Store(_))));
        assert_eq!(
            error.to_string(),
            "プレイデートの取得に失敗しました: 予期しないエラー: connection reset"
        );
    }
}
