//! # SmsLogRepository
//!
//! SMS 送信ログの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **追記のみ**: ゲートウェイが送信を受け付けた場合にのみ 1 行追加する
//! - **記録日時は DB 側**: `created_at` はテーブルのデフォルト値（`now()`）に任せる

use async_trait::async_trait;
use playdate_domain::{playdate::PlaydateId, sms::SmsLogId};
use sqlx::PgPool;

use crate::error::InfraError;

/// SMS 送信ログ（リポジトリ INSERT 用データ型）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsLog {
    pub id:           SmsLogId,
    pub playdate_id:  PlaydateId,
    pub phone_number: String,
    pub message_type: String,
    /// ゲートウェイが報告した配信ステータス
    pub status:       String,
    /// ゲートウェイが払い出したメッセージ ID
    pub twilio_sid:   String,
}

/// SMS 送信ログリポジトリトレイト
#[async_trait]
pub trait SmsLogRepository: Send + Sync {
    /// 送信ログを挿入する
    async fn insert(&self, log: &SmsLog) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の SmsLogRepository
#[derive(Debug, Clone)]
pub struct PostgresSmsLogRepository {
    pool: PgPool,
}

impl PostgresSmsLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SmsLogRepository for PostgresSmsLogRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(sms_log_id = %log.id))]
    async fn insert(&self, log: &SmsLog) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sms_logs (
                id, playdate_id, phone_number, message_type, status, twilio_sid
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(log.id.as_uuid())
        .bind(log.playdate_id.as_uuid())
        .bind(&log.phone_number)
        .bind(&log.message_type)
        .bind(&log.status)
        .bind(&log.twilio_sid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() != 1 {
            return Err(InfraError::unexpected(format!(
                "sms_logs への挿入件数が不正です: {}",
                result.rows_affected()
            )));
        }

        Ok(())
    }
}
