//! # SMS 通知サービス
//!
//! プレイデート取得 → 本文レンダリング → SMS 送信 → ログ記録を統合するサービス。
//!
//! ## 設計方針
//!
//! - **入力検証を先に行う**: 未知のメッセージ種別は I/O の前に拒否する
//! - **ログは送信成功時のみ**: ルックアップ失敗・送信失敗ではログを書かない
//! - **ログ記録はベストエフォート**: 記録に失敗しても送信結果は成功として返す
//! - **依存性注入**: リポジトリと送信は trait で抽象化

use std::sync::Arc;

use playdate_domain::{
    playdate::PlaydateId,
    sms::{PhoneNumber, SmsLogId, SmsMessage, SmsMessageType, SmsReceipt},
};
use playdate_infra::{
    repository::{PlaydateRepository, SmsLog, SmsLogRepository},
    sms::SmsSender,
};
use playdate_shared::{event_log::event, log_business_event};

use super::MessageRenderer;
use crate::error::{LookupError, SmsServiceError};

/// SMS 送信の入力
#[derive(Debug, Clone)]
pub struct SendSmsInput {
    pub playdate_id:  String,
    pub phone_number: String,
    pub message_type: String,
}

/// SMS 通知サービス
pub struct SmsNotificationService {
    playdates: Arc<dyn PlaydateRepository>,
    renderer:  MessageRenderer,
    sender:    Arc<dyn SmsSender>,
    log_repo:  Arc<dyn SmsLogRepository>,
}

impl SmsNotificationService {
    pub fn new(
        playdates: Arc<dyn PlaydateRepository>,
        renderer: MessageRenderer,
        sender: Arc<dyn SmsSender>,
        log_repo: Arc<dyn SmsLogRepository>,
    ) -> Self {
        Self {
            playdates,
            renderer,
            sender,
            log_repo,
        }
    }

    /// SMS 通知を送信する
    ///
    /// ゲートウェイが受け付けた場合はメッセージ ID とステータスを返す。
    #[tracing::instrument(
        skip_all,
        fields(playdate_id = %input.playdate_id, message_type = %input.message_type)
    )]
    pub async fn send(&self, input: SendSmsInput) -> Result<SmsReceipt, SmsServiceError> {
        let message_type = SmsMessageType::parse(&input.message_type)?;
        let to = PhoneNumber::new(input.phone_number)?;
        let playdate_id = PlaydateId::parse(&input.playdate_id)
            .ok_or_else(|| LookupError::NotFound(input.playdate_id.clone()))?;

        let playdate = self
            .playdates
            .find_with_organizer(&playdate_id)
            .await?
            .ok_or_else(|| LookupError::NotFound(input.playdate_id.clone()))?;

        let body = self.renderer.render(&playdate, message_type)?;
        let message_type_str: &str = message_type.into();

        let receipt = match self.sender.send_sms(&SmsMessage { to: to.clone(), body }).await {
            Ok(receipt) => {
                log_business_event!(
                    event.category = event::category::SMS,
                    event.action = event::action::SMS_SENT,
                    event.entity_type = event::entity_type::PLAYDATE,
                    event.entity_id = %playdate_id,
                    event.result = event::result::SUCCESS,
                    sms.message_type = message_type_str,
                    sms.recipient = %to,
                    sms.sid = %receipt.sid,
                    "SMS 送信成功"
                );
                receipt
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::SMS,
                    event.action = event::action::SMS_FAILED,
                    event.entity_type = event::entity_type::PLAYDATE,
                    event.entity_id = %playdate_id,
                    event.result = event::result::FAILURE,
                    sms.message_type = message_type_str,
                    sms.recipient = %to,
                    error = %e,
                    "SMS 送信失敗"
                );
                return Err(e.into());
            }
        };

        let log = SmsLog {
            id:           SmsLogId::new(),
            playdate_id:  playdate_id.clone(),
            phone_number: to.as_str().to_string(),
            message_type: message_type_str.to_string(),
            status:       receipt.status.clone(),
            twilio_sid:   receipt.sid.clone(),
        };

        if let Err(e) = self.log_repo.insert(&log).await {
            log_business_event!(
                event.category = event::category::SMS,
                event.action = event::action::SMS_LOG_FAILED,
                event.entity_type = event::entity_type::SMS_LOG,
                event.entity_id = %log.id,
                event.result = event::result::FAILURE,
                sms.sid = %receipt.sid,
                "SMS 送信ログの記録に失敗"
            );
            tracing::error!(
                error = %e,
                span_trace = %e.span_trace(),
                "SMS 送信ログの記録に失敗"
            );
        }

        Ok(receipt)
    }
}
