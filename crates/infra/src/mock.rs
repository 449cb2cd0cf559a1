//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! playdate-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use playdate_domain::{
    playdate::{Playdate, PlaydateId},
    sms::{SmsGatewayError, SmsMessage, SmsReceipt},
};

use crate::{
    error::InfraError,
    repository::{PlaydateRepository, SmsLog, SmsLogRepository},
    sms::SmsSender,
};

// ===== MockPlaydateRepository =====

#[derive(Clone, Default)]
pub struct MockPlaydateRepository {
    playdates: Arc<Mutex<Vec<Playdate>>>,
    lookups:   Arc<Mutex<Vec<PlaydateId>>>,
    fail_with: Option<String>,
}

impl MockPlaydateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常にストアエラーを返すリポジトリ
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn add_playdate(&self, playdate: Playdate) {
        self.playdates.lock().unwrap().push(playdate);
    }

    /// 検索された ID の履歴
    pub fn lookups(&self) -> Vec<PlaydateId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaydateRepository for MockPlaydateRepository {
    async fn find_with_organizer(&self, id: &PlaydateId) -> Result<Option<Playdate>, InfraError> {
        self.lookups.lock().unwrap().push(id.clone());

        if let Some(message) = &self.fail_with {
            return Err(InfraError::unexpected(message.clone()));
        }

        Ok(self
            .playdates
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }
}

// ===== MockSmsLogRepository =====

#[derive(Clone, Default)]
pub struct MockSmsLogRepository {
    logs:      Arc<Mutex<Vec<SmsLog>>>,
    fail_with: Option<String>,
}

impl MockSmsLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に挿入に失敗するリポジトリ
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// 記録されたログ
    pub fn logs(&self) -> Vec<SmsLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsLogRepository for MockSmsLogRepository {
    async fn insert(&self, log: &SmsLog) -> Result<(), InfraError> {
        if let Some(message) = &self.fail_with {
            return Err(InfraError::unexpected(message.clone()));
        }

        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }
}

// ===== MockSmsSender =====

#[derive(Clone)]
enum MockSmsOutcome {
    Accepted(SmsReceipt),
    Rejected { status: u16, message: String },
}

/// 送信メッセージを記録するモック送信
///
/// デフォルトでは `sid = "SM-mock-{連番}"`、`status = "queued"` で受け付ける。
#[derive(Clone)]
pub struct MockSmsSender {
    sent:    Arc<Mutex<Vec<SmsMessage>>>,
    outcome: Option<MockSmsOutcome>,
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            outcome: None,
        }
    }

    /// 指定した受付結果を常に返すモック
    pub fn accepting(receipt: SmsReceipt) -> Self {
        Self {
            outcome: Some(MockSmsOutcome::Accepted(receipt)),
            ..Self::new()
        }
    }

    /// 常に拒否（非 2xx）を返すモック
    pub fn rejecting(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Some(MockSmsOutcome::Rejected {
                status,
                message: message.into(),
            }),
            ..Self::new()
        }
    }

    /// 送信されたメッセージ
    pub fn sent_messages(&self) -> Vec<SmsMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_sms(&self, message: &SmsMessage) -> Result<SmsReceipt, SmsGatewayError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());

        match &self.outcome {
            None => Ok(SmsReceipt {
                sid:    format!("SM-mock-{}", sent.len()),
                status: "queued".to_string(),
            }),
            Some(MockSmsOutcome::Accepted(receipt)) => Ok(receipt.clone()),
            Some(MockSmsOutcome::Rejected { status, message }) => Err(SmsGatewayError::Rejected {
                status:  *status,
                message: message.clone(),
            }),
        }
    }
}
