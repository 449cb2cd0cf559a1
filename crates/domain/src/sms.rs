//! # SMS 通知
//!
//! SMS 通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`SmsMessageType`] | メッセージ種別 | 3 種類: 参加確定、前日リマインダー、変更連絡 |
//! | [`PhoneNumber`] | 宛先電話番号 | E.164 形式を想定（存在のみ検証） |
//! | [`SmsMessage`] | SMS メッセージ | 宛先と本文。SmsSender に渡される |
//! | [`SmsReceipt`] | 送信受付結果 | ゲートウェイが払い出したメッセージ ID とステータス |
//!
//! ## 設計方針
//!
//! - **未知の種別は拒否**: 空の本文を送信せず、バリデーションエラーにする
//! - **テンプレート分離**: 種別の判定と本文生成は分離（MessageRenderer は sms-service）

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::DomainError;

define_uuid_id! {
    /// SMS 送信ログ ID
    ///
    /// sms_logs テーブルの主キー。UUID v7 を使用。
    pub struct SmsLogId;
}

/// 配信停止の案内文
///
/// 参加確定メッセージにのみ付与する。
pub const OPT_OUT_NOTICE: &str = "Reply STOP to unsubscribe";

/// SMS メッセージ種別
///
/// リクエストの `message_type` と sms_logs テーブルの `message_type` カラムに
/// 格納される値。snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SmsMessageType {
    /// 参加確定: 主催者名と配信停止の案内を含む
    Confirmation,
    /// 前日リマインダー
    Reminder,
    /// 変更連絡: メモと主催者の連絡先を含む
    Update,
}

impl SmsMessageType {
    /// リクエスト値からメッセージ種別を判定する
    ///
    /// # エラー
    ///
    /// 3 種類のいずれにも該当しない場合は `DomainError::Validation` を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        use strum::VariantNames as _;

        value.trim().parse().map_err(|_| {
            DomainError::Validation(format!(
                "message_type が不正です: {value:?}（{} のいずれかを指定してください）",
                Self::VARIANTS.join(" | ")
            ))
        })
    }

    /// 配信停止の案内を本文に含める種別か
    pub fn includes_opt_out_notice(self) -> bool {
        matches!(self, Self::Confirmation)
    }
}

/// 宛先電話番号（値オブジェクト）
///
/// E.164 形式（例: `+15551234567`）を想定するが、形式の検証はゲートウェイに任せ、
/// ここでは前後の空白を除いたうえで空でないことのみ検証する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// 電話番号を作成する
    ///
    /// # エラー
    ///
    /// 空文字列（空白のみを含む）の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "phone_number は必須です".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SMS メッセージ
///
/// テンプレートレンダリングの出力。SmsSender に渡される。
/// 送信元番号は送信実装側の設定で決まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    /// 宛先電話番号
    pub to:   PhoneNumber,
    /// 本文
    pub body: String,
}

/// 送信受付結果
///
/// ゲートウェイが受け付けたメッセージの ID とステータス（例: `queued`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsReceipt {
    /// ゲートウェイが払い出したメッセージ ID
    pub sid:    String,
    /// ゲートウェイが報告した配信ステータス
    pub status: String,
}

/// SMS 送信エラー
#[derive(Debug, Error)]
pub enum SmsGatewayError {
    /// ゲートウェイが非 2xx を返した
    ///
    /// `message` はゲートウェイのエラーレスポンスに含まれる説明文。
    #[error("SMS ゲートウェイがリクエストを拒否しました（HTTP {status}）: {message}")]
    Rejected { status: u16, message: String },

    /// ゲートウェイに到達できなかった（接続失敗、タイムアウトなど）
    #[error("SMS ゲートウェイとの通信に失敗: {0}")]
    Network(String),

    /// 2xx だがレスポンスを解釈できなかった
    #[error("SMS ゲートウェイのレスポンスが不正です: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn sms_message_typeの文字列変換が正しい() {
        // Display (snake_case)
        assert_eq!(SmsMessageType::Confirmation.to_string(), "confirmation");
        assert_eq!(SmsMessageType::Reminder.to_string(), "reminder");
        assert_eq!(SmsMessageType::Update.to_string(), "update");

        // FromStr (snake_case)
        assert_eq!(
            SmsMessageType::from_str("confirmation").unwrap(),
            SmsMessageType::Confirmation
        );
        assert_eq!(
            SmsMessageType::from_str("reminder").unwrap(),
            SmsMessageType::Reminder
        );
        assert_eq!(
            SmsMessageType::from_str("update").unwrap(),
            SmsMessageType::Update
        );

        // IntoStaticStr
        let as_str: &str = SmsMessageType::Reminder.into();
        assert_eq!(as_str, "reminder");
    }

    #[test]
    fn sms_message_typeはsnake_caseでシリアライズされる() {
        let json = serde_json::to_value(SmsMessageType::Confirmation).unwrap();
        assert_eq!(json, serde_json::json!("confirmation"));
    }

    #[rstest]
    #[case("birthday")]
    #[case("")]
    #[case("Confirmation")]
    #[case("CONFIRMATION")]
    fn 未知のメッセージ種別はバリデーションエラーになる(#[case] value: &str) {
        let result = SmsMessageType::parse(value);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn バリデーションエラーに受け付け可能な種別が列挙される() {
        let Err(DomainError::Validation(message)) = SmsMessageType::parse("birthday") else {
            panic!("バリデーションエラーになること");
        };
        assert!(message.contains("birthday"));
        assert!(message.contains("confirmation | reminder | update"));
    }

    #[test]
    fn 前後の空白は無視して判定する() {
        assert_eq!(
            SmsMessageType::parse(" update ").unwrap(),
            SmsMessageType::Update
        );
    }

    #[test]
    fn 配信停止の案内は参加確定のみに含める() {
        assert!(SmsMessageType::Confirmation.includes_opt_out_notice());
        assert!(!SmsMessageType::Reminder.includes_opt_out_notice());
        assert!(!SmsMessageType::Update.includes_opt_out_notice());
    }

    #[test]
    fn 電話番号は前後の空白を除いて保持する() {
        let phone = PhoneNumber::new("  +15551234567 ").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");
        assert_eq!(phone.to_string(), "+15551234567");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn 空の電話番号はバリデーションエラーになる(#[case] value: &str) {
        assert!(matches!(
            PhoneNumber::new(value),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejectedのメッセージにゲートウェイの説明文が含まれる() {
        let error = SmsGatewayError::Rejected {
            status:  400,
            message: "The 'To' number is not a valid phone number.".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("HTTP 400"));
        assert!(message.contains("The 'To' number is not a valid phone number."));
    }
}
