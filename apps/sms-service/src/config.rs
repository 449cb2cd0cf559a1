//! # SMS Service 設定
//!
//! 環境変数から SMS Service サーバーの設定を読み込む。
//!
//! 必須の値にはデフォルトを持たせない。未設定の場合は起動時に
//! 変数名を含むエラーを返し、リクエストを受け付ける前に停止する。

use std::{env, fmt};

use playdate_infra::sms::DEFAULT_TWILIO_API_BASE_URL;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3003;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定（または空）
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// SMS Service サーバーの設定
#[derive(Clone)]
pub struct SmsServiceConfig {
    /// バインドアドレス
    pub host:                String,
    /// ポート番号
    pub port:                u16,
    /// データベース接続 URL
    pub database_url:        String,
    /// データベースの特権アクセスキー（接続パスワードとして使用）
    pub database_access_key: String,
    /// Twilio 設定
    pub twilio:              TwilioConfig,
}

/// Twilio の設定
#[derive(Clone)]
pub struct TwilioConfig {
    /// アカウント SID
    pub account_sid:  String,
    /// 認証トークン
    pub auth_token:   String,
    /// 送信元電話番号
    pub phone_number: String,
    /// API のベース URL
    pub api_base_url: String,
}

impl SmsServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("SMS_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SMS_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("SMS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: require("DATABASE_URL")?,
            database_access_key: require("DATABASE_ACCESS_KEY")?,
            twilio: TwilioConfig {
                account_sid:  require("TWILIO_ACCOUNT_SID")?,
                auth_token:   require("TWILIO_AUTH_TOKEN")?,
                phone_number: require("TWILIO_PHONE_NUMBER")?,
                api_base_url: get("TWILIO_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE_URL.to_string()),
            },
        })
    }
}

// 秘密情報をログに出さないため Debug は手動実装
impl fmt::Debug for SmsServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("database_access_key", &"***")
            .field("twilio", &self.twilio)
            .finish()
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("phone_number", &self.phone_number)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
