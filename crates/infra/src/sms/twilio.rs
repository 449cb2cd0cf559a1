//! Twilio SMS 送信実装
//!
//! Twilio REST API の Messages リソースに送信する。
//!
//! ```text
//! POST {base_url}/2010-04-01/Accounts/{account_sid}/Messages.json
//! Authorization: Basic base64({account_sid}:{auth_token})
//! Content-Type: application/x-www-form-urlencoded
//!
//! To=...&From=...&Body=...
//! ```
//!
//! 成功時は JSON の `sid` と `status` を、失敗時は JSON の `message` を読み取る。

use std::{fmt, time::Duration};

use async_trait::async_trait;
use playdate_domain::sms::{SmsGatewayError, SmsMessage, SmsReceipt};
use serde::{Deserialize, Serialize};

use super::SmsSender;

/// Twilio API のデフォルトのベース URL
pub const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

/// 1 リクエストあたりのタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Messages リソースへの送信フォーム
#[derive(Debug, Serialize)]
struct SendMessageForm<'a> {
    #[serde(rename = "To")]
    to:   &'a str,
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "Body")]
    body: &'a str,
}

/// Messages リソース（必要なフィールドのみ）
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid:    String,
    status: String,
}

/// Twilio のエラーレスポンス
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: String,
}

/// Twilio SMS 送信
pub struct TwilioSmsSender {
    client:      reqwest::Client,
    base_url:    String,
    account_sid: String,
    auth_token:  String,
    from_number: String,
}

impl TwilioSmsSender {
    /// 新しい Twilio 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（通常は [`DEFAULT_TWILIO_API_BASE_URL`]）
    /// - `account_sid`: アカウント SID（Basic 認証のユーザー名を兼ねる）
    /// - `auth_token`: 認証トークン
    /// - `from_number`: 送信元電話番号（例: `+15551234567`）
    pub fn new(
        base_url: &str,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Result<Self, SmsGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SmsGatewayError::Network(format!("HTTP クライアントの初期化に失敗: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

// 認証トークンをログに出さないため Debug は手動実装
impl fmt::Debug for TwilioSmsSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioSmsSender")
            .field("base_url", &self.base_url)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .finish()
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    #[tracing::instrument(skip_all, fields(to = %message.to))]
    async fn send_sms(&self, message: &SmsMessage) -> Result<SmsReceipt, SmsGatewayError> {
        let form = SendMessageForm {
            to:   message.to.as_str(),
            from: &self.from_number,
            body: &message.body,
        };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| SmsGatewayError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let resource = response
                .json::<MessageResource>()
                .await
                .map_err(|e| SmsGatewayError::InvalidResponse(e.to_string()))?;

            tracing::debug!(sid = %resource.sid, status = %resource.status, "Twilio が送信を受け付けました");

            return Ok(SmsReceipt {
                sid:    resource.sid,
                status: resource.status,
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<TwilioErrorBody>(&body) {
            Ok(error_body) => error_body.message,
            Err(_) => body,
        };

        tracing::warn!(
            status = status.as_u16(),
            gateway_message = %message,
            "Twilio が送信を拒否しました"
        );

        Err(SmsGatewayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use playdate_domain::sms::PhoneNumber;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::{
        Mock,
        MockServer,
        ResponseTemplate,
        matchers::{basic_auth, body_string_contains, header, method, path},
    };

    use super::*;

    const ACCOUNT_SID: &str = "AC0123456789";
    const AUTH_TOKEN: &str = "secret-token";
    const FROM_NUMBER: &str = "+15550009999";
    const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC0123456789/Messages.json";

    fn make_sender(base_url: &str) -> TwilioSmsSender {
        TwilioSmsSender::new(base_url, ACCOUNT_SID, AUTH_TOKEN, FROM_NUMBER).unwrap()
    }

    fn make_message() -> SmsMessage {
        SmsMessage {
            to:   PhoneNumber::new("+15551234567").unwrap(),
            body: "Park Day tomorrow".to_string(),
        }
    }

    #[tokio::test]
    async fn 送信成功時にsidとstatusを返す() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(basic_auth(ACCOUNT_SID, AUTH_TOKEN))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("To=%2B15551234567"))
            .and(body_string_contains("From=%2B15550009999"))
            .and(body_string_contains("Body=Park+Day+tomorrow"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "sid": "SM1234567890",
                "status": "queued",
                "to": "+15551234567"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sender = make_sender(&server.uri());
        let receipt = sender.send_sms(&make_message()).await.unwrap();

        assert_eq!(
            receipt,
            SmsReceipt {
                sid:    "SM1234567890".to_string(),
                status: "queued".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn ベースurlの末尾スラッシュを無視する() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "sid": "SM1", "status": "queued" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let sender = make_sender(&format!("{}/", server.uri()));

        assert!(sender.send_sms(&make_message()).await.is_ok());
    }

    #[tokio::test]
    async fn 非2xxのときjsonのmessageをエラーに含める() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 21211,
                "message": "The 'To' number +1555 is not a valid phone number.",
                "more_info": "https://www.twilio.com/docs/errors/21211",
                "status": 400
            })))
            .mount(&server)
            .await;

        let sender = make_sender(&server.uri());
        let error = sender.send_sms(&make_message()).await.unwrap_err();

        match error {
            SmsGatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "The 'To' number +1555 is not a valid phone number.");
            }
            other => panic!("Rejected であること: {other:?}"),
        }
    }

    #[tokio::test]
    async fn 非2xxでjson以外の本文はそのままエラーに含める() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let sender = make_sender(&server.uri());
        let error = sender.send_sms(&make_message()).await.unwrap_err();

        assert!(matches!(
            error,
            SmsGatewayError::Rejected { status: 503, ref message } if message == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn 成功レスポンスが解釈できない場合はinvalid_responseを返す() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&server)
            .await;

        let sender = make_sender(&server.uri());
        let error = sender.send_sms(&make_message()).await.unwrap_err();

        assert!(matches!(error, SmsGatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn 接続できない場合はnetworkエラー() {
        // ポート 1 は通常どのプロセスも listen していない
        let sender = make_sender("http://127.0.0.1:1");
        let error = sender.send_sms(&make_message()).await.unwrap_err();

        assert!(matches!(error, SmsGatewayError::Network(_)));
    }

    #[test]
    fn debug出力に認証トークンを含めない() {
        let sender = make_sender(DEFAULT_TWILIO_API_BASE_URL);
        let debug = format!("{sender:?}");

        assert!(!debug.contains(AUTH_TOKEN));
        assert!(debug.contains(ACCOUNT_SID));
    }
}
