//! # SMS Service サーバー
//!
//! プレイデートの参加確定・前日リマインダー・変更連絡を SMS で送信する内部サービス。
//!
//! ## 処理の流れ
//!
//! ```text
//! POST /send-sms-notification
//!   → playdates + profiles を取得（PostgreSQL）
//!   → メッセージ種別のテンプレートで本文を生成
//!   → Twilio REST API に送信
//!   → sms_logs に記録
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TWILIO_ACCOUNT_SID` | **Yes** | Twilio アカウント SID |
//! | `TWILIO_AUTH_TOKEN` | **Yes** | Twilio 認証トークン |
//! | `TWILIO_PHONE_NUMBER` | **Yes** | 送信元電話番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_ACCESS_KEY` | **Yes** | データベースの特権アクセスキー |
//! | `SMS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SMS_PORT` | No | ポート番号（デフォルト: `3003`） |
//! | `TWILIO_API_BASE_URL` | No | Twilio API のベース URL（デフォルト: `https://api.twilio.com`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p playdate-sms-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use playdate_infra::{
    db,
    repository::{PostgresPlaydateRepository, PostgresSmsLogRepository},
    sms::TwilioSmsSender,
};
use playdate_shared::observability::{TracingConfig, init_tracing};
use playdate_sms_service::{
    app_builder::build_app,
    config::SmsServiceConfig,
    handler::SmsState,
    usecase::{MessageRenderer, SmsNotificationService},
};
use tokio::net::TcpListener;

/// SMS Service サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み（必須項目が欠けていれば停止）
/// 4. データベース接続・Twilio クライアント・テンプレートの初期化
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("sms-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "sms-service").entered();

    // 設定読み込み
    let config = SmsServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "SMS Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url, &config.database_access_key)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let sender = TwilioSmsSender::new(
        &config.twilio.api_base_url,
        config.twilio.account_sid.clone(),
        config.twilio.auth_token.clone(),
        config.twilio.phone_number.clone(),
    )
    .context("Twilio クライアントの初期化に失敗しました")?;
    let renderer = MessageRenderer::new().context("テンプレートの初期化に失敗しました")?;

    let service = SmsNotificationService::new(
        Arc::new(PostgresPlaydateRepository::new(pool.clone())),
        renderer,
        Arc::new(sender),
        Arc::new(PostgresSmsLogRepository::new(pool)),
    );

    let app = build_app(Arc::new(SmsState { service }));

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("SMS Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
