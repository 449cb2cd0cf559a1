//! # ヘルスチェックハンドラ
//!
//! SMS Service の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use playdate_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 依存先（DB・ゲートウェイ）には問い合わせず、プロセスの稼働のみを返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthyとバージョンを返す() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
