//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗やエンティティ不在を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | リクエスト値の検証失敗 |
//! | `NotFound` | 500 Internal Server Error | 参照先のプレイデートが存在しない |
//!
//! `NotFound` はルックアップ失敗として扱い、他のサーバー側エラーと
//! 同じレスポンスにまとめる（sms-service の `SmsServiceError` を参照）。
//!
//! ## 使用例
//!
//! ```rust
//! use playdate_domain::DomainError;
//!
//! fn require(value: &str) -> Result<(), DomainError> {
//!     if value.is_empty() {
//!         return Err(DomainError::Validation("値は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require("").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが未入力
    /// - 未知のメッセージ種別
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Playdate" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
