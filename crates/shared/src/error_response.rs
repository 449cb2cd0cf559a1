//! # エラーレスポンス
//!
//! 失敗時の共通レスポンス形式 `{ "error": string }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - 失敗の種類によらず同じ形状で返す。呼び出し元は成功レスポンス以外を
//!   「送信未確認」として扱う

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// エラーメッセージ（失敗したステップの生のメッセージ）
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
