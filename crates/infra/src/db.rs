//! # PostgreSQL データベース接続管理
//!
//! プレイデートを保持するレコードストア（PostgreSQL）への接続プールを作成する。
//!
//! ## 接続情報
//!
//! 接続 URL と特権アクセスキーは別々の設定値として受け取り、
//! アクセスキーを接続パスワードとして適用する。URL にパスワードが
//! 含まれていてもアクセスキーが優先される。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use playdate_infra::db;
//!
//! let pool = db::create_pool("postgres://service_role@db.example.com/postgres", "secret").await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// 接続オプションを組み立てる
///
/// `database_url` の形式: `postgres://user@host:port/database`
pub fn connect_options(
    database_url: &str,
    access_key: &str,
) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(database_url)?.password(access_key))
}

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを共有する。
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
///
/// # パニック
///
/// この関数はパニックしない。すべてのエラーは `Result` で返される。
pub async fn create_pool(database_url: &str, access_key: &str) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(database_url, access_key)?;

    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}
