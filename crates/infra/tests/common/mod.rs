//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::NaiveDate;
use playdate_domain::playdate::PlaydateId;
use sqlx::PgPool;
use uuid::Uuid;

/// テスト用の主催者プロフィールを作成する
pub async fn insert_organizer(pool: &PgPool, kid_name: &str, parent_phone: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO profiles (id, kid_name, parent_phone) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(kid_name)
        .bind(parent_phone)
        .execute(pool)
        .await
        .expect("プロフィール作成に失敗");
    id
}

/// テスト用のプレイデート
pub struct PlaydateSeed<'a> {
    pub title:    Option<&'a str>,
    pub date:     NaiveDate,
    pub time:     &'a str,
    pub location: Option<&'a str>,
    pub notes:    Option<&'a str>,
}

impl Default for PlaydateSeed<'_> {
    fn default() -> Self {
        Self {
            title:    Some("Park Day"),
            date:     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            time:     "3pm",
            location: Some("Oak Park"),
            notes:    None,
        }
    }
}

/// テスト用のプレイデートを作成する
pub async fn insert_playdate(pool: &PgPool, organizer_id: Uuid, seed: PlaydateSeed<'_>) -> PlaydateId {
    let id = PlaydateId::new();
    sqlx::query(
        r#"
        INSERT INTO playdates (id, organizer_id, title, date, time, location, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id.as_uuid())
    .bind(organizer_id)
    .bind(seed.title)
    .bind(seed.date)
    .bind(seed.time)
    .bind(seed.location)
    .bind(seed.notes)
    .execute(pool)
    .await
    .expect("プレイデート作成に失敗");
    id
}
