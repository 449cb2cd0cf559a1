//! # PlaydateRepository
//!
//! プレイデートを主催者と結合して読み取るリポジトリ。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: プレイデートは外部ストアが所有する
//! - **1 クエリ**: playdates と profiles を外部キーで内部結合し、主キーで 1 行を取得する

use async_trait::async_trait;
use chrono::NaiveDate;
use playdate_domain::playdate::{Organizer, Playdate, PlaydateId, PlaydateRecord};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// プレイデートリポジトリトレイト
#[async_trait]
pub trait PlaydateRepository: Send + Sync {
    /// ID でプレイデートを主催者付きで取得する
    ///
    /// 該当行がない場合は `Ok(None)` を返す。
    async fn find_with_organizer(&self, id: &PlaydateId) -> Result<Option<Playdate>, InfraError>;
}

/// playdates + profiles の結合行
#[derive(Debug, sqlx::FromRow)]
struct PlaydateRow {
    id:                        Uuid,
    title:                     Option<String>,
    date:                      NaiveDate,
    time:                      String,
    location:                  Option<String>,
    notes:                     Option<String>,
    organizer_display_name:    String,
    organizer_contact_address: String,
}

impl From<PlaydateRow> for Playdate {
    fn from(row: PlaydateRow) -> Self {
        Playdate::from_db(PlaydateRecord {
            id:        PlaydateId::from_uuid(row.id),
            title:     row.title,
            date:      row.date,
            time:      row.time,
            location:  row.location,
            notes:     row.notes,
            organizer: Organizer {
                display_name:    row.organizer_display_name,
                contact_address: row.organizer_contact_address,
            },
        })
    }
}

/// PostgreSQL 実装の PlaydateRepository
#[derive(Debug, Clone)]
pub struct PostgresPlaydateRepository {
    pool: PgPool,
}

impl PostgresPlaydateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaydateRepository for PostgresPlaydateRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_with_organizer(&self, id: &PlaydateId) -> Result<Option<Playdate>, InfraError> {
        let row = sqlx::query_as::<_, PlaydateRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.date,
                p.time,
                p.location,
                p.notes,
                o.kid_name AS organizer_display_name,
                o.parent_phone AS organizer_contact_address
            FROM playdates p
            INNER JOIN profiles o ON o.id = p.organizer_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Playdate::from))
    }
}
