//! # プレイデート
//!
//! SMS 通知の題材となるプレイデートと、その主催者を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Playdate`] | プレイデート | 日付・時刻・場所を持つ遊びの予定 |
//! | [`Organizer`] | 主催者 | プレイデートを企画した家庭（子どもの名前と保護者の連絡先） |
//!
//! プレイデートは外部ストアが所有しており、このサービスは ID で読み取るだけ。
//!
//! ## 日付の扱い
//!
//! `date` はタイムゾーンを持たない暦日（[`NaiveDate`]）として保持し、
//! 表示時にもタイムゾーン変換を行わない。ホストのローカル時刻に依存して
//! 前日・翌日にずれることはない。

use chrono::NaiveDate;

define_uuid_id! {
    /// プレイデート ID
    ///
    /// playdates テーブルの主キー。
    pub struct PlaydateId;
}

/// タイトル未設定のプレイデートに使う表示名
pub const DEFAULT_PLAYDATE_TITLE: &str = "Playdate";

/// 暦日を SMS 向けの短い英語表記にする（例: `Mon, Jun 10`）
///
/// 曜日・月の略称と日（ゼロ埋めなし）。ロケールは英語固定。
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// 主催者
///
/// profiles テーブルの行。プレイデートから外部キーで参照される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    /// 表示名（子どもの名前）
    pub display_name:    String,
    /// 連絡先（保護者の電話番号）
    pub contact_address: String,
}

/// プレイデートの永続化表現から復元するためのパラメータ
#[derive(Debug, Clone)]
pub struct PlaydateRecord {
    pub id:        PlaydateId,
    pub title:     Option<String>,
    pub date:      NaiveDate,
    pub time:      String,
    pub location:  Option<String>,
    pub notes:     Option<String>,
    pub organizer: Organizer,
}

/// プレイデート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playdate {
    id:        PlaydateId,
    title:     Option<String>,
    date:      NaiveDate,
    time:      String,
    location:  Option<String>,
    notes:     Option<String>,
    organizer: Organizer,
}

impl Playdate {
    /// 既存のデータから復元する
    pub fn from_db(record: PlaydateRecord) -> Self {
        Self {
            id:        record.id,
            title:     record.title,
            date:      record.date,
            time:      record.time,
            location:  record.location,
            notes:     record.notes,
            organizer: record.organizer,
        }
    }

    pub fn id(&self) -> &PlaydateId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// 表示用タイトル
    ///
    /// 未設定または空白のみの場合は [`DEFAULT_PLAYDATE_TITLE`] を返す。
    pub fn display_title(&self) -> &str {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_PLAYDATE_TITLE,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// 表示用の日付（例: `Mon, Jun 10`）
    pub fn formatted_date(&self) -> String {
        format_calendar_date(self.date)
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// 場所（空文字は未設定として扱う）
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// メモ（空文字は未設定として扱う）
    pub fn notes(&self) -> Option<&str> {
        non_blank(self.notes.as_deref())
    }

    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
