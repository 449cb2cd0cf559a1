//! # メッセージレンダラー
//!
//! tera テンプレートエンジンでメッセージ種別ごとの SMS 本文を生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **任意項目は行ごと省略**: 場所・メモが未設定の場合、その行を出力しない
//! - **末尾の空白は除去**: テンプレート末尾の改行を本文に含めない

use playdate_domain::{
    playdate::Playdate,
    sms::{OPT_OUT_NOTICE, SmsMessageType},
};
use tera::{Context, Tera};

use crate::error::SmsServiceError;

/// メッセージレンダラー
///
/// tera テンプレートエンジンをラップし、`Playdate` とメッセージ種別から
/// SMS 本文を生成する。
pub struct MessageRenderer {
    engine: Tera,
}

impl MessageRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, SmsServiceError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "confirmation.txt",
                    include_str!("../../../templates/sms/confirmation.txt"),
                ),
                (
                    "reminder.txt",
                    include_str!("../../../templates/sms/reminder.txt"),
                ),
                (
                    "update.txt",
                    include_str!("../../../templates/sms/update.txt"),
                ),
            ])
            .map_err(|e| SmsServiceError::Unhandled(format!("テンプレートの登録に失敗: {e}")))?;

        Ok(Self { engine })
    }

    /// プレイデートから SMS 本文を生成する
    pub fn render(
        &self,
        playdate: &Playdate,
        message_type: SmsMessageType,
    ) -> Result<String, SmsServiceError> {
        let context = Self::build_context(playdate, message_type);
        let template_name = format!("{message_type}.txt");

        let body = self.engine.render(&template_name, &context).map_err(|e| {
            SmsServiceError::Unhandled(format!("テンプレートのレンダリングに失敗: {e}"))
        })?;

        Ok(body.trim_end().to_string())
    }

    fn build_context(playdate: &Playdate, message_type: SmsMessageType) -> Context {
        let mut context = Context::new();
        context.insert("title", playdate.display_title());
        context.insert("date", &playdate.formatted_date());
        context.insert("time", playdate.time());
        // tera の if で判定するため、未設定でもキー自体は必ず登録する
        context.insert("location", &playdate.location());
        context.insert("notes", &playdate.notes());
        context.insert("organizer_name", &playdate.organizer().display_name);
        context.insert("contact_address", &playdate.organizer().contact_address);

        if message_type.includes_opt_out_notice() {
            context.insert("opt_out_notice", OPT_OUT_NOTICE);
        }

        context
    }
}
