//! # SMS Service ライブラリ
//!
//! SMS Service の設定・ユースケース・ハンドラを公開する。
//! 統合テストからルーターを組み立てるためにも使用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
