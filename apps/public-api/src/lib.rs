//! # Public API ライブラリ
//!
//! 実行履歴・ワークフロー・ユーザーの一覧を返す公開 API。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと Problem Details への変換
//! - `extract`: ページネーション抽出器
//! - `handler`: HTTP ハンドラ
//! - `model`: レコードとデータセット
//! - `state`: 共有状態
//! - `store`: インメモリのレコードストア

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod model;
pub mod state;
pub mod store;
