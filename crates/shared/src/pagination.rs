//! # 一覧 API のページネーション
//!
//! 公開 API の一覧系エンドポイント（`GET /executions`, `GET /workflows`,
//! `GET /users` など）が共通で使用するページネーションのデコード・エンコードを提供する。
//!
//! ## 方式
//!
//! | 方式 | クエリパラメータ | レスポンスの件数フィールド |
//! |------|-----------------|--------------------------|
//! | オフセット | `limit`, `offset` | `numberOfTotalRecords`（全件数） |
//! | カーソル | `limit`, `cursor` または `lastId` | `numberOfNextRecords`（後続件数） |
//!
//! カーソル方式では ID 昇順で並んだレコードのうち、`lastId` より後ろを返す。
//!
//! ## 処理の流れ
//!
//! ```text
//! クエリ文字列 ──▶ PaginationQuery ──decode──▶ PaginationRequest
//!                                                  │
//!                                       ストレージ層で検索・件数算出
//!                                                  │
//!           PaginatedResponse<T> ◀──encode── (レコード, RecordCount)
//! ```
//!
//! コーデックはログ出力やエラーの握りつぶしを行わない。
//! エラーの HTTP レスポンスへの変換とログ出力は呼び出し側の責務。

mod codec;
mod config;
mod error;
mod query;
mod request;
mod response;

pub use codec::PaginationCodec;
pub use config::{ConfigError, PaginationConfig};
pub use error::{DecodeError, EncodeError};
pub use query::{PaginationQuery, QueryValue};
pub use request::{
   CursorId,
   CursorPage,
   DEFAULT_LIMIT,
   OffsetPage,
   PageLimit,
   PaginationMode,
   PaginationRequest,
};
pub use response::{CursorResult, OffsetResult, PaginatedResponse, PaginationResponse, RecordCount};
