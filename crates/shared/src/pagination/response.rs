//! # ページネーション付きレスポンス
//!
//! 一覧系エンドポイントが返すレスポンスエンベロープ。
//!
//! ## JSON 形式
//!
//! オフセット方式:
//!
//! ```json
//! {
//!   "data": [...],
//!   "limit": 50,
//!   "offset": 10,
//!   "numberOfTotalRecords": 230
//! }
//! ```
//!
//! カーソル方式:
//!
//! ```json
//! {
//!   "data": [...],
//!   "limit": 50,
//!   "lastId": "abc123",
//!   "numberOfNextRecords": 12,
//!   "nextCursor": "def456"
//! }
//! ```
//!
//! `nextCursor` はカーソル方式で後続レコードが存在する場合のみ出力される。

use serde::{Deserialize, Serialize};

use super::request::{CursorId, OffsetPage, PageLimit, PaginationMode};

/// オフセット方式のページ情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetResult {
   pub limit: PageLimit,
   pub offset: u64,
   /// 条件に一致する全レコード数
   pub number_of_total_records: u64,
}

/// カーソル方式のページ情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorResult {
   pub limit: PageLimit,
   pub last_id: CursorId,
   /// 今回返したページより後ろに残っているレコード数
   pub number_of_next_records: u64,
}

/// ページ情報（リクエストの方式に対応するバリアント）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationResponse {
   Offset(OffsetResult),
   Cursor(CursorResult),
}

impl PaginationResponse {
   pub fn limit(&self) -> PageLimit {
      match self {
         Self::Offset(result) => result.limit,
         Self::Cursor(result) => result.limit,
      }
   }

   pub fn mode(&self) -> PaginationMode {
      match self {
         Self::Offset(_) => PaginationMode::Offset,
         Self::Cursor(_) => PaginationMode::Cursor,
      }
   }

   /// 今回のページより後ろにレコードが残っているか
   pub fn has_more(&self) -> bool {
      match self {
         Self::Offset(result) => {
            result.offset.saturating_add(result.limit.as_u64()) < result.number_of_total_records
         }
         Self::Cursor(result) => result.number_of_next_records > 0,
      }
   }

   /// オフセット方式で次ページを取得するためのページ指定
   ///
   /// カーソル方式の次ページは最終レコードの ID が必要なため
   /// [`PaginatedResponse::next_cursor`] を使用する。
   pub fn next_offset(&self) -> Option<OffsetPage> {
      match self {
         Self::Offset(result) if self.has_more() => Some(OffsetPage::new(
            result.limit,
            result.offset + result.limit.as_u64(),
         )),
         _ => None,
      }
   }
}

/// 呼び出し側が算出したレコード数
///
/// オフセット方式では全件数、カーソル方式では後続件数を渡す。
/// どちらの件数かを型で区別し、方式の取り違えを検出する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCount {
   /// 条件に一致する全レコード数（オフセット方式）
   Total(u64),
   /// 最終レコードより後ろのレコード数（カーソル方式）
   Next(u64),
}

impl RecordCount {
   pub fn mode(&self) -> PaginationMode {
      match self {
         Self::Total(_) => PaginationMode::Offset,
         Self::Next(_) => PaginationMode::Cursor,
      }
   }
}

/// ページネーション付きレスポンス
///
/// `data` にページのレコード、同じ階層にページ情報を展開する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
   pub data:        Vec<T>,
   #[serde(flatten)]
   pub pagination:  PaginationResponse,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub next_cursor: Option<CursorId>,
}

impl<T> PaginatedResponse<T> {
   /// 次ページ用のカーソルを設定する
   ///
   /// カーソル方式かつ後続レコードがあり、ページが空でない場合のみ
   /// 最終レコードの ID を `next_cursor` に設定する。
   pub fn with_next_cursor(mut self, key: impl FnOnce(&T) -> String) -> Self {
      self.next_cursor = match (&self.pagination, self.data.last()) {
         (PaginationResponse::Cursor(result), Some(last)) if result.number_of_next_records > 0 => {
            CursorId::new(key(last)).ok()
         }
         _ => None,
      };
      self
   }

   /// レコードを別の型（DTO など）に変換する
   pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
      PaginatedResponse {
         data:        self.data.into_iter().map(f).collect(),
         pagination:  self.pagination,
         next_cursor: self.next_cursor,
      }
   }
}
