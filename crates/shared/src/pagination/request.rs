//! # ページネーションリクエスト
//!
//! デコード済みのページ指定を表現する型。
//!
//! 「オフセット」と「カーソル」のどちらか一方だけが有効であることを
//! 直和型 [`PaginationRequest`] で表現し、両方が指定された状態や
//! どちらも指定されていない状態を型レベルで排除する。

use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// limit 未指定時のデフォルト値
pub const DEFAULT_LIMIT: PageLimit = match PageLimit::new(100) {
   Some(limit) => limit,
   None => unreachable!(),
};

/// 1 ページあたりの取得件数（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上（`NonZeroU32` で保証）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLimit(NonZeroU32);

impl PageLimit {
   /// 値から limit を作成する。0 の場合は `None`。
   pub const fn new(value: u32) -> Option<Self> {
      match NonZeroU32::new(value) {
         Some(v) => Some(Self(v)),
         None => None,
      }
   }

   pub const fn get(self) -> u32 {
      self.0.get()
   }

   pub const fn as_u64(self) -> u64 {
      self.0.get() as u64
   }
}

impl Default for PageLimit {
   fn default() -> Self {
      DEFAULT_LIMIT
   }
}

impl fmt::Display for PageLimit {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 最後に取得したレコードの識別子（カーソル）
///
/// クライアントからは opaque な文字列として扱われる。
///
/// # 不変条件
///
/// - 空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CursorId(String);

impl CursorId {
   /// 文字列からカーソルを作成する
   ///
   /// # エラー
   ///
   /// 空文字列の場合は [`DecodeError::InvalidCursor`] を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DecodeError> {
      let value = value.into();
      if value.is_empty() {
         return Err(DecodeError::InvalidCursor);
      }
      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }

   pub fn into_inner(self) -> String {
      self.0
   }
}

impl TryFrom<String> for CursorId {
   type Error = DecodeError;

   fn try_from(value: String) -> Result<Self, Self::Error> {
      Self::new(value)
   }
}

impl From<CursorId> for String {
   fn from(id: CursorId) -> Self {
      id.0
   }
}

impl fmt::Display for CursorId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// ページネーションの方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
   /// 先頭からの読み飛ばし件数で指定
   Offset,
   /// 最後に取得した識別子で指定
   Cursor,
}

impl fmt::Display for PaginationMode {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Self::Offset => write!(f, "offset"),
         Self::Cursor => write!(f, "cursor"),
      }
   }
}

/// オフセット方式のページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetPage {
   pub limit:  PageLimit,
   pub offset: u64,
}

impl OffsetPage {
   pub fn new(limit: PageLimit, offset: u64) -> Self {
      Self { limit, offset }
   }
}

/// カーソル方式のページ指定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CursorPage {
   pub limit:   PageLimit,
   pub last_id: CursorId,
}

impl CursorPage {
   pub fn new(limit: PageLimit, last_id: CursorId) -> Self {
      Self { limit, last_id }
   }
}

/// デコード済みのページ指定
///
/// ## JSON 形式
///
/// ```json
/// { "limit": 50, "offset": 10 }
/// { "limit": 50, "lastId": "abc123" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationRequest {
   Offset(OffsetPage),
   Cursor(CursorPage),
}

impl PaginationRequest {
   pub fn limit(&self) -> PageLimit {
      match self {
         Self::Offset(page) => page.limit,
         Self::Cursor(page) => page.limit,
      }
   }

   pub fn mode(&self) -> PaginationMode {
      match self {
         Self::Offset(_) => PaginationMode::Offset,
         Self::Cursor(_) => PaginationMode::Cursor,
      }
   }

   /// オフセット方式の場合の読み飛ばし件数
   pub fn offset(&self) -> Option<u64> {
      match self {
         Self::Offset(page) => Some(page.offset),
         Self::Cursor(_) => None,
      }
   }

   /// カーソル方式の場合の最終 ID
   pub fn last_id(&self) -> Option<&CursorId> {
      match self {
         Self::Offset(_) => None,
         Self::Cursor(page) => Some(&page.last_id),
      }
   }
}

impl Default for PaginationRequest {
   /// 先頭ページ（`offset = 0`、デフォルト limit）
   fn default() -> Self {
      Self::Offset(OffsetPage::new(DEFAULT_LIMIT, 0))
   }
}

impl From<OffsetPage> for PaginationRequest {
   fn from(page: OffsetPage) -> Self {
      Self::Offset(page)
   }
}

impl From<CursorPage> for PaginationRequest {
   fn from(page: CursorPage) -> Self {
      Self::Cursor(page)
   }
}
