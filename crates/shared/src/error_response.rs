//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 公開 API 共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はアプリケーションの責務（shared に axum 依存を入れない）
//! - ページネーションのエラーからの変換は `From` で提供する

use serde::{Deserialize, Serialize};

use crate::pagination::{DecodeError, EncodeError};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://flowgate.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"invalid-pagination"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 400 Invalid Pagination
   ///
   /// ページネーション指定（`limit` / `offset` / `cursor`）の不正。
   pub fn invalid_pagination(detail: impl Into<String>) -> Self {
      Self::new("invalid-pagination", "Invalid Pagination", 400, detail)
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}

impl From<&DecodeError> for ErrorResponse {
   fn from(error: &DecodeError) -> Self {
      Self::invalid_pagination(error.to_string())
   }
}

impl From<&EncodeError> for ErrorResponse {
   fn from(_: &EncodeError) -> Self {
      Self::internal_error()
   }
}
