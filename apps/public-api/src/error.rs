//! # Public API エラー定義
//!
//! Public API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは [`ErrorResponse`]（RFC 9457 Problem Details）に統一する。

use axum::{
   Json,
   extract::rejection::QueryRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use flowgate_shared::{DecodeError, EncodeError, ErrorResponse};
use thiserror::Error;

/// Public API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// ページネーション指定の不正
   #[error(transparent)]
   Pagination(#[from] DecodeError),

   /// ページ指定と件数の組み合わせの不整合（実装側の不具合）
   #[error(transparent)]
   Encode(#[from] EncodeError),

   /// クエリ文字列として解釈できない
   #[error("不正なクエリパラメータ: {0}")]
   InvalidQuery(#[from] QueryRejection),

   /// フィルタ値の不正
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),
}

impl ApiError {
   fn to_error_response(&self) -> ErrorResponse {
      match self {
         ApiError::Pagination(e) => {
            tracing::debug!(error = %e, "ページネーション指定が不正です");
            ErrorResponse::from(e)
         }
         ApiError::Encode(e) => {
            tracing::error!(error = %e, "レスポンスの組み立てに失敗しました");
            ErrorResponse::from(e)
         }
         ApiError::InvalidQuery(e) => ErrorResponse::bad_request(e.body_text()),
         ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
         ApiError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let body = self.to_error_response();
      let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

      (status, Json(body)).into_response()
   }
}
