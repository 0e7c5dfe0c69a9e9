//! # ページネーション抽出器
//!
//! クエリ文字列のページネーション関連パラメータを [`PaginationCodec`] で
//! デコードし、ハンドラに [`PaginationRequest`] として渡す。
//!
//! ```text
//! GET /api/v1/executions?limit=50&cursor=120
//!        │
//!        ▼ Query<PaginationQuery>
//!   PaginationCodec::decode
//!        │
//!        ▼
//!   Pagination(PaginationRequest::Cursor { limit: 50, last_id: "120" })
//! ```
//!
//! デコードに失敗した場合は [`ApiError`] を返し、ハンドラは実行されない。

use axum::{
   extract::{FromRef, FromRequestParts, Query},
   http::request::Parts,
};
use flowgate_shared::{PaginationCodec, PaginationQuery, PaginationRequest};

use crate::error::ApiError;

/// デコード済みのページ指定
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination(pub PaginationRequest);

impl<S> FromRequestParts<S> for Pagination
where
   PaginationCodec: FromRef<S>,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state).await?;
      let codec = PaginationCodec::from_ref(state);

      Ok(Self(codec.decode(query)?))
   }
}
