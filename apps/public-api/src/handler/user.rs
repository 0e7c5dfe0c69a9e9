//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/users` - ユーザー一覧（`includeRole=true` でロールを含める）

use axum::{
   Json,
   extract::{Query, State, rejection::QueryRejection},
};
use flowgate_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extract::Pagination, model::User, state::AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilterQuery {
   pub include_role: Option<bool>,
}

/// ユーザー DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
   pub id:         String,
   pub email:      String,
   pub first_name: String,
   pub last_name:  String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub role:       Option<String>,
}

impl UserDto {
   fn new(user: User, include_role: bool) -> Self {
      Self {
         id:         user.id,
         email:      user.email,
         first_name: user.first_name,
         last_name:  user.last_name,
         role:       include_role.then_some(user.role),
      }
   }
}

/// ユーザー一覧
#[tracing::instrument(skip_all)]
pub async fn list_users(
   State(state): State<AppState>,
   Pagination(request): Pagination,
   filter: Result<Query<UserFilterQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<UserDto>>, ApiError> {
   let Query(filter) = filter?;
   let include_role = filter.include_role.unwrap_or(false);

   let page = state.users.find_page(&request, |_| true);

   let response = state
      .codec
      .encode(request, page.items, page.count)?
      .with_next_cursor(|user| user.id.clone())
      .map(|user| UserDto::new(user, include_role));

   Ok(Json(response))
}
