//! # 実行履歴ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/executions` - 実行履歴一覧
//!
//! ## クエリパラメータ
//!
//! | 名前 | 説明 |
//! |------|------|
//! | `limit` / `offset` / `cursor` / `lastId` | ページ指定 |
//! | `status` | ステータスで絞り込み（例: `success`） |
//! | `workflowId` | ワークフロー ID で絞り込み |
//! | `includeData` | `true` で各ノードの実行結果を含める |

use axum::{
   Json,
   extract::{Query, State, rejection::QueryRejection},
};
use flowgate_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   extract::Pagination,
   model::{Execution, ExecutionStatus},
   state::AppState,
};

/// 実行履歴の絞り込み条件
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionFilterQuery {
   pub status:       Option<String>,
   pub workflow_id:  Option<String>,
   pub include_data: Option<bool>,
}

/// 実行履歴 DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDto {
   pub id:          String,
   pub workflow_id: String,
   pub status:      ExecutionStatus,
   pub finished:    bool,
   pub mode:        String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub data:        Option<serde_json::Value>,
}

impl ExecutionDto {
   fn new(execution: Execution, include_data: bool) -> Self {
      Self {
         id:          execution.id,
         workflow_id: execution.workflow_id,
         status:      execution.status,
         finished:    execution.finished,
         mode:        execution.mode,
         data:        include_data.then_some(execution.data),
      }
   }
}

/// 実行履歴一覧
#[tracing::instrument(skip_all)]
pub async fn list_executions(
   State(state): State<AppState>,
   Pagination(request): Pagination,
   filter: Result<Query<ExecutionFilterQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<ExecutionDto>>, ApiError> {
   let Query(filter) = filter?;
   let status = filter
      .status
      .as_deref()
      .map(|raw| {
         raw.parse::<ExecutionStatus>()
            .map_err(|_| ApiError::BadRequest(format!("status の値が不正です: {raw:?}")))
      })
      .transpose()?;
   let include_data = filter.include_data.unwrap_or(false);

   let page = state.executions.find_page(&request, |execution| {
      status.is_none_or(|status| execution.status == status)
         && filter
            .workflow_id
            .as_deref()
            .is_none_or(|workflow_id| execution.workflow_id == workflow_id)
   });
   tracing::debug!(count = page.items.len(), "実行履歴を取得しました");

   let response = state
      .codec
      .encode(request, page.items, page.count)?
      .with_next_cursor(|execution| execution.id.clone())
      .map(|execution| ExecutionDto::new(execution, include_data));

   Ok(Json(response))
}
