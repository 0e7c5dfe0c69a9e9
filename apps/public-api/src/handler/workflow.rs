//! # ワークフローハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/workflows` - ワークフロー一覧
//!
//! `tags` はカンマ区切りで複数指定でき、全てのタグを持つワークフローに絞り込む。

use axum::{
   Json,
   extract::{Query, State, rejection::QueryRejection},
};
use flowgate_shared::PaginatedResponse;
use serde::Deserialize;

use crate::{error::ApiError, extract::Pagination, model::Workflow, state::AppState};

/// ワークフローの絞り込み条件
#[derive(Debug, Default, Deserialize)]
pub struct WorkflowFilterQuery {
   pub tags:   Option<String>,
   pub active: Option<bool>,
}

impl WorkflowFilterQuery {
   fn tags(&self) -> Vec<&str> {
      self.tags
         .as_deref()
         .map(|tags| {
            tags.split(',')
               .map(str::trim)
               .filter(|tag| !tag.is_empty())
               .collect()
         })
         .unwrap_or_default()
   }

   fn matches(&self, workflow: &Workflow, tags: &[&str]) -> bool {
      self.active.is_none_or(|active| workflow.active == active)
         && tags
            .iter()
            .all(|tag| workflow.tags.iter().any(|t| t.as_str() == *tag))
   }
}

/// ワークフロー一覧
#[tracing::instrument(skip_all)]
pub async fn list_workflows(
   State(state): State<AppState>,
   Pagination(request): Pagination,
   filter: Result<Query<WorkflowFilterQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<Workflow>>, ApiError> {
   let Query(filter) = filter?;
   let tags = filter.tags();

   let page = state
      .workflows
      .find_page(&request, |workflow| filter.matches(workflow, &tags));
   tracing::debug!(count = page.items.len(), "ワークフローを取得しました");

   let response = state
      .codec
      .encode(request, page.items, page.count)?
      .with_next_cursor(|workflow| workflow.id.clone());

   Ok(Json(response))
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn workflow(active: bool, tags: &[&str]) -> Workflow {
      Workflow {
         id: "1".to_string(),
         name: "請求書の取り込み".to_string(),
         active,
         tags: tags.iter().map(|t| t.to_string()).collect(),
      }
   }

   #[test]
   fn test_tagsはカンマ区切りで空要素を除く() {
      let filter = WorkflowFilterQuery {
         tags:   Some("billing, ops,,".to_string()),
         active: None,
      };

      assert_eq!(filter.tags(), vec!["billing", "ops"]);
   }

   #[test]
   fn test_全てのタグを持つワークフローのみ一致する() {
      let filter = WorkflowFilterQuery::default();

      assert!(filter.matches(&workflow(true, &["billing", "ops"]), &["billing", "ops"]));
      assert!(!filter.matches(&workflow(true, &["billing"]), &["billing", "ops"]));
   }

   #[test]
   fn test_activeで絞り込む() {
      let filter = WorkflowFilterQuery {
         tags:   None,
         active: Some(false),
      };

      assert!(filter.matches(&workflow(false, &[]), &[]));
      assert!(!filter.matches(&workflow(true, &[]), &[]));
   }
}
