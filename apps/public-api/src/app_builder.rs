//! # Public API アプリケーション構築
//!
//! ルーター構築を担当する。
//! `main.rs` は設定・データセットの読み込みとサーバー起動に集中する。

use axum::{Router, http::Uri, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
   error::ApiError,
   handler::{health_check, list_executions, list_users, list_workflows},
   state::AppState,
};

/// ルーターを構築する
pub fn build_app(state: AppState) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/api/v1/executions", get(list_executions))
      .route("/api/v1/workflows", get(list_workflows))
      .route("/api/v1/users", get(list_users))
      .fallback(not_found)
      .with_state(state)
      .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
   ApiError::NotFound(uri.path().to_string())
}
