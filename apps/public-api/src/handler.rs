//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - 一覧系ハンドラは同じ流れで処理する:
//!   デコード（[`Pagination`](crate::extract::Pagination)）→ ストア検索 →
//!   エンコード → `nextCursor` 付与 → DTO 変換

pub mod execution;
pub mod health;
pub mod user;
pub mod workflow;

pub use execution::list_executions;
pub use health::health_check;
pub use user::list_users;
pub use workflow::list_workflows;
