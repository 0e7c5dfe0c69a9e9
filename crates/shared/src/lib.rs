//! # Flowgate 共有ユーティリティ
//!
//! 公開 API の各エンドポイントから利用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - HTTP フレームワーク（axum）に依存しない純粋なデータ型と関数のみを配置
//! - axum との接続（抽出器・`IntoResponse`）は各アプリケーションの責務
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod health;
pub mod observability;
pub mod pagination;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use pagination::{
   ConfigError,
   CursorId,
   CursorPage,
   CursorResult,
   DecodeError,
   EncodeError,
   OffsetPage,
   OffsetResult,
   PageLimit,
   PaginatedResponse,
   PaginationCodec,
   PaginationConfig,
   PaginationMode,
   PaginationQuery,
   PaginationRequest,
   PaginationResponse,
   QueryValue,
   RecordCount,
};
