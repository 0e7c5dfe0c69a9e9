//! # ページネーションのエラー定義
//!
//! デコード時のエラー（クライアント起因）とエンコード時のエラー
//! （呼び出し側の実装不備）を別の型で表現する。
//!
//! ## HTTP ステータスとの対応
//!
//! | エラー型 | HTTP ステータス | 原因 |
//! |---------|----------------|------|
//! | [`DecodeError`] | 400 Bad Request | クエリパラメータの値が不正 |
//! | [`EncodeError`] | 500 Internal Server Error | ハンドラとストレージ層の整合性違反 |

use thiserror::Error;

use super::request::PaginationMode;

/// クエリパラメータのデコードエラー
///
/// すべてのバリアントはクライアント入力に起因する。
/// エラーメッセージはそのまま Problem Details の `detail` に使用できる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
   /// オフセットとカーソル（または 2 種類のカーソル）が同時に指定された
   #[error("{first} と {second} は同時に指定できません")]
   ConflictingCursor {
      first:  &'static str,
      second: &'static str,
   },

   /// limit が整数でない、または範囲外（1 未満、4294967295 超、設定上限超）
   #[error("limit が不正です: {value:?}（整数でないか、範囲外です）")]
   InvalidLimit { value: String },

   /// offset が整数でない、負数、または `u64` の範囲外
   #[error("offset が不正です: {value:?}（0 以上の整数を指定してください）")]
   InvalidOffset { value: String },

   /// カーソルが空文字列
   #[error("不正なカーソルが指定されました")]
   InvalidCursor,
}

/// レスポンスのエンコードエラー
///
/// 正しく実装された呼び出し側では発生しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
   /// リクエストのモードと件数のモードが一致しない
   #[error("ページネーションモードが一致しません: リクエスト={request}, 件数={count}")]
   VariantMismatch {
      request: PaginationMode,
      count:   PaginationMode,
   },
}
