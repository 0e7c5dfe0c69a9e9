//! # 未検証のクエリパラメータ
//!
//! 一覧系エンドポイントが受け取るページネーション関連パラメータを
//! 検証前の状態で保持する。
//!
//! クエリ文字列（axum の `Query`）からは常に文字列として、
//! JSON から組み立てた場合は数値として値が届くため、
//! [`QueryValue`] で両方を受け付ける。

use std::fmt;

use serde::Deserialize;

/// クエリパラメータの値（文字列または数値）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
   Integer(i64),
   Float(f64),
   Text(String),
}

impl QueryValue {
   /// 0 以上の整数として解釈する
   ///
   /// - 文字列は符号なしの 10 進数のみ（`+`、`-`、空白、小数点は不可）
   /// - 浮動小数点数は小数部が 0 の場合のみ
   /// - `u64` の範囲まで受け付ける
   pub fn as_u64(&self) -> Option<u64> {
      match self {
         Self::Integer(n) => u64::try_from(*n).ok(),
         Self::Float(f) => {
            if f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64 {
               Some(*f as u64)
            } else {
               None
            }
         }
         Self::Text(s) => {
            if s.starts_with('+') {
               return None;
            }
            s.parse().ok()
         }
      }
   }

   /// 文字列として取り出す（数値は 10 進表記）
   pub fn into_text(self) -> String {
      match self {
         Self::Text(s) => s,
         other => other.to_string(),
      }
   }
}

impl fmt::Display for QueryValue {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Self::Integer(n) => write!(f, "{n}"),
         Self::Float(x) => write!(f, "{x}"),
         Self::Text(s) => f.write_str(s),
      }
   }
}

impl From<&str> for QueryValue {
   fn from(s: &str) -> Self {
      Self::Text(s.to_string())
   }
}

impl From<String> for QueryValue {
   fn from(s: String) -> Self {
      Self::Text(s)
   }
}

impl From<i64> for QueryValue {
   fn from(n: i64) -> Self {
      Self::Integer(n)
   }
}

/// ページネーション関連のクエリパラメータ（未検証）
///
/// `cursor` と `lastId` はどちらも「最後に取得したレコードの ID」を表す別名。
/// 未知のパラメータ（`status` などのフィルタ）は無視する。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
   pub limit:   Option<QueryValue>,
   pub offset:  Option<QueryValue>,
   pub cursor:  Option<QueryValue>,
   pub last_id: Option<QueryValue>,
}

impl PaginationQuery {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn limit(mut self, value: impl Into<QueryValue>) -> Self {
      self.limit = Some(value.into());
      self
   }

   pub fn offset(mut self, value: impl Into<QueryValue>) -> Self {
      self.offset = Some(value.into());
      self
   }

   pub fn cursor(mut self, value: impl Into<QueryValue>) -> Self {
      self.cursor = Some(value.into());
      self
   }

   pub fn last_id(mut self, value: impl Into<QueryValue>) -> Self {
      self.last_id = Some(value.into());
      self
   }
}
