//! # ページネーション設定
//!
//! 環境変数からデフォルト limit と上限 limit を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PAGINATION_DEFAULT_LIMIT` | No | limit 未指定時の件数（デフォルト: `100`） |
//! | `PAGINATION_MAX_LIMIT` | No | limit の上限（未設定で上限なし） |

use thiserror::Error;

use super::request::{DEFAULT_LIMIT, PageLimit};

const DEFAULT_LIMIT_KEY: &str = "PAGINATION_DEFAULT_LIMIT";
const MAX_LIMIT_KEY: &str = "PAGINATION_MAX_LIMIT";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   /// 1 以上の整数として解釈できない値
   #[error("{key} は 1 以上の整数である必要があります: {value:?}")]
   InvalidValue { key: &'static str, value: String },

   /// デフォルト limit が上限を超えている
   #[error("デフォルト limit ({default}) が上限 ({max}) を超えています")]
   DefaultExceedsMax { default: PageLimit, max: PageLimit },
}

/// ページネーション設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
   /// limit 未指定時の件数
   pub default_limit: PageLimit,
   /// limit の上限（`None` で上限なし）
   pub max_limit:     Option<PageLimit>,
}

impl Default for PaginationConfig {
   fn default() -> Self {
      Self {
         default_limit: DEFAULT_LIMIT,
         max_limit:     None,
      }
   }
}

impl PaginationConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| std::env::var(key).ok())
   }

   /// 任意のキー検索関数から設定を読み込む
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let default_limit = parse_limit(DEFAULT_LIMIT_KEY, lookup(DEFAULT_LIMIT_KEY))?
         .unwrap_or(DEFAULT_LIMIT);
      let max_limit = parse_limit(MAX_LIMIT_KEY, lookup(MAX_LIMIT_KEY))?;

      if let Some(max) = max_limit
         && default_limit > max
      {
         return Err(ConfigError::DefaultExceedsMax {
            default: default_limit,
            max,
         });
      }

      Ok(Self {
         default_limit,
         max_limit,
      })
   }
}

fn parse_limit(key: &'static str, raw: Option<String>) -> Result<Option<PageLimit>, ConfigError> {
   let Some(raw) = raw else {
      return Ok(None);
   };
   raw.parse::<u32>()
      .ok()
      .and_then(PageLimit::new)
      .map(Some)
      .ok_or(ConfigError::InvalidValue { key, value: raw })
}
