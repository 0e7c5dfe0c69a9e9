//! # Public API 設定
//!
//! 環境変数から Public API サーバーの設定を読み込む。

use std::path::PathBuf;

use flowgate_shared::{ConfigError as PaginationConfigError, PaginationConfig};
use thiserror::Error;

const HOST_KEY: &str = "PUBLIC_API_HOST";
const PORT_KEY: &str = "PUBLIC_API_PORT";
const SEED_FILE_KEY: &str = "PUBLIC_API_SEED_FILE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5678;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   #[error("{key} は有効なポート番号である必要があります: {value:?}")]
   InvalidPort { key: &'static str, value: String },

   #[error(transparent)]
   Pagination(#[from] PaginationConfigError),
}

/// Public API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:       String,
   /// ポート番号
   pub port:       u16,
   /// ページネーション設定
   pub pagination: PaginationConfig,
   /// 起動時に読み込むデータセット（未設定で空のストア）
   pub seed_file:  Option<PathBuf>,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| std::env::var(key).ok())
   }

   /// 任意のキー検索関数から設定を読み込む
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup(PORT_KEY) {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            key: PORT_KEY,
            value,
         })?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         host: lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         pagination: PaginationConfig::from_lookup(&lookup)?,
         seed_file: lookup(SEED_FILE_KEY).map(PathBuf::from),
      })
   }
}
