//! # Public API サーバー
//!
//! 一覧系エンドポイントをページネーション付きで公開する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PUBLIC_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PUBLIC_API_PORT` | No | ポート番号（デフォルト: `5678`） |
//! | `PUBLIC_API_SEED_FILE` | No | 起動時に読み込むデータセット（JSON） |
//! | `PAGINATION_DEFAULT_LIMIT` | No | limit 未指定時の件数（デフォルト: `100`） |
//! | `PAGINATION_MAX_LIMIT` | No | limit の上限（デフォルト: 上限なし） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! PUBLIC_API_SEED_FILE=apps/public-api/fixtures/seed.json cargo run -p flowgate-public-api
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use flowgate_public_api::{
   app_builder::build_app,
   config::ApiConfig,
   model::Dataset,
   state::AppState,
};
use flowgate_shared::{
   PaginationCodec,
   observability::{TracingConfig, init_tracing},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("public-api");
   init_tracing(&tracing_config);

   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      service = %tracing_config.service_name,
      "Public API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let dataset = match &config.seed_file {
      Some(path) => {
         let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("データセットを読み込めません: {}", path.display()))?;
         Dataset::from_json(&json)
            .with_context(|| format!("データセットの形式が不正です: {}", path.display()))?
      }
      None => {
         tracing::warn!("PUBLIC_API_SEED_FILE が未設定のため空のデータセットで起動します");
         Dataset::default()
      }
   };
   tracing::info!(
      executions = dataset.executions.len(),
      workflows = dataset.workflows.len(),
      users = dataset.users.len(),
      "データセットを読み込みました"
   );

   let state = AppState::new(PaginationCodec::new(config.pagination), dataset);
   let app = build_app(state);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Public API サーバーが起動しました: {addr}");

   axum::serve(listener, app).await?;

   Ok(())
}
