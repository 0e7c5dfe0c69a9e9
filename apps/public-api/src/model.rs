//! # 公開 API のレコード
//!
//! 一覧エンドポイントが返すレコード（実行履歴・ワークフロー・ユーザー）と、
//! 起動時に読み込むデータセットを定義する。
//!
//! 永続化は本サービスの責務外のため、レコードはデータセットから
//! 読み込んだ値をそのまま保持する。

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::store::Keyed;

/// 実行履歴のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExecutionStatus {
   Canceled,
   Crashed,
   Error,
   New,
   Running,
   Success,
   Unknown,
   Waiting,
}

/// ワークフローの実行履歴
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
   pub id:          String,
   pub workflow_id: String,
   pub status:      ExecutionStatus,
   pub finished:    bool,
   pub mode:        String,
   /// 各ノードの実行結果（`includeData=true` の場合のみ返す）
   #[serde(default)]
   pub data:        serde_json::Value,
}

impl Keyed for Execution {
   fn key(&self) -> &str {
      &self.id
   }
}

/// ワークフロー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
   pub id:     String,
   pub name:   String,
   pub active: bool,
   #[serde(default)]
   pub tags:   Vec<String>,
}

impl Keyed for Workflow {
   fn key(&self) -> &str {
      &self.id
   }
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
   pub id:         String,
   pub email:      String,
   pub first_name: String,
   pub last_name:  String,
   /// グローバルロール（例: `"owner"`, `"member"`）
   pub role:       String,
}

impl Keyed for User {
   fn key(&self) -> &str {
      &self.id
   }
}

/// 起動時に読み込むデータセット
///
/// ```json
/// { "executions": [...], "workflows": [...], "users": [...] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dataset {
   pub executions: Vec<Execution>,
   pub workflows:  Vec<Workflow>,
   pub users:      Vec<User>,
}

impl Dataset {
   pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
      serde_json::from_str(json)
   }
}
