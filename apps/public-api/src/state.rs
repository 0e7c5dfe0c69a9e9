//! # アプリケーション状態
//!
//! ハンドラ間で共有するコーデックとレコードストアを保持する。

use std::sync::Arc;

use axum::extract::FromRef;
use flowgate_shared::PaginationCodec;

use crate::{
   model::{Dataset, Execution, User, Workflow},
   store::RecordStore,
};

/// 全ハンドラの共有状態
#[derive(Debug, Clone)]
pub struct AppState {
   pub codec:      PaginationCodec,
   pub executions: Arc<RecordStore<Execution>>,
   pub workflows:  Arc<RecordStore<Workflow>>,
   pub users:      Arc<RecordStore<User>>,
}

impl AppState {
   pub fn new(codec: PaginationCodec, dataset: Dataset) -> Self {
      let Dataset {
         executions,
         workflows,
         users,
      } = dataset;

      Self {
         codec,
         executions: Arc::new(RecordStore::new(executions)),
         workflows: Arc::new(RecordStore::new(workflows)),
         users: Arc::new(RecordStore::new(users)),
      }
   }
}

impl FromRef<AppState> for PaginationCodec {
   fn from_ref(state: &AppState) -> Self {
      state.codec
   }
}
