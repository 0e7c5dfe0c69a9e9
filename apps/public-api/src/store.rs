//! # インメモリのレコードストア
//!
//! 一覧エンドポイントの検索と件数算出を担当する。
//!
//! ## 並び順
//!
//! レコードは ID の昇順で保持する。
//! 数値として解釈できる ID は数値として比較し（`"9" < "10"`）、
//! それ以外の ID は数値 ID の後ろに文字列順で並べる。
//! 同じ数値になる ID（`"07"` と `"7"`）は文字列順で並べ、異なる ID が
//! 等しいと判定されることはない。
//!
//! ## 件数
//!
//! | 方式 | 件数 |
//! |------|------|
//! | オフセット | フィルタに一致する全レコード数 |
//! | カーソル | 今回返した最終レコードより後ろの、フィルタに一致するレコード数 |

use std::cmp::Ordering;

use flowgate_shared::{PaginationRequest, RecordCount};

/// ID を持つレコード
pub trait Keyed {
   fn key(&self) -> &str;
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum KeyOrder<'a> {
   Numeric(u64),
   Text(&'a str),
}

impl<'a> KeyOrder<'a> {
   fn of(key: &'a str) -> Self {
      match key.parse() {
         Ok(n) => Self::Numeric(n),
         Err(_) => Self::Text(key),
      }
   }
}

/// ID の並び順で比較する
pub fn compare_keys(a: &str, b: &str) -> Ordering {
   KeyOrder::of(a)
      .cmp(&KeyOrder::of(b))
      .then_with(|| a.cmp(b))
}

/// ストアの検索結果
#[derive(Debug, Clone, PartialEq)]
pub struct StorePage<T> {
   pub items: Vec<T>,
   pub count: RecordCount,
}

/// ID 昇順のレコードストア
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
   records: Vec<T>,
}

impl<T: Keyed + Clone> RecordStore<T> {
   pub fn new(records: impl IntoIterator<Item = T>) -> Self {
      let mut records: Vec<T> = records.into_iter().collect();
      records.sort_by(|a, b| compare_keys(a.key(), b.key()));
      Self { records }
   }

   pub fn len(&self) -> usize {
      self.records.len()
   }

   pub fn is_empty(&self) -> bool {
      self.records.is_empty()
   }

   /// ページ指定とフィルタでレコードを検索する
   ///
   /// 件数はリクエストの方式に対応する [`RecordCount`] で返す。
   pub fn find_page(
      &self,
      request: &PaginationRequest,
      filter: impl Fn(&T) -> bool,
   ) -> StorePage<T> {
      let limit = request.limit().get() as usize;
      let matching = self.records.iter().filter(|record| filter(record));

      match request {
         PaginationRequest::Offset(page) => {
            let matching: Vec<&T> = matching.collect();
            let total = matching.len() as u64;
            let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
            let items = matching.into_iter().skip(offset).take(limit).cloned().collect();

            StorePage {
               items,
               count: RecordCount::Total(total),
            }
         }
         PaginationRequest::Cursor(page) => {
            let mut after = matching.filter(|record| {
               compare_keys(record.key(), page.last_id.as_str()) == Ordering::Greater
            });
            let items: Vec<T> = after.by_ref().take(limit).cloned().collect();
            let next = after.count() as u64;

            StorePage {
               items,
               count: RecordCount::Next(next),
            }
         }
      }
   }
}
