//! # ページネーションコーデック
//!
//! クエリパラメータ → [`PaginationRequest`] のデコードと、
//! ページのレコード + 件数 → [`PaginatedResponse`] のエンコードを行う。
//!
//! 状態を持たない純粋な変換のため、リクエスト処理スレッド間で
//! 自由にコピーして共有できる。

use super::{
   config::PaginationConfig,
   error::{DecodeError, EncodeError},
   query::{PaginationQuery, QueryValue},
   request::{CursorId, CursorPage, OffsetPage, PageLimit, PaginationRequest},
   response::{CursorResult, OffsetResult, PaginatedResponse, PaginationResponse, RecordCount},
};

/// ページネーションコーデック
///
/// ## 使用例
///
/// ```
/// use flowgate_shared::{PaginationCodec, PaginationQuery, RecordCount};
///
/// let codec = PaginationCodec::default();
/// let request = codec
///    .decode(PaginationQuery::new().limit("50").offset("10"))
///    .unwrap();
/// let response = codec
///    .encode(request, vec!["a", "b"], RecordCount::Total(230))
///    .unwrap();
///
/// assert_eq!(response.pagination.limit().get(), 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationCodec {
   config: PaginationConfig,
}

impl PaginationCodec {
   pub fn new(config: PaginationConfig) -> Self {
      Self { config }
   }

   pub fn config(&self) -> &PaginationConfig {
      &self.config
   }

   /// クエリパラメータをページ指定にデコードする
   ///
   /// - `offset` とカーソル（`cursor` / `lastId`）の併用は値に関わらず
   ///   [`DecodeError::ConflictingCursor`]
   /// - どちらも未指定なら `offset = 0` のオフセット方式
   /// - `limit` 未指定なら設定のデフォルト値
   pub fn decode(&self, query: PaginationQuery) -> Result<PaginationRequest, DecodeError> {
      let PaginationQuery {
         limit,
         offset,
         cursor,
         last_id,
      } = query;

      let cursor = match (cursor, last_id) {
         (Some(_), Some(_)) => {
            return Err(DecodeError::ConflictingCursor {
               first:  "cursor",
               second: "lastId",
            });
         }
         (Some(value), None) => Some(("cursor", value)),
         (None, Some(value)) => Some(("lastId", value)),
         (None, None) => None,
      };

      if let (Some(_), Some((name, _))) = (&offset, &cursor) {
         return Err(DecodeError::ConflictingCursor {
            first:  "offset",
            second: *name,
         });
      }

      let limit = self.decode_limit(limit)?;

      match (offset, cursor) {
         (_, Some((_, value))) => {
            let last_id = CursorId::new(value.into_text())?;
            Ok(CursorPage::new(limit, last_id).into())
         }
         (Some(value), None) => Ok(OffsetPage::new(limit, decode_offset(value)?).into()),
         (None, None) => Ok(OffsetPage::new(limit, 0).into()),
      }
   }

   /// ページのレコードと件数をレスポンスにエンコードする
   ///
   /// 件数は呼び出し側（ストレージ層）が算出した値をそのまま使用する。
   /// リクエストの方式と件数の種別が一致しない場合は
   /// [`EncodeError::VariantMismatch`] を返す。
   pub fn encode<T>(
      &self,
      request: PaginationRequest,
      items: Vec<T>,
      count: RecordCount,
   ) -> Result<PaginatedResponse<T>, EncodeError> {
      let pagination = match (request, count) {
         (PaginationRequest::Offset(page), RecordCount::Total(total)) => {
            PaginationResponse::Offset(OffsetResult {
               limit: page.limit,
               offset: page.offset,
               number_of_total_records: total,
            })
         }
         (PaginationRequest::Cursor(page), RecordCount::Next(next)) => {
            PaginationResponse::Cursor(CursorResult {
               limit: page.limit,
               last_id: page.last_id,
               number_of_next_records: next,
            })
         }
         (request, count) => {
            return Err(EncodeError::VariantMismatch {
               request: request.mode(),
               count:   count.mode(),
            });
         }
      };

      Ok(PaginatedResponse {
         data: items,
         pagination,
         next_cursor: None,
      })
   }

   fn decode_limit(&self, value: Option<QueryValue>) -> Result<PageLimit, DecodeError> {
      let Some(value) = value else {
         return Ok(self.config.default_limit);
      };

      let limit = value
         .as_u64()
         .and_then(|n| u32::try_from(n).ok())
         .and_then(PageLimit::new)
         .filter(|limit| self.config.max_limit.is_none_or(|max| *limit <= max));

      limit.ok_or_else(|| DecodeError::InvalidLimit {
         value: value.to_string(),
      })
   }
}

fn decode_offset(value: QueryValue) -> Result<u64, DecodeError> {
   value
      .as_u64()
      .ok_or_else(|| DecodeError::InvalidOffset {
         value: value.to_string(),
      })
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;
   use crate::pagination::request::PaginationMode;

   fn limit(value: u32) -> PageLimit {
      PageLimit::new(value).unwrap()
   }

   fn cursor_id(value: &str) -> CursorId {
      CursorId::new(value).unwrap()
   }

   fn codec_with_max(max: u32) -> PaginationCodec {
      PaginationCodec::new(PaginationConfig {
         default_limit: limit(10),
         max_limit:     Some(limit(max)),
      })
   }

   // ===== decode: 正常系 =====

   #[test]
   fn test_limitとoffsetの文字列をオフセット方式にデコードする() {
      let request = PaginationCodec::default()
         .decode(PaginationQuery::new().limit("50").offset("10"))
         .unwrap();

      assert_eq!(request, PaginationRequest::from(OffsetPage::new(limit(50), 10)));
   }

   #[test]
   fn test_有効なlimitとoffsetの組み合わせはそのままデコードされる() {
      let codec = PaginationCodec::default();

      for limit_value in [1_i64, 2, 50, 100, 250, 10_000, i64::from(u32::MAX)] {
         for offset in [0_i64, 1, 99, 1_000_000, i64::MAX] {
            let request = codec
               .decode(PaginationQuery::new().limit(limit_value).offset(offset))
               .unwrap();

            assert_eq!(
               request,
               PaginationRequest::from(OffsetPage::new(limit(limit_value as u32), offset as u64))
            );
         }
      }
   }

   #[rstest]
   #[case("abc123")]
   #[case("1")]
   #[case("0")]
   #[case("-1")]
   #[case("  ")]
   #[case("eyJsYXN0SWQiOiIxMCJ9")]
   fn test_有効なlimitと空でないカーソルはカーソル方式にデコードされる(#[case] last_id: &str) {
      let codec = PaginationCodec::default();

      let via_cursor = codec
         .decode(PaginationQuery::new().limit("25").cursor(last_id))
         .unwrap();
      let via_last_id = codec
         .decode(PaginationQuery::new().limit(25_i64).last_id(last_id))
         .unwrap();

      let expected: PaginationRequest = CursorPage::new(limit(25), cursor_id(last_id)).into();
      assert_eq!(via_cursor, expected);
      assert_eq!(via_last_id, expected);
   }

   #[test]
   fn test_limit未指定のカーソルはデフォルトlimit100を使う() {
      let request = PaginationCodec::default()
         .decode(PaginationQuery::new().cursor("abc123"))
         .unwrap();

      assert_eq!(
         request,
         PaginationRequest::from(CursorPage::new(limit(100), cursor_id("abc123")))
      );
   }

   #[test]
   fn test_何も指定しない場合は先頭ページになる() {
      let request = PaginationCodec::default()
         .decode(PaginationQuery::new())
         .unwrap();

      assert_eq!(request, PaginationRequest::from(OffsetPage::new(limit(100), 0)));
   }

   #[test]
   fn test_設定のデフォルトlimitを使う() {
      let request = codec_with_max(50).decode(PaginationQuery::new()).unwrap();

      assert_eq!(request.limit().get(), 10);
   }

   #[test]
   fn test_数値のカーソルは文字列として扱う() {
      let request = PaginationCodec::default()
         .decode(PaginationQuery::new().last_id(42_i64))
         .unwrap();

      assert_eq!(request.last_id(), Some(&cursor_id("42")));
   }

   #[test]
   fn test_小数部が0の数値limitを受け付ける() {
      let query = PaginationQuery {
         limit: Some(QueryValue::Float(20.0)),
         ..PaginationQuery::default()
      };

      assert_eq!(
         PaginationCodec::default().decode(query).unwrap().limit().get(),
         20
      );
   }

   #[test]
   fn test_上限と同じlimitは受け付ける() {
      let request = codec_with_max(50)
         .decode(PaginationQuery::new().limit("50"))
         .unwrap();

      assert_eq!(request.limit().get(), 50);
   }

   // ===== decode: 異常系 =====

   #[rstest]
   #[case(PaginationQuery::new().offset("10").cursor("abc"))]
   #[case(PaginationQuery::new().limit("50").offset("0").cursor("abc"))]
   #[case(PaginationQuery::new().limit("0").offset("-1").cursor(""))]
   #[case(PaginationQuery::new().limit("abc").offset("xyz").last_id("abc"))]
   fn test_offsetとカーソルの併用は値に関わらず競合エラー(#[case] query: PaginationQuery) {
      let result = PaginationCodec::default().decode(query);

      assert!(matches!(
         result,
         Err(DecodeError::ConflictingCursor {
            first: "offset",
            ..
         })
      ));
   }

   #[test]
   fn test_cursorとlast_idの併用は競合エラー() {
      let result =
         PaginationCodec::default().decode(PaginationQuery::new().cursor("a").last_id("a"));

      assert_eq!(
         result,
         Err(DecodeError::ConflictingCursor {
            first:  "cursor",
            second: "lastId",
         })
      );
   }

   #[rstest]
   #[case(QueryValue::from("0"))]
   #[case(QueryValue::from("-5"))]
   #[case(QueryValue::from(0_i64))]
   #[case(QueryValue::from(-5_i64))]
   #[case(QueryValue::from("abc"))]
   #[case(QueryValue::from(""))]
   #[case(QueryValue::from("2.5"))]
   #[case(QueryValue::Float(2.5))]
   #[case(QueryValue::from("4294967296"))]
   fn test_不正なlimitはinvalid_limit(#[case] value: QueryValue) {
      let expected = value.to_string();
      let query = PaginationQuery {
         limit: Some(value),
         ..PaginationQuery::default()
      };

      assert_eq!(
         PaginationCodec::default().decode(query),
         Err(DecodeError::InvalidLimit { value: expected })
      );
   }

   #[test]
   fn test_上限を超えるlimitはinvalid_limit() {
      let result = codec_with_max(50).decode(PaginationQuery::new().limit("51"));

      assert_eq!(
         result,
         Err(DecodeError::InvalidLimit {
            value: "51".to_string(),
         })
      );
   }

   #[rstest]
   #[case(QueryValue::from("9223372036854775808"), 9_223_372_036_854_775_808)]
   #[case(QueryValue::from("18446744073709551615"), u64::MAX)]
   #[case(QueryValue::from(i64::MAX), i64::MAX as u64)]
   fn test_u64の範囲のoffsetはそのままデコードされる(
      #[case] value: QueryValue,
      #[case] expected: u64,
   ) {
      let query = PaginationQuery {
         offset: Some(value),
         ..PaginationQuery::default()
      };

      assert_eq!(
         PaginationCodec::default().decode(query),
         Ok(PaginationRequest::from(OffsetPage::new(limit(100), expected)))
      );
   }

   #[rstest]
   #[case(QueryValue::from("-1"))]
   #[case(QueryValue::from(-1_i64))]
   #[case(QueryValue::from("ten"))]
   #[case(QueryValue::from(""))]
   #[case(QueryValue::from("18446744073709551616"))]
   fn test_不正なoffsetはinvalid_offset(#[case] value: QueryValue) {
      let expected = value.to_string();
      let query = PaginationQuery {
         offset: Some(value),
         ..PaginationQuery::default()
      };

      assert_eq!(
         PaginationCodec::default().decode(query),
         Err(DecodeError::InvalidOffset { value: expected })
      );
   }

   #[test]
   fn test_空のカーソルはinvalid_cursor() {
      let result = PaginationCodec::default().decode(PaginationQuery::new().cursor(""));

      assert_eq!(result, Err(DecodeError::InvalidCursor));
   }

   #[test]
   fn test_limitの検証はカーソルの検証より先に行う() {
      let result =
         PaginationCodec::default().decode(PaginationQuery::new().limit("0").cursor(""));

      assert!(matches!(result, Err(DecodeError::InvalidLimit { .. })));
   }

   #[test]
   fn test_u32を超えるlimitは範囲外としてinvalid_limit() {
      let result = PaginationCodec::default().decode(PaginationQuery::new().limit("4294967296"));

      let Err(error) = result else {
         panic!("limit=4294967296 はエラーになること");
      };
      assert_eq!(
         error,
         DecodeError::InvalidLimit {
            value: "4294967296".to_string(),
         }
      );
      assert!(error.to_string().contains("範囲外"));
   }

   // ===== スレッド間共有 =====

   fn assert_send_sync<T: Send + Sync>() {}

   #[test]
   fn test_コーデックとページ型はスレッド間で共有できる() {
      assert_send_sync::<PaginationCodec>();
      assert_send_sync::<PaginationQuery>();
      assert_send_sync::<PaginationRequest>();
      assert_send_sync::<PaginationResponse>();
      assert_send_sync::<PaginatedResponse<()>>();
      assert_send_sync::<DecodeError>();
      assert_send_sync::<EncodeError>();
   }

   // ===== encode =====

   #[test]
   fn test_オフセット方式のエンコードは全件数を設定する() {
      let codec = PaginationCodec::default();
      let request = codec
         .decode(PaginationQuery::new().limit("50").offset("10"))
         .unwrap();
      let items: Vec<u32> = (0..23).collect();

      let response = codec
         .encode(request, items, RecordCount::Total(230))
         .unwrap();

      assert_eq!(response.data.len(), 23);
      assert_eq!(
         response.pagination,
         PaginationResponse::Offset(OffsetResult {
            limit: limit(50),
            offset: 10,
            number_of_total_records: 230,
         })
      );
      assert_eq!(response.next_cursor, None);
   }

   #[test]
   fn test_カーソル方式のエンコードは後続件数を設定する() {
      let codec = PaginationCodec::default();
      let request: PaginationRequest = CursorPage::new(limit(2), cursor_id("5")).into();

      let response = codec
         .encode(request, vec!["6", "7"], RecordCount::Next(3))
         .unwrap();

      assert_eq!(
         response.pagination,
         PaginationResponse::Cursor(CursorResult {
            limit: limit(2),
            last_id: cursor_id("5"),
            number_of_next_records: 3,
         })
      );
   }

   #[test]
   fn test_件数はレコード数から再計算しない() {
      let request = PaginationRequest::default();

      let response = PaginationCodec::default()
         .encode(request, Vec::<u8>::new(), RecordCount::Total(999))
         .unwrap();

      assert!(response.data.is_empty());
      assert!(matches!(
         response.pagination,
         PaginationResponse::Offset(OffsetResult {
            number_of_total_records: 999,
            ..
         })
      ));
   }

   #[rstest]
   #[case(
      PaginationRequest::default(),
      RecordCount::Next(1),
      PaginationMode::Offset,
      PaginationMode::Cursor
   )]
   #[case(
      CursorPage::new(limit(10), cursor_id("a")).into(),
      RecordCount::Total(1),
      PaginationMode::Cursor,
      PaginationMode::Offset
   )]
   fn test_方式が一致しない件数はvariant_mismatch(
      #[case] request: PaginationRequest,
      #[case] count: RecordCount,
      #[case] expected_request: PaginationMode,
      #[case] expected_count: PaginationMode,
   ) {
      let result = PaginationCodec::default().encode(request, vec![()], count);

      assert_eq!(
         result,
         Err(EncodeError::VariantMismatch {
            request: expected_request,
            count:   expected_count,
         })
      );
   }

   #[rstest]
   #[case(PaginationQuery::new().limit("50").offset("10"), RecordCount::Total(230))]
   #[case(PaginationQuery::new().offset(0_i64), RecordCount::Total(0))]
   #[case(PaginationQuery::new().limit(5_i64).cursor("wf-10"), RecordCount::Next(7))]
   #[case(PaginationQuery::new().last_id("u-1"), RecordCount::Next(0))]
   fn test_デコード結果をエンコードするとリクエストのフィールドと件数が引き継がれる(
      #[case] query: PaginationQuery,
      #[case] count: RecordCount,
   ) {
      let codec = PaginationCodec::default();
      let request = codec.decode(query).unwrap();

      let response = codec
         .encode(request.clone(), vec!["x"], count)
         .unwrap();

      assert_eq!(response.pagination.limit(), request.limit());
      match (&request, &response.pagination, count) {
         (PaginationRequest::Offset(page), PaginationResponse::Offset(result), RecordCount::Total(n)) => {
            assert_eq!(result.offset, page.offset);
            assert_eq!(result.number_of_total_records, n);
         }
         (PaginationRequest::Cursor(page), PaginationResponse::Cursor(result), RecordCount::Next(n)) => {
            assert_eq!(result.last_id, page.last_id);
            assert_eq!(result.number_of_next_records, n);
         }
         other => panic!("方式が一致しない: {other:?}"),
      }
   }

   #[test]
   fn test_エンコード結果のjsonは公開apiの形状になる() {
      let codec = PaginationCodec::default();
      let request = codec
         .decode(PaginationQuery::new().limit("50").offset("10"))
         .unwrap();
      let items: Vec<u32> = (0..23).collect();

      let response = codec
         .encode(request, items, RecordCount::Total(230))
         .unwrap();
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(json["limit"], 50);
      assert_eq!(json["offset"], 10);
      assert_eq!(json["numberOfTotalRecords"], 230);
      assert_eq!(json["data"].as_array().unwrap().len(), 23);
      assert!(json.get("nextCursor").is_none());
   }
}
