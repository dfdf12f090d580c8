//! Sheet Reducer Module
//!
//! シート全体を出力単位（配列またはオブジェクト）に変換するモジュール。
//! 行0はヘッダー行、行1は予約行として常にスキップされます。

use indexmap::IndexMap;

use crate::api::OutputShape;
use crate::mapper::map_row;
use crate::types::{OutputUnit, Record, Sheet};

/// データ行の開始位置（行0: ヘッダー、行1: 予約行）
const FIRST_DATA_ROW: usize = 2;

/// シートの出力名を決定
///
/// ヘッダー行の先頭セルのテキスト、空の場合はシート名を使用します。
///
/// # 戻り値
///
/// * `Some(String)` - 出力名
/// * `None` - 行が存在しない、またはヘッダー行にセルがない場合
pub(crate) fn output_name(sheet: &Sheet) -> Option<String> {
    let header = sheet.header()?;
    let first = header.text_at(0)?;

    if first.is_empty() {
        Some(sheet.name.clone())
    } else {
        Some(first.to_string())
    }
}

/// シートを配列形式に変換
///
/// キー列（位置0）が空の行は除外されます。空のレコードも含まれません。
/// 結果の順序は行の順序に従います。
pub(crate) fn sheet_to_array(sheet: &Sheet) -> Vec<Record> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };

    sheet
        .rows
        .iter()
        .skip(FIRST_DATA_ROW)
        .filter(|row| matches!(row.text_at(0), Some(key) if !key.is_empty()))
        .map(|row| map_row(row, header))
        .filter(|record| !record.is_empty())
        .collect()
}

/// シートをオブジェクト形式（キー → レコード）に変換
///
/// キーが空の行はスキップされます。同じキーが複数ある場合は後の行で上書きされます。
pub(crate) fn sheet_to_object(sheet: &Sheet) -> IndexMap<String, Record> {
    let mut map = IndexMap::new();
    let Some(header) = sheet.header() else {
        return map;
    };

    for row in sheet.rows.iter().skip(FIRST_DATA_ROW) {
        let key = match row.text_at(0) {
            Some(key) if !key.is_empty() => key,
            _ => continue,
        };

        let record = map_row(row, header);
        if !record.is_empty() {
            map.insert(key.to_string(), record);
        }
    }

    map
}

/// シートを出力名と出力単位のペアに変換
///
/// ヘッダー行がないシートは`None`を返します。
pub(crate) fn reduce_sheet(sheet: &Sheet, shape: OutputShape) -> Option<(String, OutputUnit)> {
    let name = output_name(sheet)?;

    let unit = match shape {
        OutputShape::Array => OutputUnit::Array(sheet_to_array(sheet)),
        OutputShape::Object => OutputUnit::Object(sheet_to_object(sheet)),
    };

    Some((name, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, CellValue, Row};
    use serde_json::json;

    fn texts(values: &[&str]) -> Row {
        values.iter().map(|value| Cell::text(*value)).collect()
    }

    /// ID/Name/Scoreの基本シート
    fn score_sheet() -> Sheet {
        Sheet::new(
            "Sheet1",
            vec![
                texts(&["ID", "Name", "Score"]),
                texts(&["", "", ""]),
                Row::new(vec![Cell::text("u1"), Cell::text("Alice"), Cell::numeric("95")]),
                Row::new(vec![Cell::text("u2"), Cell::text("Bob"), Cell::empty()]),
            ],
        )
    }

    #[test]
    fn test_output_name_from_header() {
        assert_eq!(output_name(&score_sheet()), Some("ID".to_string()));
    }

    #[test]
    fn test_output_name_falls_back_to_sheet_name() {
        let sheet = Sheet::new("Items", vec![texts(&["", "Name"])]);
        assert_eq!(output_name(&sheet), Some("Items".to_string()));
    }

    #[test]
    fn test_output_name_none_without_header() {
        assert_eq!(output_name(&Sheet::new("Empty", Vec::new())), None);
        assert_eq!(output_name(&Sheet::new("Blank", vec![Row::default()])), None);
    }

    #[test]
    fn test_object_mode_scenario() {
        let map = sheet_to_object(&score_sheet());
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({"u1": {"Name": "Alice", "Score": 95}, "u2": {"Name": "Bob", "Score": ""}})
        );
    }

    #[test]
    fn test_array_mode_scenario() {
        let records = sheet_to_array(&score_sheet());
        assert_eq!(
            serde_json::to_value(&records).unwrap(),
            json!([{"Name": "Alice", "Score": 95}, {"Name": "Bob", "Score": ""}])
        );
    }

    #[test]
    fn test_reserved_row_is_always_skipped() {
        let sheet = Sheet::new(
            "Sheet1",
            vec![
                texts(&["ID", "Name"]),
                texts(&["r1", "looks like data"]),
                texts(&["u1", "Alice"]),
            ],
        );

        let map = sheet_to_object(&sheet);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("u1"));
        assert_eq!(sheet_to_array(&sheet).len(), 1);
    }

    #[test]
    fn test_empty_key_row_is_excluded_in_both_modes() {
        let mut sheet = score_sheet();
        sheet.rows.push(Row::new(vec![
            Cell::empty(),
            Cell::text("Carl"),
            Cell::numeric("10"),
        ]));

        let array = sheet_to_array(&sheet);
        assert_eq!(array.len(), 2);
        assert!(array
            .iter()
            .all(|record| record["Name"] != CellValue::Text("Carl".to_string())));

        let map = sheet_to_object(&sheet);
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(""));
    }

    #[test]
    fn test_rows_without_cells_are_skipped() {
        let mut sheet = score_sheet();
        sheet.rows.insert(2, Row::default());

        assert_eq!(sheet_to_array(&sheet).len(), 2);
        assert_eq!(sheet_to_object(&sheet).len(), 2);
    }

    #[test]
    fn test_empty_records_are_not_emitted() {
        let sheet = Sheet::new(
            "Sheet1",
            vec![
                texts(&["ID", "", "Score"]),
                texts(&["", "", ""]),
                texts(&["u1", "Alice", "1"]),
            ],
        );

        assert!(sheet_to_array(&sheet).is_empty());
        assert!(sheet_to_object(&sheet).is_empty());
    }

    #[test]
    fn test_object_mode_duplicate_key_last_write_wins() {
        let mut sheet = score_sheet();
        sheet.rows.push(Row::new(vec![
            Cell::text("u1"),
            Cell::text("Alice2"),
            Cell::numeric("1"),
        ]));

        let map = sheet_to_object(&sheet);
        assert_eq!(map.len(), 2);
        assert_eq!(map["u1"]["Name"], CellValue::Text("Alice2".to_string()));
        assert_eq!(map["u1"]["Score"], CellValue::Number(1.0));
    }

    #[test]
    fn test_array_mode_keeps_duplicates_in_row_order() {
        let mut sheet = score_sheet();
        sheet.rows.push(texts(&["u1", "Again", ""]));

        let array = sheet_to_array(&sheet);
        assert_eq!(array.len(), 3);
        assert_eq!(array[2]["Name"], CellValue::Text("Again".to_string()));
    }

    #[test]
    fn test_reduce_sheet_shapes() {
        let sheet = score_sheet();

        let (name, unit) = reduce_sheet(&sheet, OutputShape::Array).unwrap();
        assert_eq!(name, "ID");
        assert!(matches!(unit, OutputUnit::Array(ref records) if records.len() == 2));

        let (_, unit) = reduce_sheet(&sheet, OutputShape::Object).unwrap();
        assert!(matches!(unit, OutputUnit::Object(ref map) if map.len() == 2));

        assert!(reduce_sheet(&Sheet::new("Empty", Vec::new()), OutputShape::Object).is_none());
    }

    #[test]
    fn test_header_only_sheet_gives_empty_unit() {
        let sheet = Sheet::new("Sheet1", vec![texts(&["Hero", "Name"])]);
        let (name, unit) = reduce_sheet(&sheet, OutputShape::Object).unwrap();
        assert_eq!(name, "Hero");
        assert!(unit.is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// キーが空でない行について、配列形式とオブジェクト形式は
            /// 同じレコードを生成する（キーが重複しない場合）
            #[test]
            fn array_and_object_agree_on_non_empty_keys(
                keys in proptest::collection::vec(prop_oneof![Just(String::new()), "[a-z]{1,4}"], 0..12),
            ) {
                let mut rows = vec![texts(&["ID", "Value"]), texts(&["", ""])];
                let mut seen = std::collections::HashSet::new();
                for (i, key) in keys.iter().enumerate() {
                    if !key.is_empty() && !seen.insert(key.clone()) {
                        continue;
                    }
                    rows.push(Row::new(vec![Cell::text(key.clone()), Cell::numeric(i.to_string())]));
                }
                let sheet = Sheet::new("Sheet1", rows);

                let array = sheet_to_array(&sheet);
                let object = sheet_to_object(&sheet);

                prop_assert_eq!(array.len(), object.len());
                let object_records: Vec<&Record> = object.values().collect();
                let array_records: Vec<&Record> = array.iter().collect();
                prop_assert_eq!(array_records, object_records);
            }
        }
    }
}
