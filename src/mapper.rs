//! Row Mapper Module
//!
//! ヘッダー行をフィールド名として、1データ行をレコードに変換するモジュール。

use crate::coerce::coerce_cell;
use crate::types::{Record, Row};

/// データ行をレコードに変換
///
/// 位置0（キー列）は常にスキップし、位置1から順にヘッダー行の同じ位置の
/// テキストをフィールド名として値を格納します。
///
/// - フィールド名が空、またはヘッダー行の範囲外の位置に達した時点で処理を打ち切ります。
///   それ以降の列は値があっても含まれません。
/// - データ行がヘッダーより短い場合、存在する位置のみを処理します（null補完なし）。
/// - 同じフィールド名が複数ある場合は、後の列の値で上書きされます。
///
/// # 引数
///
/// * `row` - データ行
/// * `header` - ヘッダー行（シートの行0）
pub(crate) fn map_row(row: &Row, header: &Row) -> Record {
    let mut record = Record::new();

    for (index, cell) in row.cells.iter().enumerate().skip(1) {
        let field = match header.text_at(index) {
            Some(name) if !name.is_empty() => name,
            _ => break,
        };

        record.insert(field.to_string(), coerce_cell(cell));
    }

    record
}
