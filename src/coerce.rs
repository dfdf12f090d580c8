//! Cell Coercion Module
//!
//! セルの宣言型に基づいて、生のテキストを型付きの値に変換するモジュール。
//! 変換は失敗しません。数値の解析に失敗した場合は0に置き換えます。

use crate::types::{Cell, CellKind, CellValue};

/// セル変換の結果
///
/// 解析に成功した値と、既定値に置き換えた値を区別します。
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Coercion {
    /// 宣言型どおりに変換できた
    Coerced(CellValue),

    /// 数値の解析に失敗し、既定値に置き換えた
    Defaulted {
        /// 解析できなかった生のテキスト
        raw: String,
        /// 置き換えた値（常に`Number(0.0)`）
        value: CellValue,
    },
}

impl Coercion {
    /// 変換後の値を取り出す
    pub fn into_value(self) -> CellValue {
        match self {
            Coercion::Coerced(value) => value,
            Coercion::Defaulted { value, .. } => value,
        }
    }

    #[cfg(test)]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coercion::Defaulted { .. })
    }
}

/// セルを型付きの値に変換
///
/// # 変換規則
///
/// - 論理値セル: `"1"`または`"true"`（大文字小文字を区別しない）を`true`
/// - 数値セル: `f64`として解析。失敗した場合、または有限値でない場合は`0`
/// - それ以外: 生のテキスト（空文字列を含む）
pub(crate) fn coerce_cell(cell: &Cell) -> CellValue {
    coerce_cell_outcome(cell).into_value()
}

/// セルを変換し、既定値への置き換えが起きたかどうかも返す
pub(crate) fn coerce_cell_outcome(cell: &Cell) -> Coercion {
    match cell.kind {
        CellKind::Bool => Coercion::Coerced(CellValue::Bool(parse_bool(&cell.text))),
        CellKind::Numeric => match cell.text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Coercion::Coerced(CellValue::Number(n)),
            _ => {
                log::debug!("numeric cell {:?} is not a number, using 0", cell.text);
                Coercion::Defaulted {
                    raw: cell.text.clone(),
                    value: CellValue::Number(0.0),
                }
            }
        },
        CellKind::Text => Coercion::Coerced(CellValue::Text(cell.text.clone())),
    }
}

fn parse_bool(text: &str) -> bool {
    text == "1" || text.eq_ignore_ascii_case("true")
}
