//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// JSONで整数として安全に表現できる最大値（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// セルの宣言型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// 論理値セル
    Bool,

    /// 数値セル（日付シリアル値を含む）
    Numeric,

    /// 文字列セル、エラー値、空セル
    Text,
}

/// ワークブックから読み込んだ1セル
///
/// 宣言型と生のテキストを保持します。値の型付けは変換時に行います。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// 宣言型
    pub kind: CellKind,

    /// 生のテキスト（空セルの場合は空文字列）
    pub text: String,
}

impl Cell {
    /// 新しいセルを生成
    pub fn new(kind: CellKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// 文字列セルを生成
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(CellKind::Text, text)
    }

    /// 数値セルを生成
    pub fn numeric(text: impl Into<String>) -> Self {
        Self::new(CellKind::Numeric, text)
    }

    /// 論理値セルを生成（XLSXの格納形式に合わせて`"1"`/`"0"`）
    pub fn boolean(value: bool) -> Self {
        Self::new(CellKind::Bool, if value { "1" } else { "0" })
    }

    /// 空セルを生成
    pub fn empty() -> Self {
        Self::text(String::new())
    }

    /// テキストが空かどうか
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 1行分のセル
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// 位置`index`のセルのテキスト（範囲外は`None`）
    pub fn text_at(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|cell| cell.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// シート
///
/// 行0はヘッダー行（先頭セルが出力名、2列目以降がフィールド名）、
/// 行1は予約行で常にスキップされます。データ行は行2から始まります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// シート名（出力名のフォールバック）
    pub name: String,

    /// 行（絶対位置。行0はA1の行）
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// ヘッダー行（行0）
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// ワークブック
///
/// 変換タスクが排他的に所有し、変換完了後に破棄されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    /// ワークブック名（ファイル名から拡張子を除いたもの）
    pub name: String,

    /// シート（ワークブック内の順序）
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(name: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            name: name.into(),
            sheets,
        }
    }
}

/// 型付けされたセル値
///
/// 整数値の数値は`95.0`ではなく`95`としてシリアライズされます。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// 1データ行から作られるレコード（フィールド名 → 値）
///
/// キーの順序はヘッダーの列順ですが、利用側はこの順序に依存すべきではありません。
pub type Record = IndexMap<String, CellValue>;

/// 1つのJSONファイルに対応する出力単位
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputUnit {
    /// 配列形式（行順）
    Array(Vec<Record>),

    /// オブジェクト形式（キー → レコード）
    Object(IndexMap<String, Record>),

    /// シングルファイル形式（出力名 → シートの出力単位）
    Merged(IndexMap<String, OutputUnit>),
}

impl OutputUnit {
    /// 要素数（配列の長さ、またはキーの数）
    pub fn len(&self) -> usize {
        match self {
            OutputUnit::Array(records) => records.len(),
            OutputUnit::Object(map) => map.len(),
            OutputUnit::Merged(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
