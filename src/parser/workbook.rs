//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックを開き、各シートを`Sheet`に変換します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::error::XlsxToJsonError;
use crate::security::SecurityConfig;
use crate::types::{Cell, Row, Sheet, Workbook};

/// ワークブックパーサー
///
/// XLSX / XLSM / XLSB / XLS / ODS をcalamineの自動判定で開きます。
pub(crate) struct WorkbookParser<RS: Read + Seek> {
    /// calamineのワークブック
    workbook: Sheets<RS>,
    /// ワークブック名（シングルファイル形式の出力名）
    name: String,
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// ファイルパスからワークブックを開く
    ///
    /// ワークブック名にはファイル名から拡張子を除いたものを使用します。
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - 読み込みに成功した場合
    /// * `Err(XlsxToJsonError)` - ファイルが存在しない、サイズ上限を超える、
    ///   またはワークブックとして解析できない場合
    pub fn open_path(path: &Path) -> Result<Self, XlsxToJsonError> {
        let file = File::open(path)?;

        // 読み込む前にサイズを確認
        let size = file.metadata()?.len();
        SecurityConfig::default()
            .check_input_size(size)
            .map_err(XlsxToJsonError::SecurityViolation)?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::open_reader(name, file)
    }

    /// リーダーからワークブックを開く
    ///
    /// # 引数
    ///
    /// * `name` - ワークブック名
    /// * `reader` - ワークブックのバイト列を読み込むリーダー
    pub fn open_reader<R: Read>(
        name: impl Into<String>,
        mut reader: R,
    ) -> Result<Self, XlsxToJsonError> {
        let security_config = SecurityConfig::default();

        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security_config
            .check_input_size(bytes_read as u64)
            .map_err(XlsxToJsonError::SecurityViolation)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;

        Ok(WorkbookParser {
            workbook,
            name: name.into(),
        })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// すべてのシート名を取得（ワークブック内の順序）
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シートを読み込む
    pub fn parse_sheet(&mut self, sheet_name: &str) -> Result<Sheet, XlsxToJsonError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(sheet_from_range(sheet_name, &range))
    }

    /// すべてのシートを読み込み、`Workbook`を生成する
    pub fn into_workbook(mut self) -> Result<Workbook, XlsxToJsonError> {
        let mut sheets = Vec::new();
        for sheet_name in self.sheet_names() {
            sheets.push(self.parse_sheet(&sheet_name)?);
        }

        log::debug!("loaded workbook '{}' ({} sheets)", self.name, sheets.len());
        Ok(Workbook::new(self.name, sheets))
    }
}

/// calamineの範囲をシートに変換
///
/// calamineの範囲は使用中のセルの左上から始まるため、A1を原点とする
/// 絶対位置に戻します。範囲より上の行はセルなし、範囲内の行は
/// 列0から最終使用列まで空セルで埋めます。
fn sheet_from_range(sheet_name: &str, range: &Range<Data>) -> Sheet {
    let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
    else {
        return Sheet::new(sheet_name, Vec::new());
    };

    let mut rows = Vec::with_capacity(end_row as usize + 1);
    rows.extend((0..start_row).map(|_| Row::default()));

    for data_row in range.rows() {
        let mut cells = Vec::with_capacity(end_col as usize + 1);
        cells.extend((0..start_col).map(|_| Cell::empty()));
        cells.extend(data_row.iter().map(cell_from_data));
        rows.push(Row::new(cells));
    }

    Sheet::new(sheet_name, rows)
}

/// calamineのセル値を宣言型付きのセルに変換
///
/// 日時はExcelのシリアル値（数値）として扱います。
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::numeric(i.to_string()),
        Data::Float(f) => Cell::numeric(f.to_string()),
        Data::DateTime(dt) => Cell::numeric(dt.as_f64().to_string()),
        Data::Bool(b) => Cell::boolean(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.clone()),
        Data::Error(e) => Cell::text(e.to_string()),
        Data::Empty => Cell::empty(),
    }
}
