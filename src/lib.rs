//! xlsxjson - Batch converter from configuration spreadsheets to JSON
//!
//! ゲームやアプリの設定表としてスプレッドシートで管理されたデータを、
//! 他のソフトウェアが読み込めるJSONファイルに一括変換するクレートです。
//!
//! # シートの規約
//!
//! - 行0: ヘッダー行。先頭セルが出力名（空の場合はシート名）、2列目以降がフィールド名
//! - 行1: 予約行（コメントや型ヒントなど）。常にスキップされます
//! - 行2以降: データ行。先頭セルがレコードのキー
//!
//! フィールド名が空の列に達すると、その行の残りの列は無視されます。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xlsxjson::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定: シートごとに1ファイル、キー → レコードのオブジェクト
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // config/hero.xlsx の各シートを config/<出力名>.json に書き出す
//!     let report = converter.convert_file(Path::new("config/hero.xlsx"))?;
//!     println!("{} files written", report.written.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Batch Conversion
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use xlsxjson::{resolve_inputs, run_batch, ConverterBuilder, InputSource, OutputLayout, OutputShape};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_shape(OutputShape::Array)
//!         .with_layout(OutputLayout::SingleFile)
//!         .with_output_dir("json")
//!         .build()?;
//!
//!     let paths = resolve_inputs(&converter, &InputSource::Directory(PathBuf::from("config")))?;
//!     let summary = run_batch(&converter, &paths);
//!     println!("Elapsed: {:?}", summary.elapsed);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod batch;
mod builder;
mod coerce;
mod error;
mod mapper;
mod output;
mod parser;
mod reducer;
mod security;
mod types;

// 公開API
pub use api::{InputSource, OutputLayout, OutputShape};
pub use batch::{resolve_inputs, run_batch, BatchSummary, FileOutcome};
pub use builder::{Converter, ConverterBuilder, FileReport};
pub use error::XlsxToJsonError;
pub use types::{Cell, CellKind, CellValue, OutputUnit, Record, Row, Sheet, Workbook};
