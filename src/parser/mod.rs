//! Parser Module
//!
//! calamineを使用したワークブック解析。
//! シートの内容を、絶対位置を保ったメモリ上のモデル（`Workbook`）に読み込みます。

mod workbook;

pub(crate) use workbook::WorkbookParser;
