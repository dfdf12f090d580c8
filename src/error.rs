//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// xlsxjsonクレート全体で使用するエラー型
///
/// ワークブックの読み込み、変換、JSONの書き出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: ワークブックの解析中に発生したエラー（calamine由来）
/// - `Json`: JSONシリアライズ中に発生したエラー
/// - `Config`: 設定の検証に失敗したエラー
/// - `SecurityViolation`: 入力サイズや出力名の制限に違反したエラー
/// - `Write`: 出力ファイルの書き込みに失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxjson::XlsxToJsonError;
/// use std::fs::File;
///
/// fn read_excel_file(path: &str) -> Result<(), XlsxToJsonError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToJsonError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// calamineがファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// JSONシリアライズのエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時、または入力パスの解決時に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsxjson::{ConverterBuilder, XlsxToJsonError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_extensions(Vec::new())  // 空の拡張子リスト
    ///     .build();
    ///
    /// match result {
    ///     Err(XlsxToJsonError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限超過や、パストラバーサルを含む出力名など。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 出力ファイルの書き込みエラー
    ///
    /// ディレクトリ作成またはファイル書き込みに失敗した場合に発生します。
    /// 失敗したパスを保持します。
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// 書き込み先のパス
        path: PathBuf,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },
}
