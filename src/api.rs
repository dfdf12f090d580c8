//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::path::PathBuf;

/// シートごとの出力形状
///
/// データ行をどのようなJSON構造にまとめるかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputShape {
    /// キー列の値をキーとするオブジェクト（デフォルト）
    ///
    /// 同じキーを持つ行が複数ある場合は、後の行が前の行を上書きします。
    ///
    /// # 出力例
    ///
    /// ```json
    /// {"u1":{"Name":"Alice","Score":95},"u2":{"Name":"Bob","Score":""}}
    /// ```
    #[default]
    Object,

    /// 行の順序を保った配列
    ///
    /// キー列が空の行は含まれません。
    ///
    /// # 出力例
    ///
    /// ```json
    /// [{"Name":"Alice","Score":95},{"Name":"Bob","Score":""}]
    /// ```
    Array,
}

/// ワークブックごとの出力ファイル構成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputLayout {
    /// シートごとに1ファイル（デフォルト）
    ///
    /// ファイル名はヘッダー行の先頭セル、空の場合はシート名になります。
    #[default]
    PerSheet,

    /// ワークブックごとに1ファイル
    ///
    /// すべてのシートの出力を、出力名をキーとする1つのオブジェクトにまとめます。
    /// ファイル名はワークブックのファイル名（拡張子なし）になります。
    SingleFile,
}

/// 入力ワークブックの指定方法
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputSource {
    /// ディレクトリ内のすべてのワークブック
    ///
    /// 対象拡張子は`ConverterBuilder::with_extensions`で指定します。
    Directory(PathBuf),

    /// カンマ区切りのパスリスト
    ///
    /// 例: `InputSource::List("a.xlsx,b.xlsx".to_string())`
    List(String),
}
