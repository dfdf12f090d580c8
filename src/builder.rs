//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use indexmap::IndexMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::{OutputLayout, OutputShape};
use crate::error::XlsxToJsonError;
use crate::output::{JsonStyle, JsonWriter};
use crate::parser::WorkbookParser;
use crate::reducer::reduce_sheet;
use crate::types::{OutputUnit, Workbook};

/// ディレクトリ指定時のデフォルト対象拡張子
const DEFAULT_EXTENSIONS: &[&str] = &["xlsx"];

/// 変換処理の設定を保持する内部構造体
///
/// 各コンポーネントに明示的に渡され、プロセス全体の状態は持ちません。
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// シートごとの出力形状
    pub shape: OutputShape,

    /// ワークブックごとの出力ファイル構成
    pub layout: OutputLayout,

    /// 出力ディレクトリ（入力ファイルのディレクトリからの相対パス）
    pub output_dir: Option<PathBuf>,

    /// JSONをインデント付きで出力するか
    pub pretty: bool,

    /// ディレクトリ指定時の対象拡張子（小文字、ドットなし）
    pub extensions: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            shape: OutputShape::Object,
            layout: OutputLayout::PerSheet,
            output_dir: None,
            pretty: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxjson::{ConverterBuilder, OutputLayout, OutputShape};
///
/// # fn main() -> Result<(), xlsxjson::XlsxToJsonError> {
/// let converter = ConverterBuilder::new()
///     .with_shape(OutputShape::Array)
///     .with_layout(OutputLayout::SingleFile)
///     .with_output_dir("json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 出力形状: オブジェクト（キー → レコード）
    /// - 出力構成: シートごとに1ファイル
    /// - 出力ディレクトリ: 入力ファイルと同じディレクトリ
    /// - JSON: インデントなし
    /// - 対象拡張子: `xlsx`
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// シートごとの出力形状を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxjson::{ConverterBuilder, OutputShape};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_shape(OutputShape::Array);
    /// ```
    pub fn with_shape(mut self, shape: OutputShape) -> Self {
        self.config.shape = shape;
        self
    }

    /// 出力ファイル構成を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxjson::{ConverterBuilder, OutputLayout};
    ///
    /// // すべてのシートを1ファイルにまとめる
    /// let builder = ConverterBuilder::new()
    ///     .with_layout(OutputLayout::SingleFile);
    /// ```
    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// 出力ディレクトリを指定する
    ///
    /// 各入力ファイルのディレクトリからの相対パスとして解釈されます。
    /// 絶対パスを指定した場合は、そのディレクトリに出力されます。
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// JSONをインデント付きで出力するかを指定する
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// ディレクトリ指定時の対象拡張子を指定する
    ///
    /// 先頭のドットは無視され、大文字小文字は区別されません。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxjson::ConverterBuilder;
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_extensions(vec!["xlsx".to_string(), ".xlsm".to_string()]);
    /// ```
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.extensions = extensions;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToJsonError::Config(String)`: 設定の検証に失敗した場合
    ///   * 対象拡張子が空、または不正な拡張子を含む
    ///   * 出力ディレクトリが空のパス
    pub fn build(mut self) -> Result<Converter, XlsxToJsonError> {
        // 1. 拡張子の正規化と検証
        if self.config.extensions.is_empty() {
            return Err(XlsxToJsonError::Config(
                "At least one workbook extension is required".to_string(),
            ));
        }

        let mut extensions = Vec::with_capacity(self.config.extensions.len());
        for ext in &self.config.extensions {
            let normalized = ext.trim().trim_start_matches('.').to_ascii_lowercase();
            if normalized.is_empty()
                || normalized.contains('.')
                || normalized.contains('/')
                || normalized.contains('\\')
            {
                return Err(XlsxToJsonError::Config(format!(
                    "Invalid workbook extension: '{}'",
                    ext
                )));
            }
            if !extensions.contains(&normalized) {
                extensions.push(normalized);
            }
        }
        self.config.extensions = extensions;

        // 2. 出力ディレクトリの検証
        if let Some(dir) = &self.config.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(XlsxToJsonError::Config(
                    "Output directory must not be empty".to_string(),
                ));
            }
        }

        // 3. Converterインスタンス生成
        Ok(Converter::new(self.config))
    }
}

/// 1ファイル分の変換結果
#[derive(Debug)]
pub struct FileReport {
    /// 入力ファイルのパス
    pub input: PathBuf,

    /// 書き込みに成功したファイル
    pub written: Vec<PathBuf>,

    /// 書き込みに失敗した出力単位（出力名とエラー）
    pub failed: Vec<(String, XlsxToJsonError)>,
}

/// 変換処理のファサード
///
/// `ConverterBuilder`で構築された設定に基づいて、ワークブックをJSONに変換します。
/// 設定は不変のため、複数スレッドから同時に参照できます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxjson::ConverterBuilder;
/// use std::path::Path;
///
/// # fn main() -> Result<(), xlsxjson::XlsxToJsonError> {
/// let converter = ConverterBuilder::new().build()?;
/// let report = converter.convert_file(Path::new("config/hero.xlsx"))?;
/// for path in &report.written {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub(crate) fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// ワークブックを出力名と出力単位のペアに変換する
    ///
    /// 行がない、またはヘッダー行にセルがないシートはスキップされます。
    ///
    /// - `OutputLayout::PerSheet`: シートごとに1ペア（シートの順序）
    /// - `OutputLayout::SingleFile`: ワークブック名を出力名とする1ペア。
    ///   出力名が重複するシートは後のシートで上書きされます。
    ///
    /// I/Oは行いません。
    pub fn convert_workbook(&self, workbook: &Workbook) -> Vec<(String, OutputUnit)> {
        let mut units = Vec::new();
        let mut merged = IndexMap::new();

        for sheet in &workbook.sheets {
            let Some((name, unit)) = reduce_sheet(sheet, self.config.shape) else {
                log::debug!(
                    "skipping sheet '{}' in '{}': no header row",
                    sheet.name,
                    workbook.name
                );
                continue;
            };

            match self.config.layout {
                OutputLayout::PerSheet => units.push((name, unit)),
                OutputLayout::SingleFile => {
                    merged.insert(name, unit);
                }
            }
        }

        if self.config.layout == OutputLayout::SingleFile {
            units.push((workbook.name.clone(), OutputUnit::Merged(merged)));
        }

        units
    }

    /// 入力ファイルに対応する出力ディレクトリを決定する
    ///
    /// `<入力ファイルのディレクトリ>/<出力ディレクトリ>`
    pub fn output_dir_for(&self, input: &Path) -> PathBuf {
        let base = input.parent().unwrap_or_else(|| Path::new(""));
        match &self.config.output_dir {
            Some(dir) => base.join(dir),
            None => base.to_path_buf(),
        }
    }

    /// ワークブックファイルを変換し、JSONファイルを書き出す
    ///
    /// 出力単位ごとの書き込み失敗は`FileReport::failed`に記録され、
    /// 他の出力単位の書き込みは継続されます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(FileReport)` - ワークブックを開けた場合
    /// * `Err(XlsxToJsonError)` - ワークブックを開けなかった場合
    pub fn convert_file(&self, path: &Path) -> Result<FileReport, XlsxToJsonError> {
        let workbook = WorkbookParser::open_path(path)?.into_workbook()?;
        let units = self.convert_workbook(&workbook);

        let writer = JsonWriter::new(
            self.output_dir_for(path),
            JsonStyle::from_pretty(self.config.pretty),
        );

        let mut report = FileReport {
            input: path.to_path_buf(),
            written: Vec::new(),
            failed: Vec::new(),
        };

        for (name, unit) in units {
            match writer.write_unit(&name, &unit) {
                Ok(written) => report.written.push(written),
                Err(e) => {
                    log::warn!("failed to write '{}' from '{}': {}", name, path.display(), e);
                    report.failed.push((name, e));
                }
            }
        }

        Ok(report)
    }

    /// メモリ上のワークブックを変換する
    ///
    /// # 引数
    ///
    /// * `name` - ワークブック名（シングルファイル形式の出力名）
    /// * `input` - ワークブックのバイト列を読み込むリーダー
    pub fn convert_reader<R: Read>(
        &self,
        name: &str,
        input: R,
    ) -> Result<Vec<(String, OutputUnit)>, XlsxToJsonError> {
        let workbook = WorkbookParser::open_reader(name, input)?.into_workbook()?;
        Ok(self.convert_workbook(&workbook))
    }

    /// メモリ上のワークブックを変換し、出力名とJSON文字列のペアを返す
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use xlsxjson::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsxjson::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("hero.xlsx")?;
    /// for (name, json) in converter.convert_to_strings("hero", input)? {
    ///     println!("{}: {}", name, json);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_strings<R: Read>(
        &self,
        name: &str,
        input: R,
    ) -> Result<Vec<(String, String)>, XlsxToJsonError> {
        let style = JsonStyle::from_pretty(self.config.pretty);

        self.convert_reader(name, input)?
            .into_iter()
            .map(|(name, unit)| {
                let bytes = style.render(&unit)?;
                let text = String::from_utf8(bytes).map_err(|e| {
                    XlsxToJsonError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
                })?;
                Ok((name, text))
            })
            .collect()
    }
}
