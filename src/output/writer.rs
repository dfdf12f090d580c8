//! JSON File Writer
//!
//! 出力単位を`<ディレクトリ>/<出力名>.json`に書き出す。

use std::fs;
use std::path::PathBuf;

use super::JsonStyle;
use crate::error::XlsxToJsonError;
use crate::security::validate_output_name;
use crate::types::OutputUnit;

/// JSONファイルライター
///
/// 書き込み先ディレクトリは必要に応じて作成し、既存ファイルは上書きします。
#[derive(Debug, Clone)]
pub(crate) struct JsonWriter {
    /// 書き込み先ディレクトリ
    dir: PathBuf,
    /// 出力スタイル
    style: JsonStyle,
}

impl JsonWriter {
    pub fn new(dir: impl Into<PathBuf>, style: JsonStyle) -> Self {
        Self {
            dir: dir.into(),
            style,
        }
    }

    /// 出力単位を1ファイルに書き出す
    ///
    /// # 戻り値
    ///
    /// * `Ok(PathBuf)` - 書き込んだファイルのパス
    /// * `Err(XlsxToJsonError::SecurityViolation)` - 出力名が不正な場合
    /// * `Err(XlsxToJsonError::Write)` - ディレクトリ作成または書き込みに失敗した場合
    pub fn write_unit(&self, name: &str, unit: &OutputUnit) -> Result<PathBuf, XlsxToJsonError> {
        validate_output_name(name).map_err(XlsxToJsonError::SecurityViolation)?;

        let bytes = self.style.render(unit)?;

        fs::create_dir_all(&self.dir).map_err(|source| XlsxToJsonError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(format!("{}.json", name));
        fs::write(&path, bytes).map_err(|source| XlsxToJsonError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
