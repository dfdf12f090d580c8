//! Output Module
//!
//! 出力単位のJSONシリアライズと、ファイルへの書き出しを提供するモジュール。

mod writer;

use crate::error::XlsxToJsonError;
use crate::types::OutputUnit;

pub(crate) use writer::JsonWriter;

/// JSONの出力スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JsonStyle {
    /// 改行・インデントなし（デフォルト）
    Compact,
    /// インデント付き
    Pretty,
}

impl JsonStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }

    /// 出力単位をJSONのバイト列にシリアライズする
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<u8>)` - JSONのバイト列
    /// * `Err(XlsxToJsonError::Json)` - シリアライズに失敗した場合
    pub fn render(&self, unit: &OutputUnit) -> Result<Vec<u8>, XlsxToJsonError> {
        let bytes = match self {
            JsonStyle::Compact => serde_json::to_vec(unit)?,
            JsonStyle::Pretty => serde_json::to_vec_pretty(unit)?,
        };
        Ok(bytes)
    }
}
