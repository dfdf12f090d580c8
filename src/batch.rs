//! Batch Module
//!
//! 入力ワークブックの解決と、ワークブックごとの並列変換を提供するモジュール。
//!
//! 各ワークブックは独立したタスクとして処理されます。1つのファイルを開けなくても、
//! 他のファイルの変換には影響しません。

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::api::InputSource;
use crate::builder::{Converter, FileReport};
use crate::error::XlsxToJsonError;

/// 1ファイル分の処理結果
#[derive(Debug)]
pub enum FileOutcome {
    /// ワークブックを開いて変換できた（書き込み失敗を含む場合がある）
    Converted(FileReport),

    /// ワークブックを開けなかった
    Failed {
        /// 入力ファイルのパス
        input: PathBuf,
        /// 発生したエラー
        error: XlsxToJsonError,
    },
}

impl FileOutcome {
    /// 入力ファイルのパス
    pub fn input(&self) -> &Path {
        match self {
            FileOutcome::Converted(report) => &report.input,
            FileOutcome::Failed { input, .. } => input,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted(_))
    }
}

/// バッチ全体の処理結果
#[derive(Debug)]
pub struct BatchSummary {
    /// 入力順のファイルごとの結果
    pub outcomes: Vec<FileOutcome>,

    /// 全体の経過時間
    pub elapsed: Duration,
}

impl BatchSummary {
    /// 開けたファイルの数
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    /// 開けなかったファイルの数
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }

    /// 書き込まれたすべてのJSONファイル
    pub fn written_files(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                FileOutcome::Converted(report) => Some(report),
                FileOutcome::Failed { .. } => None,
            })
            .flat_map(|report| report.written.iter().map(PathBuf::as_path))
            .collect()
    }
}

/// 入力ワークブックのパスを解決する
///
/// - `InputSource::Directory`: ディレクトリ直下の、対象拡張子（大文字小文字を区別しない）を
///   持つ通常ファイル。処理順を安定させるため、パス順にソートします。
/// - `InputSource::List`: カンマで分割し、前後の空白を除去します。空の要素は無視されます。
///
/// # 戻り値
///
/// * `Ok(Vec<PathBuf>)` - 入力パスのリスト（空の場合あり）
/// * `Err(XlsxToJsonError::Io)` - ディレクトリを読み込めなかった場合
pub fn resolve_inputs(
    converter: &Converter,
    source: &InputSource,
) -> Result<Vec<PathBuf>, XlsxToJsonError> {
    match source {
        InputSource::Directory(dir) => {
            let extensions = &converter.config().extensions;
            let mut paths = Vec::new();

            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if path.is_file() && has_extension(&path, extensions) {
                    paths.push(path);
                }
            }

            paths.sort();
            Ok(paths)
        }
        InputSource::List(list) => Ok(list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(PathBuf::from)
            .collect()),
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// ワークブックを並列に変換する
///
/// ワークブックごとに1タスクを起動し、すべてのタスクの完了を待ちます。
/// 各タスクは結果を完了時にコンソールへ出力します（完了順は不定）。
///
/// # 戻り値
///
/// 入力順のファイルごとの結果と、全体の経過時間
pub fn run_batch(converter: &Converter, paths: &[PathBuf]) -> BatchSummary {
    let started = Instant::now();

    let outcomes = paths
        .par_iter()
        .map(|path| {
            let outcome = match converter.convert_file(path) {
                Ok(report) => FileOutcome::Converted(report),
                Err(error) => FileOutcome::Failed {
                    input: path.clone(),
                    error,
                },
            };
            report_outcome(&outcome);
            outcome
        })
        .collect();

    BatchSummary {
        outcomes,
        elapsed: started.elapsed(),
    }
}

/// 1ファイル分の結果をコンソールに出力
fn report_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Converted(report) => {
            for path in &report.written {
                println!("Exported: {}", path.display());
            }
            for (name, error) in &report.failed {
                eprintln!(
                    "Error: {} ({} in {})",
                    error,
                    name,
                    report.input.display()
                );
            }
        }
        FileOutcome::Failed { input, error } => {
            eprintln!("Error: {}: {}", input.display(), error);
        }
    }
}
