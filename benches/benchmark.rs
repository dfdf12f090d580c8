//! パフォーマンスベンチマーク
//!
//! xlsxjsonクレートの変換速度を測定するベンチマークです。
//! 入力ワークブックはrust_xlsxwriterでメモリ上に生成します。
//!
//! - ワークブック1つのメモリ上での変換（オブジェクト形式・配列形式）
//! - 複数ワークブックの並列バッチ変換（ファイル書き込みを含む）

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::io::Cursor;
use tempfile::TempDir;
use xlsxjson::{run_batch, ConverterBuilder, OutputLayout, OutputShape};

const SHEETS: u16 = 4;
const ROWS_PER_SHEET: u32 = 5_000;
const BATCH_FILES: usize = 16;

/// ベンチマーク用のワークブックを生成
fn generate_workbook(sheets: u16, rows: u32) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    for s in 0..sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, format!("Table{}", s))?;
        worksheet.write_string(0, 1, "Name")?;
        worksheet.write_string(0, 2, "Level")?;
        worksheet.write_string(0, 3, "Rate")?;
        worksheet.write_string(0, 4, "Enabled")?;
        worksheet.write_string(1, 1, "string")?;

        for i in 0..rows {
            let row = i + 2;
            worksheet.write_string(row, 0, format!("id{}", i))?;
            worksheet.write_string(row, 1, format!("name {}", i))?;
            worksheet.write_number(row, 2, (i % 100) as f64)?;
            worksheet.write_number(row, 3, i as f64 / 7.0)?;
            worksheet.write_boolean(row, 4, i % 2 == 0)?;
        }
    }

    workbook.save_to_buffer()
}

fn benchmark_convert_reader(c: &mut Criterion) {
    let data = generate_workbook(SHEETS, ROWS_PER_SHEET).unwrap();

    let mut group = c.benchmark_group("convert_reader");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(10);

    for (label, shape) in [("object", OutputShape::Object), ("array", OutputShape::Array)] {
        let converter = ConverterBuilder::new().with_shape(shape).build().unwrap();

        group.bench_function(label, |b| {
            b.iter(|| {
                let units = converter
                    .convert_to_strings("bench", Cursor::new(black_box(&data)))
                    .unwrap();
                black_box(units)
            });
        });
    }

    group.finish();
}

fn benchmark_batch_processing(c: &mut Criterion) {
    let data = generate_workbook(2, 1_000).unwrap();

    let temp = TempDir::new().unwrap();
    let paths: Vec<_> = (0..BATCH_FILES)
        .map(|i| {
            let path = temp.path().join(format!("batch_{:02}.xlsx", i));
            std::fs::write(&path, &data).unwrap();
            path
        })
        .collect();

    // ファイルごとに出力名が衝突しないよう、シングルファイル形式を使用
    let converter = ConverterBuilder::new()
        .with_layout(OutputLayout::SingleFile)
        .with_output_dir("json")
        .build()
        .unwrap();

    let mut group = c.benchmark_group("batch_processing");
    group.sample_size(10);

    group.bench_function("convert_16_files", |b| {
        b.iter(|| {
            let summary = run_batch(&converter, black_box(&paths));
            assert_eq!(summary.failed_count(), 0);
            black_box(summary)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_convert_reader, benchmark_batch_processing);
criterion_main!(benches);
