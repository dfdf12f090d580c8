//! xlsxjson CLI - spreadsheet to JSON batch converter

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process;
use xlsxjson::{
    resolve_inputs, run_batch, ConverterBuilder, InputSource, OutputLayout, OutputShape,
    XlsxToJsonError,
};

#[derive(Parser, Debug)]
#[command(name = "xlsxjson")]
#[command(
    author,
    version,
    about = "Convert configuration spreadsheets into JSON record files"
)]
struct Cli {
    /// Convert every workbook in this directory (takes precedence over --paths)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Workbook paths, separated by ','
    #[arg(short, long)]
    paths: Option<String>,

    /// Output directory, relative to each workbook's directory
    #[arg(short, long, visible_alias = "op")]
    out: Option<PathBuf>,

    /// Write one JSON file per workbook instead of one per sheet
    #[arg(short, long)]
    single: bool,

    /// Output records as an array instead of an object keyed by the first column
    #[arg(short, long)]
    array: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Workbook extensions picked up by --dir
    #[arg(long = "ext", value_delimiter = ',', default_value = "xlsx")]
    extensions: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let source = match (&cli.dir, &cli.paths) {
        (Some(dir), _) => InputSource::Directory(dir.clone()),
        (None, Some(paths)) if !paths.trim().is_empty() => InputSource::List(paths.clone()),
        _ => {
            // 入力指定なしは使い方を表示して正常終了
            let _ = Cli::command().print_help();
            println!();
            return;
        }
    };

    if let Err(e) = run(cli, source) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, source: InputSource) -> Result<(), XlsxToJsonError> {
    let mut builder = ConverterBuilder::new()
        .with_shape(if cli.array {
            OutputShape::Array
        } else {
            OutputShape::Object
        })
        .with_layout(if cli.single {
            OutputLayout::SingleFile
        } else {
            OutputLayout::PerSheet
        })
        .pretty(cli.pretty)
        .with_extensions(cli.extensions);

    if let Some(out) = cli.out {
        builder = builder.with_output_dir(out);
    }

    let converter = builder.build()?;
    let paths = resolve_inputs(&converter, &source)?;
    if paths.is_empty() {
        eprintln!("Warning: no workbooks found");
    }

    let summary = run_batch(&converter, &paths);
    if summary.failed_count() > 0 {
        eprintln!(
            "{} of {} workbooks could not be converted",
            summary.failed_count(),
            summary.outcomes.len()
        );
    }
    println!("Elapsed: {:?}", summary.elapsed);

    Ok(())
}
