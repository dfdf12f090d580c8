//! Basic Conversion Example
//!
//! This example demonstrates the most basic usage of xlsxjson:
//! converting every sheet of a workbook into its own JSON file using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_conversion -- config/hero.xlsx
//! ```
//!
//! If no argument is provided, it will try to use `demos/fixtures/sample.xlsx`.
//! JSON files are written next to the input file, named after each sheet's A1 cell.

use std::path::PathBuf;
use xlsxjson::ConverterBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/fixtures/sample.xlsx"));

    println!("Converting {}...", input_path.display());

    // Create a converter with default settings
    let converter = ConverterBuilder::new().build()?;

    // Convert the workbook and write one JSON file per sheet
    let report = converter.convert_file(&input_path).map_err(|e| {
        eprintln!("Error: Could not convert '{}'", input_path.display());
        eprintln!("  {}", e);
        eprintln!("\nHint: Create a sample workbook or provide a path to an existing file.");
        e
    })?;

    for path in &report.written {
        println!("Exported: {}", path.display());
    }
    for (name, error) in &report.failed {
        eprintln!("Skipped {}: {}", name, error);
    }

    println!("Conversion completed: {} file(s) written", report.written.len());

    Ok(())
}
