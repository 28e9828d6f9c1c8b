//! End-to-end pipeline runs against files on disk.

use std::path::{Path, PathBuf};

use regional_core::{Pipeline, PipelineError, RegionalSalesPipeline, layout};
use regional_ingest::IngestError;
use regional_model::{LoadDescriptor, ModelError, PipelineConfig, SourceDescriptor};
use regional_transform::TransformError;
use tempfile::TempDir;

const HEADER: &str = "Fecha,\"Compraventas, Venta regional, monto\"\n";

fn write_source(dir: &Path, name: &str, rows: &str) -> PathBuf {
    let path = dir.join(format!("dataset_{name}.csv"));
    std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn aggregates_north_and_south() {
    let dir = TempDir::new().unwrap();
    let north = write_source(
        dir.path(),
        "north",
        "05/01/2024,\"1.000\"\n20/01/2024,\"2.000\"\n",
    );
    let south = write_source(dir.path(), "south", "10/01/2024,500\n");
    let output = dir.path().join("processed/regional_sales.csv");

    let config = PipelineConfig::new(
        vec![
            SourceDescriptor::new("north", north),
            SourceDescriptor::new("south", south),
        ],
        LoadDescriptor::new(&output, "csv"),
    )
    .unwrap();
    let report = RegionalSalesPipeline::new(config).run_with_report().unwrap();

    assert_eq!(report.sources, 2);
    assert_eq!(report.extracted_rows, 3);
    assert_eq!(report.output_rows, 2);
    assert_eq!(report.output_path, output);
    assert_eq!(report.preview.height(), 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][..5], ["North", "2024-01", "2024", "1", "2024Q1"]);
    assert_eq!(rows[0][5].parse::<f64>().unwrap(), 3000.0);
    assert_eq!(rows[0][6].parse::<f64>().unwrap(), 1500.0);
    assert_eq!(rows[0][7], "2");
    assert_eq!(&rows[1][..5], ["South", "2024-01", "2024", "1", "2024Q1"]);
    assert_eq!(rows[1][5].parse::<f64>().unwrap(), 500.0);
    assert_eq!(rows[1][6].parse::<f64>().unwrap(), 500.0);
    assert_eq!(rows[1][7], "1");
}

#[test]
fn negative_amount_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let north = write_source(dir.path(), "north", "05/01/2024,100\n06/01/2024,-5\n");
    let output = dir.path().join("out.csv");
    let config = PipelineConfig::new(
        vec![SourceDescriptor::new("north", north)],
        LoadDescriptor::new(&output, "csv"),
    )
    .unwrap();

    let err = RegionalSalesPipeline::new(config).run().unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Transform(TransformError::DataValidation(_))
    ));
    assert!(!output.exists());
}

#[test]
fn zero_sources_fail_before_transform() {
    let dir = TempDir::new().unwrap();
    let config =
        PipelineConfig::new(Vec::new(), LoadDescriptor::new(dir.path().join("o.csv"), "csv"))
            .unwrap();
    let err = RegionalSalesPipeline::new(config).run().unwrap_err();
    assert!(matches!(err, PipelineError::Ingest(IngestError::NoSources)));
}

#[test]
fn unsupported_format_fails_before_extraction() {
    let config = PipelineConfig::new(
        vec![SourceDescriptor::new("ghost", "/nonexistent/dataset_ghost.csv")],
        LoadDescriptor::new("/nonexistent/out.xml", "xml"),
    )
    .unwrap();
    let err = RegionalSalesPipeline::new(config).run().unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Config(ModelError::UnsupportedFormat { ref format }) if format == "xml"
    ));
}

#[test]
fn default_layout_to_parquet() {
    let dir = TempDir::new().unwrap();
    let (raw, _) = layout::ensure_layout(dir.path()).unwrap();
    write_source(&raw, "santa-cruz", "01/03/2024,\"1.234,50\"\n15/03/2024,\"765,50\"\n");
    write_source(&raw, "la_paz", "02/04/2024,10\n");

    let config = layout::default_config(dir.path(), Some("parquet")).unwrap();
    let report = RegionalSalesPipeline::new(config)
        .with_preview_rows(1)
        .run_with_report()
        .unwrap();

    assert_eq!(
        report.output_path,
        dir.path().join("data/processed/regional_sales.parquet")
    );
    assert!(report.output_path.is_file());
    assert_eq!(report.output_rows, 2);
    assert_eq!(report.preview.height(), 1);

    let regions: Vec<Option<&str>> = report
        .preview
        .column("region")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(regions, [Some("La_Paz")]);
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let (raw, _) = layout::ensure_layout(dir.path()).unwrap();
    let north = write_source(&raw, "north", "05/01/2024,100\n05/02/2024,100\n");

    RegionalSalesPipeline::new(layout::default_config(dir.path(), None).unwrap())
        .run()
        .unwrap();
    std::fs::write(&north, format!("{HEADER}05/01/2024,100\n")).unwrap();
    RegionalSalesPipeline::new(layout::default_config(dir.path(), None).unwrap())
        .run()
        .unwrap();

    let rows = read_rows(&dir.path().join("data/processed/regional_sales.csv"));
    assert_eq!(rows.len(), 1);
}

#[test]
fn two_digit_year_lands_in_current_century() {
    let dir = TempDir::new().unwrap();
    let north = write_source(dir.path(), "north", "05/01/24,100\n");
    let output = dir.path().join("out.csv");
    let config = PipelineConfig::new(
        vec![SourceDescriptor::new("north", north)],
        LoadDescriptor::new(&output, "csv"),
    )
    .unwrap();

    RegionalSalesPipeline::new(config).run().unwrap();

    let rows = read_rows(&output);
    assert_eq!(&rows[0][..5], ["North", "2024-01", "2024", "1", "2024Q1"]);
}

#[test]
fn row_wider_than_header_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let north = write_source(dir.path(), "north", "05/01/2024,1.000,5\n");
    let output = dir.path().join("out.csv");
    let config = PipelineConfig::new(
        vec![SourceDescriptor::new("north", north)],
        LoadDescriptor::new(&output, "csv"),
    )
    .unwrap();

    let err = RegionalSalesPipeline::new(config).run().unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Ingest(IngestError::CsvParse { .. })
    ));
    assert!(!output.exists());
}
