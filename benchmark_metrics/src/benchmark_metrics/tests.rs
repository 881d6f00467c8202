//!
//! Tests for the benchmark metrics binary.
//!

#![cfg(test)]

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use crate::arguments::Arguments;

const X86: &str = "FUNCTION,PROCESSORS,TIME,GRIDSIZE,FLOPS
jacobi,1,10.0,100,4.0e10
jacobi,2,6.0,100,4.0e10
jacobi,4,4.0,100,4.0e10
gauss_seidel,1,12.0,100,
gauss_seidel,4,5.0,100,
";

fn report(baseline_policy: benchmark_metrics::BaselinePolicy) -> benchmark_metrics::Report {
    let source = benchmark_metrics::InputSource::new(
        PathBuf::from("results/benchmark_x86.csv"),
        Some("CPU x86".to_owned()),
    );
    let records =
        benchmark_metrics::load_from_reader(X86.as_bytes(), &source).expect("Always valid");
    let derivation = benchmark_metrics::MetricsDeriver::new(
        vec![
            benchmark_metrics::KeyField::Function,
            benchmark_metrics::KeyField::GridSize,
        ],
        baseline_policy,
    )
    .derive(records)
    .expect("Always valid");
    let metadata = benchmark_metrics::ReportMetadata {
        start: Utc::now(),
        end: Utc::now(),
        inputs: vec![source],
        baseline_policy,
    };
    benchmark_metrics::Report::new(metadata, derivation)
}

fn text_output(report: &benchmark_metrics::Report, format: benchmark_metrics::OutputFormat) -> String {
    match benchmark_metrics::Output::try_from((report, format)).expect("Always valid") {
        benchmark_metrics::Output::SingleFile(content) => content,
        benchmark_metrics::Output::SingleFileXlsx(_) => panic!("Unexpected spreadsheet output"),
    }
}

#[test]
fn json_output() {
    let report = report(benchmark_metrics::BaselinePolicy::Abort);

    let content = text_output(&report, benchmark_metrics::OutputFormat::Json);
    let parsed: benchmark_metrics::Report =
        serde_json::from_str(content.as_str()).expect("Always valid");

    assert_eq!(parsed.groups.len(), 2);
    assert_eq!(parsed.groups[0].name, "function=gauss_seidel, grid-size=100");
    assert_eq!(parsed.groups[1].rows.len(), 3);
    assert_eq!(parsed.groups[1].rows[2].speedup, Some(2.5));
    assert_eq!(parsed.groups[1].rows[2].throughput, Some(1.0e10));
    assert_eq!(
        parsed.groups[1].rows[0].record.device_label.as_deref(),
        Some("CPU x86")
    );
}

#[test]
fn csv_output() {
    let report = report(benchmark_metrics::BaselinePolicy::Abort);

    let content = text_output(&report, benchmark_metrics::OutputFormat::Csv);
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "FUNCTION,PROCESSORS,GRIDSIZE,DEVICE,TIME,FLOPS,SPEEDUP,THROUGHPUT"
    );
    assert_eq!(lines.len(), 6);
    assert!(lines.contains(&"gauss_seidel,4,100,CPU x86,5,,2.4,"));
    assert!(lines.contains(&"jacobi,4,100,CPU x86,4,40000000000,2.5,10000000000"));
}

#[test]
fn xlsx_output() {
    let report = report(benchmark_metrics::BaselinePolicy::Abort);

    let output = benchmark_metrics::Output::try_from((&report, benchmark_metrics::OutputFormat::Xlsx))
        .expect("Always valid");

    assert!(matches!(
        output,
        benchmark_metrics::Output::SingleFileXlsx(_)
    ));
    assert!(output.write_to_stdout().is_err());
}

#[test]
fn csv_output_is_reloadable() {
    let report = report(benchmark_metrics::BaselinePolicy::Abort);
    let content = text_output(&report, benchmark_metrics::OutputFormat::Csv);
    let source = benchmark_metrics::InputSource::new(PathBuf::from("derived.csv"), None);

    let records =
        benchmark_metrics::load_from_reader(content.as_bytes(), &source).expect("Always valid");

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].function, "gauss_seidel");
}

#[test]
fn arguments() {
    let arguments = Arguments::try_parse_from([
        "benchmark-metrics",
        "--group-by",
        "function,device",
        "--baseline-policy",
        "skip",
        "--processors",
        "1,48",
        "--output-format",
        "csv",
        "CPU=results/x86.csv",
        "results/a100.csv",
    ])
    .expect("Always valid");

    assert_eq!(
        arguments.group_by,
        vec![
            benchmark_metrics::KeyField::Function,
            benchmark_metrics::KeyField::Device
        ]
    );
    assert_eq!(
        arguments.baseline_policy,
        benchmark_metrics::BaselinePolicy::Skip
    );
    assert_eq!(arguments.output_format, benchmark_metrics::OutputFormat::Csv);
    let sources = arguments.sources().expect("Always valid");
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].device_label.as_deref(), Some("CPU"));
    let filter = arguments.filter();
    assert!(filter.grid_sizes.is_none());
    assert_eq!(filter.processors.map(|set| set.len()), Some(2));
}

#[test]
fn arguments_default_grouping() {
    let arguments =
        Arguments::try_parse_from(["benchmark-metrics", "results/x86.csv"]).expect("Always valid");

    assert_eq!(
        arguments.group_by,
        vec![
            benchmark_metrics::KeyField::Function,
            benchmark_metrics::KeyField::GridSize,
            benchmark_metrics::KeyField::Device,
        ]
    );
    assert_eq!(
        arguments.baseline_policy,
        benchmark_metrics::BaselinePolicy::Abort
    );
}

#[test]
fn load_and_derive_files() {
    let path = std::env::temp_dir().join(format!(
        "benchmark_metrics_load_and_derive_{}.csv",
        std::process::id()
    ));
    std::fs::write(path.as_path(), X86).expect("Always valid");
    let source = benchmark_metrics::InputSource::new(path.clone(), None);
    let filter = benchmark_metrics::Filter::from_lists(vec![], vec![], vec!["jacobi".to_owned()]);

    let derivation = benchmark_metrics::load_and_derive(
        &[source],
        &filter,
        &benchmark_metrics::MetricsDeriver::default(),
    )
    .expect("Always valid");
    std::fs::remove_file(path.as_path()).expect("Always valid");

    assert_eq!(derivation.groups.len(), 1);
    assert_eq!(derivation.rows().count(), 3);
    assert!(derivation.skipped.is_empty());
}
