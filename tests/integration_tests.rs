use line_reporter::{CliConfig, LocalSink, ReportEngine, SimplePipeline};
use tempfile::TempDir;

const REPORT_BLOCK: &str = "Hello, World!\n\
This is line 0\n\
Even number\n\
This is line 1\n\
Odd number\n\
This is line 2\n\
Even number\n\
This is line 3\n\
Odd number\n\
This is line 4\n\
Even number\n";

fn cli_config(runs: usize, no_end_marker: bool, output_file: std::path::PathBuf) -> CliConfig {
    CliConfig {
        count: 5,
        runs,
        no_end_marker,
        output_file: Some(output_file),
        output_format: "text".to_string(),
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_three_call_program() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    // Default shape: three invocations, end marker on the last one
    let config = cli_config(3, false, output_file.clone());
    let sink = LocalSink::new(config.output_file.clone());
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    let destination = engine.run().await.unwrap();

    assert_eq!(destination, output_file.display().to_string());

    let written = std::fs::read_to_string(&output_file).unwrap();
    let expected = format!("{REPORT_BLOCK}{REPORT_BLOCK}{REPORT_BLOCK}End of function\n");
    assert_eq!(written, expected);
    assert_eq!(written.lines().count(), 34);
}

#[tokio::test]
async fn test_end_to_end_two_call_program_without_marker() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let config = cli_config(2, true, output_file.clone());
    let sink = LocalSink::new(config.output_file.clone());
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    let expected = format!("{REPORT_BLOCK}{REPORT_BLOCK}");
    assert_eq!(written, expected);
    assert_eq!(written.lines().count(), 22);
}

#[tokio::test]
async fn test_end_to_end_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.json");

    let config = CliConfig {
        count: 5,
        runs: 1,
        no_end_marker: false,
        output_file: Some(output_file.clone()),
        output_format: "json".to_string(),
        verbose: false,
        monitor: false,
    };
    let sink = LocalSink::new(config.output_file.clone());
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(document["line_count"], 12);
    let lines = document["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Hello, World!");
    assert_eq!(lines[11], "End of function");
    assert!(document["generated_at"].is_string());
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let config = cli_config(3, false, output_file.clone());
    let sink = LocalSink::new(config.output_file.clone());
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new_with_monitoring(pipeline, true);

    let result = engine.run().await;

    assert!(result.is_ok());
    assert!(output_file.exists());
}

#[tokio::test]
async fn test_output_file_parent_directories_are_created() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("nested").join("dir").join("report.txt");

    let config = cli_config(1, true, output_file.clone());
    let sink = LocalSink::new(config.output_file.clone());
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    assert_eq!(written, REPORT_BLOCK);
}
