use line_reporter::config::toml_config::TomlConfig;
use line_reporter::core::ConfigProvider;
use line_reporter::utils::validation::Validate;
use line_reporter::{LocalSink, ReportEngine, SimplePipeline};
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_plan_reproduces_three_call_program() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let toml_content = format!(
        r#"
[report]
name = "three-call-demo"
description = "Two plain invocations followed by one with the end marker"
version = "1.0.0"

[[invocations]]
count = 5
end_marker = false

[[invocations]]
count = 5
end_marker = false

[[invocations]]
count = 5
end_marker = true

[output]
path = "{}"
format = "text"
"#,
        output_file.display()
    );

    let plan_file = temp_dir.path().join("report-plan.toml");
    std::fs::write(&plan_file, toml_content).unwrap();

    let config = TomlConfig::from_file(&plan_file).unwrap();
    config.validate().unwrap();

    let sink = LocalSink::new(config.output_file().map(Path::to_path_buf));
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines.len(), 34);
    assert_eq!(lines[0], "Hello, World!");
    assert_eq!(lines[11], "Hello, World!");
    assert_eq!(lines[22], "Hello, World!");
    assert_eq!(lines[33], "End of function");
    // Only the final invocation carries the marker
    assert_eq!(
        lines.iter().filter(|l| **l == "End of function").count(),
        1
    );
}

#[tokio::test]
async fn test_toml_plan_per_invocation_counts() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let toml_content = format!(
        r#"
[report]
name = "mixed-counts"
description = "Different counts per invocation"
version = "1.0.0"

[[invocations]]
count = 0

[[invocations]]
count = 2
end_marker = true

[output]
path = "{}"
"#,
        output_file.display()
    );

    let plan_file = temp_dir.path().join("report-plan.toml");
    std::fs::write(&plan_file, toml_content).unwrap();

    let config = TomlConfig::from_file(&plan_file).unwrap();
    config.validate().unwrap();

    let sink = LocalSink::new(config.output_file().map(Path::to_path_buf));
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    assert_eq!(
        written,
        "Hello, World!\n\
         Hello, World!\n\
         This is line 0\n\
         Even number\n\
         This is line 1\n\
         Odd number\n\
         End of function\n"
    );
}

#[tokio::test]
async fn test_toml_plan_env_substitution_in_output_path() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("LINE_REPORTER_TEST_OUT", temp_dir.path());

    let toml_content = r#"
[report]
name = "env-plan"
description = "Output path from environment"
version = "1.0.0"

[[invocations]]
count = 5
end_marker = true

[output]
path = "${LINE_REPORTER_TEST_OUT}/env-report.txt"
"#;

    let plan_file = temp_dir.path().join("report-plan.toml");
    std::fs::write(&plan_file, toml_content).unwrap();

    let config = TomlConfig::from_file(&plan_file).unwrap();
    config.validate().unwrap();

    let sink = LocalSink::new(config.output_file().map(Path::to_path_buf));
    let pipeline = SimplePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    engine.run().await.unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("env-report.txt")).unwrap();
    assert_eq!(written.lines().count(), 12);

    std::env::remove_var("LINE_REPORTER_TEST_OUT");
}
