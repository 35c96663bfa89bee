use clap::Parser;
use line_reporter::config::toml_config::TomlConfig;
use line_reporter::core::ConfigProvider;
use line_reporter::domain::model::Invocation;
use line_reporter::utils::{logger, validation::Validate};
use line_reporter::{LocalSink, ReportEngine, SimplePipeline};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Line reporter driven by a TOML run plan")]
struct Args {
    /// Path to TOML plan file
    #[arg(short, long, default_value = "report-plan.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from plan
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be emitted without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based line reporter");
    tracing::info!("📁 Loading plan from: {}", args.config);

    // 載入 TOML 計畫
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load plan file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證計畫
    if let Err(e) = config.validate() {
        tracing::error!("❌ Plan validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Plan loaded and validated successfully");

    // 顯示計畫摘要
    display_plan_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No report output will be produced");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建輸出與管道
    let sink = LocalSink::new(config.output_file().map(Path::to_path_buf));
    let pipeline = SimplePipeline::new(sink, config);

    // 創建報告引擎並運行
    let engine = ReportEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Report completed successfully!");
            tracing::info!("📁 Output written to: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                line_reporter::utils::error::ErrorSeverity::Low => 0,
                line_reporter::utils::error::ErrorSeverity::Medium => 2,
                line_reporter::utils::error::ErrorSeverity::High => 1,
                line_reporter::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_plan_summary(config: &TomlConfig, args: &Args) {
    eprintln!("📋 Plan Summary:");
    eprintln!(
        "  Report: {} v{}",
        config.report.name, config.report.version
    );
    eprintln!("  Invocations: {}", config.invocations.len());
    eprintln!(
        "  Output: {}",
        config
            .output
            .path
            .as_deref()
            .unwrap_or("stdout")
    );
    eprintln!("  Format: {}", config.output_format());

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📝 Planned Invocations:");
    let invocations: Vec<Invocation> = ConfigProvider::invocations(config);
    let mut total_lines = 0;
    for (i, invocation) in invocations.iter().enumerate() {
        println!(
            "  #{}: count = {}, end marker = {}, lines = {}",
            i + 1,
            invocation.count,
            invocation.emit_end_marker,
            invocation.line_count()
        );
        total_lines += invocation.line_count();
    }

    println!();
    println!("💾 Output Configuration:");
    println!(
        "  Path: {}",
        config.output.path.as_deref().unwrap_or("stdout")
    );
    println!("  Format: {}", config.output_format());
    println!("  Total lines: {}", total_lines);

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
