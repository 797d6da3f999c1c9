use clap::Parser;
use menu_extract::config::toml_config::{LogFormat, TomlConfig};
use menu_extract::core::{ConfigProvider, ExtractionMode};
use menu_extract::utils::{logger, validation::Validate};
use menu_extract::{ExtractionEngine, LocalStorage, MenuPipeline};

#[derive(Parser)]
#[command(name = "toml-extract")]
#[command(about = "Menu item extraction driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "menu-extract.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the classifier pass from config
    #[arg(long, value_enum)]
    mode: Option<ExtractionMode>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置 (日誌格式由配置決定，所以先載入)
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    match config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("🚀 Starting TOML-based menu extraction");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(mode) = args.mode {
        config.extract.mode = mode;
        tracing::info!("🔧 Mode overridden to: {}", mode);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = MenuPipeline::new(storage, config);
    let engine = ExtractionEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "✅ Extracted {} items from {} documents",
                summary.items, summary.documents
            );
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Inputs: {}", config.input_files().len());
    println!("  Mode: {}", config.mode());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    if let Some(max_lines) = config.max_lines() {
        println!("  Max Lines: {}", max_lines);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 輸入檔案分析
    println!("📄 Input Files:");
    for file in config.input_files() {
        let status = if std::path::Path::new(file).exists() {
            "found"
        } else {
            "MISSING"
        };
        println!("  {} [{}]", file, status);
    }
    println!("  Format: {:?}", config.input_format());

    // 處理模式分析
    println!();
    println!("⚙️ Processing Mode:");
    match config.mode() {
        ExtractionMode::Heuristic => {
            println!("  🎯 Heuristic: headers, bullets, prices and comma lists are handled")
        }
        ExtractionMode::Simple => {
            println!("  📊 Simple: price tokens stripped and duplicates dropped only")
        }
    }

    // 輸出分析
    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    let names = config.filenames();
    for format in config.output_formats() {
        let name = match format.as_str() {
            "json" => &names.json,
            "csv" => &names.csv,
            _ => &names.tsv,
        };
        println!("  {} -> {}", format, name);
    }

    if let Some(zip_name) = config.compression() {
        println!("  Compression: {} (ZIP)", zip_name);
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
