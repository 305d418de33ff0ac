use clap::Parser;
use page_generator::utils::monitor::SystemMonitor;
use page_generator::utils::{logger, validation::Validate};
use page_generator::{PageError, PageGenerator, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-pages")]
#[command(about = "Render a batch of pages described in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pages.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be rendered without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML page batch");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No pages will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let mut monitor = SystemMonitor::new(monitor_enabled);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let generator = PageGenerator::new(config.source.clone());

    for page in &config.pages {
        tracing::info!("📄 Rendering {}", page.output.display());
        match generator.render(&page.output, page.sample) {
            Ok(summary) => {
                tracing::info!(
                    "✅ {}: {} records, {} template lines",
                    page.output.display(),
                    summary.records,
                    summary.template_lines
                );
                monitor.log_stats(&page.output.display().to_string());
            }
            Err(e) => {
                report_failure(&e);
                std::process::exit(e.exit_code());
            }
        }
    }

    monitor.log_final_stats();
    println!("✅ Rendered {} page(s)", config.pages.len());
    Ok(())
}

fn report_failure(e: &PageError) {
    tracing::error!(
        "❌ Page generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Data: {}", config.source.data_path.display());
    println!("  Template: {}", config.source.template_path.display());
    println!("  Record Count: {}", config.source.record_count);
    println!("  Pages: {}", config.pages.len());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    let generator = PageGenerator::new(config.source.clone());
    let on_disk = match generator.count_records() {
        Ok(count) => count,
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    };

    println!("📡 Data Source:");
    println!("  Lines on disk: {}", on_disk);
    println!("  Configured record count: {}", config.source.record_count);
    if on_disk != config.source.record_count {
        tracing::warn!(
            "⚠️ Data file has {} lines but record_count is {}; samples draw from the configured count",
            on_disk,
            config.source.record_count
        );
    }

    println!();
    println!("💾 Pages:");
    for page in &config.pages {
        match page.sample {
            Some(k) => println!("  {} <- random {} records", page.output.display(), k),
            None => println!("  {} <- all records", page.output.display()),
        }
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
