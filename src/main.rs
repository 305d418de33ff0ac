use clap::Parser;
use page_generator::utils::monitor::SystemMonitor;
use page_generator::utils::{logger, validation::Validate};
use page_generator::{CliConfig, GeneratorConfig, PageGenerator};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting page-generator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    match config.sample {
        Some(k) => tracing::info!("🎲 Sampling {} of {} records", k, config.record_count),
        None => tracing::info!("📄 Emitting all records"),
    }

    let generator = PageGenerator::new(GeneratorConfig::from_provider(&config));
    let result = generator.render(&config.output, config.sample);
    monitor.log_final_stats();

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} records into {} marker line(s)",
                summary.records,
                summary.markers
            );
            println!("✅ Page generated: {}", config.output.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Page generation failed: {} (Category: {:?}, Severity: {:?})",
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
}
