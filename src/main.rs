use clap::Parser;
use startup_tracker::app::summary::{render_criteria, render_summary};
use startup_tracker::core::aggregator::Summary;
use startup_tracker::utils::{logger, validation::Validate};
use startup_tracker::{
    CliConfig, EligibilityCriteria, LocalStorage, RunOutcome, TomlConfig, TrackerEngine,
    TrackerPipeline,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting startup-tracker CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    println!("\n{}", "=".repeat(60));
    println!("🚀 STARTUP TRACKER - $100M+ Funding Finder");
    println!("{}", "=".repeat(60));

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let criteria = match load_criteria(&config) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let top_locations = config.top_locations;
    let top_funded = config.top_funded;
    let input = config.input.clone();

    // 創建存儲和管道
    let storage = LocalStorage::new(config.data_dir.clone());
    let pipeline = TrackerPipeline::new(storage, config, criteria);
    let engine = TrackerEngine::new(pipeline);

    println!("\n{}", render_criteria(engine.pipeline().criteria()));

    match engine.run() {
        Ok(RunOutcome::TemplateCreated { template_path }) => {
            println!("⚠️  No '{}' file found.", input);
            println!("✓ Created template file: {}", template_path);
            println!("  Use this as a guide to create your '{}' file", input);
            println!("Please add your startup data to '{}' and run again.", input);
        }
        Ok(RunOutcome::NoMatches { result }) => {
            if !result.skipped.is_empty() {
                println!("⚠️  {} rows skipped due to parsing errors", result.skipped.len());
            }
            println!("❌ No startups matched your criteria.");
            println!("   Try adding more data to {}", input);
        }
        Ok(RunOutcome::Completed {
            result,
            output_path,
        }) => {
            let summary = Summary::new(&result);
            println!("{}", render_summary(&summary, top_locations, top_funded));
            tracing::info!("✅ Run completed successfully!");
            println!("✅ Complete! Check '{}' for results.\n", output_path);
        }
        Ok(RunOutcome::ExportFailed { result, error }) => {
            // 寫檔失敗仍顯示摘要
            let summary = Summary::new(&result);
            println!("{}", render_summary(&summary, top_locations, top_funded));

            tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
            eprintln!("❌ {}", error.user_friendly_message());
            eprintln!("💡 {}", error.recovery_suggestion());
            std::process::exit(error.exit_code());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn load_criteria(config: &CliConfig) -> startup_tracker::Result<EligibilityCriteria> {
    let Some(path) = &config.criteria else {
        return Ok(EligibilityCriteria::default());
    };

    tracing::info!("📁 Loading criteria from: {}", path);
    let toml_config = TomlConfig::from_file(path)?;
    toml_config.validate()?;
    Ok(toml_config.criteria())
}
