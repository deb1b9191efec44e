use clap::Parser;
use php_var_collector::core::ConfigProvider;
use php_var_collector::utils::{logger, validation::Validate};
use php_var_collector::{CliConfig, CollectorEngine, LocalStorage, TomlConfig, VariablePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            // 命令列旗標可以開啟但不會關閉 TOML 中的設定
            let monitor = cli.monitor || config.monitoring_enabled();
            init_logging(cli.verbose, cli.json_logs || config.json_logs());
            tracing::info!("📁 Loaded configuration from: {}", path);
            execute(config, monitor, cli.dry_run).await
        }
        None => {
            init_logging(cli.verbose, cli.json_logs);
            let monitor = cli.monitor;
            let dry_run = cli.dry_run;
            execute(cli, monitor, dry_run).await
        }
    }
}

fn init_logging(verbose: bool, json: bool) {
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
}

async fn execute<C>(config: C, monitor: bool, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + std::fmt::Debug,
{
    tracing::info!("Starting php-var-collector");
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let pipeline = VariablePipeline::new(storage, config);
    let engine = CollectorEngine::new_with_monitoring(pipeline, monitor);

    if dry_run {
        match engine.dry_run().await {
            Ok(files) => {
                for file in &files {
                    println!("{}", file.display());
                }
                return Ok(());
            }
            Err(e) => fail(e),
        }
    }

    match engine.run().await {
        Ok(output_path) => {
            println!("Done");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

fn fail(e: php_var_collector::CollectorError) -> ! {
    tracing::error!(
        "❌ Collection failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code())
}
