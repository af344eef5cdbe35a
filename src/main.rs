use clap::Parser;
use rental_budget::app::{prompt::Prompter, session};
use rental_budget::utils::{logger, validation::Validate};
use rental_budget::{BudgetEngine, BudgetError, CliConfig, LocalStorage, TomlConfig};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rental-budget");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("Run failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("\n❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), BudgetError> {
    // 載入 TOML 配置（可選）
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    file_config.validate()?;

    let request = if config.is_interactive() {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        session::collect_request(&mut prompter, file_config.output_filename())?
    } else {
        config.to_request(file_config.output_filename())?
    };

    // 命令列 > 設定檔 > 桌面
    let storage = match (&config.output_dir, file_config.output_directory()) {
        (Some(dir), _) => LocalStorage::new(dir),
        (None, Some(dir)) => LocalStorage::new(dir),
        (None, None) => LocalStorage::desktop(),
    };

    let engine = BudgetEngine::with_contract_fee(storage, file_config.contract_fee());
    let outcome = engine.run(request)?;

    println!("\n{}", outcome.summary);
    println!("✅ Arquivo CSV salvo em: {}", outcome.output_path.display());
    println!("Geração concluída com sucesso!");

    Ok(())
}
