use anyhow::Context;
use cafe_client::app::commands;
use cafe_client::utils::{logger, validation::Validate};
use cafe_client::{ApiClient, ApiError, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting cafe-client");

    match run(cli).await {
        Ok(output) => {
            let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<serde_json::Value, ApiError> {
    let config = cli.load_config()?;

    // 驗證配置
    config.validate()?;
    if cli.verbose {
        tracing::debug!("Client config: {:?}", config);
    }

    let client = ApiClient::from_config(&config)?;
    commands::run(&client, cli.command).await
}
