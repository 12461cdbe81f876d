use anyhow::Context;
use arcadia_client::app::commands;
use arcadia_client::config::cli::ResolvedConfig;
use arcadia_client::utils::{logger, validation::Validate};
use arcadia_client::{ApiClient, CliConfig, ClientError, ReqwestTransport};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 設定檔的 [logging] 會影響日誌初始化，所以先解析
    let resolved = config.resolve();

    let (json_logs, verbose) = match &resolved {
        Ok(r) => (r.json_logs, r.verbose),
        Err(_) => (config.json_logs, config.verbose),
    };
    logger::init_logger(logger::LogFormat::from_json_flag(json_logs), verbose);

    tracing::debug!("CLI config: {:?}", config);

    let result = match resolved {
        Ok(resolved) => run(&config, resolved).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ {:#}", e);

            let exit_code = match e.downcast_ref::<ClientError>() {
                Some(err) => {
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 {}", err.recovery_suggestion());
                    match err {
                        _ if err.is_config() => 1,
                        ClientError::Io(_) => 1,
                        ClientError::Status { .. } => 2,
                        _ => 3,
                    }
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    3
                }
            };

            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig, resolved: ResolvedConfig) -> anyhow::Result<String> {
    let settings = resolved.settings;
    settings.validate()?;
    tracing::info!("Using API at {}", settings.base_url);

    let transport = ReqwestTransport::from_config(&settings)?;
    let client = ApiClient::new(transport);

    let output = commands::execute(&client, &config.command).await?;
    let rendered =
        serde_json::to_string_pretty(&output).context("failed to render response as JSON")?;
    Ok(rendered)
}
