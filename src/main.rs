use accident_common::{analyze_image, Summary};
use accident_detect::{cli, client, config, image_file};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, endpoint, json } => {
            let source = image_file::ImageFile::open(&image)?;
            let client_config = config.client_config(endpoint.as_deref());
            let client = client::HttpClient::new(
                &client_config,
                Duration::from_secs(config.timeout_seconds),
            )?;
            tracing::info!(file = %source.file_name, url = client.url(), "analyzing");

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("{} を解析中...", source.file_name));
            spinner.enable_steady_tick(Duration::from_millis(100));
            let outcome = analyze_image(&source, &client).await;
            spinner.finish_and_clear();

            let result = outcome.map_err(accident_detect::error::DetectError::from)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for line in Summary::from_result(&result).lines() {
                    println!("{}", line);
                }
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url);
                println!("  解析エンドポイント: {}", config.client_config(None).analyze_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
