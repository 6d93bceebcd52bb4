use clap::Parser;
use cotton_classifier::{classify, cli, client, config, error, logging, report};
use cli::{Cli, Commands};
use client::HttpPredictionClient;
use config::Config;
use error::Result;
use std::time::Duration;

fn build_client() -> Result<HttpPredictionClient> {
    let config = Config::load()?;
    let api_url = config.api_url()?;
    let timeout = (config.timeout_seconds > 0).then(|| Duration::from_secs(config.timeout_seconds));
    HttpPredictionClient::new(&api_url, timeout)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Predict { file, json, preview_out } => {
            let client = build_client()?;
            tracing::debug!(endpoint = client.endpoint(), "using prediction endpoint");

            if !json {
                println!("🌱 cotton-classifier - 病害判定\n");
                println!("Processing... {}", file.display());
            }

            let classification = classify::classify_path(&file, &client).await?;

            if let (Some(path), Some(data_uri)) = (&preview_out, &classification.preview_data_uri) {
                std::fs::write(path, data_uri)?;
                if !json {
                    println!("✔ プレビューを保存: {}", path.display());
                }
            }

            match classification.outcome {
                Ok(view) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        println!();
                        print!("{}", report::format_result(&view));
                    }
                }
                Err(message) => {
                    eprintln!("❌ {}", message);
                    std::process::exit(1);
                }
            }
        }

        Commands::Scan { folder, output, recursive } => {
            let client = build_client()?;
            println!("🌱 cotton-classifier - フォルダ判定\n");

            let entries = classify::classify_folder(&folder, recursive, &client, |current, total, entry| {
                println!("[{}/{}]{}", current, total, report::format_scan_line(entry));
            })
            .await?;

            if entries.is_empty() {
                return Err(error::ClassifierError::NoImagesFound(folder.display().to_string()));
            }

            println!("\n{}", report::format_scan_summary(&entries));

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&entries)?;
                std::fs::write(&output, json)?;
                println!("✔ 結果を保存: {}", output.display());
            }
        }

        Commands::Labels => {
            print!("{}", report::format_labels());
        }

        Commands::Config { set_api_url, show } => {
            // URLの再設定は壊れた設定ファイルの修復にも使う
            let mut config = if set_api_url.is_some() {
                Config::load_or_default()
            } else {
                Config::load()?
            };

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                match config.api_url() {
                    Ok(url) => println!("  API URL: {}", url),
                    Err(_) => println!("  API URL: 未設定"),
                }
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
