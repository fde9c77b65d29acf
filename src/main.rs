use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;

use s1_l1c::asset::Polarisation;
use s1_l1c::config::ReaderConfig;
use s1_l1c::provider::Provider;
use s1_l1c::{CogReader, ReaderOptions, S1L1CReader};

#[derive(Parser)]
#[command(about = "Locate Sentinel-1 L1C scene assets in the AWS requester-pays bucket")]
struct Cli {
    /// AWS profile to bill requests to; defaults to the standard credential chain
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print bounds, center and zoom levels of a scene
    Info { sceneid: String },
    /// Print the s3 url of each requested asset (all assets when none given)
    Url {
        sceneid: String,
        assets: Vec<String>,
    },
    /// Resolve every scene listed in a TOML config file
    Batch { config: PathBuf },
}

async fn provider(profile: Option<&str>) -> Provider {
    match profile {
        Some(name) => Provider::from_profile(name).await,
        None => Provider::from_env().await,
    }
}

async fn print_urls(
    provider: &Provider,
    sceneid: &str,
    assets: &[Polarisation],
    options: ReaderOptions,
) -> Result<()> {
    let scene = S1L1CReader::<CogReader>::new(sceneid)
        .with_options(options)
        .open(provider)
        .await?;
    for asset in assets {
        println!("{}", scene.asset_url(asset.as_str())?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Info { sceneid } => {
            let provider = provider(cli.profile.as_deref()).await;
            let scene = S1L1CReader::<CogReader>::new(&sceneid)
                .open(&provider)
                .await?;
            println!("{}", serde_json::to_string_pretty(&scene.spatial_info())?);
        }
        Command::Url { sceneid, assets } => {
            let assets = if assets.is_empty() {
                Polarisation::ALL.to_vec()
            } else {
                assets
                    .iter()
                    .map(|a| a.parse::<Polarisation>())
                    .collect::<std::result::Result<Vec<_>, _>>()?
            };
            let provider = provider(cli.profile.as_deref()).await;
            print_urls(&provider, &sceneid, &assets, ReaderOptions::new()).await?;
        }
        Command::Batch { config } => {
            let config = ReaderConfig::read(config)?;
            let sceneids = config
                .sceneids()
                .ok_or(anyhow!("No scene ids in config"))?;
            let assets = config.assets()?;
            let profile = cli.profile.as_deref().or(config.profile.as_deref());
            let provider = provider(profile).await;

            let mut failed = 0;
            for sceneid in &sceneids {
                info!("Resolving {sceneid}");
                if let Err(err) =
                    print_urls(&provider, sceneid, &assets, config.reader_options.clone()).await
                {
                    error!("{sceneid}: {err}");
                    failed += 1;
                }
            }
            if failed > 0 {
                return Err(anyhow!("{} of {} scenes failed", failed, sceneids.len()));
            }
        }
    }

    Ok(())
}
