use anyhow::Result;
use clap::Parser;
use dbot_core::init_console_tracing;
use image_search_bot::{run_bot, search_candidates, BotConfig, Cli, Commands, SearchConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Search { query } => {
            init_console_tracing()?;
            let config = SearchConfig::from_env()?;
            let images = search_candidates(&config, &query).await?;
            if images.is_empty() {
                println!("No candidates for {:?}.", query);
            }
            for (i, image) in images.iter().enumerate() {
                println!("{:>3}  {:<12} {}", i + 1, image.content_type, image.url);
            }
            Ok(())
        }
    }
}
