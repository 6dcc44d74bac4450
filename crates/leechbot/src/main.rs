use teloxide::prelude::*;
use telegram::BotConfig;
use torrent::RqbitFetcher;

mod config;

/// Install the global subscriber. teloxide 0.12 logs through `log`;
/// the tracing-log bridge feeds those records into the same registry,
/// so only one global logger is ever installed. Safe to call again
/// (later calls are no-ops), which tests rely on.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    init_logging();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            eprintln!("Please check your .env file");
            std::process::exit(1);
        }
    };

    let bot = Bot::new(config.bot_token.clone());

    if let Err(err) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Could not register the command menu: {}", err);
    }

    let fetcher = RqbitFetcher::new();
    let bot_config = BotConfig {
        download_root: config.download_root.clone(),
        transfer: config.transfer_config(),
    };

    tracing::info!("Bot started successfully!");
    tracing::info!("Workspaces under {}", config.download_root.display());

    Dispatcher::builder(bot, telegram::schema())
        .dependencies(dptree::deps![fetcher, bot_config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
