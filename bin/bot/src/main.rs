use anyhow::Context as _;
use clutch_api::{ApiConfig, ValorantApi};
use clutch_store::{FileLinkStore, LinkStore};
use command::Data;
use config::Config;
use poise::serenity_prelude::{Client, FullEvent, GatewayIntents};
use poise::{Framework, FrameworkOptions};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod command;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Setting up link store");
    let link_store: Arc<dyn LinkStore> =
        Arc::new(FileLinkStore::new(&config.linked_accounts_path));

    info!("Setting up Valorant API client");
    let api = ValorantApi::new(ApiConfig::new(config.valorant_api_key.clone()));

    let default_region = config.default_region;
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![
                command::help(),
                command::linkacc(),
                command::unlinkacc(),
                command::stats(),
                command::matches(),
                command::rank(),
                command::leaderboard(),
            ],
            event_handler: |_ctx, event, _framework, _data| {
                Box::pin(async move {
                    if let FullEvent::Ready { data_about_bot } = event {
                        info!("{} has connected", data_about_bot.user.name);
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    api,
                    link_store,
                    default_region,
                })
            })
        })
        .build();

    let mut client = Client::builder(config.discord_token, GatewayIntents::non_privileged())
        .framework(framework)
        .await
        .context("Failed to create client")?;

    info!("Starting client");
    client.start().await.context("Client exited its loop")?;

    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
