mod bot;
mod config;
mod data;
mod engine;

use std::sync::Arc;
use std::time::Duration;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coin_report_bot=info".into()),
        )
        .init();

    let cfg = Arc::new(config::Config::load()?);
    let bot = Bot::new(&cfg.token);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    tracing::info!("Coin Report Bot starting...");

    // Spawn background scheduler
    let sched_cfg = cfg.clone();
    let sched_bot = bot.clone();
    let sched_client = client.clone();
    tokio::spawn(async move {
        engine::scheduler::run(sched_cfg, sched_bot, sched_client).await;
    });

    // Bot dispatcher
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<bot::commands::Command>()
                .endpoint(bot::commands::handle),
        )
        .branch(Update::filter_callback_query().endpoint(bot::callbacks::handle));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![cfg, client])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
