use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::bot::messages;
use crate::config::Config;
use crate::data::coins::Coin;
use crate::data::{chart, fetcher};

/// Fetch, snapshot and deliver one coin's report to the configured chat.
///
/// A fetch failure is the degraded path: it is logged and replaced by a
/// text notice, and the chart stage never runs. Snapshot and transport
/// errors propagate to the caller and abort the current dispatch.
pub async fn send_coin_report(
    bot: &Bot,
    cfg: &Config,
    client: &reqwest::Client,
    coin: &Coin,
) -> Result<()> {
    let chat = ChatId(cfg.chat_id);
    match fetcher::fetch_sample(client, coin.id).await {
        Ok(sample) => {
            let chart_file = chart::capture(coin.id).await?;
            let caption = messages::format_coin_caption(coin.id, &sample);
            bot.send_photo(chat, InputFile::file(&chart_file))
                .caption(caption)
                .await?;
            // The screenshot only bridges capture and upload; drop it once sent.
            if let Err(e) = std::fs::remove_file(&chart_file) {
                tracing::debug!(path = %chart_file.display(), error = %e, "Chart file cleanup failed");
            }
        }
        Err(e) => {
            tracing::error!(coin = coin.id, error = %e, "Price fetch failed");
            bot.send_message(chat, messages::format_fetch_failure(coin.id))
                .await?;
        }
    }
    Ok(())
}

/// Sequential reports for a list of coins, in listed order.
/// An error aborts the remaining coins of this run.
pub async fn send_roster_report(
    bot: &Bot,
    cfg: &Config,
    client: &reqwest::Client,
    roster: &[Coin],
) -> Result<()> {
    for coin in roster {
        send_coin_report(bot, cfg, client, coin).await?;
        // Basic throttle: avoid hitting Telegram rate limits
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    Ok(())
}
