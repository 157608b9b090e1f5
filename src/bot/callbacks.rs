use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::reporter;
use crate::config::Config;
use crate::data::coins;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn handle(
    bot: Bot,
    q: CallbackQuery,
    cfg: Arc<Config>,
    client: reqwest::Client,
) -> HandlerResult {
    let data = match q.data.as_deref() {
        Some(d) => d,
        None => return Ok(()),
    };

    // Answer callback to remove loading spinner
    bot.answer_callback_query(&q.id).await?;

    if data == "show_top_three" {
        reporter::send_roster_report(&bot, &cfg, &client, coins::top_three()).await?;
    } else if let Some(coin) = coins::find(data) {
        reporter::send_coin_report(&bot, &cfg, &client, coin).await?;
    } else {
        tracing::warn!(payload = data, "Ignoring unknown callback payload");
    }

    Ok(())
}
