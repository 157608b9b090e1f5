use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::command::BotCommands;

use crate::bot::messages;
use crate::data::coins;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Help,
}

/// One shortcut row, then one row per roster coin.
fn coin_keyboard() -> InlineKeyboardMarkup {
    let mut rows = vec![vec![InlineKeyboardButton::callback(
        "View Top 3 Coins",
        "show_top_three",
    )]];
    for coin in coins::ALL {
        rows.push(vec![InlineKeyboardButton::callback(coin.label, coin.id)]);
    }
    InlineKeyboardMarkup::new(rows)
}

pub async fn handle(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, messages::welcome_message())
                .reply_markup(coin_keyboard())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, messages::help_message())
                .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_has_shortcut_plus_one_row_per_coin() {
        let markup = coin_keyboard();
        assert_eq!(markup.inline_keyboard.len(), 1 + coins::ALL.len());
        assert_eq!(markup.inline_keyboard[0].len(), 1);
        assert_eq!(markup.inline_keyboard[0][0].text, "View Top 3 Coins");
        assert_eq!(markup.inline_keyboard[1][0].text, "Bitcoin");
        assert_eq!(markup.inline_keyboard[10][0].text, "Polygon");
    }
}
