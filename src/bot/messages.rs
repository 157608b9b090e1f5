use crate::data::coins;
use crate::data::parser::PriceSample;

/// Photo caption for a successful report, e.g.
/// "💰 Bitcoin (USD)\nPrice: $65000.50\n24hr Change: -1.23%\n24hr Volume: $30000000000.00"
pub fn format_coin_caption(coin_id: &str, sample: &PriceSample) -> String {
    format!(
        "\u{1f4b0} {} (USD)\nPrice: ${:.2}\n24hr Change: {:.2}%\n24hr Volume: ${:.2}",
        coins::display_name(coin_id),
        sample.price,
        sample.change_24h,
        sample.volume_24h
    )
}

/// Text-only notice sent when the price fetch fails.
pub fn format_fetch_failure(coin_id: &str) -> String {
    format!("Failed to fetch data for {}.", coins::display_name(coin_id))
}

pub fn welcome_message() -> &'static str {
    "Please choose a cryptocurrency:"
}

pub fn help_message() -> &'static str {
    "Coin Report Bot \u{1f4b0}\n\n\
     /start \u{2014} Pick a coin (or the top-3 shortcut) for an instant report\n\
     /help \u{2014} This message\n\n\
     Each report includes the spot price, 24hr change and 24hr volume\n\
     from CoinGecko, plus a snapshot of the coin's chart page.\n\n\
     Scheduled reports for all tracked coins go out daily at\n\
     00:00, 08:00 and 16:00 (UTC+8)."
}
