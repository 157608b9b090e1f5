use anyhow::Result;

use crate::data::parser::{self, PriceSample};

const API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Fetch price, 24h change and 24h volume for one coin.
/// Single attempt; the reporter decides how a failure surfaces.
pub async fn fetch_sample(client: &reqwest::Client, coin_id: &str) -> Result<PriceSample> {
    let body = client
        .get(API_URL)
        .query(&[
            ("ids", coin_id),
            ("vs_currencies", "usd"),
            ("include_24hr_change", "true"),
            ("include_24hr_vol", "true"),
        ])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parser::parse_sample(&body, coin_id)
}
