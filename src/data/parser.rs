use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One CoinGecko quote, ephemeral per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
}

#[derive(Deserialize)]
struct Quote {
    usd: f64,
    usd_24h_change: f64,
    usd_24h_vol: f64,
}

/// Extract a coin's sample from a /simple/price response body,
/// shaped like `{"bitcoin": {"usd": ..., "usd_24h_change": ..., "usd_24h_vol": ...}}`.
pub fn parse_sample(body: &str, coin_id: &str) -> Result<PriceSample> {
    let parsed: HashMap<String, Quote> =
        serde_json::from_str(body).context("Malformed price response")?;
    let quote = parsed
        .get(coin_id)
        .with_context(|| format!("No quote for {coin_id} in price response"))?;
    Ok(PriceSample {
        price: quote.usd,
        change_24h: quote.usd_24h_change,
        volume_24h: quote.usd_24h_vol,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_sample;

    #[test]
    fn extracts_all_three_fields() {
        let body =
            r#"{"bitcoin":{"usd":65000.5,"usd_24h_change":-1.234,"usd_24h_vol":30000000000}}"#;
        let sample = parse_sample(body, "bitcoin").unwrap();
        assert_eq!(sample.price, 65000.5);
        assert_eq!(sample.change_24h, -1.234);
        assert_eq!(sample.volume_24h, 30000000000.0);
    }

    #[test]
    fn missing_coin_key_is_an_error() {
        let body = r#"{"bitcoin":{"usd":1.0,"usd_24h_change":0.0,"usd_24h_vol":2.0}}"#;
        let err = parse_sample(body, "ethereum").unwrap_err();
        assert!(err.to_string().contains("ethereum"));
    }

    #[test]
    fn missing_volume_field_is_an_error() {
        let body = r#"{"bitcoin":{"usd":1.0,"usd_24h_change":0.0}}"#;
        assert!(parse_sample(body, "bitcoin").is_err());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_sample("<html>rate limited</html>", "bitcoin").is_err());
    }
}
