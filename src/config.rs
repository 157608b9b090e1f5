use anyhow::{Context, Result};
use serde::Deserialize;

/// Wire format of config.json: both keys are required strings.
#[derive(Deserialize)]
struct RawConfig {
    token: String,
    chat_id: String,
}

#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub chat_id: i64,
}

impl Config {
    /// Load from CONFIG_PATH, falling back to ./config.json.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".into());
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        Self::from_json(&text)
    }

    fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text).context("Invalid config file")?;
        let chat_id = raw
            .chat_id
            .parse()
            .context("chat_id must be a numeric Telegram chat id")?;
        Ok(Self {
            token: raw.token,
            chat_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parses_valid_config() {
        let cfg = Config::from_json(r#"{"token": "123:abc", "chat_id": "-1009876"}"#).unwrap();
        assert_eq!(cfg.token, "123:abc");
        assert_eq!(cfg.chat_id, -1009876);
    }

    #[test]
    fn missing_chat_id_is_fatal() {
        assert!(Config::from_json(r#"{"token": "123:abc"}"#).is_err());
    }

    #[test]
    fn missing_token_is_fatal() {
        assert!(Config::from_json(r#"{"chat_id": "42"}"#).is_err());
    }

    #[test]
    fn non_numeric_chat_id_is_fatal() {
        let err = Config::from_json(r#"{"token": "t", "chat_id": "everyone"}"#).unwrap_err();
        assert!(err.to_string().contains("chat_id"));
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(Config::from_json("not json").is_err());
    }
}
