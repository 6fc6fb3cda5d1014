use anyhow::{bail, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    /// An empty token counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = match lookup(BOT_TOKEN_VAR) {
            Some(token) if !token.trim().is_empty() => token,
            _ => bail!("{} environment variable is not set", BOT_TOKEN_VAR),
        };

        Ok(Self { bot_token })
    }
}
