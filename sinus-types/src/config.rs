use crate::messaging::messages::DEFAULT_PREFIX;
use crate::SinusError;
use config_file::FromConfigFile;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;

pub const DEFAULT_REACTION_INITIAL_DELAY_MS: u64 = 1000;
pub const DEFAULT_REACTION_STEP_DELAY_MS: u64 = 150;
pub const DEFAULT_EMBED_REFRESH_DELAY_MS: u64 = 100;
/// Lower bound between two reaction calls, the platform rate limits below this.
pub const MIN_REACTION_STEP_DELAY_MS: u64 = 100;
pub const DISCORD_TOKEN_ENV: &str = "DISCORD_TOKEN";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BotCredentials {
    pub discord_token: String,
}

/// Plugin configuration, as set in the host's web interface.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PluginConfig {
    /// Web interface url, used for album covers in discord.
    pub url: Option<String>,
    pub song_in_status: bool,
    /// Delete the previous now playing message and its command.
    pub delete_old_messages: bool,
    /// React to every successful command.
    pub create_success_reaction: bool,
    pub prefix: Option<String>,
    pub reaction_initial_delay_ms: u64,
    pub reaction_step_delay_ms: u64,
    pub embed_refresh_delay_ms: u64,
    pub credentials: Option<BotCredentials>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            url: None,
            song_in_status: true,
            delete_old_messages: true,
            create_success_reaction: false,
            prefix: Some(DEFAULT_PREFIX.to_string()),
            reaction_initial_delay_ms: DEFAULT_REACTION_INITIAL_DELAY_MS,
            reaction_step_delay_ms: DEFAULT_REACTION_STEP_DELAY_MS,
            embed_refresh_delay_ms: DEFAULT_EMBED_REFRESH_DELAY_MS,
            credentials: None,
        }
    }
}

impl Display for PluginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = String::new();
        result.push_str(&format!("url: {:?}\n", self.url));
        result.push_str(&format!("song_in_status: {}\n", self.song_in_status));
        result.push_str(&format!(
            "delete_old_messages: {}\n",
            self.delete_old_messages
        ));
        result.push_str(&format!(
            "create_success_reaction: {}\n",
            self.create_success_reaction
        ));
        result.push_str(&format!(
            "reaction_delays_ms: {}/{}\n",
            self.reaction_initial_delay_ms, self.reaction_step_delay_ms
        ));
        result.push_str(&format!(
            "embed_refresh_delay_ms: {}\n",
            self.embed_refresh_delay_ms
        ));
        result.push_str(&format!("prefix: {}", self.get_prefix()));
        write!(f, "{}", result)
    }
}

impl PluginConfig {
    /// Load the config from a toml or json file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SinusError> {
        Self::from_config_file(path).map_err(Into::into)
    }

    /// Load the config from a file, falling back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!("Using default config: {:?}", error);
                Self::default()
            },
        }
    }

    pub fn set_credentials(&mut self, creds: BotCredentials) -> &mut Self {
        self.credentials = Some(creds);
        self
    }

    pub fn get_prefix(&self) -> String {
        self.prefix
            .as_ref()
            .cloned()
            .unwrap_or(DEFAULT_PREFIX.to_string())
    }

    /// Web interface url without a trailing slash, if one is configured.
    pub fn web_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Token from the config, or from the environment.
    pub fn discord_token(&self) -> Result<String, SinusError> {
        if let Some(creds) = &self.credentials {
            if !creds.discord_token.is_empty() {
                return Ok(creds.discord_token.clone());
            }
        }
        std::env::var(DISCORD_TOKEN_ENV).map_err(|_| SinusError::NoToken)
    }

    pub fn reaction_step_delay_ms(&self) -> u64 {
        self.reaction_step_delay_ms.max(MIN_REACTION_STEP_DELAY_MS)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert!(config.song_in_status);
        assert!(config.delete_old_messages);
        assert!(!config.create_success_reaction);
        assert_eq!(config.get_prefix(), "!");
        assert_eq!(config.web_url(), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PluginConfig =
            serde_json::from_str(r#"{"url": "https://sinusbot.example.com/", "reaction_step_delay_ms": 20}"#)
                .unwrap();
        assert_eq!(config.web_url(), Some("https://sinusbot.example.com"));
        assert!(config.delete_old_messages);
        assert_eq!(config.reaction_step_delay_ms(), MIN_REACTION_STEP_DELAY_MS);
    }

    #[test]
    fn test_token_from_credentials() {
        let mut config = PluginConfig::default();
        config.set_credentials(BotCredentials {
            discord_token: "abc".to_string(),
        });
        assert_eq!(config.discord_token().unwrap(), "abc");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = PluginConfig::load_or_default("./does-not-exist.toml");
        assert_eq!(config.get_prefix(), "!");
    }
}
