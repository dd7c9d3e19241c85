use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use sinus_types::rest::Method;
use sinus_types::{RestTransport, SinusError};

pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const AGENT: &str = concat!(
    "DiscordBot (https://github.com/SinusBot/scripts, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Shared client, reqwest pools connections per client.
static CLIENT: Lazy<Client> = Lazy::new(build_client);

/// Build a reqwest client with rustls.
pub fn build_client() -> Client {
    reqwest::ClientBuilder::new()
        .use_rustls_tls()
        .build()
        .unwrap_or_default()
}

/// Get a reference to the lazy, static, global reqwest client.
pub fn get_client() -> &'static Client {
    &CLIENT
}

/// Percent-encode an emoji for use in a reaction path segment.
pub fn encode_emoji(emoji: &str) -> String {
    url::form_urlencoded::byte_serialize(emoji.as_bytes()).collect()
}

/// [`RestTransport`] talking to the Discord HTTP API with a bot token.
#[derive(Clone)]
pub struct DiscordRest {
    client: Client,
    token: String,
    base: String,
}

impl std::fmt::Debug for DiscordRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordRest")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl DiscordRest {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: get_client().clone(),
            token: token.into(),
            base: DISCORD_API_BASE.to_string(),
        }
    }

    pub fn with_base(self, base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..self
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl RestTransport for DiscordRest {
    async fn raw(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, SinusError> {
        tracing::trace!("{} {}", method, path);
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bot {}", self.token))
            .header(USER_AGENT, AGENT);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(SinusError::HttpStatus(status.as_u16(), text));
        }
        Ok(text)
    }
}
