use handlers::ReactionOutcome;
use messaging::{MessageClient, NowPlayingPanel};
use sinus_types::messaging::messages::{PLUGIN_NAME, PLUGIN_VERSION};
use sinus_types::{Host, PluginConfig, ReactionEvent, RestTransport, SinusError, Track};
use std::sync::Arc;
use std::time::Duration;

pub mod commands;
pub mod config;
pub mod handlers;
pub mod http_utils;
pub mod messaging;
pub mod permissions;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use config::poise_framework;
pub use http_utils::DiscordRest;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type Command = poise::Command<Data, Error>;

/// Plugin state shared by commands and event handlers.
#[derive(Debug)]
pub struct DataInner {
    pub config: PluginConfig,
    pub host: Host,
    pub panel: NowPlayingPanel,
}

#[derive(Clone, Debug)]
pub struct Data(pub Arc<DataInner>);

impl std::ops::Deref for Data {
    type Target = DataInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Data {
    pub fn new(config: PluginConfig, host: Host, transport: Arc<dyn RestTransport>) -> Self {
        let client = MessageClient::new(transport).with_delays(
            Duration::from_millis(config.reaction_initial_delay_ms),
            Duration::from_millis(config.reaction_step_delay_ms()),
        );
        let panel = NowPlayingPanel::new(&config, client);
        Self(Arc::new(DataInner {
            config,
            host,
            panel,
        }))
    }

    /// Build the plugin state talking to Discord with the configured token.
    pub fn from_config(config: PluginConfig, host: Host) -> Result<Self, SinusError> {
        let transport = DiscordRest::new(config.discord_token()?);
        Ok(Self::new(config, host, Arc::new(transport)))
    }

    /// Restore the control messages persisted by the last run.
    pub async fn load(&self) -> usize {
        let count = self.panel.registry().load(self.host.store.as_ref()).await;
        tracing::info!("{} v{} loaded", PLUGIN_NAME, PLUGIN_VERSION);
        count
    }

    /// Persist the control messages so the next run can keep them updated.
    pub async fn shutdown(&self) {
        self.panel.registry().save(self.host.store.as_ref()).await;
        tracing::info!("Saved {} control message(s)", self.panel.registry().len());
    }

    /// A new track started playing.
    pub async fn on_track(&self, track: &Track) {
        self.panel.on_track(self.host.backend.as_ref(), track).await;
    }

    /// Playback stopped.
    pub async fn on_track_end(&self) {
        self.panel.on_track_end(self.host.backend.as_ref()).await;
    }

    pub async fn on_reaction(&self, event: &ReactionEvent) -> ReactionOutcome {
        handlers::handle_reaction(&self.host, self.panel.client(), event).await
    }
}

#[cfg(test)]
mod lib_test {
    use super::*;
    use crate::test::mocks::{FakeHost, RecordingTransport};
    use serde_json::json;
    use sinus_types::messaging::messages::STORE_KEY_LAST_EMBEDS;
    use sinus_types::{ChannelId, MessageId};

    fn data(host: &Arc<FakeHost>) -> Data {
        Data::new(
            PluginConfig::default(),
            Host::from_single(host.clone()),
            Arc::new(RecordingTransport::default()),
        )
    }

    #[tokio::test]
    async fn test_load_then_shutdown_round_trips_the_registry() {
        let host = Arc::new(FakeHost::default());
        host.store_value(
            STORE_KEY_LAST_EMBEDS,
            json!([
                { "channelId": "1", "messageId": "10", "invokeMessageId": "9" },
                { "channelId": "2", "messageId": "20" },
            ]),
        );
        let data = data(&host);
        assert_eq!(data.load().await, 2);

        let entry = data.panel.registry().get(ChannelId::new(2)).unwrap();
        assert_eq!(entry.message_id, MessageId::new(20));

        data.panel
            .registry()
            .upsert(ChannelId::new(1), MessageId::new(11), None);
        data.shutdown().await;
        assert_eq!(
            host.stored(STORE_KEY_LAST_EMBEDS),
            Some(json!([
                { "channelId": "1", "messageId": "11", "invokeMessageId": null },
                { "channelId": "2", "messageId": "20", "invokeMessageId": null },
            ]))
        );
    }

    #[tokio::test]
    async fn test_load_without_stored_state() {
        let host = Arc::new(FakeHost::default());
        assert_eq!(data(&host).load().await, 0);
    }

    #[tokio::test]
    async fn test_track_end_clears_status() {
        let host = Arc::new(FakeHost::default());
        host.set_status_value(Some("🎵 x 🎵".to_string()));
        data(&host).on_track_end().await;
        assert_eq!(host.status(), None);
    }
}
