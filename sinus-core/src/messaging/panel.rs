use super::client::MessageClient;
use super::embed::{create_now_playing_embed, EmbedMessage};
use super::registry::EmbedRegistry;
use crate::utils::{check_result, format_track};
use sinus_types::messaging::messages::{STATUS_PREFIX, STATUS_SUFFIX};
use sinus_types::{
    Backend, ChannelId, ControlMessage, Media, MessageId, PluginConfig, SinusError, Track,
};
use std::sync::Arc;
use std::time::Duration;

/// The now playing message with its reaction controls, one per channel.
#[derive(Debug, Clone)]
pub struct NowPlayingPanel {
    registry: Arc<EmbedRegistry>,
    client: MessageClient,
    web_url: Option<String>,
    delete_old_messages: bool,
    song_in_status: bool,
    refresh_delay: Duration,
}

impl NowPlayingPanel {
    pub fn new(config: &PluginConfig, client: MessageClient) -> Self {
        Self {
            registry: Arc::new(EmbedRegistry::new()),
            client,
            web_url: config.web_url().map(str::to_string),
            delete_old_messages: config.delete_old_messages,
            song_in_status: config.song_in_status,
            refresh_delay: Duration::from_millis(config.embed_refresh_delay_ms),
        }
    }

    pub fn registry(&self) -> &EmbedRegistry {
        &self.registry
    }

    pub fn client(&self) -> &MessageClient {
        &self.client
    }

    fn embed_for(&self, track: &Track) -> EmbedMessage {
        create_now_playing_embed(track, self.web_url.as_deref()).into()
    }

    /// Post the now playing message to a channel and make it the channel's
    /// control message.
    ///
    /// The message it replaces is deleted together with the command that
    /// asked for it when `delete_old_messages` is set. The controls are
    /// attached in the background.
    pub async fn post(
        &self,
        media: &dyn Media,
        channel_id: ChannelId,
        invoking_message_id: Option<MessageId>,
    ) -> Result<ControlMessage, SinusError> {
        let track = media
            .current_track()
            .await
            .ok_or(SinusError::NothingPlaying)?;
        let created = self
            .client
            .create_message(channel_id, &self.embed_for(&track))
            .await?;
        let channel_id = created.channel_id;

        let previous = self
            .registry
            .upsert(channel_id, created.id, invoking_message_id);
        if let Some(previous) = previous.filter(|_| self.delete_old_messages) {
            let stale: Vec<MessageId> = std::iter::once(previous.message_id)
                .chain(previous.invoking_message_id)
                .collect();
            tracing::debug!("Retiring {} message(s) in {}", stale.len(), channel_id);
            check_result(
                self.client.delete_messages(channel_id, &stale).await,
                "Deleting old now playing message",
            );
        }

        let client = self.client.clone();
        let message_id = created.id;
        tokio::spawn(async move {
            check_result(
                client.attach_controls(channel_id, message_id).await,
                "Attaching reaction controls",
            );
        });

        Ok(ControlMessage {
            channel_id,
            message_id,
            invoking_message_id,
        })
    }

    /// Show `track` in every tracked control message, one edit at a time.
    pub async fn refresh(&self, track: &Track) {
        let message = self.embed_for(track);
        for entry in self.registry.all() {
            check_result(
                self.client
                    .edit_message(entry.channel_id, entry.message_id, &message)
                    .await,
                "Editing now playing message",
            );
            tokio::time::sleep(self.refresh_delay).await;
        }
    }

    /// A track started or its metadata changed.
    pub async fn on_track(&self, backend: &dyn Backend, track: &Track) {
        if self.song_in_status {
            let status = format!("{STATUS_PREFIX}{}{STATUS_SUFFIX}", format_track(track));
            backend.set_status(Some(&status)).await;
        }
        self.refresh(track).await;
    }

    /// Playback ended.
    pub async fn on_track_end(&self, backend: &dyn Backend) {
        if self.song_in_status {
            backend.set_status(None).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mocks::{FakeHost, RecordingTransport};
    use serde_json::json;
    use sinus_types::rest::Method;

    fn panel(config: &PluginConfig, transport: &Arc<RecordingTransport>) -> NowPlayingPanel {
        NowPlayingPanel::new(config, MessageClient::new(transport.clone()))
    }

    fn playing_host() -> FakeHost {
        let host = FakeHost::default();
        host.set_current(Some(Track::new("1", "Song").with_artist("Band")));
        host.set_playing(true);
        host
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_first_message() {
        let transport = Arc::new(RecordingTransport::default());
        transport.respond_with(Ok(json!({ "id": "200", "channel_id": "100" }).to_string()));
        let host = playing_host();
        let panel = panel(&PluginConfig::default(), &transport);

        let posted = panel
            .post(&host, ChannelId::new(100), Some(MessageId::new(7)))
            .await
            .unwrap();
        assert_eq!(posted.message_id, MessageId::new(200));
        assert_eq!(panel.registry().len(), 1);

        // let the control reactions go out
        tokio::time::sleep(Duration::from_secs(2)).await;
        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].path, "/channels/100/messages");
        assert_eq!(
            calls[0].body.as_ref().unwrap()["embeds"][0]["title"],
            "Band - Song"
        );
        assert_eq!(calls.len(), 4);
        assert!(calls[1..].iter().all(|c| c.method == Method::PUT));
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_replaces_and_deletes_old() {
        let transport = Arc::new(RecordingTransport::default());
        let host = playing_host();
        let panel = panel(&PluginConfig::default(), &transport);
        panel
            .registry()
            .upsert(ChannelId::new(100), MessageId::new(50), Some(MessageId::new(49)));

        transport.respond_with(Ok(json!({ "id": "200", "channel_id": "100" }).to_string()));
        panel
            .post(&host, ChannelId::new(100), Some(MessageId::new(7)))
            .await
            .unwrap();

        let entry = panel.registry().get(ChannelId::new(100)).unwrap();
        assert_eq!(entry.message_id, MessageId::new(200));
        assert_eq!(entry.invoking_message_id, Some(MessageId::new(7)));

        let calls = transport.calls();
        assert_eq!(calls[1].path, "/channels/100/messages/bulk-delete");
        assert_eq!(calls[1].body, Some(json!({ "messages": ["50", "49"] })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_posts_leave_one_entry() {
        let transport = Arc::new(RecordingTransport::default());
        transport.respond_with(Ok(json!({ "id": "200", "channel_id": "100" }).to_string()));
        transport.respond_with(Ok(json!({ "id": "201", "channel_id": "100" }).to_string()));
        let host = playing_host();
        let panel = panel(&PluginConfig::default(), &transport);

        panel
            .post(&host, ChannelId::new(100), Some(MessageId::new(7)))
            .await
            .unwrap();
        panel
            .post(&host, ChannelId::new(100), Some(MessageId::new(8)))
            .await
            .unwrap();

        assert_eq!(panel.registry().len(), 1);
        let entry = panel.registry().get(ChannelId::new(100)).unwrap();
        assert_eq!(entry.message_id, MessageId::new(201));
        assert_eq!(entry.invoking_message_id, Some(MessageId::new(8)));

        let deletes: Vec<_> = transport
            .calls()
            .into_iter()
            .filter(|call| call.path.ends_with("/bulk-delete"))
            .collect();
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].body, Some(json!({ "messages": ["200", "7"] })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_keeps_old_when_configured() {
        let transport = Arc::new(RecordingTransport::default());
        let host = playing_host();
        let config = PluginConfig {
            delete_old_messages: false,
            ..Default::default()
        };
        let panel = panel(&config, &transport);
        panel
            .registry()
            .upsert(ChannelId::new(100), MessageId::new(50), None);

        transport.respond_with(Ok(json!({ "id": "200", "channel_id": "100" }).to_string()));
        panel.post(&host, ChannelId::new(100), None).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(panel.registry().len(), 1);
    }

    #[tokio::test]
    async fn test_post_without_track() {
        let transport = Arc::new(RecordingTransport::default());
        let host = FakeHost::default();
        let panel = panel(&PluginConfig::default(), &transport);
        let res = panel.post(&host, ChannelId::new(100), None).await;
        assert_eq!(res.unwrap_err(), SinusError::NothingPlaying);
        assert!(transport.calls().is_empty());
        assert!(panel.registry().is_empty());
    }

    #[tokio::test]
    async fn test_failed_post_leaves_registry() {
        let transport = Arc::new(RecordingTransport::default());
        transport.respond_with(Err(SinusError::HttpStatus(403, "Missing Access".to_string())));
        let host = playing_host();
        let panel = panel(&PluginConfig::default(), &transport);
        assert!(panel.post(&host, ChannelId::new(100), None).await.is_err());
        assert!(panel.registry().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_track_sets_status_and_edits_all() {
        let transport = Arc::new(RecordingTransport::default());
        let host = FakeHost::default();
        let panel = panel(&PluginConfig::default(), &transport);
        panel.registry().upsert(ChannelId::new(1), MessageId::new(10), None);
        panel.registry().upsert(ChannelId::new(2), MessageId::new(20), None);

        let track = Track::new("1", "Song").with_artist("Band");
        let start = tokio::time::Instant::now();
        panel.on_track(&host, &track).await;

        assert_eq!(host.status(), Some("🎵 Band - Song 🎵".to_string()));
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::PATCH);
        assert_eq!(calls[0].path, "/channels/1/messages/10");
        assert_eq!(calls[1].path, "/channels/2/messages/20");
        assert_eq!(calls[1].at - start, Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_status_disabled() {
        let transport = Arc::new(RecordingTransport::default());
        let host = FakeHost::default();
        host.set_status_value(Some("keep".to_string()));
        let config = PluginConfig {
            song_in_status: false,
            ..Default::default()
        };
        let panel = panel(&config, &transport);
        panel.on_track(&host, &Track::new("1", "Song")).await;
        panel.on_track_end(&host).await;
        assert_eq!(host.status(), Some("keep".to_string()));
    }

    #[tokio::test]
    async fn test_track_end_clears_status() {
        let transport = Arc::new(RecordingTransport::default());
        let host = FakeHost::default();
        host.set_status_value(Some("🎵 x 🎵".to_string()));
        let panel = panel(&PluginConfig::default(), &transport);
        panel.on_track_end(&host).await;
        assert_eq!(host.status(), None);
    }
}
