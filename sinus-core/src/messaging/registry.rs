use dashmap::DashMap;
use sinus_types::messaging::messages::STORE_KEY_LAST_EMBEDS;
use sinus_types::{ChannelId, ControlMessage, KeyValueStore, MessageId};

/// The control message currently shown per channel.
///
/// At most one entry per channel. Replacing an entry never yields to the
/// runtime between reading the old value and writing the new one.
#[derive(Debug, Default)]
pub struct EmbedRegistry {
    entries: DashMap<ChannelId, ControlMessage>,
}

impl EmbedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message now shown in `channel_id` and return the one it replaces.
    pub fn upsert(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        invoking_message_id: Option<MessageId>,
    ) -> Option<ControlMessage> {
        self.entries.insert(
            channel_id,
            ControlMessage {
                channel_id,
                message_id,
                invoking_message_id,
            },
        )
    }

    pub fn get(&self, channel_id: ChannelId) -> Option<ControlMessage> {
        self.entries.get(&channel_id).map(|entry| *entry)
    }

    /// Snapshot of every entry, ordered by channel so refreshes are stable.
    pub fn all(&self) -> Vec<ControlMessage> {
        let mut all: Vec<ControlMessage> = self.entries.iter().map(|entry| *entry).collect();
        all.sort_by_key(|entry| entry.channel_id);
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore the entries saved by [`EmbedRegistry::save`]. Entries that do
    /// not decode are skipped, a value that is not a list is ignored.
    pub async fn load(&self, store: &dyn KeyValueStore) -> usize {
        let Some(value) = store.get(STORE_KEY_LAST_EMBEDS).await else {
            return 0;
        };
        let saved: Vec<serde_json::Value> = match serde_json::from_value(value) {
            Ok(saved) => saved,
            Err(why) => {
                tracing::warn!("Ignoring stored {}: {}", STORE_KEY_LAST_EMBEDS, why);
                return 0;
            },
        };
        for raw in saved {
            match serde_json::from_value::<ControlMessage>(raw) {
                Ok(entry) => {
                    self.entries.insert(entry.channel_id, entry);
                },
                Err(why) => tracing::warn!("Skipping stored control message: {}", why),
            }
        }
        tracing::info!("Restored {} control message(s)", self.entries.len());
        self.entries.len()
    }

    /// Write every entry to the store.
    pub async fn save(&self, store: &dyn KeyValueStore) {
        match serde_json::to_value(self.all()) {
            Ok(value) => store.set(STORE_KEY_LAST_EMBEDS, value).await,
            Err(why) => tracing::error!("Could not serialize control messages: {}", why),
        }
    }
}
