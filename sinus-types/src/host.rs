//! Narrow interfaces to the subsystems the host owns. Playback, the media
//! library, user storage and persistence all live behind these traits; the
//! plugin only ever calls through them.
use crate::{Identity, Track, UserRecord};
use async_trait::async_trait;
use serenity::all::{GuildId, UserId};
use std::sync::Arc;
use std::time::Duration;

/// Audio output of the bot.
#[async_trait]
pub trait Player: Send + Sync {
    async fn is_playing(&self) -> bool;
    async fn volume(&self) -> u8;
    async fn set_volume(&self, volume: u8);
    async fn is_shuffle(&self) -> bool;
    async fn set_shuffle(&self, shuffle: bool);
    async fn is_repeat(&self) -> bool;
    async fn set_repeat(&self, repeat: bool);
    /// Position in the current (or last) track, if known.
    async fn position(&self) -> Option<Duration>;
    async fn seek(&self, position: Duration);
    async fn set_mute(&self, mute: bool);
    async fn say(&self, text: &str, locale: Option<&str>);
    async fn set_tts_url(&self, url: &str);
    async fn set_tts_locale(&self, locale: &str);
}

/// Media library, queue and playlist navigation.
#[async_trait]
pub trait Media: Send + Sync {
    async fn current_track(&self) -> Option<Track>;
    async fn queue(&self) -> Vec<Track>;
    async fn track_by_id(&self, id: &str) -> Option<Track>;
    async fn search(&self, query: &str) -> Vec<Track>;
    async fn play(&self, track: &Track);
    async fn enqueue(&self, track: &Track);
    async fn prepend(&self, track: &Track);
    async fn play_next(&self);
    async fn play_previous(&self);
    async fn play_queue_next(&self);
    async fn resume_queue(&self);
    async fn stop(&self);
    async fn clear_idle_track(&self);
    /// The url-taking calls return `false` when the host rejects the url.
    async fn stream(&self, url: &str) -> bool;
    async fn yt(&self, url: &str) -> bool;
    async fn ytdl(&self, url: &str) -> bool;
    async fn enqueue_yt(&self, url: &str) -> bool;
    async fn enqueue_ytdl(&self, url: &str) -> bool;
}

/// User accounts and instance administration.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn users(&self) -> Vec<UserRecord>;
    async fn user_by_name(&self, name: &str) -> Option<UserRecord>;
    async fn add_user(&self, name: &str) -> Option<UserRecord>;
    async fn set_user_uid(&self, name: &str, uid: &str) -> bool;
    async fn set_user_password(&self, name: &str, password: &str) -> bool;
    async fn registration_enabled(&self) -> bool;
    async fn set_registration(&self, enabled: bool);
    async fn set_command_prefix(&self, prefix: &str);
    async fn version(&self) -> String;
    async fn reload_scripts(&self) -> bool;
}

/// Connection of the bot to the chat platform.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Client id of the bot itself, as the host formats it.
    async fn bot_client_id(&self) -> String;
    async fn client_by_id(&self, guild_id: Option<GuildId>, user_id: UserId) -> Option<Identity>;
    /// Send a direct notice to a client.
    async fn chat(&self, identity: &Identity, text: &str);
    /// Voice channel the client is currently in.
    async fn channel_of(&self, identity: &Identity) -> Option<String>;
    /// Move the bot, `None` disconnects. Returns `false` if the bot client is unavailable.
    async fn move_to(&self, channel: Option<&str>) -> bool;
    /// Set or clear the "listening to" status.
    async fn set_status(&self, status: Option<&str>);
}

/// Persistent scalar storage, loaded at startup and flushed at shutdown by the host.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<serde_json::Value>;
    async fn set(&self, key: &str, value: serde_json::Value);
}

/// Everything the plugin consumes from the host.
#[derive(Clone)]
pub struct Host {
    pub player: Arc<dyn Player>,
    pub media: Arc<dyn Media>,
    pub engine: Arc<dyn Engine>,
    pub backend: Arc<dyn Backend>,
    pub store: Arc<dyn KeyValueStore>,
}

impl Host {
    /// Build a host from a single value implementing every interface.
    pub fn from_single<T>(host: Arc<T>) -> Self
    where
        T: Player + Media + Engine + Backend + KeyValueStore + 'static,
    {
        Self {
            player: host.clone(),
            media: host.clone(),
            engine: host.clone(),
            backend: host.clone(),
            store: host,
        }
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
