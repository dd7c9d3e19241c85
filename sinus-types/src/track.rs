use crate::Privileges;
use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};
use std::time::Duration;

/// A track as the host's media library reports it. Read only from our side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// `None` for streams.
    pub duration: Option<Duration>,
    /// Cache key of the album cover, relative to the web interface.
    pub thumbnail: Option<String>,
    /// Transient title reported by a stream, overrides `title` while set.
    pub temp_title: Option<String>,
    /// Transient artist reported by a stream, overrides `artist` while set.
    pub temp_artist: Option<String>,
}

impl Track {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_artist(self, artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..self
        }
    }

    pub fn with_album(self, album: impl Into<String>) -> Self {
        Self {
            album: Some(album.into()),
            ..self
        }
    }

    pub fn with_duration(self, duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..self
        }
    }

    pub fn with_thumbnail(self, thumbnail: impl Into<String>) -> Self {
        Self {
            thumbnail: Some(thumbnail.into()),
            ..self
        }
    }

    pub fn with_temp(self, title: Option<String>, artist: Option<String>) -> Self {
        Self {
            temp_title: title,
            temp_artist: artist,
            ..self
        }
    }

    /// Title to display, the transient one wins when present.
    pub fn display_title(&self) -> &str {
        self.temp_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }

    /// Artist to display, the transient one wins when present.
    pub fn display_artist(&self) -> Option<&str> {
        self.temp_artist
            .as_deref()
            .filter(|a| !a.is_empty())
            .or(self.artist.as_deref())
            .filter(|a| !a.is_empty())
    }
}

/// A user account registered with the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Platform uid the account is bound to.
    pub uid: Option<String>,
    /// Platform group the account is bound to.
    pub group_id: Option<String>,
    pub privileges: Privileges,
}

/// The platform client that issued a command or reaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub group_ids: Vec<String>,
    pub nick: String,
}

impl Identity {
    pub fn new(uid: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            group_ids: Vec::new(),
            nick: nick.into(),
        }
    }

    pub fn with_groups(self, group_ids: Vec<String>) -> Self {
        Self { group_ids, ..self }
    }
}

/// Inbound reaction notification, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    /// Custom emoji id (empty for unicode emoji) followed by the emoji name.
    pub emoji: String,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub user_id: UserId,
    pub guild_id: Option<GuildId>,
}

/// The now playing message currently shown in a channel, together with the
/// command message that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    #[serde(rename = "invokeMessageId", default)]
    pub invoking_message_id: Option<MessageId>,
}
