// ------------------------------------------------------------------
// Public types we use to simplify return and parameter types.
// ------------------------------------------------------------------
use std::error::Error as StdError;

pub type Error = Box<dyn StdError + Send + Sync>;

pub mod config;
pub mod errors;
pub mod host;
pub mod messaging;
pub mod privileges;
pub mod rest;
pub mod track;

// ------------------------------------------------------------------
// Public Re-exports
// ------------------------------------------------------------------
pub use config::{BotCredentials, PluginConfig};
pub use errors::SinusError;
pub use host::{Backend, Engine, Host, KeyValueStore, Media, Player};
pub use privileges::Privileges;
pub use rest::RestTransport;
pub use serenity::all::{ChannelId, GuildId, MessageId, UserId};
pub use track::{ControlMessage, Identity, ReactionEvent, Track, UserRecord};
