pub mod client;
pub mod embed;
pub mod panel;
pub mod registry;

pub use client::{CreatedMessage, MessageClient};
pub use embed::{create_now_playing_embed, Embed, EmbedMessage};
pub use panel::NowPlayingPanel;
pub use registry::EmbedRegistry;
