use crate::{Data, Error};
use colored::Colorize;
use poise::serenity_prelude::{self as serenity, FullEvent, Reaction, ReactionType};
use sinus_types::ReactionEvent;

/// The emoji as the reaction dispatcher sees it: custom emoji id followed by
/// its name, or the unicode emoji itself.
pub fn emoji_key(emoji: &ReactionType) -> Option<String> {
    match emoji {
        ReactionType::Unicode(emoji) => Some(emoji.clone()),
        ReactionType::Custom { id, name, .. } => {
            Some(format!("{}{}", id, name.as_deref().unwrap_or_default()))
        },
        _ => None,
    }
}

fn reaction_event(reaction: &Reaction) -> Option<ReactionEvent> {
    Some(ReactionEvent {
        emoji: emoji_key(&reaction.emoji)?,
        channel_id: reaction.channel_id,
        message_id: reaction.message_id,
        user_id: reaction.user_id?,
        guild_id: reaction.guild_id,
    })
}

pub async fn handle_event(
    _ctx: &serenity::Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            tracing::info!("{} {}", data_about_bot.user.name, "is connected!".green());
        },
        FullEvent::ReactionAdd { add_reaction } => {
            let Some(event) = reaction_event(add_reaction) else {
                tracing::trace!("Skipping reaction without user or emoji");
                return Ok(());
            };
            let outcome = data.on_reaction(&event).await;
            tracing::debug!("reaction {} -> {:?}", event.emoji, outcome);
        },
        _ => {},
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use poise::serenity_prelude::EmojiId;

    #[test]
    fn test_emoji_key() {
        assert_eq!(
            emoji_key(&ReactionType::Unicode("⏯".to_string())).as_deref(),
            Some("⏯")
        );
        let custom = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(42),
            name: Some("play".to_string()),
        };
        assert_eq!(emoji_key(&custom).as_deref(), Some("42play"));
        let nameless = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(7),
            name: None,
        };
        assert_eq!(emoji_key(&nameless).as_deref(), Some("7"));
    }
}
