use crate::messaging::MessageClient;
use crate::permissions::{check_authorized, Requirement};
use sinus_types::messaging::messages::{
    ERROR_PREFIX, NO_PLAYBACK_PERMISSION, REACTION_NEXT, REACTION_PLAYPAUSE, REACTION_PREV,
};
use sinus_types::{Host, Media, Player, Privileges, ReactionEvent};
use std::time::Duration;

/// A transport control shown under the now playing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    PlayPause,
    Next,
}

impl Control {
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            REACTION_PREV => Some(Self::Prev),
            REACTION_PLAYPAUSE => Some(Self::PlayPause),
            REACTION_NEXT => Some(Self::Next),
            _ => None,
        }
    }
}

/// What became of a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Not a control, or not from someone we act for.
    Ignored,
    /// The reacting user lacks the playback privilege.
    Denied,
    Applied(Control),
}

/// Turn a reaction on any message into a playback action.
///
/// The reaction is removed again once the reacting client is known, whether
/// or not the client may use the controls.
pub async fn handle_reaction(
    host: &Host,
    client: &MessageClient,
    event: &ReactionEvent,
) -> ReactionOutcome {
    let Some(control) = Control::from_emoji(&event.emoji) else {
        return ReactionOutcome::Ignored;
    };

    // The host formats its own id with a prefix, so only the tail is compared.
    let bot_id = host.backend.bot_client_id().await;
    if bot_id.ends_with(&event.user_id.to_string()) {
        return ReactionOutcome::Ignored;
    }

    let Some(identity) = host
        .backend
        .client_by_id(event.guild_id, event.user_id)
        .await
    else {
        tracing::debug!("No client for reaction by {}", event.user_id);
        return ReactionOutcome::Ignored;
    };
    if identity.uid == bot_id {
        return ReactionOutcome::Ignored;
    }

    if let Err(why) = client
        .delete_user_reaction(event.channel_id, event.message_id, event.user_id, &event.emoji)
        .await
    {
        tracing::warn!("Could not remove reaction of {}: {}", identity.nick, why);
    }

    let requirement = Requirement::all(Privileges::PLAYBACK);
    if !check_authorized(host.engine.as_ref(), &identity, &requirement).await {
        tracing::info!(
            "{} is missing playback permissions for reaction controls",
            identity.nick
        );
        host.backend
            .chat(&identity, &format!("{ERROR_PREFIX}{NO_PLAYBACK_PERMISSION}"))
            .await;
        return ReactionOutcome::Denied;
    }

    tracing::debug!("{} used {:?}", identity.nick, control);
    apply_control(host.player.as_ref(), host.media.as_ref(), control).await;
    ReactionOutcome::Applied(control)
}

/// Run a control against the player.
pub async fn apply_control(player: &dyn Player, media: &dyn Media, control: Control) {
    match control {
        Control::Prev => previous(player, media).await,
        Control::PlayPause => play_pause(player, media).await,
        Control::Next => next(player, media).await,
    }
}

async fn previous(player: &dyn Player, media: &dyn Media) {
    if !player.is_playing().await {
        return;
    }
    if !media.queue().await.is_empty() {
        // the queue has no history, restart the current track instead
        player.seek(Duration::ZERO).await;
        return;
    }

    let track = media.current_track().await;
    media.play_previous().await;
    if !player.is_playing().await {
        if let Some(track) = track {
            media.play(&track).await;
        }
    }
}

async fn play_pause(player: &dyn Player, media: &dyn Media) {
    if player.is_playing().await {
        media.stop().await;
        return;
    }
    if !media.queue().await.is_empty() {
        media.resume_queue().await;
        return;
    }
    let Some(track) = media.current_track().await else {
        return;
    };

    let resume_at = player
        .position()
        .await
        .filter(|pos| !pos.is_zero())
        .filter(|pos| track.duration.is_some_and(|duration| *pos < duration));
    match resume_at {
        Some(position) => {
            player.set_mute(true).await;
            media.play(&track).await;
            player.seek(position).await;
            player.set_mute(false).await;
        },
        None => media.play(&track).await,
    }
}

async fn next(player: &dyn Player, media: &dyn Media) {
    if player.is_playing().await {
        media.play_next().await;
    } else if !media.queue().await.is_empty() {
        media.play_queue_next().await;
    }
}
