use crate::commands::{finish, invoking_message_id, Outcome};
use crate::messaging::NowPlayingPanel;
use crate::{Context, Error};
use sinus_types::{ChannelId, ControlMessage, Host, MessageId, SinusError};

/// Show what's currently playing, with reaction controls.
#[poise::command(prefix_command, category = "Music")]
pub async fn playing(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    playing_internal(
        &data.host,
        &data.panel,
        ctx.channel_id(),
        invoking_message_id(ctx),
    )
    .await?;
    finish(ctx, Outcome::done()).await
}

/// Post the now playing panel. Only "nothing playing" is reported back to the
/// user, remote failures are logged.
pub async fn playing_internal(
    host: &Host,
    panel: &NowPlayingPanel,
    channel_id: ChannelId,
    invoking_message_id: Option<MessageId>,
) -> Result<Option<ControlMessage>, SinusError> {
    if !host.player.is_playing().await {
        return Err(SinusError::NothingPlaying);
    }
    match panel
        .post(host.media.as_ref(), channel_id, invoking_message_id)
        .await
    {
        Ok(posted) => Ok(Some(posted)),
        Err(SinusError::NothingPlaying) => Err(SinusError::NothingPlaying),
        Err(why) => {
            tracing::error!("Posting now playing message failed: {}", why);
            Ok(None)
        },
    }
}
