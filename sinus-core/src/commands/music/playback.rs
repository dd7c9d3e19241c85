use crate::commands::{finish, first_arg, require_playback, require_playback_editbot, Outcome};
use crate::{Context, Error};
use sinus_types::messaging::messages::{SUCCESS_PREFIX, USAGE_VOLUME};
use sinus_types::{Media, Player, SinusError};

const VOLUME_STEP: i16 = 10;
const VOLUME_MAX: i16 = 100;

/// Plays the next track (only when a playlist or queue is active).
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn next(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().host.media.play_next().await;
    finish(ctx, Outcome::done()).await
}

/// Plays the previous track (only when a playlist is active).
#[poise::command(
    prefix_command,
    aliases("previous"),
    check = "require_playback",
    category = "Music"
)]
pub async fn prev(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().host.media.play_previous().await;
    finish(ctx, Outcome::done()).await
}

/// Stops playback.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn stop(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().host.media.stop().await;
    finish(ctx, Outcome::done()).await
}

/// Stops playback and removes the idle track.
#[poise::command(
    prefix_command,
    rename = "!stop",
    check = "require_playback_editbot",
    category = "Music"
)]
pub async fn stop_idle(ctx: Context<'_>) -> Result<(), Error> {
    stop_idle_internal(ctx.data().host.media.as_ref()).await;
    finish(ctx, Outcome::done()).await
}

pub async fn stop_idle_internal(media: &dyn Media) {
    media.stop().await;
    media.clear_idle_track().await;
}

/// Change the volume.
#[poise::command(
    prefix_command,
    aliases("vol"),
    check = "require_playback",
    category = "Music"
)]
pub async fn volume(ctx: Context<'_>, #[rest] value: Option<String>) -> Result<(), Error> {
    let player = ctx.data().host.player.clone();
    let outcome = volume_internal(player.as_ref(), first_arg(value.as_deref())).await?;
    finish(ctx, outcome).await
}

/// `up` and `down` (or `dn`) step by ten, a number in 0..=100 is taken as is.
pub async fn volume_internal(player: &dyn Player, value: Option<&str>) -> Result<Outcome, SinusError> {
    let current = i16::from(player.volume().await);
    let volume = match value {
        Some("up") => current + VOLUME_STEP,
        Some("down") | Some("dn") => current - VOLUME_STEP,
        Some(value) => match leading_int(value) {
            Some(volume) if (0..=VOLUME_MAX).contains(&volume) => volume,
            _ => return Err(SinusError::Usage(USAGE_VOLUME)),
        },
        None => return Err(SinusError::Usage(USAGE_VOLUME)),
    };
    let volume = u8::try_from(volume.clamp(0, VOLUME_MAX)).unwrap_or_default();
    tracing::debug!("volume {} -> {}", current, volume);
    player.set_volume(volume).await;
    Ok(Outcome::done())
}

/// The integer at the start of `value`, trailing text is ignored (`50%` is 50).
fn leading_int(value: &str) -> Option<i16> {
    let digits = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..digits].parse().ok()
}

/// Toggles shuffle.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn shuffle(ctx: Context<'_>) -> Result<(), Error> {
    let outcome = shuffle_internal(ctx.data().host.player.as_ref()).await;
    finish(ctx, outcome).await
}

pub async fn shuffle_internal(player: &dyn Player) -> Outcome {
    player.set_shuffle(!player.is_shuffle().await).await;
    Outcome::done_with(format!(
        "{SUCCESS_PREFIX}Shuffle is now {}.",
        enabled(player.is_shuffle().await)
    ))
}

/// Toggles repeat.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn repeat(ctx: Context<'_>) -> Result<(), Error> {
    let outcome = repeat_internal(ctx.data().host.player.as_ref()).await;
    finish(ctx, outcome).await
}

pub async fn repeat_internal(player: &dyn Player) -> Outcome {
    player.set_repeat(!player.is_repeat().await).await;
    Outcome::done_with(format!(
        "{SUCCESS_PREFIX}Repeat is now {}.",
        enabled(player.is_repeat().await)
    ))
}

pub(crate) fn enabled(on: bool) -> &'static str {
    if on {
        "enabled"
    } else {
        "disabled"
    }
}
