use crate::commands::{
    finish, require_enqueuenext, require_playback, require_playback_or_enqueue, rest_arg, Outcome,
};
use crate::utils::format_track;
use crate::{Context, Error};
use sinus_types::messaging::messages::{
    NOTHING_FOUND, USAGE_PLAY, USAGE_QUEUENEXT, USAGE_SEARCH,
};
use sinus_types::{Media, Player, SinusError, Track};

/// Look a track up by id, falling back to the first search hit.
pub async fn resolve_track(media: &dyn Media, id_or_query: &str) -> Result<Track, SinusError> {
    if let Some(track) = media.track_by_id(id_or_query).await {
        return Ok(track);
    }
    media
        .search(id_or_query)
        .await
        .into_iter()
        .next()
        .ok_or(SinusError::NothingFound)
}

/// Searches for tracks.
#[poise::command(
    prefix_command,
    aliases("s"),
    check = "require_playback_or_enqueue",
    category = "Music"
)]
pub async fn search(ctx: Context<'_>, #[rest] query: Option<String>) -> Result<(), Error> {
    let media = ctx.data().host.media.clone();
    let outcome = search_internal(media.as_ref(), rest_arg(query.as_deref())).await?;
    finish(ctx, outcome).await
}

pub async fn search_internal(media: &dyn Media, query: Option<&str>) -> Result<Outcome, SinusError> {
    let query = query.ok_or(SinusError::Usage(USAGE_SEARCH))?;
    let tracks = media.search(query).await;
    tracing::debug!("search {:?}: {} result(s)", query, tracks.len());
    if tracks.is_empty() {
        return Ok(Outcome::done_with(NOTHING_FOUND));
    }
    let lines: Vec<String> = tracks.iter().map(format_track).collect();
    Ok(Outcome::done_with(lines.join("\n")))
}

/// Plays a track by its id or searches for a track and plays the first match.
#[poise::command(
    prefix_command,
    aliases("p"),
    check = "require_playback",
    category = "Music"
)]
pub async fn play(ctx: Context<'_>, #[rest] query: Option<String>) -> Result<(), Error> {
    let media = ctx.data().host.media.clone();
    let outcome = play_internal(media.as_ref(), rest_arg(query.as_deref())).await?;
    finish(ctx, outcome).await
}

pub async fn play_internal(media: &dyn Media, query: Option<&str>) -> Result<Outcome, SinusError> {
    let query = query.ok_or(SinusError::Usage(USAGE_PLAY))?;
    let track = resolve_track(media, query).await?;
    media.play(&track).await;
    Ok(Outcome::done_with(format!("Playing {}", format_track(&track))))
}

/// Enqueue a track, or resume the queue when no track is given.
#[poise::command(
    prefix_command,
    aliases("q"),
    check = "require_playback_or_enqueue",
    category = "Music"
)]
pub async fn queue(ctx: Context<'_>, #[rest] query: Option<String>) -> Result<(), Error> {
    let host = &ctx.data().host;
    let outcome = queue_internal(
        host.player.as_ref(),
        host.media.as_ref(),
        rest_arg(query.as_deref()),
    )
    .await?;
    finish(ctx, outcome).await
}

pub async fn queue_internal(
    player: &dyn Player,
    media: &dyn Media,
    query: Option<&str>,
) -> Result<Outcome, SinusError> {
    let Some(query) = query else {
        if !player.is_playing().await {
            media.play_queue_next().await;
        }
        return Ok(Outcome::default());
    };
    let track = resolve_track(media, query).await?;
    media.enqueue(&track).await;
    Ok(Outcome::done_with(format!(
        "Added {} to the queue",
        format_track(&track)
    )))
}

/// Prepends a track to the queue.
#[poise::command(
    prefix_command,
    aliases("qnext", "qn"),
    check = "require_enqueuenext",
    category = "Music"
)]
pub async fn queuenext(ctx: Context<'_>, #[rest] query: Option<String>) -> Result<(), Error> {
    let media = ctx.data().host.media.clone();
    let outcome = queuenext_internal(media.as_ref(), rest_arg(query.as_deref())).await?;
    finish(ctx, outcome).await
}

pub async fn queuenext_internal(
    media: &dyn Media,
    query: Option<&str>,
) -> Result<Outcome, SinusError> {
    let query = query.ok_or(SinusError::Usage(USAGE_QUEUENEXT))?;
    let track = resolve_track(media, query).await?;
    media.prepend(&track).await;
    Ok(Outcome::done_with(format!(
        "Added {} to the queue",
        format_track(&track)
    )))
}
