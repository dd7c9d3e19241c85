use crate::commands::{
    finish, first_arg, require_enqueue_upload, require_playback, require_playback_or_enqueue,
    require_playback_upload, Outcome,
};
use crate::{Context, Error};
use sinus_types::messaging::messages::{
    INVALID_URL, USAGE_QYT, USAGE_QYTDL, USAGE_STREAM, USAGE_YT, USAGE_YTDL,
};
use sinus_types::{Media, SinusError};

/// Ways of handing a url to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlAction {
    Stream,
    Yt,
    Ytdl,
    QueueYt,
    QueueYtdl,
}

impl UrlAction {
    pub fn usage(self) -> &'static str {
        match self {
            Self::Stream => USAGE_STREAM,
            Self::Yt => USAGE_YT,
            Self::Ytdl => USAGE_YTDL,
            Self::QueueYt => USAGE_QYT,
            Self::QueueYtdl => USAGE_QYTDL,
        }
    }
}

pub async fn url_internal(
    media: &dyn Media,
    action: UrlAction,
    url: Option<&str>,
) -> Result<Outcome, SinusError> {
    let url = url.ok_or(SinusError::Usage(action.usage()))?;
    let accepted = match action {
        UrlAction::Stream => media.stream(url).await,
        UrlAction::Yt => media.yt(url).await,
        UrlAction::Ytdl => media.ytdl(url).await,
        UrlAction::QueueYt => media.enqueue_yt(url).await,
        UrlAction::QueueYtdl => media.enqueue_ytdl(url).await,
    };
    if !accepted {
        tracing::debug!("{:?} rejected {}", action, url);
        return Err(SinusError::Failed(INVALID_URL.to_string()));
    }
    Ok(Outcome::done())
}

async fn run(ctx: Context<'_>, action: UrlAction, url: Option<String>) -> Result<(), Error> {
    let media = ctx.data().host.media.clone();
    let outcome = url_internal(media.as_ref(), action, first_arg(url.as_deref())).await?;
    finish(ctx, outcome).await
}

/// Streams from a url, http streams like shoutcast or icecast or remote sound files.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn stream(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    run(ctx, UrlAction::Stream, url).await
}

/// Plays a url via youtube-dl.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn yt(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    run(ctx, UrlAction::Yt, url).await
}

/// Downloads and plays a url via youtube-dl, the file is stored.
#[poise::command(prefix_command, check = "require_playback_upload", category = "Music")]
pub async fn ytdl(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    run(ctx, UrlAction::Ytdl, url).await
}

/// Enqueues a url via youtube-dl.
#[poise::command(
    prefix_command,
    check = "require_playback_or_enqueue",
    category = "Music"
)]
pub async fn qyt(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    run(ctx, UrlAction::QueueYt, url).await
}

/// Downloads and enqueues a url via youtube-dl, the file is stored.
#[poise::command(prefix_command, check = "require_enqueue_upload", category = "Music")]
pub async fn qytdl(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    run(ctx, UrlAction::QueueYtdl, url).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mocks::FakeHost;

    #[tokio::test]
    async fn test_url_actions_reach_the_host() {
        let host = FakeHost::default();
        for action in [
            UrlAction::Stream,
            UrlAction::Yt,
            UrlAction::Ytdl,
            UrlAction::QueueYt,
            UrlAction::QueueYtdl,
        ] {
            let outcome = url_internal(&host, action, Some("https://example.com/a"))
                .await
                .unwrap();
            assert_eq!(outcome, Outcome::done());
        }
        assert_eq!(
            host.actions(),
            vec![
                "stream https://example.com/a",
                "yt https://example.com/a",
                "ytdl https://example.com/a",
                "qyt https://example.com/a",
                "qytdl https://example.com/a",
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_url() {
        let host = FakeHost::default();
        host.set_reject_urls(true);
        let err = url_internal(&host, UrlAction::Stream, Some("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "❌ Invalid URL.");
    }

    #[tokio::test]
    async fn test_missing_url() {
        let host = FakeHost::default();
        let err = url_internal(&host, UrlAction::QueueYtdl, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "❌ Usage: qytdl <url>");
        assert!(host.actions().is_empty());
    }
}
