use crate::commands::{finish, first_arg, require_editbot, require_playback, rest_arg, Outcome};
use crate::{Context, Error};
use sinus_types::messaging::messages::{USAGE_SAY, USAGE_SAYEX, USAGE_TTSLOCALE, USAGE_TTSURL};
use sinus_types::{Player, SinusError};

/// Uses text-to-speech (if configured) to say the given text.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn say(ctx: Context<'_>, #[rest] text: Option<String>) -> Result<(), Error> {
    let player = ctx.data().host.player.clone();
    let outcome = say_internal(player.as_ref(), rest_arg(text.as_deref())).await?;
    finish(ctx, outcome).await
}

pub async fn say_internal(player: &dyn Player, text: Option<&str>) -> Result<Outcome, SinusError> {
    let text = text.ok_or(SinusError::Usage(USAGE_SAY))?;
    player.say(text, None).await;
    Ok(Outcome::done())
}

/// Says the given text with a given locale.
#[poise::command(prefix_command, check = "require_playback", category = "Music")]
pub async fn sayex(ctx: Context<'_>, #[rest] args: Option<String>) -> Result<(), Error> {
    let player = ctx.data().host.player.clone();
    let outcome = sayex_internal(player.as_ref(), rest_arg(args.as_deref())).await?;
    finish(ctx, outcome).await
}

/// `args` is the locale followed by the text.
pub async fn sayex_internal(player: &dyn Player, args: Option<&str>) -> Result<Outcome, SinusError> {
    let (locale, text) = args
        .and_then(|args| args.split_once(char::is_whitespace))
        .map(|(locale, text)| (locale, text.trim()))
        .filter(|(_, text)| !text.is_empty())
        .ok_or(SinusError::Usage(USAGE_SAYEX))?;
    player.say(text, Some(locale)).await;
    Ok(Outcome::done())
}

/// Sets the TTS url.
#[poise::command(prefix_command, check = "require_editbot", category = "Music")]
pub async fn ttsurl(ctx: Context<'_>, #[rest] url: Option<String>) -> Result<(), Error> {
    let url = first_arg(url.as_deref()).ok_or(SinusError::Usage(USAGE_TTSURL))?;
    ctx.data().host.player.set_tts_url(url).await;
    finish(ctx, Outcome::done()).await
}

/// Sets the TTS locale.
#[poise::command(prefix_command, check = "require_editbot", category = "Music")]
pub async fn ttslocale(ctx: Context<'_>, #[rest] locale: Option<String>) -> Result<(), Error> {
    let locale = first_arg(locale.as_deref()).ok_or(SinusError::Usage(USAGE_TTSLOCALE))?;
    ctx.data().host.player.set_tts_locale(locale).await;
    finish(ctx, Outcome::done()).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mocks::FakeHost;

    #[tokio::test]
    async fn test_say() {
        let host = FakeHost::default();
        say_internal(&host, Some("hello there")).await.unwrap();
        assert_eq!(host.actions(), vec!["say hello there"]);
        assert_eq!(
            say_internal(&host, None).await.unwrap_err(),
            SinusError::Usage(USAGE_SAY)
        );
    }

    #[tokio::test]
    async fn test_sayex_splits_locale() {
        let host = FakeHost::default();
        sayex_internal(&host, Some("de-DE Guten   Tag"))
            .await
            .unwrap();
        assert_eq!(host.actions(), vec!["say de-DE Guten   Tag"]);
    }

    #[tokio::test]
    async fn test_sayex_needs_text() {
        let host = FakeHost::default();
        for args in [None, Some("de-DE"), Some("de-DE   ")] {
            let err = sayex_internal(&host, args).await.unwrap_err();
            assert_eq!(err.to_string(), "❌ Usage: sayex <locale> <text>");
        }
        assert!(host.actions().is_empty());
    }
}
