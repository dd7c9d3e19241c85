use crate::commands::{finish, identity, require_startstop, Outcome};
use crate::{Context, Error};
use sinus_types::messaging::messages::{BOT_NULL, JOIN_FAILED};
use sinus_types::{Backend, Identity};

/// Moves the bot into your channel.
#[poise::command(prefix_command, check = "require_startstop", category = "Music")]
pub async fn join(ctx: Context<'_>) -> Result<(), Error> {
    let identity = identity(ctx).await;
    let backend = ctx.data().host.backend.clone();
    let outcome = join_internal(backend.as_ref(), &identity).await;
    finish(ctx, outcome).await
}

pub async fn join_internal(backend: &dyn Backend, identity: &Identity) -> Outcome {
    let Some(channel) = backend.channel_of(identity).await else {
        return Outcome::reply(JOIN_FAILED);
    };
    if !backend.move_to(Some(&channel)).await {
        return Outcome::reply(BOT_NULL);
    }
    tracing::info!("Joining {} for {}", channel, identity.nick);
    Outcome::done()
}

/// Disconnects the bot from the current voice channel.
#[poise::command(prefix_command, check = "require_startstop", category = "Music")]
pub async fn leave(ctx: Context<'_>) -> Result<(), Error> {
    let backend = ctx.data().host.backend.clone();
    let outcome = leave_internal(backend.as_ref()).await;
    finish(ctx, outcome).await
}

pub async fn leave_internal(backend: &dyn Backend) -> Outcome {
    if !backend.move_to(None).await {
        return Outcome::reply(BOT_NULL);
    }
    Outcome::done()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mocks::FakeHost;

    #[tokio::test]
    async fn test_join_callers_channel() {
        let host = FakeHost::default();
        let me = Identity::new("42", "me");
        assert_eq!(
            join_internal(&host, &me).await,
            Outcome::reply("I'm unable to join your channel :frowning:")
        );

        host.set_voice_channel("42", "lounge");
        assert_eq!(join_internal(&host, &me).await, Outcome::done());
        assert_eq!(host.actions(), vec!["move_to lounge"]);
    }

    #[tokio::test]
    async fn test_without_bot_client() {
        let host = FakeHost::default();
        host.set_bot_missing(true);
        host.set_voice_channel("42", "lounge");
        let outcome = join_internal(&host, &Identity::new("42", "me")).await;
        assert!(outcome.reply.unwrap().starts_with("Unable to change channel"));
        assert!(!leave_internal(&host).await.success);
    }

    #[tokio::test]
    async fn test_leave() {
        let host = FakeHost::default();
        assert_eq!(leave_internal(&host).await, Outcome::done());
        assert_eq!(host.actions(), vec!["move_to -"]);
    }
}
