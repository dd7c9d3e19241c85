pub mod account;
pub mod admin;
pub mod music;
pub mod ping;

pub use account::*;
pub use admin::*;
pub use music::*;
pub use ping::*;

use crate::permissions::{check_authorized, has_user, Requirement};
use crate::{Context, Error};
use poise::serenity_prelude::ReactionType;
use sinus_types::messaging::messages::REACTION_SUCCESS;
use sinus_types::{Identity, MessageId, Privileges};

/// What a command wants said once it is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub reply: Option<String>,
    /// Whether the invoking message gets the success reaction.
    pub success: bool,
}

impl Outcome {
    /// Succeeded silently.
    pub fn done() -> Self {
        Self {
            reply: None,
            success: true,
        }
    }

    /// Succeeded with a reply.
    pub fn done_with(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            success: true,
        }
    }

    /// Did nothing, tell the user why.
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            success: false,
        }
    }
}

/// Return all the commands that are available in the plugin.
pub fn all_commands() -> Vec<crate::Command> {
    vec![register(), password(), ping()]
        .into_iter()
        .chain(music::music_commands())
        .chain(admin::admin_commands())
        .collect()
}

pub fn all_command_names() -> Vec<String> {
    all_commands().into_iter().map(|c| c.name).collect()
}

/// First word of the arguments.
pub fn first_arg(args: Option<&str>) -> Option<&str> {
    args.and_then(|args| args.split_whitespace().next())
}

/// The arguments with surrounding whitespace removed, `None` if empty.
pub fn rest_arg(args: Option<&str>) -> Option<&str> {
    args.map(str::trim).filter(|args| !args.is_empty())
}

/// The message that invoked a prefix command.
pub fn invoking_message_id(ctx: Context<'_>) -> Option<MessageId> {
    match ctx {
        poise::Context::Prefix(pctx) => Some(pctx.msg.id),
        _ => None,
    }
}

/// The host's view of the command author, or one built from the member if
/// the host does not know them.
pub async fn identity(ctx: Context<'_>) -> Identity {
    let author = ctx.author();
    if let Some(identity) = ctx
        .data()
        .host
        .backend
        .client_by_id(ctx.guild_id(), author.id)
        .await
    {
        return identity;
    }

    let member = ctx.author_member().await;
    let group_ids = member
        .as_ref()
        .map(|member| member.roles.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let nick = member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| author.name.clone());
    Identity {
        uid: author.id.to_string(),
        group_ids,
        nick,
    }
}

/// Reply and react as the outcome asks.
pub async fn finish(ctx: Context<'_>, outcome: Outcome) -> Result<(), Error> {
    if let Some(reply) = outcome.reply {
        ctx.say(reply).await?;
    }
    if outcome.success {
        success_reaction(ctx).await;
    }
    Ok(())
}

/// React to the invoking message if success reactions are enabled.
async fn success_reaction(ctx: Context<'_>) {
    if !ctx.data().config.create_success_reaction {
        return;
    }
    if let poise::Context::Prefix(pctx) = ctx {
        let reaction = ReactionType::Unicode(REACTION_SUCCESS.to_string());
        if let Err(why) = pctx.msg.react(ctx.serenity_context(), reaction).await {
            tracing::warn!("Could not add success reaction: {}", why);
        }
    }
}

async fn authorize(ctx: Context<'_>, requirement: Requirement) -> Result<bool, Error> {
    let identity = identity(ctx).await;
    Ok(check_authorized(ctx.data().host.engine.as_ref(), &identity, &requirement).await)
}

pub async fn require_playback(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, Privileges::PLAYBACK.into()).await
}

pub async fn require_playback_or_enqueue(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(
        ctx,
        Requirement::any_of(&[Privileges::PLAYBACK, Privileges::ENQUEUE]),
    )
    .await
}

pub async fn require_enqueuenext(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, Privileges::ENQUEUENEXT.into()).await
}

pub async fn require_playback_editbot(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, (Privileges::PLAYBACK | Privileges::EDITBOT).into()).await
}

pub async fn require_editbot(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, Privileges::EDITBOT.into()).await
}

pub async fn require_playback_upload(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, (Privileges::PLAYBACK | Privileges::UPLOAD_FILE).into()).await
}

pub async fn require_enqueue_upload(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(
        ctx,
        Requirement::any_of(&[
            Privileges::PLAYBACK | Privileges::UPLOAD_FILE,
            Privileges::ENQUEUE | Privileges::UPLOAD_FILE,
        ]),
    )
    .await
}

pub async fn require_startstop(ctx: Context<'_>) -> Result<bool, Error> {
    authorize(ctx, Privileges::STARTSTOP.into()).await
}

/// The author must own a user account.
pub async fn require_user(ctx: Context<'_>) -> Result<bool, Error> {
    let identity = identity(ctx).await;
    Ok(has_user(ctx.data().host.engine.as_ref(), &identity).await)
}
