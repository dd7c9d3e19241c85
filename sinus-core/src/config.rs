use crate::handlers::handle_event;
use crate::utils::check_reply;
use crate::{Data, Error};
use colored::Colorize;
use poise::serenity_prelude::{self as serenity, FullEvent, GatewayIntents};
use sinus_types::SinusError;

/// Replies to command failures, logs everything else.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::EventHandler { error, event, .. } => match event {
            FullEvent::PresenceUpdate { .. } => {},
            _ => {
                tracing::warn!(
                    "{} {} {} {}",
                    "In event handler for ".yellow(),
                    event.snake_case_name().yellow().italic(),
                    " event: ".yellow(),
                    error.to_string().yellow().bold(),
                );
            },
        },
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::warn!(
                "<<< {} Error in command: {:?}",
                ctx.command().qualified_name,
                error.to_string(),
            );
            check_reply(ctx.say(error.to_string()).await.map_err(Into::into));
        },
        poise::FrameworkError::CommandCheckFailed {
            error: None, ctx, ..
        } => {
            tracing::debug!("Denied {} to {}", ctx.command().qualified_name, ctx.author().id);
            let denial = SinusError::UnauthorizedUser.to_string();
            check_reply(ctx.say(denial).await.map_err(Into::into));
        },
        poise::FrameworkError::CommandCheckFailed {
            error: Some(error),
            ctx,
            ..
        } => {
            tracing::error!(
                "Permission check for {} failed: {}",
                ctx.command().qualified_name,
                error
            );
        },
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        },
    }
}

/// Gateway intents the plugin needs: prefix commands and reactions.
pub fn intents() -> GatewayIntents {
    GatewayIntents::non_privileged()
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
}

/// Create the poise framework and the serenity client around the plugin state.
pub async fn poise_framework(data: Data) -> Result<serenity::Client, Error> {
    let token = data.config.discord_token()?;
    let commands = crate::commands::all_commands();
    tracing::info!("Commands: {:?}", crate::commands::all_command_names());
    tracing::info!("Config:\n{}", data.config);

    let options = poise::FrameworkOptions::<Data, Error> {
        commands,
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(data.config.get_prefix()),
            case_insensitive_commands: true,
            ..Default::default()
        },
        // The global error handler for all error cases that may occur
        on_error: |error| Box::pin(on_error(error)),
        // This code is run before every command
        pre_command: |ctx| {
            Box::pin(async move {
                tracing::trace!(">>> {}!", ctx.command().qualified_name);
            })
        },
        // This code is run after a command if it was successful (returned Ok)
        post_command: |ctx| {
            Box::pin(async move {
                tracing::trace!("<<< {}!", ctx.command().qualified_name);
            })
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(handle_event(ctx, event, framework, data))
        },
        skip_checks_for_owners: false,
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!("Logged in as {}", ready.user.name);
                data.load().await;
                Ok(data)
            })
        })
        .build();

    let client = serenity::Client::builder(&token, intents())
        .framework(framework)
        .await?;
    Ok(client)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_intents_cover_reactions_and_content() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGE_REACTIONS));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
    }
}
