use crate::commands::music::playback::enabled;
use crate::commands::{finish, first_arg, require_editbot, Outcome};
use crate::{Context, Error};
use sinus_types::messaging::messages::{
    PLUGIN_NAME, PLUGIN_VERSION, SCRIPTS_RELOADED, SCRIPTS_RELOAD_FAILED, SUCCESS_PREFIX,
    USAGE_PREFIX, USAGE_PREFIX_CMD, USAGE_REGISTRATION,
};
use sinus_types::{Engine, SinusError};

pub fn admin_commands() -> [crate::Command; 4] {
    [registration(), prefix(), version(), reload()]
}

/// Enable or disable user registration.
#[poise::command(prefix_command, check = "require_editbot", category = "Admin")]
pub async fn registration(ctx: Context<'_>, #[rest] value: Option<String>) -> Result<(), Error> {
    let engine = ctx.data().host.engine.clone();
    let outcome = registration_internal(engine.as_ref(), first_arg(value.as_deref())).await;
    finish(ctx, outcome).await
}

pub async fn registration_internal(engine: &dyn Engine, value: Option<&str>) -> Outcome {
    match value {
        Some("enable") => {
            engine.set_registration(true).await;
            Outcome::done_with(format!("{SUCCESS_PREFIX}Registration is now enabled."))
        },
        Some("disable") => {
            engine.set_registration(false).await;
            Outcome::done_with(format!("{SUCCESS_PREFIX}Registration is now disabled."))
        },
        _ => Outcome::reply(format!(
            "Registration is currently {}.\n{USAGE_PREFIX}{USAGE_REGISTRATION}",
            enabled(engine.registration_enabled().await)
        )),
    }
}

/// Changes the prefix for all core commands of the host.
#[poise::command(prefix_command, check = "require_editbot", category = "Admin")]
pub async fn prefix(ctx: Context<'_>, #[rest] prefix: Option<String>) -> Result<(), Error> {
    let engine = ctx.data().host.engine.clone();
    let outcome = prefix_internal(engine.as_ref(), first_arg(prefix.as_deref())).await?;
    finish(ctx, outcome).await
}

pub async fn prefix_internal(engine: &dyn Engine, prefix: Option<&str>) -> Result<Outcome, SinusError> {
    let prefix = prefix.ok_or(SinusError::Usage(USAGE_PREFIX_CMD))?;
    engine.set_command_prefix(prefix).await;
    Ok(Outcome::done_with(format!("{SUCCESS_PREFIX}New prefix: {prefix}")))
}

/// Shows the host and plugin versions.
#[poise::command(prefix_command, check = "require_editbot", category = "Admin")]
pub async fn version(ctx: Context<'_>) -> Result<(), Error> {
    let engine = ctx.data().host.engine.clone();
    let outcome = version_internal(engine.as_ref()).await;
    finish(ctx, outcome).await
}

pub async fn version_internal(engine: &dyn Engine) -> Outcome {
    Outcome::done_with(format!(
        "SinusBot v{}\n{PLUGIN_NAME} v{PLUGIN_VERSION}",
        engine.version().await
    ))
}

/// Reloads scripts. New scripts require a complete restart.
#[poise::command(prefix_command, check = "require_editbot", category = "Admin")]
pub async fn reload(ctx: Context<'_>) -> Result<(), Error> {
    let engine = ctx.data().host.engine.clone();
    let outcome = reload_internal(engine.as_ref()).await;
    finish(ctx, outcome).await
}

pub async fn reload_internal(engine: &dyn Engine) -> Outcome {
    if engine.reload_scripts().await {
        tracing::info!("Scripts reloaded");
        Outcome::done_with(format!("{SUCCESS_PREFIX}{SCRIPTS_RELOADED}"))
    } else {
        Outcome::reply(SCRIPTS_RELOAD_FAILED)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mocks::FakeHost;

    #[tokio::test]
    async fn test_registration_toggle() {
        let host = FakeHost::default();
        let outcome = registration_internal(&host, Some("enable")).await;
        assert_eq!(
            outcome,
            Outcome::done_with("✔ Registration is now enabled.")
        );
        assert!(host.registration_enabled().await);

        let outcome = registration_internal(&host, Some("what")).await;
        assert_eq!(
            outcome.reply.as_deref(),
            Some("Registration is currently enabled.\n❌ Usage: registration <enable|disable>")
        );
        assert!(!outcome.success);

        registration_internal(&host, Some("disable")).await;
        assert!(!host.registration_enabled().await);
    }

    #[tokio::test]
    async fn test_prefix() {
        let host = FakeHost::default();
        let outcome = prefix_internal(&host, Some("+")).await.unwrap();
        assert_eq!(outcome.reply.as_deref(), Some("✔ New prefix: +"));
        assert_eq!(host.actions(), vec!["prefix +"]);
        assert_eq!(
            prefix_internal(&host, None).await.unwrap_err(),
            SinusError::Usage(USAGE_PREFIX_CMD)
        );
    }

    #[tokio::test]
    async fn test_version() {
        let host = FakeHost::default();
        let reply = version_internal(&host).await.reply.unwrap();
        assert!(reply.starts_with("SinusBot v1.0.0-test\nSinusBot Commands v"));
    }

    #[tokio::test]
    async fn test_reload() {
        let host = FakeHost::default();
        assert_eq!(
            reload_internal(&host).await,
            Outcome::reply("Unable to reload scripts. Did you allow it in your `config.ini`?")
        );
        host.set_reload_ok(true);
        assert!(reload_internal(&host).await.success);
    }
}
