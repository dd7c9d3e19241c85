use super::{finish, first_arg, identity, require_user, rest_arg, Outcome};
use crate::permissions::user_by_uid;
use crate::{Context, Error};
use sinus_types::messaging::messages::{
    ERROR_PREFIX, PASSWORD_CHANGED, PASSWORD_PUBLIC_CHANNEL, REGISTRATION_DISABLED,
    SUCCESS_PREFIX, USAGE_PASSWORD, USAGE_PREFIX, USAGE_REGISTER, USERNAME_EXISTS,
    USER_CREATE_FAILED, WARNING_PREFIX,
};
use sinus_types::{Engine, Identity, SinusError};

/// Register a new user bound to your account.
#[poise::command(prefix_command, category = "Account")]
pub async fn register(ctx: Context<'_>, #[rest] username: Option<String>) -> Result<(), Error> {
    let identity = identity(ctx).await;
    let engine = ctx.data().host.engine.clone();
    let outcome = register_internal(engine.as_ref(), &identity, first_arg(username.as_deref())).await?;
    finish(ctx, outcome).await
}

/// Create a user named `username` and bind it to the identity. The account
/// has no privileges until an administrator grants them.
pub async fn register_internal(
    engine: &dyn Engine,
    identity: &Identity,
    username: Option<&str>,
) -> Result<Outcome, SinusError> {
    if !engine.registration_enabled().await {
        return Ok(Outcome::reply(REGISTRATION_DISABLED));
    }
    let username = username.ok_or(SinusError::Usage(USAGE_REGISTER))?;

    if engine.user_by_name(username).await.is_some() {
        return Err(SinusError::Failed(USERNAME_EXISTS.to_string()));
    }
    if let Some(user) = user_by_uid(&engine.users().await, &identity.uid) {
        return Err(SinusError::Failed(format!(
            "You already have a user with the name \"{}\".",
            user.name
        )));
    }

    let user = engine
        .add_user(username)
        .await
        .ok_or_else(|| SinusError::Failed(USER_CREATE_FAILED.to_string()))?;
    if !engine.set_user_uid(&user.name, &identity.uid).await {
        tracing::warn!("Could not bind {} to {}", user.name, identity.uid);
    }
    tracing::info!("Registered {} for {}", user.name, identity.nick);
    Ok(Outcome::done())
}

/// Change your password. Only in direct messages.
#[poise::command(
    prefix_command,
    aliases("pass"),
    check = "require_user",
    category = "Account"
)]
pub async fn password(ctx: Context<'_>, #[rest] value: Option<String>) -> Result<(), Error> {
    let identity = identity(ctx).await;
    let private = ctx.guild_id().is_none();
    let engine = ctx.data().host.engine.clone();
    let outcome =
        password_internal(engine.as_ref(), &identity, rest_arg(value.as_deref()), private).await?;
    finish(ctx, outcome).await
}

pub async fn password_internal(
    engine: &dyn Engine,
    identity: &Identity,
    value: Option<&str>,
    private: bool,
) -> Result<Outcome, SinusError> {
    let Some(value) = value else {
        return Ok(Outcome::reply(format!(
            "{USAGE_PREFIX}{USAGE_PASSWORD}\n{WARNING_PREFIX}{PASSWORD_PUBLIC_CHANNEL}"
        )));
    };
    if !private {
        return Ok(Outcome::reply(format!(
            "{WARNING_PREFIX}{PASSWORD_PUBLIC_CHANNEL}"
        )));
    }

    let users = engine.users().await;
    let Some(user) = user_by_uid(&users, &identity.uid) else {
        return Err(SinusError::Failed(
            "You don't have a user-account. Use **!register** to create one.".to_string(),
        ));
    };
    if !engine.set_user_password(&user.name, value).await {
        return Err(SinusError::Failed("Unable to change your password.".to_string()));
    }
    Ok(Outcome::done_with(format!("{SUCCESS_PREFIX}{PASSWORD_CHANGED}")))
}
