use super::{finish, Outcome};
use crate::{Context, Error};
use sinus_types::messaging::messages::PONG;

/// Responds with "PONG".
#[poise::command(prefix_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    tracing::trace!("ping from {}", ctx.author().name);
    finish(ctx, Outcome::done_with(PONG)).await
}
