use crate::http_utils::encode_emoji;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sinus_types::config::{
    DEFAULT_REACTION_INITIAL_DELAY_MS, DEFAULT_REACTION_STEP_DELAY_MS, MIN_REACTION_STEP_DELAY_MS,
};
use sinus_types::messaging::messages::{REACTION_NEXT, REACTION_PLAYPAUSE, REACTION_PREV};
use sinus_types::rest::Method;
use sinus_types::{ChannelId, MessageId, RestTransport, SinusError, UserId};
use std::sync::Arc;
use std::time::Duration;

/// The part of a created message we care about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
}

/// Create, edit, react to and delete messages through a [`RestTransport`].
///
/// Every call either returns the decoded response or a [`SinusError`]; callers
/// log the error and carry on, nothing here is retried.
#[derive(Clone)]
pub struct MessageClient {
    transport: Arc<dyn RestTransport>,
    initial_delay: Duration,
    step_delay: Duration,
}

impl std::fmt::Debug for MessageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageClient")
            .field("initial_delay", &self.initial_delay)
            .field("step_delay", &self.step_delay)
            .finish_non_exhaustive()
    }
}

impl MessageClient {
    pub fn new(transport: Arc<dyn RestTransport>) -> Self {
        Self {
            transport,
            initial_delay: Duration::from_millis(DEFAULT_REACTION_INITIAL_DELAY_MS),
            step_delay: Duration::from_millis(DEFAULT_REACTION_STEP_DELAY_MS),
        }
    }

    /// Set the delay before the first control reaction and between the
    /// following ones. The step delay never drops below the rate limit floor.
    pub fn with_delays(self, initial: Duration, step: Duration) -> Self {
        Self {
            initial_delay: initial,
            step_delay: step.max(Duration::from_millis(MIN_REACTION_STEP_DELAY_MS)),
            ..self
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Issue a call, decoding the body as JSON when a response is expected.
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        expect_response: bool,
    ) -> Result<Option<serde_json::Value>, SinusError> {
        let text = self.transport.raw(method, path, body).await?;
        if !expect_response {
            return Ok(None);
        }
        if text.trim().is_empty() {
            return Err(SinusError::InvalidResponse);
        }
        match serde_json::from_str::<serde_json::Value>(&text)? {
            serde_json::Value::Null => Err(SinusError::InvalidResponse),
            value => Ok(Some(value)),
        }
    }

    async fn call_json(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, SinusError> {
        self.call(method, path, body, true)
            .await?
            .ok_or(SinusError::InvalidResponse)
    }

    /// Post a new message to a channel.
    pub async fn create_message<T: Serialize>(
        &self,
        channel_id: ChannelId,
        message: &T,
    ) -> Result<CreatedMessage, SinusError> {
        let body = serde_json::to_value(message)?;
        let path = format!("/channels/{channel_id}/messages");
        let response = self.call_json(Method::POST, &path, Some(body)).await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Replace the content of a message.
    pub async fn edit_message<T: Serialize>(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: &T,
    ) -> Result<serde_json::Value, SinusError> {
        let body = serde_json::to_value(message)?;
        let path = format!("/channels/{channel_id}/messages/{message_id}");
        self.call_json(Method::PATCH, &path, Some(body)).await
    }

    /// React to a message as the bot.
    pub async fn create_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), SinusError> {
        let path = format!(
            "/channels/{channel_id}/messages/{message_id}/reactions/{}/@me",
            encode_emoji(emoji)
        );
        self.call(Method::PUT, &path, None, false).await.map(|_| ())
    }

    /// Remove another user's reaction from a message.
    pub async fn delete_user_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        user_id: UserId,
        emoji: &str,
    ) -> Result<(), SinusError> {
        let path = format!(
            "/channels/{channel_id}/messages/{message_id}/reactions/{}/{user_id}",
            encode_emoji(emoji)
        );
        self.call(Method::DELETE, &path, None, false)
            .await
            .map(|_| ())
    }

    pub async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), SinusError> {
        let path = format!("/channels/{channel_id}/messages/{message_id}");
        self.call(Method::DELETE, &path, None, false)
            .await
            .map(|_| ())
    }

    /// Delete several messages of a channel with as few calls as possible:
    /// nothing for none, a single delete for one, a bulk delete otherwise.
    pub async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
    ) -> Result<(), SinusError> {
        match message_ids {
            [] => Ok(()),
            [message_id] => self.delete_message(channel_id, *message_id).await,
            _ => {
                let path = format!("/channels/{channel_id}/messages/bulk-delete");
                let ids: Vec<String> = message_ids.iter().map(ToString::to_string).collect();
                self.call(Method::POST, &path, Some(json!({ "messages": ids })), false)
                    .await
                    .map(|_| ())
            },
        }
    }

    /// Add the prev, play/pause and next controls to a message, in that order.
    ///
    /// The calls are strictly sequential with a pause in between. The chain
    /// stops at the first failure and reactions already added stay.
    pub async fn attach_controls(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), SinusError> {
        tokio::time::sleep(self.initial_delay).await;
        let controls = [REACTION_PREV, REACTION_PLAYPAUSE, REACTION_NEXT];
        for (i, emoji) in controls.into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.step_delay).await;
            }
            self.create_reaction(channel_id, message_id, emoji).await?;
        }
        Ok(())
    }
}
