use crate::SinusError;
use async_trait::async_trait;
pub use reqwest::Method;

/// Raw authenticated passthrough to the chat platform's REST API.
///
/// `path` is relative to the API root, e.g. `/channels/1/messages`. The raw
/// response body is returned on success; decoding is left to the caller.
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn raw(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, SinusError>;
}
