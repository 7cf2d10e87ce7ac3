use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub to: String,
}

/// Success envelope returned by the translation service. Only
/// `translatedText` is read; any other field is ignored whatever its type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
}

/// Status code and undecoded body of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn decode(&self) -> Result<TranslateResponse, ProbeError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Translate interface - the service itself lives behind HTTP
#[async_trait]
pub trait TranslateApi: Send + Sync {
    /// Send a well-formed request, JSON-encoded.
    async fn translate(&self, request: &TranslateRequest) -> Result<RawResponse, ProbeError>;

    /// Send `payload` as the request body exactly as given.
    async fn post_raw(&self, payload: &str) -> Result<RawResponse, ProbeError>;

    /// Endpoint the requests go to, for report messages.
    fn endpoint(&self) -> &str;
}
