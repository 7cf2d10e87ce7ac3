use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::ProbeError;

use super::interface::{RawResponse, TranslateApi, TranslateRequest};

/// HTTP client for the translation endpoint. One instance is shared by
/// every request of a run.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: Client,
    api_url: String,
    timeout_ms: u64,
}

impl TranslateClient {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProbeError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<RawResponse, ProbeError> {
        let response = builder
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, &self.api_url, self.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, &self.api_url, self.timeout_ms))?;

        debug!("POST {} -> {} ({} bytes)", self.api_url, status, body.len());
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl TranslateApi for TranslateClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<RawResponse, ProbeError> {
        self.send(self.client.post(&self.api_url).json(request)).await
    }

    async fn post_raw(&self, payload: &str) -> Result<RawResponse, ProbeError> {
        self.send(self.client.post(&self.api_url).body(payload.to_owned()))
            .await
    }

    fn endpoint(&self) -> &str {
        &self.api_url
    }
}
