use async_trait::async_trait;
use pastebin_core::{Config, FormParams};
use reqwest::Client as HttpClient;

use crate::{ClientError, Result};

/// Sends one form POST and hands back the response body.
///
/// Status codes are not interpreted: the service reports its errors in the
/// body, which is classified by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, endpoint: &str, params: &FormParams) -> Result<String>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = if config.insecure_skip_verify {
            HttpClient::builder()
                .danger_accept_invalid_certs(true)
                .build()
                .map_err(|e| ClientError::Config(e.to_string()))?
        } else {
            HttpClient::new()
        };

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, endpoint: &str, params: &FormParams) -> Result<String> {
        let response = self.client.post(endpoint).form(params).send().await?;
        tracing::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response.text().await?)
    }
}
