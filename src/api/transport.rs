use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::ApiRequest;
use crate::app::Result;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("audiodeck/", env!("CARGO_PKG_VERSION"));

/// The network seam: issue a request, hand back raw bytes.
#[async_trait]
pub trait Transport {
    async fn perform(&self, request: &ApiRequest) -> Result<Vec<u8>>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_secs: u64, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let url = request.url()?;
        let response = self
            .client
            .request(request.method().clone(), url)
            .send()
            .await?;

        response.error_for_status_ref()?;

        let body = response.bytes().await?.to_vec();
        Ok(body)
    }
}
