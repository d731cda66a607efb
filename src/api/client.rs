use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{ApiRequest, Transport};
use crate::app::Result;

/// Composes transport and decoding: perform the call, then decode the body
/// as the caller's expected type. No retries.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<dyn Transport + Send + Sync>,
}

impl RequestClient {
    pub fn new(transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self { transport }
    }

    pub async fn perform<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let body = self.transport.perform(request).await?;
        let decoded = serde_json::from_slice(&body)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde::Deserialize;

    use super::*;
    use crate::app::AudiodeckError;

    struct StaticTransport {
        body: Vec<u8>,
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn perform(&self, _request: &ApiRequest) -> Result<Vec<u8>> {
            Ok(self.body.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn perform(&self, _request: &ApiRequest) -> Result<Vec<u8>> {
            Err(AudiodeckError::Other("connection reset".to_string()))
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        message: String,
    }

    #[tokio::test]
    async fn test_perform_decodes_expected_type() {
        let transport = Arc::new(StaticTransport {
            body: br#"{"message": "hello"}"#.to_vec(),
        });
        let client = RequestClient::new(transport);
        let request = ApiRequest::get("api.example.com", "/greeting");

        let greeting: Greeting = client.perform(&request).await.unwrap();
        assert_eq!(greeting.message, "hello");
    }

    #[tokio::test]
    async fn test_decode_failure_wraps_as_parsing_error() {
        let transport = Arc::new(StaticTransport {
            body: b"not json at all".to_vec(),
        });
        let client = RequestClient::new(transport);
        let request = ApiRequest::get("api.example.com", "/greeting");

        let err = client.perform::<Greeting>(&request).await.unwrap_err();
        assert!(matches!(err, AudiodeckError::Parsing(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let client = RequestClient::new(Arc::new(FailingTransport));
        let request = ApiRequest::get("api.example.com", "/greeting");

        let err = client.perform::<Greeting>(&request).await.unwrap_err();
        assert!(matches!(err, AudiodeckError::Other(_)));
    }
}
