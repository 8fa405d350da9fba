use crate::error::{OracleError, Result};
use crate::request::RequestTarget;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport for oracle queries
///
/// One fetch is one GET request-response cycle. The client holds no
/// state between queries, so independent pipelines can each own their
/// own instance, or share one across tasks.
pub struct OracleClient {
    client: Client,
}

impl OracleClient {
    /// Create a client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a caller-configured timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OracleError::Http)?;

        Ok(Self { client })
    }

    /// Fetch the raw XML payload for a request target
    ///
    /// Status codes are not interpreted: the service reports its own
    /// errors inside the XML body, so a non-2xx reply is still a
    /// payload. Every transport-layer failure surfaces as
    /// [`OracleError::Network`] with the underlying message preserved.
    pub async fn fetch(&self, target: &RequestTarget) -> Result<String> {
        debug!("fetching {}", target);

        let response = self
            .client
            .get(target.as_str())
            .send()
            .await
            .map_err(normalize_transport_error)?;

        let body = response.text().await.map_err(normalize_transport_error)?;

        Ok(body)
    }
}

/// Map transport-layer failures to the single `Network` kind
///
/// Timeouts, refused or reset connections, protocol violations, and
/// truncated bodies all normalize to `Network` with the original
/// message kept as context. Builder errors are programming errors, not
/// transport failures, and propagate unchanged.
fn normalize_transport_error(error: reqwest::Error) -> OracleError {
    if error.is_builder() {
        OracleError::Http(error)
    } else {
        OracleError::network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ConnectionQuery;

    fn create_query() -> ConnectionQuery {
        let mut query = ConnectionQuery::new("s3kr1t");
        query.set_to("Ian McKellen");
        query
    }

    #[test]
    fn test_client_creation() {
        assert!(OracleClient::new().is_ok());
        assert!(OracleClient::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_refused_connection_normalizes_to_network_failure() {
        let client = OracleClient::with_timeout(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) has no listener on loopback
        let target = create_query()
            .request_target_at("http://127.0.0.1:9/cgi-bin/xml")
            .unwrap();

        let error = tokio_test::block_on(client.fetch(&target)).unwrap_err();

        match error {
            OracleError::Network { message } => assert!(!message.is_empty()),
            other => panic!("expected network failure, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_scheme_propagates_unchanged() {
        let client = OracleClient::new().unwrap();
        let target = create_query()
            .request_target_at("ftp://oracleofbacon.org/cgi-bin/xml")
            .unwrap();

        let error = tokio_test::block_on(client.fetch(&target)).unwrap_err();

        assert!(matches!(error, OracleError::Http(_)));
    }
}
