use reqwest::blocking::Client;

use crate::core::ForgetError;

/// Status code and full body of a completed request. The body is read
/// eagerly so nothing downstream has to manage the connection.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The one capability the client needs from the network: send a GET,
/// get back a status and body or a failure. Timeouts, pooling and the
/// like are whatever the implementation provides.
pub trait Transport {
    fn get(&self, url: &str) -> Result<TransportResponse, ForgetError>;
}

/// Production transport backed by a pooling `reqwest` blocking client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ForgetError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ForgetError::Custom(format!("HTTP client build failed: {e}")))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, ForgetError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

/// Test transport that returns a fixed body and status without touching
/// the network, or fails outright when built with [`MockTransport::failing`].
pub struct MockTransport {
    body: Vec<u8>,
    status: u16,
    error: Option<String>,
}

impl MockTransport {
    pub fn new(body: impl Into<Vec<u8>>, status: u16) -> Self {
        MockTransport { body: body.into(), status, error: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        MockTransport { body: Vec::new(), status: 0, error: Some(message.into()) }
    }
}

impl Transport for MockTransport {
    fn get(&self, _url: &str) -> Result<TransportResponse, ForgetError> {
        if let Some(message) = &self.error {
            return Err(ForgetError::Custom(message.clone()));
        }

        Ok(TransportResponse { status: self.status, body: self.body.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_body_and_status() {
        let transport = MockTransport::new("OK", 200);
        let response = transport.get("http://ignored.invalid/incr").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"OK");
    }

    #[test]
    fn failing_mock_never_builds_a_response() {
        let transport = MockTransport::failing("connection refused");
        let err = transport.get("http://ignored.invalid/dist").unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
