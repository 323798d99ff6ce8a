use reqwest::Url;

use crate::{
    core::{
        models::Envelope,
        Distribution,
        ForgetError,
        Response,
    },
    transport::{
        HttpTransport,
        Transport,
    },
};

const STATUS_OK: u16 = 200;
const INCR_OK: &[u8] = b"OK";

/// Makes requests to a Forgettable server. Stateless apart from the root
/// URL and the transport, so one instance can serve any number of calls.
pub struct Client {
    root_url: String,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a client for the server at `root_url` (e.g.
    /// `http://forgettable.io:51000`) using the default HTTP transport.
    pub fn new(root_url: impl Into<String>) -> Result<Self, ForgetError> {
        Ok(Client { root_url: root_url.into(), transport: Box::new(HttpTransport::new()?) })
    }

    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(root_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Client { root_url: root_url.into(), transport }
    }

    /// Returns the full set of values for the given distribution.
    pub fn distribution(&self, distribution: &str) -> Result<Response, ForgetError> {
        self.send("/dist", &[("distribution", distribution.to_string())])
    }

    /// Returns the `n` most probable values of the given distribution,
    /// ranked by the server.
    pub fn most_probable(&self, distribution: &str, n: usize) -> Result<Response, ForgetError> {
        self.send(
            "/nmostprobable",
            &[("distribution", distribution.to_string()), ("N", n.to_string())],
        )
    }

    /// Returns a single field of the given distribution.
    pub fn field(&self, distribution: &str, field: &str) -> Result<Response, ForgetError> {
        self.send(
            "/get",
            &[("distribution", distribution.to_string()), ("field", field.to_string())],
        )
    }

    /// Increments a distribution field by one. Success is the absence of
    /// an error.
    pub fn increment(&self, distribution: &str, field: &str) -> Result<(), ForgetError> {
        let body = self.request(
            "/incr",
            &[("distribution", distribution.to_string()), ("field", field.to_string())],
        )?;

        increment_result(&body)
    }

    /// Increments a distribution field by `n`.
    pub fn increment_by_n(
        &self,
        distribution: &str,
        field: &str,
        n: i64,
    ) -> Result<(), ForgetError> {
        let body = self.request(
            "/incr",
            &[
                ("distribution", distribution.to_string()),
                ("field", field.to_string()),
                ("N", n.to_string()),
            ],
        )?;

        increment_result(&body)
    }

    /// Returns the number of distributions the server is tracking.
    pub fn database_size(&self) -> Result<i64, ForgetError> {
        let body = self.request("/dbsize", &[])?;
        let envelope: Envelope<i64> = serde_json::from_slice(&body)?;
        if envelope.status_code != STATUS_OK {
            return Err(ForgetError::Api(envelope.status_txt));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    fn send(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Response, ForgetError> {
        let body = self.request(endpoint, params)?;
        let envelope: Envelope<Distribution> = serde_json::from_slice(&body)?;
        if envelope.status_code != STATUS_OK {
            return Err(ForgetError::Api(envelope.status_txt));
        }

        Ok(Response {
            status_code: envelope.status_code,
            status_txt: envelope.status_txt,
            distribution: envelope.data.unwrap_or_default(),
        })
    }

    fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Vec<u8>, ForgetError> {
        let url = self.endpoint_url(endpoint, params)?;
        let response = self.transport.get(&url)?;
        if response.status != STATUS_OK {
            return Err(ForgetError::HttpStatus(response.status));
        }

        Ok(response.body)
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String, ForgetError> {
        let base = format!("{}{}", self.root_url, endpoint);
        if params.is_empty() {
            return Ok(base);
        }

        let url = Url::parse_with_params(&base, params)
            .map_err(|e| ForgetError::Custom(format!("Invalid request URL {base}: {e}")))?;
        Ok(url.into())
    }
}

// The server answers a successful increment with the literal body "OK"
// instead of a JSON envelope. Anything else gets decoded as an error
// envelope and its status text surfaced.
fn increment_result(body: &[u8]) -> Result<(), ForgetError> {
    if body == INCR_OK {
        return Ok(());
    }

    let envelope: Envelope<Distribution> = serde_json::from_slice(body)?;
    Err(ForgetError::Api(envelope.status_txt))
}
