//! Blocking HTTP transport.

use std::fmt;

use wbdata_core::{FetchError, Result};

/// A blocking HTTP GET transport.
///
/// Implementations return `Err` only for transport-level failures where no
/// response was obtained at all (connection refused, timeout, DNS). A
/// response with an application-level error status still yields `Ok` with
/// that response's body; distinguishing good pages from error pages is the
/// decoder's job, and only transport failures are eligible for retry.
pub trait Transport: Send + Sync {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns [`FetchError::Network`] when no response could be obtained.
    fn get(&self, url: &str) -> Result<String>;
}

/// [`Transport`] backed by a [`reqwest::blocking::Client`].
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

impl HttpTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport with a custom client (timeouts, proxies, ...).
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        // Do not check the status: an error body is still a response, and
        // is handed to the envelope decoder rather than retried.
        response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
