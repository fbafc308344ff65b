use std::time::Duration;

use crate::error::{Result, RokuError};

/// Timeout applied to each request by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP GET abstraction used by device handles.
///
/// Implementations return the response body for any completed exchange and
/// reserve errors for requests that could not complete at all. Swap in a
/// custom implementation to fake devices in tests.
pub trait Transport: Send + Sync {
  fn get(&self, url: &str) -> Result<String>;
}

/// Default transport backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::blocking::Client,
}

impl HttpTransport {
  /// Creates a transport with [`DEFAULT_TIMEOUT`] per request.
  pub fn new() -> Result<Self> {
    HttpTransport::with_timeout(DEFAULT_TIMEOUT)
  }

  /// Creates a transport with a caller-chosen per-request timeout.
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client = reqwest::blocking::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| RokuError::Transport {
        url: String::new(),
        reason: format!("failed to build http client: {}", e),
      })?;

    Ok(HttpTransport { client })
  }

  /// Wraps an already configured client.
  pub fn with_client(client: reqwest::blocking::Client) -> Self {
    HttpTransport { client }
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> Result<String> {
    let response = self
      .client
      .get(url)
      .send()
      .map_err(|e| RokuError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
      })?;

    // The status line is not inspected; a body that fails to decode is
    // reported through the decode path instead.
    response.text().map_err(|e| RokuError::Transport {
      url: url.to_string(),
      reason: e.to_string(),
    })
  }
}
