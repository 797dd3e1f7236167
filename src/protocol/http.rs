// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP adapter for GET actions and webhook POSTs.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::ProtocolError;
use crate::protocol::HttpDelivery;

/// HTTP client for GET actions and webhook POSTs.
///
/// Stateless: each send is an independent request with no retry and no
/// delivery confirmation beyond the status code, which is logged.
///
/// # Examples
///
/// ```no_run
/// use presslink::protocol::{HttpClient, HttpDelivery};
///
/// # async fn example() -> Result<(), presslink::error::ProtocolError> {
/// let client = HttpClient::new()?;
/// client.send_get("http://hub.local/lights/on").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying client cannot be constructed.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpClientBuilder::new().build()
    }

    /// Returns a builder for custom configuration.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }
}

#[async_trait]
impl HttpDelivery for HttpClient {
    async fn send_get(&self, url: &str) -> Result<(), ProtocolError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::debug!(url = %url, status = %status, "HTTP GET delivered");
            Ok(())
        } else {
            Err(ProtocolError::ConnectionFailed(format!(
                "GET {url} answered {status}"
            )))
        }
    }

    async fn send_post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &str,
    ) -> Result<(), ProtocolError> {
        let header_map = build_header_map(headers)?;

        let response = self
            .client
            .post(url)
            .headers(header_map)
            .body(body.to_string())
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            tracing::debug!(url = %url, status = %status, "Webhook POST delivered");
            Ok(())
        } else {
            Err(ProtocolError::ConnectionFailed(format!(
                "POST {url} answered {status}"
            )))
        }
    }
}

/// Converts configured header strings into a typed header map.
///
/// The body is always posted as JSON; a configured `Content-Type` header
/// overrides the default.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ProtocolError> {
    let mut map = HeaderMap::with_capacity(headers.len() + 1);
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ProtocolError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ProtocolError::InvalidHeader(format!("{name}: {value}")))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying client cannot be constructed.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(HttpClient::DEFAULT_TIMEOUT))
            .build()?;
        Ok(HttpClient { client })
    }
}
