// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport adapters for outbound actions.
//!
//! Each downstream protocol is wrapped in a narrow adapter:
//!
//! - [`HttpClient`]: fire-and-forget HTTP GET and webhook POST
//! - [`MqttClient`]: publish to an MQTT topic over an authenticated broker
//!   connection
//! - [`WebsocketClient`]: bidirectional device link whose receive loop feeds
//!   the state cache
//!
//! The dispatcher consumes adapters through the capability traits defined
//! here ([`HttpDelivery`], [`MqttDelivery`], [`DeviceLink`]) rather than the
//! concrete types, so tests can substitute recording fakes. All sends are
//! fire-and-forget: an `Ok` means the payload was handed to the transport,
//! not that the remote end acted on it.

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "mqtt")]
mod mqtt;
#[cfg(feature = "websocket")]
mod websocket;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpClientBuilder};
#[cfg(feature = "mqtt")]
pub use mqtt::{MqttClient, MqttClientBuilder};
#[cfg(feature = "websocket")]
pub use websocket::{WebsocketClient, WebsocketClientBuilder};

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ProtocolError;

/// The transports whose connection status can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// The MQTT broker connection.
    Mqtt,
    /// The device-control websocket connection.
    Websocket,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mqtt => write!(f, "MQTT"),
            Self::Websocket => write!(f, "WebSocket"),
        }
    }
}

/// Capability to deliver HTTP GET and webhook POST requests.
#[async_trait]
pub trait HttpDelivery: Send + Sync {
    /// Performs a fire-and-forget GET request.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request could not be sent or the
    /// server answered with a non-success status.
    async fn send_get(&self, url: &str) -> Result<(), ProtocolError>;

    /// Performs a templated webhook POST with custom headers and a JSON
    /// body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if a header is invalid, the request could not
    /// be sent, or the server answered with a non-success status.
    async fn send_post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &str,
    ) -> Result<(), ProtocolError>;
}

/// Capability to publish messages to an MQTT broker.
#[async_trait]
pub trait MqttDelivery: Send + Sync {
    /// Publishes a message to a topic.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the publish could not be handed to the
    /// broker connection.
    async fn publish(&self, topic: &str, message: &str) -> Result<(), ProtocolError>;

    /// Returns `true` while the broker connection is established.
    fn is_connected(&self) -> bool;
}

/// Capability to send text frames to the device-control websocket.
#[async_trait]
pub trait DeviceLink: Send + Sync {
    /// Writes one JSON-framed command to the device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the connection is down or the frame could
    /// not be queued for writing.
    async fn send(&self, payload: &str) -> Result<(), ProtocolError>;

    /// Returns `true` while the device connection is established.
    fn is_connected(&self) -> bool;
}
