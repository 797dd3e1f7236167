// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MQTT adapter for publish actions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};

use crate::config::MqttSettings;
use crate::error::ProtocolError;
use crate::protocol::MqttDelivery;

/// Global counter for generating unique client IDs.
static CLIENT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// MQTT client for publishing button actions to a broker.
///
/// The connection is publish-only and deliberately fragile: there is no
/// automatic reconnect and no queueing. When the event loop hits an error
/// the connected flag drops and stays down; subsequent publishes for MQTT
/// buttons are dropped by the dispatcher until the embedding application
/// reconnects.
///
/// # Examples
///
/// ```no_run
/// use presslink::config::MqttSettings;
/// use presslink::protocol::{MqttClient, MqttDelivery};
///
/// # async fn example() -> Result<(), presslink::error::ProtocolError> {
/// let settings = MqttSettings::new("mqtt://192.168.1.50:1883")
///     .with_credentials("hub", "secret");
/// let client = MqttClient::connect(&settings)?;
/// client.publish("cmnd/desk_lamp/POWER", "TOGGLE").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MqttClient {
    client: AsyncClient,
    connected: Arc<AtomicBool>,
}

impl MqttClient {
    /// Keep-alive interval for the broker connection.
    const KEEP_ALIVE: Duration = Duration::from_secs(30);

    /// Connects to the broker described by `settings`.
    ///
    /// The connection is established in the background; until the broker
    /// acknowledges, [`MqttDelivery::is_connected`] reports `false`.
    ///
    /// # Errors
    ///
    /// Returns error if the broker URL cannot be parsed.
    pub fn connect(settings: &MqttSettings) -> Result<Self, ProtocolError> {
        MqttClientBuilder::from_settings(settings).build()
    }

    /// Returns a builder for custom configuration.
    #[must_use]
    pub fn builder() -> MqttClientBuilder {
        MqttClientBuilder::new()
    }
}

#[async_trait]
impl MqttDelivery for MqttClient {
    async fn publish(&self, topic: &str, message: &str) -> Result<(), ProtocolError> {
        tracing::debug!(topic = %topic, payload = %message, "Publishing MQTT message");

        self.client
            .publish(topic, QoS::AtLeastOnce, false, message)
            .await
            .map_err(ProtocolError::Mqtt)
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

/// Parses an MQTT URL into host and port.
fn parse_mqtt_url(url: &str) -> Result<(String, u16), ProtocolError> {
    let url = url
        .strip_prefix("mqtt://")
        .or_else(|| url.strip_prefix("tcp://"))
        .unwrap_or(url);

    let (host, port) = if let Some((h, p)) = url.rsplit_once(':') {
        let port = p
            .parse()
            .map_err(|_| ProtocolError::InvalidAddress(format!("Invalid port: {p}")))?;
        (h.to_string(), port)
    } else {
        (url.to_string(), 1883)
    };

    Ok((host, port))
}

/// Drives the MQTT event loop and tracks the connection status.
///
/// Exits on the first event-loop error; there is no reconnect.
async fn track_connection(mut event_loop: EventLoop, connected: Arc<AtomicBool>) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::debug!("Connected to MQTT broker");
                connected.store(true, Ordering::Relaxed);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "MQTT connection lost");
                connected.store(false, Ordering::Relaxed);
                break;
            }
        }
    }
}

/// Builder for creating an MQTT client with custom configuration.
#[derive(Debug, Default)]
pub struct MqttClientBuilder {
    broker: Option<String>,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    keep_alive: Option<Duration>,
}

impl MqttClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from connection settings.
    #[must_use]
    pub fn from_settings(settings: &MqttSettings) -> Self {
        let mut builder = Self::new().broker(&settings.server_url);
        if !settings.username.is_empty() {
            builder = builder.credentials(&settings.username, &settings.password);
        }
        builder
    }

    /// Sets the MQTT broker URL.
    #[must_use]
    pub fn broker(mut self, broker: impl Into<String>) -> Self {
        self.broker = Some(broker.into());
        self
    }

    /// Sets authentication credentials for the broker.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets a custom client ID.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the keep-alive interval.
    #[must_use]
    pub fn keep_alive(mut self, duration: Duration) -> Self {
        self.keep_alive = Some(duration);
        self
    }

    /// Builds the client and starts the background connection.
    ///
    /// # Errors
    ///
    /// Returns error if the broker URL is missing or cannot be parsed.
    pub fn build(self) -> Result<MqttClient, ProtocolError> {
        let broker = self
            .broker
            .ok_or_else(|| ProtocolError::InvalidAddress("broker is required".to_string()))?;
        let (host, port) = parse_mqtt_url(&broker)?;

        // PID + counter keeps concurrent processes from colliding.
        let client_id = self.client_id.unwrap_or_else(|| {
            let counter = CLIENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("presslink_{}_{}", std::process::id(), counter)
        });

        let mut mqtt_options = MqttOptions::new(&client_id, host, port);
        mqtt_options.set_keep_alive(self.keep_alive.unwrap_or(MqttClient::KEEP_ALIVE));
        mqtt_options.set_clean_session(true);

        if let (Some(username), Some(password)) = (self.username, self.password) {
            mqtt_options.set_credentials(username, password);
        }

        let (client, event_loop) = AsyncClient::new(mqtt_options, 10);
        let connected = Arc::new(AtomicBool::new(false));

        tokio::spawn(track_connection(event_loop, Arc::clone(&connected)));

        Ok(MqttClient { client, connected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mqtt_url_with_port() {
        let (host, port) = parse_mqtt_url("mqtt://192.168.1.50:1883").unwrap();
        assert_eq!(host, "192.168.1.50");
        assert_eq!(port, 1883);
    }

    #[test]
    fn parse_mqtt_url_default_port() {
        let (host, port) = parse_mqtt_url("192.168.1.50").unwrap();
        assert_eq!(host, "192.168.1.50");
        assert_eq!(port, 1883);
    }

    #[test]
    fn parse_mqtt_url_tcp_scheme() {
        let (host, port) = parse_mqtt_url("tcp://broker.local:8883").unwrap();
        assert_eq!(host, "broker.local");
        assert_eq!(port, 8883);
    }

    #[test]
    fn parse_mqtt_url_invalid_port() {
        assert!(parse_mqtt_url("mqtt://broker:notaport").is_err());
    }

    #[test]
    fn builder_from_settings_with_credentials() {
        let settings = MqttSettings::new("mqtt://broker:1883").with_credentials("user", "pass");
        let builder = MqttClientBuilder::from_settings(&settings);

        assert_eq!(builder.broker, Some("mqtt://broker:1883".to_string()));
        assert_eq!(builder.username, Some("user".to_string()));
        assert_eq!(builder.password, Some("pass".to_string()));
    }

    #[test]
    fn builder_from_settings_without_credentials() {
        let settings = MqttSettings::new("mqtt://broker:1883");
        let builder = MqttClientBuilder::from_settings(&settings);

        assert!(builder.username.is_none());
        assert!(builder.password.is_none());
    }

    #[test]
    fn builder_requires_broker() {
        let result = MqttClientBuilder::new().build();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
