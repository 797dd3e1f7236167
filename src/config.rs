// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration records supplied by the embedding application.
//!
//! On-disk storage and the editing API live outside this crate; the config
//! loader hands over [`BridgeConfig`] records at startup and on every
//! update. Field names follow the camelCase wire form used by the
//! configuration UI, so stored records deserialize directly.

use serde::{Deserialize, Serialize};

use crate::action::ButtonAction;

/// Top-level configuration record: the button list plus per-transport
/// connection settings.
///
/// Transport sections are optional; an absent or disabled section means the
/// corresponding adapter is never connected.
///
/// # Examples
///
/// ```
/// use presslink::config::BridgeConfig;
///
/// let json = r#"{
///     "buttons": [],
///     "mqttConfig": {
///         "serverUrl": "mqtt://broker.local:1883",
///         "serverUsername": "hub",
///         "serverPassword": "secret",
///         "enabled": true
///     },
///     "websocketConfig": {"serverUrl": "ws://amp.local:8080", "enabled": true}
/// }"#;
///
/// let config: BridgeConfig = serde_json::from_str(json).unwrap();
/// assert!(config.mqtt.unwrap().enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Ordered button definitions.
    #[serde(default)]
    pub buttons: Vec<ButtonAction>,

    /// MQTT broker connection settings.
    #[serde(rename = "mqttConfig", default, skip_serializing_if = "Option::is_none")]
    pub mqtt: Option<MqttSettings>,

    /// Device websocket connection settings.
    #[serde(
        rename = "websocketConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub websocket: Option<WebsocketSettings>,
}

/// Connection settings for the MQTT broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttSettings {
    /// Broker URL, e.g. `mqtt://192.168.1.50:1883`.
    #[serde(rename = "serverUrl")]
    pub server_url: String,

    /// Broker username.
    #[serde(rename = "serverUsername", default)]
    pub username: String,

    /// Broker password.
    #[serde(rename = "serverPassword", default)]
    pub password: String,

    /// Whether the MQTT transport should be connected at all.
    #[serde(default)]
    pub enabled: bool,
}

impl MqttSettings {
    /// Creates enabled settings for the given broker URL.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            username: String::new(),
            password: String::new(),
            enabled: true,
        }
    }

    /// Sets authentication credentials for the broker.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }
}

/// Connection settings for the device-control websocket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsocketSettings {
    /// Device websocket URL, e.g. `ws://192.168.1.60:8080`.
    #[serde(rename = "serverUrl")]
    pub server_url: String,

    /// Whether the websocket transport should be connected at all.
    #[serde(default)]
    pub enabled: bool,
}

impl WebsocketSettings {
    /// Creates enabled settings for the given device URL.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            enabled: true,
        }
    }
}
