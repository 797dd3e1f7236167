// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Button action definitions.
//!
//! A button action maps a named control event to exactly one downstream side
//! effect. The action kind is a tagged union over the supported transports,
//! dispatched via pattern match in the
//! [`Dispatcher`](crate::dispatch::Dispatcher):
//!
//! | Kind | Wire tag | Side effect |
//! |------|----------|-------------|
//! | [`ActionKind::HttpGet`] | `GET` | Plain HTTP GET request |
//! | [`ActionKind::WebhookPost`] | `POST` | Webhook POST with headers and JSON body |
//! | [`ActionKind::MqttPublish`] | `MQTT` | Publish a message to an MQTT topic |
//! | [`ActionKind::WebsocketSend`] | `WEBSOCKET` | JSON command to the device websocket |
//!
//! Records round-trip through serde with the camelCase field names used by
//! the configuration UI, so a stored button list deserializes directly.

mod registry;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use registry::ActionRegistry;

/// One configured control: a named trigger mapped to a downstream action.
///
/// # Examples
///
/// ```
/// use presslink::action::{ActionKind, ButtonAction};
///
/// let json = r#"{
///     "name": "VolumeUp",
///     "enabled": true,
///     "action": "WEBSOCKET",
///     "websocketMessage": "{\"SetVolume\": {\"changeBy\": 5}}"
/// }"#;
///
/// let button: ButtonAction = serde_json::from_str(json).unwrap();
/// assert_eq!(button.name, "VolumeUp");
/// assert!(matches!(button.kind, ActionKind::WebsocketSend { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonAction {
    /// Unique key, stable identity used for lookup.
    pub name: String,

    /// Disabled actions are looked up but never executed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// The transport-specific action payload.
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl ButtonAction {
    /// Creates an enabled action with the given name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            kind,
        }
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Transport-specific payload of a button action.
///
/// Serialized internally tagged on the `action` field, matching the record
/// shape supplied by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ActionKind {
    /// Plain HTTP GET against a URL.
    #[serde(rename = "GET")]
    HttpGet {
        /// Target URL.
        url: String,
    },

    /// Templated webhook POST.
    #[serde(rename = "POST")]
    WebhookPost {
        /// Target URL.
        url: String,
        /// Additional request headers.
        #[serde(rename = "httpHeaders", default)]
        headers: HashMap<String, String>,
        /// JSON request body, stored as a string template.
        #[serde(rename = "postPayload")]
        payload: String,
    },

    /// Publish to an MQTT topic.
    #[serde(rename = "MQTT")]
    MqttPublish {
        /// Topic to publish to.
        #[serde(rename = "mqttTopic")]
        topic: String,
        /// Message payload.
        #[serde(rename = "mqttMessage")]
        message: String,
    },

    /// Send a JSON-shaped command over the device websocket.
    ///
    /// The message is a template: it may declare a relative volume change or
    /// a mute toggle (see [`crate::command::template`]), otherwise it is
    /// sent verbatim.
    #[serde(rename = "WEBSOCKET")]
    WebsocketSend {
        /// The stored message template.
        #[serde(rename = "websocketMessage")]
        message: String,
    },
}

fn default_enabled() -> bool {
    true
}
