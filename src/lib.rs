// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `presslink` - A Rust library to dispatch remote-control button presses.
//!
//! This library implements the action-dispatch core of a home-automation
//! hub's remote-control receiver: each named "button pressed" event resolves
//! to a configured action and executes it against one of several downstream
//! protocols.
//!
//! # Supported Actions
//!
//! - **HTTP GET**: plain request against a URL
//! - **Webhook POST**: templated POST with custom headers and a JSON body
//! - **MQTT publish**: message to a topic over an authenticated broker
//!   connection
//! - **WebSocket command**: JSON-framed command to a stateful device,
//!   including correlated relative-volume and mute-toggle sequences that
//!   read the device's reported state before computing the command to send
//!
//! # Architecture
//!
//! ```text
//! trigger(name) ──▶ ActionRegistry ──▶ Dispatcher ──▶ transport adapter
//!                                          ▲
//!                                          │ reads
//!                                   SharedDeviceState
//!                                          ▲
//!                                          │ reports
//!                               websocket receive loop
//! ```
//!
//! The embedding application owns the HTTP surface, service discovery, and
//! configuration storage; this crate only consumes their output (button
//! records and connection settings) and emits `tracing` events for
//! observability.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use presslink::action::ActionRegistry;
//! use presslink::config::BridgeConfig;
//! use presslink::dispatch::{Dispatcher, SettleDelay};
//! use presslink::protocol::{HttpClient, MqttClient, WebsocketClient};
//! use presslink::state::SharedDeviceState;
//!
//! #[tokio::main]
//! async fn main() -> presslink::Result<()> {
//!     let config: BridgeConfig =
//!         serde_json::from_str(r#"{"buttons": []}"#).expect("valid config record");
//!
//!     let state = SharedDeviceState::new();
//!     let registry = Arc::new(ActionRegistry::with_actions(config.buttons));
//!
//!     let mqtt_settings = config.mqtt.expect("mqtt section");
//!     let ws_settings = config.websocket.expect("websocket section");
//!
//!     let dispatcher = Dispatcher::new(
//!         registry,
//!         state.clone(),
//!         HttpClient::new()?,
//!         MqttClient::connect(&mqtt_settings)?,
//!         WebsocketClient::connect(&ws_settings, state).await?,
//!         SettleDelay::default(),
//!     );
//!
//!     // Wired to the HTTP layer's button-press route:
//!     dispatcher.trigger("VolumeUp").await;
//!     Ok(())
//! }
//! ```
//!
//! # Correlated Commands
//!
//! The websocket device has no request/response correlation, so relative
//! and toggle buttons run a fixed settle delay between the state query and
//! the derived command — see [`dispatch`] for the trade-offs.

pub mod action;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod report;
pub mod state;

pub use action::{ActionKind, ActionRegistry, ButtonAction};
pub use command::{DeviceCommand, TemplateForm};
pub use config::{BridgeConfig, MqttSettings, WebsocketSettings};
pub use dispatch::{Correlator, Dispatcher, SETTLE_DELAY, SettleDelay};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::HttpClient;
#[cfg(feature = "mqtt")]
pub use protocol::MqttClient;
#[cfg(feature = "websocket")]
pub use protocol::WebsocketClient;
pub use protocol::{DeviceLink, HttpDelivery, MqttDelivery, TransportKind};
pub use report::ReportFrame;
pub use state::{DeviceState, SharedDeviceState};
