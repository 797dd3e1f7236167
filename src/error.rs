// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `presslink` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: action configuration, transport communication, and inbound frame
//! parsing. All dispatch failures are local — the dispatcher logs them and
//! drops the action instead of propagating to the trigger caller.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when dispatching
/// button actions to downstream transports.
#[derive(Debug, Error)]
pub enum Error {
    /// Error in a configured action's data.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error during transport communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error while parsing an inbound frame.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors in configured action data.
///
/// These errors occur when a stored action record is malformed; the
/// dispatcher logs them and skips the action.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A websocket message template matched a special-form marker but could
    /// not be parsed as that form.
    #[error("malformed message template: {0}")]
    MalformedTemplate(#[from] serde_json::Error),

    /// A required connection setting is missing or empty.
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),
}

/// Errors related to transport communication (HTTP/MQTT/WebSocket).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// MQTT connection or communication failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// WebSocket connection or communication failed.
    #[cfg(feature = "websocket")]
    #[error("WebSocket error: {0}")]
    Websocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Send attempted while the transport is not connected.
    #[error("transport is not connected")]
    NotConnected,

    /// Connection to the remote endpoint failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A configured HTTP header name or value is not valid on the wire.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Internal channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// Errors related to parsing inbound device frames.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A frame matched a report marker but did not carry a usable value.
    ///
    /// The state cache is left unchanged when this occurs.
    #[error("malformed report frame: {0}")]
    MalformedReport(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_connected_display() {
        let err = ProtocolError::NotConnected;
        assert_eq!(err.to_string(), "transport is not connected");
    }

    #[test]
    fn error_from_protocol_error() {
        let err: Error = ProtocolError::InvalidAddress("broker".to_string()).into();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAddress(_))
        ));
    }

    #[test]
    fn malformed_report_display() {
        let err = ParseError::MalformedReport("missing value".to_string());
        assert_eq!(err.to_string(), "malformed report frame: missing value");
    }

    #[test]
    fn missing_setting_display() {
        let err = ConfigError::MissingSetting("serverUrl");
        assert_eq!(err.to_string(), "missing setting: serverUrl");
    }

    #[test]
    fn config_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::MalformedTemplate(_)));
    }
}
