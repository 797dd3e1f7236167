// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WebSocket adapter for the device-control link.
//!
//! The device speaks a JSON-framed protocol over a single websocket shared
//! by all buttons. Outbound commands are queued to a writer task; a separate
//! always-running receive loop classifies every inbound frame through
//! [`crate::report`] and feeds the state cache:
//!
//! ```text
//!            ┌────────────┐  mpsc   ┌─────────────┐
//!  send() ──▶│ writer task │───────▶│             │
//!            └────────────┘         │  websocket  │
//!            ┌────────────┐         │             │
//!  cache ◀───│ recv loop  │◀────────│             │
//!            └────────────┘         └─────────────┘
//! ```
//!
//! On connect the adapter warms up the link: it queries the current volume
//! and then configures the device's periodic state-report interval. This is
//! an adapter concern, not part of per-action dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::command::DeviceCommand;
use crate::config::WebsocketSettings;
use crate::error::ProtocolError;
use crate::protocol::DeviceLink;
use crate::report;
use crate::state::SharedDeviceState;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Delay between connect and the warm-up volume query.
const WARMUP_QUERY_DELAY: Duration = Duration::from_millis(100);

/// Delay between the warm-up volume query and the update-interval command.
const WARMUP_CONFIGURE_DELAY: Duration = Duration::from_millis(900);

/// Capacity of the outbound command queue.
const SEND_QUEUE_CAPACITY: usize = 32;

/// WebSocket client for the stateful device-control link.
///
/// Cloning is cheap; all clones share the same connection. There is no
/// automatic reconnect: when the receive loop or writer hits an error the
/// connected flag drops and stays down until the embedding application
/// connects a fresh client.
///
/// # Examples
///
/// ```no_run
/// use presslink::config::WebsocketSettings;
/// use presslink::protocol::{DeviceLink, WebsocketClient};
/// use presslink::state::SharedDeviceState;
///
/// # async fn example() -> Result<(), presslink::error::ProtocolError> {
/// let state = SharedDeviceState::new();
/// let settings = WebsocketSettings::new("ws://192.168.1.60:8080");
/// let client = WebsocketClient::connect(&settings, state).await?;
/// client.send(r#"{"SetVolume":-20}"#).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebsocketClient {
    tx: mpsc::Sender<Message>,
    connected: Arc<AtomicBool>,
}

impl WebsocketClient {
    /// Connects to the device and starts the writer, receive-loop, and
    /// warm-up tasks.
    ///
    /// Inbound report frames update `state` for as long as the connection
    /// lives.
    ///
    /// # Errors
    ///
    /// Returns error if the websocket handshake fails.
    pub async fn connect(
        settings: &WebsocketSettings,
        state: SharedDeviceState,
    ) -> Result<Self, ProtocolError> {
        WebsocketClientBuilder::new().connect(settings, state).await
    }

    /// Returns a builder for custom configuration.
    #[must_use]
    pub fn builder() -> WebsocketClientBuilder {
        WebsocketClientBuilder::new()
    }
}

#[async_trait]
impl DeviceLink for WebsocketClient {
    async fn send(&self, payload: &str) -> Result<(), ProtocolError> {
        if !self.is_connected() {
            return Err(ProtocolError::NotConnected);
        }

        tracing::debug!(payload = %payload, "Sending websocket command");

        self.tx
            .send(Message::text(payload.to_string()))
            .await
            .map_err(|_| ProtocolError::ChannelClosed("websocket writer stopped".to_string()))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

/// Drains the outbound queue into the websocket sink.
async fn write_loop(
    mut sink: SplitSink<WsStream, Message>,
    mut rx: mpsc::Receiver<Message>,
    connected: Arc<AtomicBool>,
) {
    while let Some(message) = rx.recv().await {
        if let Err(e) = sink.send(message).await {
            tracing::error!(error = %e, "WebSocket write failed");
            connected.store(false, Ordering::Relaxed);
            break;
        }
    }
}

/// Classifies inbound frames until the connection ends.
async fn receive_loop(
    mut stream: SplitStream<WsStream>,
    state: SharedDeviceState,
    connected: Arc<AtomicBool>,
) {
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => report::handle_frame(&state, text.as_str()),
            Ok(Message::Close(_)) => {
                tracing::info!("Device closed the websocket");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "WebSocket read failed");
                break;
            }
        }
    }
    connected.store(false, Ordering::Relaxed);
}

/// Queries the volume, then configures the periodic report interval.
async fn warm_up(tx: mpsc::Sender<Message>, update_interval_ms: u32) {
    tokio::time::sleep(WARMUP_QUERY_DELAY).await;
    let query = DeviceCommand::GetVolume.encode();
    tracing::debug!(command = %query, "Warm-up: querying volume");
    if tx.send(Message::text(query)).await.is_err() {
        return;
    }

    tokio::time::sleep(WARMUP_CONFIGURE_DELAY).await;
    let configure = DeviceCommand::SetUpdateInterval(update_interval_ms).encode();
    tracing::debug!(command = %configure, "Warm-up: configuring update interval");
    let _ = tx.send(Message::text(configure)).await;
}

/// Builder for creating a websocket client with custom configuration.
#[derive(Debug)]
pub struct WebsocketClientBuilder {
    update_interval_ms: u32,
}

impl WebsocketClientBuilder {
    /// Default periodic state-report interval requested from the device.
    pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 500;

    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            update_interval_ms: Self::DEFAULT_UPDATE_INTERVAL_MS,
        }
    }

    /// Sets the periodic state-report interval requested during warm-up.
    #[must_use]
    pub fn update_interval_ms(mut self, interval: u32) -> Self {
        self.update_interval_ms = interval;
        self
    }

    /// Connects and starts the background tasks.
    ///
    /// # Errors
    ///
    /// Returns error if the websocket handshake fails.
    pub async fn connect(
        self,
        settings: &WebsocketSettings,
        state: SharedDeviceState,
    ) -> Result<WebsocketClient, ProtocolError> {
        tracing::debug!(url = %settings.server_url, "Connecting to device websocket");

        let (ws_stream, _response) = connect_async(settings.server_url.as_str()).await?;
        let (sink, stream) = ws_stream.split();

        let (tx, rx) = mpsc::channel(SEND_QUEUE_CAPACITY);
        let connected = Arc::new(AtomicBool::new(true));

        tokio::spawn(write_loop(sink, rx, Arc::clone(&connected)));
        tokio::spawn(receive_loop(stream, state, Arc::clone(&connected)));
        tokio::spawn(warm_up(tx.clone(), self.update_interval_ms));

        tracing::info!(url = %settings.server_url, "Device websocket connected");

        Ok(WebsocketClient { tx, connected })
    }
}

impl Default for WebsocketClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_default_update_interval() {
        let builder = WebsocketClientBuilder::new();
        assert_eq!(
            builder.update_interval_ms,
            WebsocketClientBuilder::DEFAULT_UPDATE_INTERVAL_MS
        );
    }

    #[test]
    fn builder_custom_update_interval() {
        let builder = WebsocketClientBuilder::new().update_interval_ms(250);
        assert_eq!(builder.update_interval_ms, 250);
    }
}
