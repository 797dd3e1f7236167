// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The action dispatcher.
//!
//! [`Dispatcher::trigger`] is the inbound entry point for button presses: it
//! resolves the button in the [`ActionRegistry`] and executes the configured
//! action through the matching transport adapter.
//!
//! # Correlated websocket commands
//!
//! Relative-volume and mute-toggle buttons need the device's current state,
//! but the device transport has no request/response correlation — queries
//! and reports are independent frames. The dispatcher runs a fixed-delay
//! protocol instead:
//!
//! ```text
//! IDLE ──▶ QUERY_SENT ──(settle delay elapses)──▶ COMPUTE_AND_SEND ──▶ IDLE
//! ```
//!
//! The query is sent immediately; a spawned continuation waits for the
//! settle delay, reads the state cache, computes the derived command, and
//! sends it. There is no failed state: if the report never arrives the
//! continuation computes from whatever the cache holds (stale or default).
//! This is a deliberate simplicity/robustness trade-off that loses
//! correctness under packet loss or high jitter. The wait itself is behind
//! the [`Correlator`] trait so a correlation-ID protocol could replace
//! [`SettleDelay`] without touching the branching logic here.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::action::{ActionKind, ActionRegistry, ButtonAction};
use crate::command::{DeviceCommand, TemplateForm};
use crate::protocol::{DeviceLink, HttpDelivery, MqttDelivery, TransportKind};
use crate::state::SharedDeviceState;

/// Default settle delay between a state query and the derived command.
pub const SETTLE_DELAY: Duration = Duration::from_millis(120);

/// Strategy for waiting until a queried device report is assumed visible in
/// the state cache.
#[async_trait]
pub trait Correlator: Send + Sync {
    /// Waits for the state-query round trip.
    async fn settle(&self);
}

/// Timer-based correlation: a fixed delay assumed sufficient for the
/// query/report round trip.
///
/// This is a heuristic, not an acknowledgment wait — if the device's report
/// arrives after the delay expires, the derived command is computed from
/// stale state.
#[derive(Debug, Clone)]
pub struct SettleDelay {
    delay: Duration,
}

impl SettleDelay {
    /// Creates a correlator with a custom delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self::new(SETTLE_DELAY)
    }
}

#[async_trait]
impl Correlator for SettleDelay {
    async fn settle(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// The action-dispatch core.
///
/// Owns the registry, the device state cache, and the injected transport
/// adapters. `trigger` is fire-and-forget: it returns once the immediate
/// send completes or the delayed continuation is scheduled, and never
/// surfaces downstream outcomes to the caller — failures are logged and the
/// action is dropped.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use presslink::action::ActionRegistry;
/// use presslink::config::{MqttSettings, WebsocketSettings};
/// use presslink::dispatch::{Dispatcher, SettleDelay};
/// use presslink::protocol::{HttpClient, MqttClient, WebsocketClient};
/// use presslink::state::SharedDeviceState;
///
/// # async fn example() -> presslink::error::Result<()> {
/// let state = SharedDeviceState::new();
/// let dispatcher = Dispatcher::new(
///     Arc::new(ActionRegistry::new()),
///     state.clone(),
///     HttpClient::new()?,
///     MqttClient::connect(&MqttSettings::new("mqtt://broker:1883"))?,
///     WebsocketClient::connect(&WebsocketSettings::new("ws://amp:8080"), state).await?,
///     SettleDelay::default(),
/// );
///
/// dispatcher.trigger("VolumeUp").await;
/// # Ok(())
/// # }
/// ```
pub struct Dispatcher<H, M, W, C = SettleDelay> {
    registry: Arc<ActionRegistry>,
    state: SharedDeviceState,
    http: H,
    mqtt: M,
    ws: W,
    correlator: C,
}

impl<H, M, W, C> Dispatcher<H, M, W, C>
where
    H: HttpDelivery,
    M: MqttDelivery,
    W: DeviceLink + Clone + 'static,
    C: Correlator + Clone + 'static,
{
    /// Creates a dispatcher over injected adapters.
    pub fn new(
        registry: Arc<ActionRegistry>,
        state: SharedDeviceState,
        http: H,
        mqtt: M,
        ws: W,
        correlator: C,
    ) -> Self {
        Self {
            registry,
            state,
            http,
            mqtt,
            ws,
            correlator,
        }
    }

    /// Handles one button press.
    ///
    /// Unknown names and disabled buttons are no-ops (logged, not errors).
    /// Transport failures are logged; the press is considered handled either
    /// way.
    pub async fn trigger(&self, button_name: &str) {
        let Some(button) = self.registry.lookup(button_name) else {
            tracing::warn!(button = %button_name, "Unknown button; ignoring trigger");
            return;
        };

        if !button.enabled {
            tracing::debug!(button = %button_name, "Button disabled; ignoring trigger");
            return;
        }

        tracing::debug!(button = %button_name, "Dispatching button action");

        match &button.kind {
            ActionKind::HttpGet { url } => {
                if let Err(e) = self.http.send_get(url).await {
                    tracing::error!(button = %button_name, url = %url, error = %e, "HTTP GET failed");
                }
            }
            ActionKind::WebhookPost {
                url,
                headers,
                payload,
            } => {
                if let Err(e) = self.http.send_post(url, headers, payload).await {
                    tracing::error!(button = %button_name, url = %url, error = %e, "Webhook POST failed");
                }
            }
            ActionKind::MqttPublish { topic, message } => {
                if !self.mqtt.is_connected() {
                    tracing::error!(button = %button_name, "MQTT not connected; dropping action");
                    return;
                }
                if let Err(e) = self.mqtt.publish(topic, message).await {
                    tracing::error!(button = %button_name, topic = %topic, error = %e, "MQTT publish failed");
                }
            }
            ActionKind::WebsocketSend { message } => {
                self.dispatch_websocket(button_name, message).await;
            }
        }
    }

    /// Executes a websocket action: a correlated relative/toggle sequence or
    /// a literal send.
    async fn dispatch_websocket(&self, button_name: &str, template: &str) {
        if !self.ws.is_connected() {
            tracing::error!(button = %button_name, "WebSocket not connected; dropping action");
            return;
        }

        match TemplateForm::classify(template) {
            Ok(TemplateForm::RelativeVolume { delta, min, max }) => {
                tracing::debug!(button = %button_name, delta, min, max, "Relative volume change");
                if let Err(e) = self.ws.send(&DeviceCommand::GetVolume.encode()).await {
                    tracing::error!(button = %button_name, error = %e, "Volume query failed");
                    return;
                }
                self.spawn_continuation(button_name, move |state| {
                    let target = clamp_volume(state.volume(), delta, min, max);
                    DeviceCommand::SetVolume(target)
                });
            }
            Ok(TemplateForm::MuteToggle) => {
                tracing::debug!(button = %button_name, "Mute toggle");
                if let Err(e) = self.ws.send(&DeviceCommand::GetMute.encode()).await {
                    tracing::error!(button = %button_name, error = %e, "Mute query failed");
                    return;
                }
                self.spawn_continuation(button_name, |state| DeviceCommand::SetMute(!state.muted()));
            }
            Ok(TemplateForm::Literal) => {
                if let Err(e) = self.ws.send(template).await {
                    tracing::error!(button = %button_name, error = %e, "WebSocket send failed");
                }
            }
            Err(e) => {
                tracing::warn!(button = %button_name, error = %e, "Skipping malformed websocket action");
            }
        }
    }

    /// Schedules the deferred half of a correlated command.
    ///
    /// The continuation settles, computes the derived command from whatever
    /// the cache then holds, and sends it. Continuations for overlapping
    /// presses are not serialized against each other.
    fn spawn_continuation<F>(&self, button_name: &str, compute: F)
    where
        F: FnOnce(&SharedDeviceState) -> DeviceCommand + Send + 'static,
    {
        let ws = self.ws.clone();
        let state = self.state.clone();
        let correlator = self.correlator.clone();
        let button = button_name.to_string();

        tokio::spawn(async move {
            correlator.settle().await;
            let command = compute(&state);
            tracing::debug!(button = %button, command = %command.encode(), "Sending derived command");
            if let Err(e) = ws.send(&command.encode()).await {
                tracing::error!(button = %button, error = %e, "Derived command failed");
            }
        });
    }

    /// Reports whether a transport's connection is currently established.
    #[must_use]
    pub fn is_transport_connected(&self, kind: TransportKind) -> bool {
        match kind {
            TransportKind::Mqtt => self.mqtt.is_connected(),
            TransportKind::Websocket => self.ws.is_connected(),
        }
    }

    /// Replaces the button list on a configuration update.
    ///
    /// In-flight dispatches keep the definitions they already resolved.
    pub fn reload_buttons(&self, buttons: Vec<ButtonAction>) {
        self.registry.replace_all(buttons);
    }

    /// Returns the registry shared with the configuration layer.
    #[must_use]
    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    /// Returns the device state cache.
    #[must_use]
    pub fn state(&self) -> &SharedDeviceState {
        &self.state
    }
}

/// Applies a relative volume change with clamp bounds.
///
/// Bounds are applied as individual limits, matching the device protocol's
/// behavior even when a misconfigured template declares `min > max` (the
/// `max` limit wins in that case).
fn clamp_volume(current: i32, delta: i32, min: i32, max: i32) -> i32 {
    let target = current.saturating_add(delta);
    if target > max {
        max
    } else if target < min {
        min
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use parking_lot::Mutex;

    use crate::command::template::{DEFAULT_VOLUME_MAX, DEFAULT_VOLUME_MIN};
    use crate::error::ProtocolError;

    // ========================================================================
    // Recording fakes for the transport capability traits
    // ========================================================================

    #[derive(Clone, Default)]
    struct RecordingHttp {
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl HttpDelivery for RecordingHttp {
        async fn send_get(&self, url: &str) -> Result<(), ProtocolError> {
            self.calls.lock().push(format!("GET {url}"));
            Ok(())
        }

        async fn send_post(
            &self,
            url: &str,
            headers: &HashMap<String, String>,
            body: &str,
        ) -> Result<(), ProtocolError> {
            let mut names: Vec<&str> = headers.keys().map(String::as_str).collect();
            names.sort_unstable();
            self.calls
                .lock()
                .push(format!("POST {url} [{}] {body}", names.join(",")));
            Ok(())
        }
    }

    #[derive(Clone)]
    struct RecordingMqtt {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        connected: bool,
    }

    impl RecordingMqtt {
        fn new(connected: bool) -> Self {
            Self {
                calls: Arc::default(),
                connected,
            }
        }
    }

    #[async_trait]
    impl MqttDelivery for RecordingMqtt {
        async fn publish(&self, topic: &str, message: &str) -> Result<(), ProtocolError> {
            self.calls
                .lock()
                .push((topic.to_string(), message.to_string()));
            Ok(())
        }

        fn is_connected(&self) -> bool {
            self.connected
        }
    }

    #[derive(Clone)]
    struct RecordingLink {
        sent: Arc<Mutex<Vec<String>>>,
        connected: bool,
    }

    impl RecordingLink {
        fn new(connected: bool) -> Self {
            Self {
                sent: Arc::default(),
                connected,
            }
        }
    }

    #[async_trait]
    impl DeviceLink for RecordingLink {
        async fn send(&self, payload: &str) -> Result<(), ProtocolError> {
            if !self.connected {
                return Err(ProtocolError::NotConnected);
            }
            self.sent.lock().push(payload.to_string());
            Ok(())
        }

        fn is_connected(&self) -> bool {
            self.connected
        }
    }

    type TestDispatcher = Dispatcher<RecordingHttp, RecordingMqtt, RecordingLink, SettleDelay>;

    struct Harness {
        dispatcher: TestDispatcher,
        http: RecordingHttp,
        mqtt: RecordingMqtt,
        ws: RecordingLink,
        state: SharedDeviceState,
    }

    fn harness(buttons: Vec<ButtonAction>) -> Harness {
        harness_with_links(buttons, RecordingMqtt::new(true), RecordingLink::new(true))
    }

    fn harness_with_links(
        buttons: Vec<ButtonAction>,
        mqtt: RecordingMqtt,
        ws: RecordingLink,
    ) -> Harness {
        let http = RecordingHttp::default();
        let state = SharedDeviceState::new();
        let dispatcher = Dispatcher::new(
            Arc::new(ActionRegistry::with_actions(buttons)),
            state.clone(),
            http.clone(),
            mqtt.clone(),
            ws.clone(),
            SettleDelay::default(),
        );
        Harness {
            dispatcher,
            http,
            mqtt,
            ws,
            state,
        }
    }

    fn ws_button(name: &str, template: &str) -> ButtonAction {
        ButtonAction::new(
            name,
            ActionKind::WebsocketSend {
                message: template.to_string(),
            },
        )
    }

    /// Advances paused time past the settle delay so pending continuations
    /// complete.
    async fn run_continuations() {
        tokio::time::sleep(SETTLE_DELAY * 2).await;
    }

    // ========================================================================
    // clamp_volume
    // ========================================================================

    #[test]
    fn clamp_within_bounds() {
        assert_eq!(clamp_volume(10, 5, -100, 130), 15);
    }

    #[test]
    fn clamp_to_max() {
        assert_eq!(clamp_volume(20, 30, -100, 40), 40);
    }

    #[test]
    fn clamp_to_min() {
        assert_eq!(clamp_volume(-15, -10, -20, 130), -20);
    }

    #[test]
    fn clamp_exact_bound() {
        assert_eq!(clamp_volume(35, 5, -100, 40), 40);
        assert_eq!(clamp_volume(-15, -5, -20, 130), -20);
    }

    #[test]
    fn clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp_volume(0, 50, 10, 5), 5);
    }

    // ========================================================================
    // Lookup and enablement
    // ========================================================================

    #[tokio::test]
    async fn unknown_button_produces_no_calls() {
        let h = harness(vec![]);

        h.dispatcher.trigger("DoesNotExist").await;

        assert!(h.http.calls.lock().is_empty());
        assert!(h.mqtt.calls.lock().is_empty());
        assert!(h.ws.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn disabled_button_produces_no_calls() {
        let h = harness(vec![
            ButtonAction::new(
                "Standby",
                ActionKind::HttpGet {
                    url: "http://hub.local/standby".to_string(),
                },
            )
            .with_enabled(false),
        ]);

        h.dispatcher.trigger("Standby").await;

        assert!(h.http.calls.lock().is_empty());
    }

    // ========================================================================
    // HTTP and MQTT branches
    // ========================================================================

    #[tokio::test]
    async fn http_get_uses_http_adapter() {
        let h = harness(vec![ButtonAction::new(
            "LightsOn",
            ActionKind::HttpGet {
                url: "http://hub.local/on".to_string(),
            },
        )]);

        h.dispatcher.trigger("LightsOn").await;

        assert_eq!(h.http.calls.lock().as_slice(), ["GET http://hub.local/on"]);
    }

    #[tokio::test]
    async fn webhook_post_sends_stored_template() {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer abc".to_string());
        let h = harness(vec![ButtonAction::new(
            "Scene",
            ActionKind::WebhookPost {
                url: "http://hub.local/scene".to_string(),
                headers,
                payload: r#"{"scene":"movie"}"#.to_string(),
            },
        )]);

        h.dispatcher.trigger("Scene").await;

        assert_eq!(
            h.http.calls.lock().as_slice(),
            [r#"POST http://hub.local/scene [Authorization] {"scene":"movie"}"#]
        );
    }

    #[tokio::test]
    async fn mqtt_publish_sends_stored_template() {
        let h = harness(vec![ButtonAction::new(
            "DeskLamp",
            ActionKind::MqttPublish {
                topic: "cmnd/desk_lamp/POWER".to_string(),
                message: "TOGGLE".to_string(),
            },
        )]);

        h.dispatcher.trigger("DeskLamp").await;

        assert_eq!(
            h.mqtt.calls.lock().as_slice(),
            [("cmnd/desk_lamp/POWER".to_string(), "TOGGLE".to_string())]
        );
    }

    #[tokio::test]
    async fn mqtt_not_connected_drops_action() {
        let h = harness_with_links(
            vec![ButtonAction::new(
                "DeskLamp",
                ActionKind::MqttPublish {
                    topic: "t".to_string(),
                    message: "m".to_string(),
                },
            )],
            RecordingMqtt::new(false),
            RecordingLink::new(true),
        );

        h.dispatcher.trigger("DeskLamp").await;

        assert!(h.mqtt.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn sequential_triggers_send_in_call_order() {
        let h = harness(vec![
            ButtonAction::new(
                "First",
                ActionKind::HttpGet {
                    url: "http://hub.local/1".to_string(),
                },
            ),
            ButtonAction::new(
                "Second",
                ActionKind::HttpGet {
                    url: "http://hub.local/2".to_string(),
                },
            ),
        ]);

        h.dispatcher.trigger("First").await;
        h.dispatcher.trigger("Second").await;

        assert_eq!(
            h.http.calls.lock().as_slice(),
            ["GET http://hub.local/1", "GET http://hub.local/2"]
        );
    }

    // ========================================================================
    // Websocket branch: literal
    // ========================================================================

    #[tokio::test]
    async fn literal_template_sent_verbatim() {
        let template = r#"{"SetInput": "optical"}"#;
        let h = harness(vec![ws_button("Input", template)]);

        h.dispatcher.trigger("Input").await;

        assert_eq!(h.ws.sent.lock().as_slice(), [template]);
    }

    #[tokio::test]
    async fn absolute_volume_template_is_literal() {
        let template = r#"{"SetVolume": 25}"#;
        let h = harness(vec![ws_button("Preset", template)]);

        h.dispatcher.trigger("Preset").await;

        assert_eq!(h.ws.sent.lock().as_slice(), [template]);
    }

    #[tokio::test]
    async fn websocket_not_connected_drops_action() {
        let h = harness_with_links(
            vec![ws_button("Input", r#"{"SetInput": "optical"}"#)],
            RecordingMqtt::new(true),
            RecordingLink::new(false),
        );

        h.dispatcher.trigger("Input").await;

        assert!(h.ws.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn malformed_relative_template_is_skipped() {
        let h = harness(vec![ws_button(
            "Broken",
            r#"{"SetVolume": {"changeBy": "lots"}}"#,
        )]);

        h.dispatcher.trigger("Broken").await;
        run_continuations().await;

        assert!(h.ws.sent.lock().is_empty());
    }

    // ========================================================================
    // Websocket branch: correlated relative volume
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn relative_volume_queries_then_sets() {
        let h = harness(vec![ws_button(
            "VolumeUp",
            r#"{"SetVolume": {"changeBy": 5}}"#,
        )]);
        h.state.on_volume_report(10);

        h.dispatcher.trigger("VolumeUp").await;
        run_continuations().await;

        assert_eq!(
            h.ws.sent.lock().as_slice(),
            [r#""GetVolume""#, r#"{"SetVolume":15}"#]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn relative_volume_clamps_to_max() {
        let h = harness(vec![ws_button(
            "VolumeUp",
            r#"{"SetVolume": {"changeBy": 30, "max": 40}}"#,
        )]);
        h.state.on_volume_report(20);

        h.dispatcher.trigger("VolumeUp").await;
        run_continuations().await;

        assert_eq!(h.ws.sent.lock().last().unwrap(), r#"{"SetVolume":40}"#);
    }

    #[tokio::test(start_paused = true)]
    async fn relative_volume_clamps_to_min() {
        let h = harness(vec![ws_button(
            "VolumeDown",
            r#"{"SetVolume": {"changeBy": -10, "min": -20}}"#,
        )]);
        h.state.on_volume_report(-15);

        h.dispatcher.trigger("VolumeDown").await;
        run_continuations().await;

        assert_eq!(h.ws.sent.lock().last().unwrap(), r#"{"SetVolume":-20}"#);
    }

    #[tokio::test(start_paused = true)]
    async fn relative_volume_uses_default_bounds() {
        let h = harness(vec![ws_button(
            "VolumeUp",
            r#"{"SetVolume": {"changeBy": 1000}}"#,
        )]);

        h.dispatcher.trigger("VolumeUp").await;
        run_continuations().await;

        assert_eq!(
            h.ws.sent.lock().last().unwrap(),
            &format!(r#"{{"SetVolume":{DEFAULT_VOLUME_MAX}}}"#)
        );

        let h = harness(vec![ws_button(
            "VolumeDown",
            r#"{"SetVolume": {"changeBy": -1000}}"#,
        )]);

        h.dispatcher.trigger("VolumeDown").await;
        run_continuations().await;

        assert_eq!(
            h.ws.sent.lock().last().unwrap(),
            &format!(r#"{{"SetVolume":{DEFAULT_VOLUME_MIN}}}"#)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn continuation_reads_state_visible_after_settle() {
        let h = harness(vec![ws_button(
            "VolumeUp",
            r#"{"SetVolume": {"changeBy": 5}}"#,
        )]);
        h.state.on_volume_report(10);

        h.dispatcher.trigger("VolumeUp").await;
        // A report lands while the continuation is still settling; the
        // computed command must use it.
        h.state.on_volume_report(20);
        run_continuations().await;

        assert_eq!(h.ws.sent.lock().last().unwrap(), r#"{"SetVolume":25}"#);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_presses_each_send_a_derived_command() {
        let h = harness(vec![ws_button(
            "VolumeUp",
            r#"{"SetVolume": {"changeBy": 5}}"#,
        )]);
        h.state.on_volume_report(0);

        h.dispatcher.trigger("VolumeUp").await;
        h.dispatcher.trigger("VolumeUp").await;
        run_continuations().await;

        let sent = h.ws.sent.lock();
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0], r#""GetVolume""#);
        assert_eq!(sent[1], r#""GetVolume""#);
        // Both continuations read the same cached volume; they are not
        // serialized against each other.
        assert_eq!(sent[2], r#"{"SetVolume":5}"#);
        assert_eq!(sent[3], r#"{"SetVolume":5}"#);
    }

    // ========================================================================
    // Websocket branch: correlated mute toggle
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn mute_toggle_from_unmuted() {
        let h = harness(vec![ws_button("Mute", r#"{"SetMute": "toggle"}"#)]);

        h.dispatcher.trigger("Mute").await;
        run_continuations().await;

        assert_eq!(
            h.ws.sent.lock().as_slice(),
            [r#""GetMute""#, r#"{"SetMute":true}"#]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn mute_toggle_from_muted() {
        let h = harness(vec![ws_button("Mute", r#"{"SetMute": "toggle"}"#)]);
        h.state.on_mute_report(true);

        h.dispatcher.trigger("Mute").await;
        run_continuations().await;

        assert_eq!(h.ws.sent.lock().last().unwrap(), r#"{"SetMute":false}"#);
    }

    // ========================================================================
    // Status surface and configuration reload
    // ========================================================================

    #[tokio::test]
    async fn transport_status_reflects_adapters() {
        let h = harness_with_links(
            vec![],
            RecordingMqtt::new(true),
            RecordingLink::new(false),
        );

        assert!(h.dispatcher.is_transport_connected(TransportKind::Mqtt));
        assert!(
            !h.dispatcher
                .is_transport_connected(TransportKind::Websocket)
        );
    }

    #[tokio::test]
    async fn reload_buttons_replaces_registry() {
        let h = harness(vec![ButtonAction::new(
            "Old",
            ActionKind::HttpGet {
                url: "http://hub.local/old".to_string(),
            },
        )]);

        h.dispatcher.reload_buttons(vec![ButtonAction::new(
            "New",
            ActionKind::HttpGet {
                url: "http://hub.local/new".to_string(),
            },
        )]);

        h.dispatcher.trigger("Old").await;
        h.dispatcher.trigger("New").await;

        assert_eq!(h.http.calls.lock().as_slice(), ["GET http://hub.local/new"]);
    }
}
