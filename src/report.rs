// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of inbound device report frames.
//!
//! The websocket receive loop hands every inbound text frame to this module.
//! Frames are classified into state reports or unrelated traffic:
//!
//! ```text
//! Frame: {"GetVolume":{"value":-23}}
//!              ↓
//!       ReportFrame::parse()
//!              ↓
//!   ReportFrame::Volume { value: -23 }
//!              ↓
//!   SharedDeviceState::on_volume_report(-23)
//! ```
//!
//! A frame that carries a report marker but fails to parse is logged and
//! dropped; the state cache is never updated from a malformed frame. Frames
//! without a report marker are unrelated traffic (command echoes, status
//! noise) and are ignored.

use serde::Deserialize;

use crate::error::ParseError;
use crate::state::SharedDeviceState;

/// An inbound frame that updates cached device state.
///
/// Reports are externally tagged single-key objects carrying a `value`
/// field; extra fields are tolerated and ignored.
///
/// # Examples
///
/// ```
/// use presslink::report::ReportFrame;
///
/// let frame = ReportFrame::parse(r#"{"GetVolume":{"value":-23}}"#).unwrap();
/// assert_eq!(frame, Some(ReportFrame::Volume { value: -23 }));
///
/// // Unrelated traffic is not a report.
/// let frame = ReportFrame::parse(r#"{"Pong":1}"#).unwrap();
/// assert_eq!(frame, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReportFrame {
    /// The device reported its current volume.
    #[serde(rename = "GetVolume")]
    Volume {
        /// Reported volume.
        value: i32,
    },
    /// The device reported its current mute flag.
    #[serde(rename = "GetMute")]
    Mute {
        /// Reported mute flag.
        value: bool,
    },
}

impl ReportFrame {
    /// Parses an inbound text frame.
    ///
    /// Returns `Ok(None)` for frames without a report marker (unrelated
    /// traffic).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedReport`] if the frame carries a report
    /// marker but does not parse as a report.
    pub fn parse(payload: &str) -> Result<Option<Self>, ParseError> {
        if !payload.contains("GetVolume") && !payload.contains("GetMute") {
            return Ok(None);
        }

        match serde_json::from_str(payload) {
            Ok(frame) => Ok(Some(frame)),
            Err(e) => Err(ParseError::MalformedReport(e.to_string())),
        }
    }

    /// Applies the report to the state cache.
    pub fn apply(self, state: &SharedDeviceState) {
        match self {
            Self::Volume { value } => state.on_volume_report(value),
            Self::Mute { value } => state.on_mute_report(value),
        }
    }
}

/// Classifies one inbound frame and updates the state cache if it is a
/// report.
///
/// This is the demux entry point called by the websocket receive loop for
/// every inbound text frame. All outcomes are terminal here: reports update
/// the cache, unrelated traffic is trace-logged, malformed reports are
/// warn-logged and dropped.
pub fn handle_frame(state: &SharedDeviceState, payload: &str) {
    match ReportFrame::parse(payload) {
        Ok(Some(report)) => report.apply(state),
        Ok(None) => {
            tracing::trace!(frame = %payload, "Ignoring non-report frame");
        }
        Err(e) => {
            tracing::warn!(frame = %payload, error = %e, "Dropping malformed report frame");
        }
    }
}
