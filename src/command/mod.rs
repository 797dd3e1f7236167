// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! This module provides typed representations of the JSON commands
//! understood by the websocket-controlled device, plus the classification of
//! stored message templates into their special forms.
//!
//! # Wire Format
//!
//! The device protocol is JSON-framed. Query commands are bare JSON strings,
//! set commands are single-key objects:
//!
//! | Command | Wire encoding |
//! |---------|---------------|
//! | [`DeviceCommand::GetVolume`] | `"GetVolume"` |
//! | [`DeviceCommand::GetMute`] | `"GetMute"` |
//! | [`DeviceCommand::SetVolume`] | `{"SetVolume":<int>}` |
//! | [`DeviceCommand::SetMute`] | `{"SetMute":<bool>}` |
//! | [`DeviceCommand::SetUpdateInterval`] | `{"SetUpdateInterval":<int>}` |
//!
//! These encodings must be reproduced bit-exact for interoperability with
//! the real device; the serde externally-tagged representation does exactly
//! that.

pub mod template;

use serde::Serialize;

pub use template::TemplateForm;

/// A JSON command sent to the websocket-controlled device.
///
/// # Examples
///
/// ```
/// use presslink::command::DeviceCommand;
///
/// assert_eq!(DeviceCommand::GetVolume.encode(), r#""GetVolume""#);
/// assert_eq!(DeviceCommand::SetVolume(-23).encode(), r#"{"SetVolume":-23}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceCommand {
    /// Asks the device to report its current volume.
    GetVolume,
    /// Asks the device to report its current mute flag.
    GetMute,
    /// Sets the absolute volume.
    SetVolume(i32),
    /// Sets the mute flag.
    SetMute(bool),
    /// Sets the device's periodic state-report interval in milliseconds.
    SetUpdateInterval(u32),
}

impl DeviceCommand {
    /// Encodes the command to its JSON wire form.
    #[must_use]
    pub fn encode(&self) -> String {
        // Serialization of this enum cannot fail: no maps, no non-string keys.
        serde_json::to_string(self).unwrap_or_default()
    }
}
