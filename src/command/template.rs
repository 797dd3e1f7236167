// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of stored websocket message templates.
//!
//! A websocket button stores a JSON-shaped message template. Two special
//! forms are recognized before sending:
//!
//! - **Relative volume change**: the template carries the `SetVolume` and
//!   `changeBy` markers, e.g.
//!   `{"SetVolume": {"changeBy": 5, "max": 40, "min": -20}}`. The dispatcher
//!   queries the current volume, waits for the settle delay, then sends an
//!   absolute `SetVolume` clamped to the declared bounds.
//! - **Mute toggle**: the template carries the `SetMute` and `toggle`
//!   markers, e.g. `{"SetMute": "toggle"}`. The dispatcher queries the
//!   current mute flag, settles, then sends the negated value.
//!
//! Anything else is a literal template and is sent verbatim.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default lower clamp bound for relative volume changes.
pub const DEFAULT_VOLUME_MIN: i32 = -100;

/// Default upper clamp bound for relative volume changes.
pub const DEFAULT_VOLUME_MAX: i32 = 130;

/// The recognized form of a websocket message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateForm {
    /// Relative volume change with clamp bounds.
    RelativeVolume {
        /// Signed delta applied to the cached volume.
        delta: i32,
        /// Lower clamp bound.
        min: i32,
        /// Upper clamp bound.
        max: i32,
    },
    /// Mute toggle against the cached mute flag.
    MuteToggle,
    /// No special form; the template is sent unmodified.
    Literal,
}

impl TemplateForm {
    /// Classifies a stored message template.
    ///
    /// Detection mirrors the device protocol's loose conventions: a marker
    /// scan first, then a structural parse of the matched form. Templates
    /// without special markers classify as [`TemplateForm::Literal`] without
    /// being parsed at all — a literal command may be any JSON the device
    /// understands.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTemplate`] if the template matched
    /// the relative-volume markers but is not valid JSON of that shape.
    pub fn classify(template: &str) -> Result<Self, ConfigError> {
        if template.contains("SetVolume") && template.contains("changeBy") {
            let parsed: RelativeVolumeTemplate = serde_json::from_str(template)?;
            return Ok(Self::RelativeVolume {
                delta: parsed.set_volume.change_by,
                min: parsed.set_volume.min.unwrap_or(DEFAULT_VOLUME_MIN),
                max: parsed.set_volume.max.unwrap_or(DEFAULT_VOLUME_MAX),
            });
        }

        if template.contains("SetMute") && template.contains("toggle") {
            return Ok(Self::MuteToggle);
        }

        Ok(Self::Literal)
    }
}

/// Shape of a relative-volume template, e.g.
/// `{"SetVolume": {"changeBy": 5, "max": 40, "min": -20}}`.
#[derive(Debug, Deserialize)]
struct RelativeVolumeTemplate {
    #[serde(rename = "SetVolume")]
    set_volume: RelativeVolumeChange,
}

#[derive(Debug, Deserialize)]
struct RelativeVolumeChange {
    #[serde(rename = "changeBy")]
    change_by: i32,
    #[serde(default)]
    min: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}
