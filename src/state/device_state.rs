// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached volume and mute state of the websocket-controlled device.

use std::sync::Arc;

use parking_lot::RwLock;

/// Last reported state of the websocket-controlled device.
///
/// Both fields follow pure last-writer-wins semantics: there is no
/// versioning and no staleness detection. A reader may observe a value that
/// predates a query it just issued; the dispatcher tolerates this by design.
/// State is not persisted and resets to defaults on restart.
///
/// # Examples
///
/// ```
/// use presslink::state::DeviceState;
///
/// let state = DeviceState::default();
/// assert_eq!(state.volume, 0);
/// assert!(!state.muted);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Volume last reported by the device.
    pub volume: i32,
    /// Mute flag last reported by the device.
    pub muted: bool,
}

/// Shared handle to the process-wide [`DeviceState`] cache.
///
/// The cache has a single writer path (the websocket receive loop) and is
/// read by pending correlated continuations. Cloning the handle is cheap;
/// all clones observe the same state.
///
/// # Examples
///
/// ```
/// use presslink::state::SharedDeviceState;
///
/// let state = SharedDeviceState::new();
/// state.on_volume_report(-23);
/// state.on_mute_report(true);
///
/// let snapshot = state.snapshot();
/// assert_eq!(snapshot.volume, -23);
/// assert!(snapshot.muted);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedDeviceState {
    inner: Arc<RwLock<DeviceState>>,
}

impl SharedDeviceState {
    /// Creates a cache holding the default state (volume 0, unmuted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        *self.inner.read()
    }

    /// Returns the last reported volume.
    #[must_use]
    pub fn volume(&self) -> i32 {
        self.inner.read().volume
    }

    /// Returns the last reported mute flag.
    #[must_use]
    pub fn muted(&self) -> bool {
        self.inner.read().muted
    }

    /// Records a volume report from the device.
    pub fn on_volume_report(&self, value: i32) {
        tracing::debug!(volume = value, "Volume report received");
        self.inner.write().volume = value;
    }

    /// Records a mute report from the device.
    pub fn on_mute_report(&self, value: bool) {
        tracing::debug!(muted = value, "Mute report received");
        self.inner.write().muted = value;
    }

    /// Resets the cache to defaults.
    pub fn reset(&self) {
        *self.inner.write() = DeviceState::default();
    }
}
