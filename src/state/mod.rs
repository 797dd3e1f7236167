// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.
//!
//! The websocket-controlled device reports its volume and mute state in
//! inbound frames; this module caches the last reported values so the
//! dispatcher can compute relative-volume and mute-toggle commands.

mod device_state;

pub use device_state::{DeviceState, SharedDeviceState};
