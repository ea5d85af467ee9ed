// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform capability traits.
//!
//! The host platform's brightness, volume, kiosk-policy, and network APIs
//! are injected into the bridge as narrow capability traits, so the router
//! and controllers are testable without any platform dependency. Each trait
//! covers exactly the calls the corresponding controller needs; range
//! mapping between the protocol's 0-255 levels and a platform's native
//! range (e.g. an audio stream maximum) lives behind these traits.

use std::io;
use std::net::IpAddr;

/// Capability for reading and writing the display's physical brightness.
///
/// Levels are expressed in the protocol range 0-255; implementations
/// rescale to their native range as needed.
pub trait BrightnessBackend: Send {
    /// Returns the current brightness level.
    fn brightness(&self) -> u8;

    /// Applies the given brightness level.
    fn set_brightness(&mut self, level: u8);
}

/// Capability for reading and writing the device's audio volume.
///
/// Levels are expressed in the protocol range 0-255; implementations
/// rescale to their native range as needed.
pub trait VolumeBackend: Send {
    /// Returns the current volume level.
    fn volume(&self) -> u8;

    /// Applies the given volume level.
    fn set_volume(&mut self, level: u8);
}

/// Capability for the platform's single-app kiosk (lock task) policy.
pub trait KioskBackend: Send {
    /// Reports whether the platform currently permits entering lock task
    /// mode.
    fn is_lock_task_permitted(&self) -> bool;

    /// Enters lock task mode. Only called when permitted.
    fn start_lock_task(&mut self);

    /// Leaves lock task mode. Fire-and-forget.
    fn stop_lock_task(&mut self);

    /// Hides the platform's user interface chrome. One-way and idempotent,
    /// applied independently of the lock state.
    fn hide_user_interface(&mut self);
}

/// Capability for enumerating the device's local network addresses.
pub trait NetworkBackend: Send {
    /// Returns the non-loopback addresses currently assigned to the
    /// device's network interfaces.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the platform cannot enumerate interfaces;
    /// the message is surfaced verbatim to the caller.
    fn addresses(&self) -> io::Result<Vec<IpAddr>>;
}

/// Default [`NetworkBackend`] backed by the operating system's interface
/// list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNetwork;

impl NetworkBackend for SystemNetwork {
    fn addresses(&self) -> io::Result<Vec<IpAddr>> {
        let interfaces = if_addrs::get_if_addrs()?;
        Ok(interfaces
            .into_iter()
            .filter(|interface| !interface.is_loopback())
            .map(|interface| interface.ip())
            .collect())
    }
}
