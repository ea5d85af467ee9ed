// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device controllers.
//!
//! Thin, independently testable policy wrappers over the platform
//! capability traits:
//!
//! - [`BrightnessController`] - screen brightness with a minimum floor
//! - [`VolumeController`] - audio volume
//! - [`KioskController`] - single-app lock task state
//! - [`LightController`] - the LED strip's serial line protocol
//!
//! Each controller validates its input before touching the backend; a
//! range violation is a local validation failure and never escalates.

mod brightness;
mod kiosk;
mod light;
mod volume;

pub use brightness::BrightnessController;
pub use kiosk::KioskController;
pub use light::LightController;
pub use volume::VolumeController;
