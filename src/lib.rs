// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kiosk Bridge - the command bridge of a kiosk display controller.
//!
//! A kiosk display host renders a remote web page and lets that page,
//! acting as an untrusted-but-cooperative controller, adjust physical
//! device properties. This library implements the bridge between the two:
//! it parses line-oriented text commands arriving from the UI layer,
//! validates and dispatches them to typed device controllers, drives an
//! RGB LED strip over a serial line with the inter-command delays its
//! firmware requires, and reports structured success/error results back.
//!
//! # Supported Commands
//!
//! | Command | Behaviour |
//! |---------|-----------|
//! | `brightness:get` / `brightness:<0-255>` | Read or set screen brightness |
//! | `volume:get` / `volume:<0-255>` | Read or set audio volume |
//! | `ip` | List non-loopback network addresses |
//! | `kiosk:enable` / `kiosk:disable` | Enter or leave lock task mode |
//! | `light:open` / `light:close` | Manage the LED serial connection |
//! | `light:<raw-command>` | Forward a raw device command verbatim |
//! | `lightset:<r>,<g>,<b>` | Set the LED strip colour |
//!
//! Every command is acknowledged with `success`, `success:<payload>`, or
//! `error:<message>`; empty input is dropped silently as transport noise.
//!
//! # Quick Start
//!
//! Platform APIs are injected as capability traits, so the bridge itself
//! has no platform dependency:
//!
//! ```ignore
//! use kiosk_bridge::{
//!     BrightnessController, CommandRouter, KioskController, LightController,
//!     SystemNetwork, TtyTransport, VolumeController,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     // Platform glue implementing the backend traits.
//!     let (brightness, volume, kiosk) = platform::backends();
//!
//!     let mut router = CommandRouter::new(
//!         BrightnessController::new(brightness),
//!         VolumeController::new(volume),
//!         KioskController::new(kiosk),
//!         LightController::new(TtyTransport::default()),
//!         SystemNetwork,
//!     );
//!
//!     // Hide the UI chrome and open the LED serial port up front; the
//!     // port can be re-opened later through `light:open`.
//!     router.kiosk_mut().hide_user_interface();
//!     if let Err(e) = router.light_mut().open().await {
//!         tracing::warn!(error = %e, "LED strip not available");
//!     }
//!
//!     if let Some(response) = router.dispatch("lightset:255,128,0").await {
//!         ui.post_message(response.to_string());
//!     }
//! }
//! ```
//!
//! # Worker Variant
//!
//! A `lightset` dispatch blocks for at least 90ms of device settle time.
//! Callers on a latency-sensitive thread can move the router onto its own
//! task with [`spawn_bridge`] and dispatch through a cloneable
//! [`BridgeHandle`] instead:
//!
//! ```ignore
//! let handle = kiosk_bridge::spawn_bridge(router);
//! let response = handle.dispatch("brightness:128").await?;
//! ```

pub mod backend;
pub mod command;
pub mod controller;
pub mod error;
pub mod response;
pub mod router;
pub mod serial;
pub mod types;

pub use backend::{
    BrightnessBackend, KioskBackend, NetworkBackend, SystemNetwork, VolumeBackend,
};
pub use command::{Channel, LightCommand};
pub use controller::{
    BrightnessController, KioskController, LightController, VolumeController,
};
pub use error::{Error, Result, SerialError, ValueError};
pub use response::Response;
pub use router::{BridgeHandle, CommandRouter, Namespace, ParsedCommand, spawn_bridge};
pub use serial::{SerialChannel, SerialHandle, SerialTransport, TtyTransport};
pub use types::{Level, RgbParseError, RgbTriple};
