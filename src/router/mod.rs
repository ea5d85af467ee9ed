// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command parsing and dispatch.
//!
//! The router receives raw command strings from the trusted UI layer,
//! parses them into a namespace and payload, dispatches to the matching
//! controller, and converts the outcome into the response grammar. The
//! inbound grammar (ASCII, case-sensitive keywords):
//!
//! ```text
//! brightness:get
//! brightness:<0-255>
//! volume:get
//! volume:<0-255>
//! ip
//! kiosk:enable | kiosk:disable
//! light:open | light:close | light:<raw-device-command>
//! lightset:<r>,<g>,<b>
//! ```
//!
//! Null or empty input is dropped silently, modelling transport noise;
//! an unrecognized namespace is a protocol error and answered with
//! `error:Invalid command`. This asymmetry is deliberate.

mod worker;

pub use worker::{BridgeHandle, spawn_bridge};

use crate::backend::{BrightnessBackend, KioskBackend, NetworkBackend, VolumeBackend};
use crate::controller::{
    BrightnessController, KioskController, LightController, VolumeController,
};
use crate::response::Response;
use crate::serial::SerialTransport;
use crate::types::{Level, RgbParseError, RgbTriple};

/// The leading keyword of a command string, selecting its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Screen brightness get/set.
    Brightness,
    /// Local network address enumeration.
    Ip,
    /// Kiosk lock task state.
    Kiosk,
    /// Raw light channel access.
    Light,
    /// Aggregate colour update.
    LightSet,
    /// Audio volume get/set.
    Volume,
}

/// A command split into its namespace and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The matched namespace.
    pub namespace: Namespace,
    /// Everything after the namespace separator; empty for `ip`.
    pub payload: &'a str,
}

/// Prefixes ordered most-specific first, so `lightset:` is never
/// mis-matched as `light:`.
const PREFIXES: [(&str, Namespace); 5] = [
    ("brightness:", Namespace::Brightness),
    ("lightset:", Namespace::LightSet),
    ("volume:", Namespace::Volume),
    ("kiosk:", Namespace::Kiosk),
    ("light:", Namespace::Light),
];

/// Splits a raw command into namespace and payload.
///
/// Returns `None` when no known namespace matches.
#[must_use]
pub fn parse(raw: &str) -> Option<ParsedCommand<'_>> {
    if raw == "ip" {
        return Some(ParsedCommand {
            namespace: Namespace::Ip,
            payload: "",
        });
    }

    PREFIXES.iter().find_map(|(prefix, namespace)| {
        raw.strip_prefix(prefix).map(|payload| ParsedCommand {
            namespace: *namespace,
            payload,
        })
    })
}

/// Routes raw command strings to the device controllers.
///
/// Controllers are wired in once at construction and live for the
/// duration of the session; dispatch itself is stateless across calls.
pub struct CommandRouter<B, V, K, N, T>
where
    B: BrightnessBackend,
    V: VolumeBackend,
    K: KioskBackend,
    N: NetworkBackend,
    T: SerialTransport,
{
    brightness: BrightnessController<B>,
    volume: VolumeController<V>,
    kiosk: KioskController<K>,
    light: LightController<T>,
    network: N,
}

impl<B, V, K, N, T> CommandRouter<B, V, K, N, T>
where
    B: BrightnessBackend,
    V: VolumeBackend,
    K: KioskBackend,
    N: NetworkBackend,
    T: SerialTransport,
{
    /// Wires the router to its controllers and network backend.
    pub fn new(
        brightness: BrightnessController<B>,
        volume: VolumeController<V>,
        kiosk: KioskController<K>,
        light: LightController<T>,
        network: N,
    ) -> Self {
        Self {
            brightness,
            volume,
            kiosk,
            light,
            network,
        }
    }

    /// Returns the kiosk controller, e.g. to hide the user interface at
    /// startup independently of any command.
    pub fn kiosk_mut(&mut self) -> &mut KioskController<K> {
        &mut self.kiosk
    }

    /// Returns the light controller, e.g. to open the serial port at
    /// startup. It can be re-opened through the `light:open` command.
    pub fn light_mut(&mut self) -> &mut LightController<T> {
        &mut self.light
    }

    /// Parses, validates, and dispatches one command, returning the
    /// response to report back to the caller.
    ///
    /// Empty input yields `None` and no response: malformed transport
    /// noise is ignored rather than answered. An unknown namespace yields
    /// `error:Invalid command` without invoking any controller.
    pub async fn dispatch(&mut self, raw: &str) -> Option<Response> {
        if raw.is_empty() {
            tracing::debug!("Ignoring empty command");
            return None;
        }

        let Some(command) = parse(raw) else {
            tracing::debug!(command = %raw, "Unrecognized command namespace");
            return Some(Response::error("Invalid command"));
        };

        let response = match command.namespace {
            Namespace::Brightness => self.on_brightness(command.payload),
            Namespace::Ip => self.on_ip(),
            Namespace::Kiosk => self.on_kiosk(command.payload),
            Namespace::Light => self.on_light(command.payload).await,
            Namespace::LightSet => self.on_light_set(command.payload).await,
            Namespace::Volume => self.on_volume(command.payload),
        };
        Some(response)
    }

    /// Handles `brightness:get` and `brightness:<0-255>`.
    fn on_brightness(&mut self, payload: &str) -> Response {
        if payload == "get" {
            return Response::success_with(self.brightness.get().to_string());
        }

        let Ok(value) = payload.parse::<i64>() else {
            tracing::debug!(payload = %payload, "Received an invalid brightness value");
            return Response::error("Invalid brightness command");
        };

        match Level::new(value) {
            Ok(level) if self.brightness.set(level) => Response::success(),
            _ => Response::error("Invalid brightness command (out of bounds)"),
        }
    }

    /// Handles `volume:get` and `volume:<0-255>`.
    fn on_volume(&mut self, payload: &str) -> Response {
        if payload == "get" {
            return Response::success_with(self.volume.get().to_string());
        }

        let Ok(value) = payload.parse::<i64>() else {
            tracing::debug!(payload = %payload, "Received an invalid volume value");
            return Response::error("Invalid volume command");
        };

        match Level::new(value) {
            Ok(level) if self.volume.set(level) => Response::success(),
            _ => Response::error("Invalid volume command (out of bounds)"),
        }
    }

    /// Handles `ip`: enumerates non-loopback addresses, joined with `;`.
    fn on_ip(&self) -> Response {
        match self.network.addresses() {
            Ok(addresses) => {
                let list = addresses
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(";");
                Response::success_with(list)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to enumerate network addresses");
                Response::error(e.to_string())
            }
        }
    }

    /// Handles `kiosk:enable` and `kiosk:disable`.
    fn on_kiosk(&mut self, payload: &str) -> Response {
        let applied = match payload {
            "enable" => self.kiosk.enable(),
            "disable" => self.kiosk.disable(),
            _ => false,
        };

        if applied {
            Response::success()
        } else {
            Response::error("Invalid kiosk command")
        }
    }

    /// Handles `light:open`, `light:close`, and raw device commands.
    async fn on_light(&mut self, payload: &str) -> Response {
        let outcome = match payload {
            "open" => self.light.open().await,
            "close" => self.light.close().await,
            raw => self.light.send_raw(raw).await,
        };

        match outcome {
            Ok(()) => Response::success(),
            Err(e) => {
                tracing::warn!(payload = %payload, error = %e, "Light command failed");
                Response::error("Invalid light command")
            }
        }
    }

    /// Handles `lightset:<r>,<g>,<b>`.
    async fn on_light_set(&mut self, payload: &str) -> Response {
        let colour = match payload.parse::<RgbTriple>() {
            Ok(colour) => colour,
            Err(RgbParseError::NotANumber(_)) => {
                return Response::error("Invalid light command (odd number)");
            }
            Err(RgbParseError::FieldCount(_)) => {
                return Response::error("Invalid light command (needs rgb)");
            }
            Err(RgbParseError::OutOfBounds(_)) => {
                return Response::error("Invalid light command (out of bounds)");
            }
        };

        match self.light.set_colour(colour).await {
            Ok(()) => Response::success(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update the light colour");
                Response::error("Invalid light command")
            }
        }
    }
}
