// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serial transport capability and the default TTY implementation.
//!
//! The byte-level open/write/close syscalls are abstracted behind
//! [`SerialTransport`] and [`SerialHandle`] so the channel and everything
//! above it can be exercised against recording fakes. The default
//! [`TtyTransport`] drives a real serial device through `tokio-serial`.

use std::future::Future;
use std::io;

use tokio::io::AsyncWriteExt;
use tokio_serial::{DataBits, Parity, SerialPortBuilderExt, SerialStream, StopBits};

use crate::error::SerialError;

/// Capability that produces live handles to a serial device.
pub trait SerialTransport {
    /// The live connection produced by a successful open.
    type Handle: SerialHandle + Send;

    /// Opens a new handle to the device.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::DeviceNotAccessible`] when the device path is
    /// not both readable and writable by this process, and
    /// [`SerialError::HandleUnavailable`] when no live handle could be
    /// produced.
    fn open(&self) -> impl Future<Output = Result<Self::Handle, SerialError>> + Send;
}

/// A live serial connection.
pub trait SerialHandle {
    /// Transmits the given bytes exactly as supplied; no framing or
    /// trailing newline is added.
    fn write_all(&mut self, bytes: &[u8]) -> impl Future<Output = io::Result<()>> + Send;

    /// Releases the connection.
    fn shutdown(&mut self) -> impl Future<Output = io::Result<()>> + Send;
}

/// Default transport for a TTY serial device.
///
/// Opens the device with 8 data bits, no parity, and 1 stop bit, matching
/// the LED strip hardware. The defaults mirror the production deployment:
/// `/dev/ttyS3` at 9600 baud.
#[derive(Debug, Clone)]
pub struct TtyTransport {
    device: String,
    baud_rate: u32,
}

impl TtyTransport {
    /// Device path used by [`TtyTransport::default`].
    pub const DEFAULT_DEVICE: &'static str = "/dev/ttyS3";

    /// Baud rate used by [`TtyTransport::default`].
    pub const DEFAULT_BAUD_RATE: u32 = 9600;

    /// Creates a transport for the given device path and baud rate.
    pub fn new(device: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            device: device.into(),
            baud_rate,
        }
    }

    /// Returns the device path this transport opens.
    #[must_use]
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Checks that the device exists and is readable and writable, without
    /// configuring the line. Other failures are left to the real open so
    /// their cause is reported accurately.
    fn probe_access(&self) -> Result<(), SerialError> {
        match std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.device)
        {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) => {
                Err(SerialError::DeviceNotAccessible {
                    device: self.device.clone(),
                })
            }
            Err(_) => Ok(()),
        }
    }
}

impl Default for TtyTransport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEVICE, Self::DEFAULT_BAUD_RATE)
    }
}

impl SerialTransport for TtyTransport {
    type Handle = SerialStream;

    async fn open(&self) -> Result<SerialStream, SerialError> {
        self.probe_access()?;

        tokio_serial::new(&self.device, self.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .open_native_async()
            .map_err(|e| SerialError::HandleUnavailable(e.to_string()))
    }
}

impl SerialHandle for SerialStream {
    async fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        AsyncWriteExt::write_all(self, bytes).await
    }

    async fn shutdown(&mut self) -> io::Result<()> {
        AsyncWriteExt::shutdown(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transport_settings() {
        let transport = TtyTransport::default();
        assert_eq!(transport.device(), "/dev/ttyS3");
        assert_eq!(transport.baud_rate, 9600);
    }

    #[tokio::test]
    async fn open_missing_device_is_not_accessible() {
        let transport = TtyTransport::new("/dev/kiosk-bridge-does-not-exist", 9600);
        let err = transport.open().await.unwrap_err();
        assert!(matches!(err, SerialError::DeviceNotAccessible { .. }));
    }
}
