// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serial channel lifecycle management.
//!
//! [`SerialChannel`] owns the lifetime of one serial connection and models
//! it as an explicit two-state machine: `Closed` or `Open` with exactly one
//! live handle. Re-opening while open closes the existing handle first so
//! no descriptor leaks; closing while closed is a no-op. I/O failures are
//! surfaced as [`SerialError`] values rather than thrown across the
//! boundary.

mod transport;

pub use transport::{SerialHandle, SerialTransport, TtyTransport};

use crate::error::SerialError;

enum ChannelState<H> {
    Closed,
    Open(H),
}

/// Owns one serial connection produced by a [`SerialTransport`].
pub struct SerialChannel<T: SerialTransport> {
    transport: T,
    state: ChannelState<T::Handle>,
}

impl<T: SerialTransport> SerialChannel<T> {
    /// Creates a closed channel over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ChannelState::Closed,
        }
    }

    /// Returns whether the channel currently holds a live handle.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ChannelState::Open(_))
    }

    /// Opens the channel.
    ///
    /// If a handle is already live it is closed first, so at most one
    /// handle exists at any time.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::DeviceNotAccessible`] or
    /// [`SerialError::HandleUnavailable`] from the transport; on failure
    /// the channel remains closed.
    pub async fn open(&mut self) -> Result<(), SerialError> {
        if self.is_open() {
            tracing::debug!("Channel already open; closing existing handle before reopen");
            if let Err(e) = self.close().await {
                tracing::warn!(error = %e, "Failed to cleanly close handle before reopen");
            }
        }

        let handle = self.transport.open().await?;
        self.state = ChannelState::Open(handle);
        tracing::debug!("Serial channel opened");
        Ok(())
    }

    /// Writes the given bytes to the live handle, exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::NotOpen`] when the channel is closed and
    /// [`SerialError::Io`] on a transport-level write failure.
    pub async fn write(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        match &mut self.state {
            ChannelState::Closed => Err(SerialError::NotOpen),
            ChannelState::Open(handle) => {
                handle.write_all(bytes).await.map_err(|source| SerialError::Io {
                    operation: "write",
                    source,
                })
            }
        }
    }

    /// Closes the channel.
    ///
    /// The channel always ends up `Closed`, and closing an already-closed
    /// channel succeeds. Transport errors during close are reported but do
    /// not prevent the transition.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::Io`] when releasing the handle failed.
    pub async fn close(&mut self) -> Result<(), SerialError> {
        match std::mem::replace(&mut self.state, ChannelState::Closed) {
            ChannelState::Closed => Ok(()),
            ChannelState::Open(mut handle) => {
                let outcome = handle.shutdown().await;
                tracing::debug!("Serial channel closed");
                outcome.map_err(|source| SerialError::Io {
                    operation: "close",
                    source,
                })
            }
        }
    }
}
