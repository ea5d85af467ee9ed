// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the kiosk bridge.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation, serial transport I/O, and the bridge worker
//! lifecycle. All errors are local and recoverable; none terminate the
//! dispatch loop.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred on the serial channel.
    #[error("serial error: {0}")]
    Serial(#[from] SerialError),

    /// The bridge worker task has stopped and can no longer accept commands.
    #[error("bridge worker is not running")]
    WorkerClosed,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: i64,
    },
}

/// Errors related to the serial channel and its transport.
#[derive(Debug, Error)]
pub enum SerialError {
    /// The device path is not both readable and writable by this process.
    #[error("serial device {device} is not readable and writable")]
    DeviceNotAccessible {
        /// The device path that was probed.
        device: String,
    },

    /// The transport could not produce a live handle to the device.
    #[error("could not obtain a handle to the serial device: {0}")]
    HandleUnavailable(String),

    /// A write was attempted while the channel is closed.
    #[error("serial channel is not open")]
    NotOpen,

    /// A transport-level I/O operation failed.
    #[error("serial {operation} failed: {source}")]
    Io {
        /// The operation that failed (`"write"` or `"close"`).
        operation: &'static str,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
