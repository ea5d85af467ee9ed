// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response encoding for the command bridge.
//!
//! Every dispatched command is acknowledged with a response in a small
//! ASCII grammar: `success`, `success:<payload>`, or `error:<message>`.
//! Messages are free text used for diagnostics only; there are no
//! enumerated error codes at this boundary.

use std::fmt;

/// Outcome of a dispatched command, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The command was applied, with an optional result payload.
    Success(Option<String>),
    /// The command was rejected or failed; the message is diagnostic text.
    Error(String),
}

impl Response {
    /// Creates a success response without a payload.
    #[must_use]
    pub const fn success() -> Self {
        Self::Success(None)
    }

    /// Creates a success response carrying a payload.
    pub fn success_with(payload: impl Into<String>) -> Self {
        Self::Success(Some(payload.into()))
    }

    /// Creates an error response with the given diagnostic message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Returns whether this is a success response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(None) => f.write_str("success"),
            Self::Success(Some(payload)) => write!(f, "success:{payload}"),
            Self::Error(message) => write!(f, "error:{message}"),
        }
    }
}
