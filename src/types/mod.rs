// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the command bridge.
//!
//! This module provides type-safe representations of the values carried by
//! commands. Each type ensures values are within their valid ranges at
//! construction time, so malformed input never reaches a backend or the
//! serial transport.
//!
//! # Types
//!
//! - [`Level`] - Brightness/volume level at the protocol boundary (0-255)
//! - [`RgbTriple`] - Colour with three 8-bit channels

mod level;
mod rgb;

pub use level::Level;
pub use rgb::{RgbParseError, RgbTriple};
