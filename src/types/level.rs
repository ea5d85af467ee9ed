// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level type for brightness and volume control.
//!
//! This module provides a type-safe representation of device levels at the
//! protocol boundary, ensuring values are always within the valid range of
//! 0-255. Mapping to a backend's native range (e.g. an audio stream maximum)
//! is the backend's concern, not this type's.

use std::fmt;

use crate::error::ValueError;

/// Device level at the protocol boundary (0-255).
///
/// Both the brightness and volume namespaces speak in this range; each
/// backend rescales to its own native range.
///
/// # Examples
///
/// ```
/// use kiosk_bridge::types::Level;
///
/// let level = Level::new(128).unwrap();
/// assert_eq!(level.value(), 128);
///
/// // Out-of-range values return an error before any backend is touched.
/// assert!(Level::new(256).is_err());
/// assert!(Level::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Minimum level value.
    pub const MIN: Self = Self(0);

    /// Maximum level value.
    pub const MAX: Self = Self(255);

    /// Creates a new level from a raw integer.
    ///
    /// Takes an `i64` so that values parsed from command payloads can be
    /// range-checked without silent truncation.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [0, 255].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        u8::try_from(value).map(Self).map_err(|_| ValueError::OutOfRange {
            min: 0,
            max: 255,
            actual: value,
        })
    }

    /// Returns the raw level value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Level {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_valid_values() {
        for v in 0..=255 {
            let level = Level::new(v).unwrap();
            assert_eq!(i64::from(level.value()), v);
        }
    }

    #[test]
    fn level_out_of_range() {
        assert_eq!(
            Level::new(256),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 255,
                actual: 256
            })
        );
        assert!(Level::new(-1).is_err());
        assert!(Level::new(i64::MAX).is_err());
    }

    #[test]
    fn level_from_u8_is_total() {
        assert_eq!(Level::from(0u8), Level::MIN);
        assert_eq!(Level::from(255u8), Level::MAX);
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn level_ordering() {
        assert!(Level::MIN < Level::MAX);
        assert!(Level::new(50).unwrap() < Level::new(75).unwrap());
    }
}
