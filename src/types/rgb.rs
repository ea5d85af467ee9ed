// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB triple type with command payload parsing.
//!
//! This module provides the colour representation used by the aggregate
//! "set colour" operation, parsed from the `lightset:<r>,<g>,<b>` payload
//! grammar. Parse failures distinguish non-numeric fields, wrong field
//! counts, and out-of-bounds values so the router can answer with the
//! matching diagnostic text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// RGB colour with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use kiosk_bridge::types::RgbTriple;
///
/// let colour = RgbTriple::new(255, 128, 0);
/// assert_eq!(colour.red(), 255);
/// assert_eq!(colour.green(), 128);
/// assert_eq!(colour.blue(), 0);
///
/// // Parse from a command payload
/// let colour: RgbTriple = "10,20,30".parse().unwrap();
/// assert_eq!(colour, RgbTriple::new(10, 20, 30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbTriple {
    red: u8,
    green: u8,
    blue: u8,
}

/// Errors produced when parsing an `r,g,b` command payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RgbParseError {
    /// A payload field is not an integer.
    #[error("colour field is not a number: {0}")]
    NotANumber(String),

    /// The payload does not contain exactly three fields.
    #[error("colour payload needs exactly three fields, got {0}")]
    FieldCount(usize),

    /// A channel value is outside [0, 255].
    #[error("colour channel value {0} is out of range [0, 255]")]
    OutOfBounds(i64),
}

impl RgbTriple {
    /// Creates a new RGB triple.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red channel value.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel value.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel value.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl FromStr for RgbTriple {
    type Err = RgbParseError;

    /// Parses the `lightset` payload grammar: three comma-separated
    /// integers, each within [0, 255].
    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for field in payload.split(',') {
            let value: i64 = field
                .trim()
                .parse()
                .map_err(|_| RgbParseError::NotANumber(field.to_string()))?;
            values.push(value);
        }

        let [red, green, blue] = values[..] else {
            return Err(RgbParseError::FieldCount(values.len()));
        };

        let channel = |value: i64| {
            u8::try_from(value).map_err(|_| RgbParseError::OutOfBounds(value))
        };
        Ok(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }
}

impl fmt::Display for RgbTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_payload() {
        let colour: RgbTriple = "10,20,30".parse().unwrap();
        assert_eq!(colour, RgbTriple::new(10, 20, 30));
    }

    #[test]
    fn parse_boundary_values() {
        let colour: RgbTriple = "0,255,0".parse().unwrap();
        assert_eq!(colour, RgbTriple::new(0, 255, 0));
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let colour: RgbTriple = "10, 20, 30".parse().unwrap();
        assert_eq!(colour, RgbTriple::new(10, 20, 30));
    }

    #[test]
    fn parse_non_numeric_field() {
        let err = "10,twenty,30".parse::<RgbTriple>().unwrap_err();
        assert_eq!(err, RgbParseError::NotANumber("twenty".to_string()));
    }

    #[test]
    fn parse_wrong_field_count() {
        assert_eq!(
            "10,20".parse::<RgbTriple>().unwrap_err(),
            RgbParseError::FieldCount(2)
        );
        assert_eq!(
            "10,20,30,40".parse::<RgbTriple>().unwrap_err(),
            RgbParseError::FieldCount(4)
        );
    }

    #[test]
    fn parse_out_of_bounds() {
        assert_eq!(
            "10,20,256".parse::<RgbTriple>().unwrap_err(),
            RgbParseError::OutOfBounds(256)
        );
        assert_eq!(
            "-1,20,30".parse::<RgbTriple>().unwrap_err(),
            RgbParseError::OutOfBounds(-1)
        );
    }

    #[test]
    fn parse_empty_payload() {
        // An empty payload is a single empty field, which is not a number.
        assert!(matches!(
            "".parse::<RgbTriple>(),
            Err(RgbParseError::NotANumber(_))
        ));
    }

    #[test]
    fn display_round_trip() {
        let colour = RgbTriple::new(1, 2, 3);
        assert_eq!(colour.to_string().parse::<RgbTriple>().unwrap(), colour);
    }
}
