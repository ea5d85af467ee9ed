// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed commands for the LED strip's line protocol.
//!
//! The LED hardware is a serial device speaking a small ASCII grammar:
//!
//! ```text
//! LIVE:{RED|GREEN|BLUE}:{seconds}          - enable "live" mode for a channel
//! KEEP:{RED|GREEN|BLUE}:{seconds}:{0-255}  - hold a channel at an intensity
//! CRAZY:{seconds}                          - enable "crazy" mode
//! FLASH:{seconds}                          - enable "flash" mode
//! CLOSE:{RED|GREEN|BLUE}                   - shut a channel off entirely
//! ```
//!
//! Commands are sent as raw ASCII bytes with no trailing newline. A duration
//! of zero seconds means "hold until changed".
//!
//! # Examples
//!
//! ```
//! use kiosk_bridge::command::{Channel, LightCommand};
//!
//! let cmd = LightCommand::keep(Channel::Red, 200);
//! assert_eq!(cmd.to_wire(), "KEEP:RED:0:200");
//!
//! let cmd = LightCommand::Flash { seconds: 5 };
//! assert_eq!(cmd.to_wire(), "FLASH:5");
//! ```

use std::fmt;

/// One colour channel of the LED strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// Returns the channel keyword as it appears on the wire.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A command in the LED device's line grammar.
///
/// Constructed only from validated input; malformed payloads never reach
/// the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Enable "live" mode for the given channel.
    Live {
        /// The channel to drive.
        channel: Channel,
        /// Mode duration in seconds.
        seconds: u32,
    },
    /// Hold the given channel at a fixed intensity.
    Keep {
        /// The channel to drive.
        channel: Channel,
        /// Mode duration in seconds; zero means "hold until changed".
        seconds: u32,
        /// Channel intensity.
        intensity: u8,
    },
    /// Enable "crazy" mode.
    Crazy {
        /// Mode duration in seconds.
        seconds: u32,
    },
    /// Enable "flash" mode.
    Flash {
        /// Mode duration in seconds.
        seconds: u32,
    },
    /// Shut the given channel off entirely.
    Close {
        /// The channel to shut off.
        channel: Channel,
    },
}

impl LightCommand {
    /// Creates a permanent `KEEP` command (zero duration) holding the
    /// channel at the given intensity.
    #[must_use]
    pub const fn keep(channel: Channel, intensity: u8) -> Self {
        Self::Keep {
            channel,
            seconds: 0,
            intensity,
        }
    }

    /// Returns the command's wire representation.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LightCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live { channel, seconds } => write!(f, "LIVE:{channel}:{seconds}"),
            Self::Keep {
                channel,
                seconds,
                intensity,
            } => write!(f, "KEEP:{channel}:{seconds}:{intensity}"),
            Self::Crazy { seconds } => write!(f, "CRAZY:{seconds}"),
            Self::Flash { seconds } => write!(f, "FLASH:{seconds}"),
            Self::Close { channel } => write!(f, "CLOSE:{channel}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_keywords() {
        assert_eq!(Channel::Red.keyword(), "RED");
        assert_eq!(Channel::Green.keyword(), "GREEN");
        assert_eq!(Channel::Blue.keyword(), "BLUE");
    }

    #[test]
    fn live_wire_format() {
        let cmd = LightCommand::Live {
            channel: Channel::Green,
            seconds: 10,
        };
        assert_eq!(cmd.to_wire(), "LIVE:GREEN:10");
    }

    #[test]
    fn keep_wire_format() {
        let cmd = LightCommand::Keep {
            channel: Channel::Blue,
            seconds: 30,
            intensity: 128,
        };
        assert_eq!(cmd.to_wire(), "KEEP:BLUE:30:128");
    }

    #[test]
    fn keep_constructor_is_permanent() {
        let cmd = LightCommand::keep(Channel::Red, 255);
        assert_eq!(cmd.to_wire(), "KEEP:RED:0:255");
    }

    #[test]
    fn crazy_and_flash_wire_format() {
        assert_eq!(LightCommand::Crazy { seconds: 3 }.to_wire(), "CRAZY:3");
        assert_eq!(LightCommand::Flash { seconds: 7 }.to_wire(), "FLASH:7");
    }

    #[test]
    fn close_wire_format() {
        let cmd = LightCommand::Close {
            channel: Channel::Red,
        };
        assert_eq!(cmd.to_wire(), "CLOSE:RED");
    }
}
