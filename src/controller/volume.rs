// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Audio volume control.

use crate::backend::VolumeBackend;
use crate::types::Level;

/// Controls the device's audio volume through a [`VolumeBackend`].
///
/// The controller speaks the protocol range 0-255; mapping to the
/// platform's native stream range (and its rounding) is the backend's
/// concern.
pub struct VolumeController<V: VolumeBackend> {
    backend: V,
}

impl<V: VolumeBackend> VolumeController<V> {
    /// Creates a controller over the given backend.
    pub fn new(backend: V) -> Self {
        Self { backend }
    }

    /// Returns the current volume level.
    pub fn get(&self) -> Level {
        Level::from(self.backend.volume())
    }

    /// Applies the given volume level.
    pub fn set(&mut self, level: Level) -> bool {
        self.backend.set_volume(level.value());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeVolume {
        level: u8,
    }

    impl VolumeBackend for FakeVolume {
        fn volume(&self) -> u8 {
            self.level
        }

        fn set_volume(&mut self, level: u8) {
            self.level = level;
        }
    }

    #[test]
    fn set_then_get_reflects_level() {
        let mut controller = VolumeController::new(FakeVolume::default());
        assert!(controller.set(Level::from(33u8)));
        assert_eq!(controller.get(), Level::from(33u8));
    }

    #[test]
    fn full_range_is_accepted() {
        let mut controller = VolumeController::new(FakeVolume::default());
        assert!(controller.set(Level::MIN));
        assert!(controller.set(Level::MAX));
        assert_eq!(controller.get(), Level::MAX);
    }
}
