// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Screen brightness control.

use crate::backend::BrightnessBackend;
use crate::types::Level;

/// Controls the display's physical brightness through a
/// [`BrightnessBackend`].
///
/// Levels below the configured minimum floor are rejected before the
/// backend is touched, so a remote controller cannot turn the screen
/// fully dark.
pub struct BrightnessController<B: BrightnessBackend> {
    backend: B,
    minimum: u8,
}

impl<B: BrightnessBackend> BrightnessController<B> {
    /// Minimum brightness used by [`BrightnessController::new`], matching
    /// the production kiosk deployment.
    pub const DEFAULT_MINIMUM: u8 = 5;

    /// Creates a controller with the default minimum floor.
    pub fn new(backend: B) -> Self {
        Self::with_minimum(backend, Self::DEFAULT_MINIMUM)
    }

    /// Creates a controller with a custom minimum floor.
    pub fn with_minimum(backend: B, minimum: u8) -> Self {
        Self { backend, minimum }
    }

    /// Returns the current brightness level.
    pub fn get(&self) -> Level {
        Level::from(self.backend.brightness())
    }

    /// Applies the given brightness level.
    ///
    /// Returns `false` without touching the backend when the level is
    /// below the minimum floor.
    pub fn set(&mut self, level: Level) -> bool {
        if level.value() < self.minimum {
            tracing::debug!(level = %level, minimum = self.minimum, "Rejecting brightness below floor");
            return false;
        }

        self.backend.set_brightness(level.value());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBrightness {
        level: u8,
        writes: usize,
    }

    impl BrightnessBackend for FakeBrightness {
        fn brightness(&self) -> u8 {
            self.level
        }

        fn set_brightness(&mut self, level: u8) {
            self.level = level;
            self.writes += 1;
        }
    }

    #[test]
    fn set_then_get_reflects_level() {
        let mut controller = BrightnessController::new(FakeBrightness::default());
        assert!(controller.set(Level::from(200u8)));
        assert_eq!(controller.get(), Level::from(200u8));
    }

    #[test]
    fn below_floor_is_rejected_without_backend_call() {
        let mut controller = BrightnessController::new(FakeBrightness::default());
        assert!(!controller.set(Level::from(4u8)));
        assert_eq!(controller.backend.writes, 0);
    }

    #[test]
    fn floor_value_itself_is_accepted() {
        let mut controller = BrightnessController::new(FakeBrightness::default());
        assert!(controller.set(Level::from(5u8)));
        assert_eq!(controller.backend.writes, 1);
    }

    #[test]
    fn custom_floor() {
        let mut controller = BrightnessController::with_minimum(FakeBrightness::default(), 0);
        assert!(controller.set(Level::MIN));
    }
}
