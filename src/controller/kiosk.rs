// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kiosk (lock task) control.

use crate::backend::KioskBackend;

/// Controls the platform's single-app kiosk restriction through a
/// [`KioskBackend`].
///
/// Behaviour is driven from the remote UI so that the default device state
/// (e.g. during network issues) leaves the full device accessible.
pub struct KioskController<K: KioskBackend> {
    backend: K,
}

impl<K: KioskBackend> KioskController<K> {
    /// Creates a controller over the given backend.
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// Enters kiosk mode.
    ///
    /// Returns `false` when the platform reports that lock task mode is
    /// not currently permitted; the refusal is a policy outcome, not an
    /// error.
    pub fn enable(&mut self) -> bool {
        if !self.backend.is_lock_task_permitted() {
            tracing::warn!("Lock task is not permitted; kiosk mode not enabled");
            return false;
        }

        self.backend.start_lock_task();
        true
    }

    /// Leaves kiosk mode. The platform call is fire-and-forget, so this
    /// always succeeds locally.
    pub fn disable(&mut self) -> bool {
        self.backend.stop_lock_task();
        true
    }

    /// Hides the platform's user interface chrome. One-way and idempotent,
    /// applied independently of the lock state.
    pub fn hide_user_interface(&mut self) {
        self.backend.hide_user_interface();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeKiosk {
        permitted: bool,
        locked: bool,
        ui_hidden: bool,
    }

    impl KioskBackend for FakeKiosk {
        fn is_lock_task_permitted(&self) -> bool {
            self.permitted
        }

        fn start_lock_task(&mut self) {
            self.locked = true;
        }

        fn stop_lock_task(&mut self) {
            self.locked = false;
        }

        fn hide_user_interface(&mut self) {
            self.ui_hidden = true;
        }
    }

    #[test]
    fn enable_when_permitted() {
        let mut controller = KioskController::new(FakeKiosk {
            permitted: true,
            ..FakeKiosk::default()
        });
        assert!(controller.enable());
        assert!(controller.backend.locked);
    }

    #[test]
    fn enable_refused_by_policy() {
        let mut controller = KioskController::new(FakeKiosk::default());
        assert!(!controller.enable());
        assert!(!controller.backend.locked);
    }

    #[test]
    fn disable_always_succeeds() {
        let mut controller = KioskController::new(FakeKiosk::default());
        assert!(controller.disable());
        assert!(controller.disable());
    }

    #[test]
    fn hide_user_interface_is_idempotent() {
        let mut controller = KioskController::new(FakeKiosk::default());
        controller.hide_user_interface();
        controller.hide_user_interface();
        assert!(controller.backend.ui_hidden);
    }
}
