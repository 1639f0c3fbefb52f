// SPDX-License-Identifier: GPL-3.0-only

//! Parameter button handlers

use crate::app::CameraController;
use tracing::debug;

impl CameraController {
    pub(crate) fn handle_cycle_flash(&mut self) {
        if !self.session.controls_visible() {
            debug!("Ignoring flash cycle: controls hidden");
            return;
        }
        self.session.flash = self.session.flash.next();
        debug!(flash = ?self.session.flash, "Flash mode changed");
        self.hardware.set_flash_mode(self.session.flash);
    }

    pub(crate) fn handle_cycle_white_balance(&mut self) {
        if !self.session.controls_visible() {
            debug!("Ignoring white balance cycle: controls hidden");
            return;
        }
        self.session.white_balance = self.session.white_balance.next();
        debug!(
            white_balance = self.session.white_balance.label(),
            "White balance changed"
        );
        self.hardware.set_white_balance(self.session.white_balance);
    }

    pub(crate) fn handle_cycle_aspect_ratio(&mut self) {
        if !self.session.controls_visible() {
            debug!("Ignoring aspect ratio cycle: controls hidden");
            return;
        }
        self.session.aspect_ratio = self.session.aspect_ratio.next();
        debug!(ratio = %self.session.aspect_ratio, "Aspect ratio changed");
        self.hardware.set_aspect_ratio(self.session.aspect_ratio);
        self.recompute_viewport();
    }

    pub(crate) fn handle_reset_zoom(&mut self) {
        if !self.session.controls_visible() {
            debug!("Ignoring zoom reset: controls hidden");
            return;
        }
        self.session.zoom.reset();
        self.hardware.set_zoom(self.session.zoom.level());
    }
}
