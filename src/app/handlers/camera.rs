// SPDX-License-Identifier: GPL-3.0-only

//! Camera control handlers
//!
//! Handles hardware readiness, audio availability, lens enumeration and
//! lens selection.

use crate::app::CameraController;
use crate::app::camera_selector::ActiveCamera;
use crate::app::state::Message;
use crate::app::timers::TimerToken;
use crate::backends::camera::{HardwareEvent, RawCameraDevice};
use crate::errors::EnumerationError;
use tracing::{debug, info, warn};

impl CameraController {
    // =========================================================================
    // Hardware Events
    // =========================================================================

    pub(crate) fn handle_hardware_event(&mut self, event: HardwareEvent) {
        match event {
            HardwareEvent::Ready {
                audio_permission_denied,
            } => {
                info!(audio_permission_denied, "Camera ready");
                self.session.hardware_ready = true;
                self.session.audio_disabled = audio_permission_denied;
                self.enumerate_devices();
            }
            HardwareEvent::NotReady => {
                if self.session.hardware_ready {
                    info!("Camera no longer ready");
                }
                self.session.hardware_ready = false;
            }
            HardwareEvent::AudioInterrupted => {
                info!("Audio interrupted, recordings will be muted");
                self.session.audio_disabled = true;
            }
            HardwareEvent::AudioConnected => {
                info!("Audio connected");
                self.session.audio_disabled = false;
            }
        }
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    fn enumerate_devices(&mut self) {
        if self.session.enumerating {
            debug!("Enumeration already in flight");
            return;
        }
        self.session.enumerating = true;
        let future = self.hardware.enumerate_devices();
        self.perform(future, Message::DevicesEnumerated);
    }

    pub(crate) fn handle_devices_enumerated(
        &mut self,
        result: Result<Vec<RawCameraDevice>, EnumerationError>,
    ) {
        self.session.enumerating = false;

        let devices = result.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to get camera ids");
            Vec::new()
        });

        let changed = self.session.selector.apply_enumeration(devices);
        info!(
            count = self.session.selector.devices().map_or(0, <[_]>::len),
            selected = ?self.session.selector.selected_id(),
            "Cameras enumerated"
        );

        if let Some(ActiveCamera::Device(id)) = changed {
            debug!(id = %id, "Activating enumerated camera");
            self.hardware.set_active_device(&id);
        }
    }

    // =========================================================================
    // Lens Selection
    // =========================================================================

    pub(crate) fn handle_loop_camera(&mut self) {
        if !self.session.controls_visible() {
            debug!("Ignoring camera loop: controls hidden");
            return;
        }
        if self.session.selector.controls().is_hidden() {
            debug!("Ignoring camera loop: nothing to switch to");
            return;
        }
        if let Some(target) = self.session.selector.loop_next() {
            self.apply_camera_change(target);
        }
    }

    pub(crate) fn handle_select_camera(&mut self, id: String) {
        if !self.session.controls_visible() {
            debug!(id = %id, "Ignoring camera selection: controls hidden");
            return;
        }
        match self.session.selector.select(&id) {
            Ok(Some(target)) => self.apply_camera_change(target),
            Ok(None) => debug!(id = %id, "Camera already selected"),
            Err(err) => {
                warn!(error = %err, "Camera selection failed, toggling facing");
                let target = self.session.selector.toggle_facing();
                self.apply_camera_change(target);
            }
        }
    }

    /// Reset parameters, reconfigure the hardware and hold capture for the settle delay
    fn apply_camera_change(&mut self, target: ActiveCamera) {
        info!(?target, "Switching camera");

        self.timers.focus_indicator.cancel();
        self.session.reset_camera_parameters();

        self.hardware.set_zoom(self.session.zoom.level());
        self.hardware.set_flash_mode(self.session.flash);
        self.hardware.set_white_balance(self.session.white_balance);
        self.hardware.set_focus_point(None);

        match &target {
            ActiveCamera::Device(id) => self.hardware.set_active_device(id),
            ActiveCamera::Facing(facing) => self.hardware.set_facing(*facing),
        }

        self.session.settling = true;
        self.timers.settle.schedule(
            self.config.timing.settle(),
            &self.sender,
            Message::SettleElapsed,
        );
    }

    pub(crate) fn handle_settle_elapsed(&mut self, token: TimerToken) {
        if !self.timers.settle.fire(token) {
            return;
        }
        debug!("Camera settled");
        self.session.settling = false;
    }
}
