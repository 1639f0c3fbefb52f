// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Orientation changes, app lifecycle and screen focus.

use crate::app::CameraController;
use crate::app::layout::try_compute_viewport;
use crate::app::state::{EnvironmentEvent, Message};
use crate::app::timers::TimerToken;
use tracing::{debug, info};

impl CameraController {
    pub(crate) fn handle_environment_event(&mut self, event: EnvironmentEvent) {
        match event {
            EnvironmentEvent::OrientationChanged(orientation) => {
                self.session.pending_orientation = Some(orientation);
                self.timers.orientation.schedule(
                    self.config.timing.orientation_debounce(),
                    &self.sender,
                    Message::OrientationSettled,
                );
            }
            EnvironmentEvent::AppStateChanged(state) => {
                debug!(?state, "App state changed");
                self.session.app_state = state;
            }
            EnvironmentEvent::ScreenFocused => {
                debug!("Camera screen focused");
                self.session.screen_focused = true;
            }
            EnvironmentEvent::ScreenBlurred => {
                info!("Camera screen blurred");
                self.session.screen_focused = false;
                self.force_stop_recording();
            }
        }
    }

    pub(crate) fn handle_orientation_settled(&mut self, token: TimerToken) {
        if !self.timers.orientation.fire(token) {
            return;
        }
        if let Some(orientation) = self.session.pending_orientation.take() {
            debug!(
                portrait = orientation.is_portrait,
                width = orientation.width,
                height = orientation.height,
                "Orientation applied"
            );
            self.session.orientation = orientation;
            self.recompute_viewport();
        }
    }

    /// Refresh the cached viewport from orientation, footer and aspect ratio
    pub(crate) fn recompute_viewport(&mut self) {
        self.session.viewport = try_compute_viewport(
            &self.session.orientation,
            &self.config.footer,
            self.session.aspect_ratio.ratio(),
        );
    }
}
