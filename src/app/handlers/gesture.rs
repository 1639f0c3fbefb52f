// SPDX-License-Identifier: GPL-3.0-only

//! Gesture handlers: pinch-to-zoom and tap-to-focus

use crate::app::CameraController;
use crate::app::focus::map_tap;
use crate::app::state::{CaptureMode, Message};
use crate::app::timers::TimerToken;
use tracing::{debug, trace};

impl CameraController {
    // =========================================================================
    // Pinch
    // =========================================================================

    pub(crate) fn handle_pinch_start(&mut self) {
        self.session.zoom.on_pinch_start();
    }

    pub(crate) fn handle_pinch_progress(&mut self, progress: f32) {
        if let Some(level) = self.session.zoom.on_pinch_progress(progress) {
            trace!(level, "Zoom step applied");
            self.hardware.set_zoom(level);
        }
    }

    pub(crate) fn handle_pinch_end(&mut self) {
        self.session.zoom.on_pinch_end();
    }

    // =========================================================================
    // Tap to Focus
    // =========================================================================

    pub(crate) fn handle_touch_down(&mut self, page_x: f32, page_y: f32) {
        if self.session.capture.mode() == CaptureMode::TakingPhoto {
            debug!("Ignoring tap: photo in flight");
            return;
        }
        let Some(viewport) = self.session.viewport else {
            debug!("Ignoring tap: no viewport yet");
            return;
        };

        let Some(target) = map_tap(
            page_x,
            page_y,
            &viewport,
            self.session.orientation.is_portrait,
            self.config.indicator_size,
        ) else {
            debug!(page_x, page_y, "Ignoring tap outside the viewport");
            return;
        };
        debug!(x = target.point.x, y = target.point.y, "Focus point set");

        self.session.focus_point = Some(target.point);
        self.session.touch_indicator = Some(target.indicator);
        self.timers.focus_indicator.cancel();
        self.hardware.set_focus_point(Some(target.point));
    }

    pub(crate) fn handle_touch_up(&mut self) {
        if self.session.touch_indicator.is_none() {
            return;
        }
        self.timers.focus_indicator.schedule(
            self.config.timing.focus_indicator(),
            &self.sender,
            Message::FocusIndicatorExpired,
        );
    }

    pub(crate) fn handle_focus_indicator_expired(&mut self, token: TimerToken) {
        if !self.timers.focus_indicator.fire(token) {
            return;
        }
        trace!("Focus indicator expired");
        self.session.touch_indicator = None;
        self.session.focus_point = None;
    }
}
