// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The `update()` function is a dispatcher. Handlers live in the `handlers`
//! submodules, grouped by functional domain:
//!
//! - `handlers::camera`: hardware readiness, enumeration, lens selection
//! - `handlers::capture`: photo capture, video recording
//! - `handlers::controls`: flash, white balance, aspect ratio, zoom reset
//! - `handlers::gesture`: pinch-to-zoom, tap-to-focus
//! - `handlers::system`: orientation, app lifecycle, screen focus

use super::CameraController;
use super::state::Message;
use tracing::trace;

impl CameraController {
    /// Apply one message and publish the resulting snapshot
    pub(crate) fn update(&mut self, message: Message) {
        if !self.is_active() {
            trace!(?message, "Controller inactive, dropping message");
            return;
        }

        match message {
            // ===== Capture =====
            Message::TakePhoto => self.handle_take_photo(),
            Message::StartRecording => self.handle_start_recording(),
            Message::StopRecording => self.handle_stop_recording(),
            Message::ToggleRecording => self.handle_toggle_recording(),
            Message::PhotoCaptured(result) => self.handle_photo_captured(result),
            Message::RecordingFinished(result) => self.handle_recording_finished(result),
            Message::ElapsedTick(token) => self.handle_elapsed_tick(token),
            Message::CooldownElapsed(token) => self.handle_cooldown_elapsed(token),

            // ===== Parameters =====
            Message::CycleFlash => self.handle_cycle_flash(),
            Message::CycleWhiteBalance => self.handle_cycle_white_balance(),
            Message::CycleAspectRatio => self.handle_cycle_aspect_ratio(),
            Message::ResetZoom => self.handle_reset_zoom(),

            // ===== Gestures =====
            Message::PinchStart => self.handle_pinch_start(),
            Message::PinchProgress(progress) => self.handle_pinch_progress(progress),
            Message::PinchEnd => self.handle_pinch_end(),
            Message::TouchDown { page_x, page_y } => self.handle_touch_down(page_x, page_y),
            Message::TouchUp => self.handle_touch_up(),
            Message::FocusIndicatorExpired(token) => self.handle_focus_indicator_expired(token),

            // ===== Camera selection =====
            Message::Hardware(event) => self.handle_hardware_event(event),
            Message::DevicesEnumerated(result) => self.handle_devices_enumerated(result),
            Message::LoopCamera => self.handle_loop_camera(),
            Message::SelectCamera(id) => self.handle_select_camera(id),
            Message::SettleElapsed(token) => self.handle_settle_elapsed(token),

            // ===== System =====
            Message::Environment(event) => self.handle_environment_event(event),
            Message::OrientationSettled(token) => self.handle_orientation_settled(token),
        }

        self.publish();
    }
}
