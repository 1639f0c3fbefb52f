// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! Photo capture and video recording. Photo and recording are mutually
//! exclusive; the transition out of idle happens synchronously here, before
//! any hardware future is spawned, so two starts can never both pass the
//! idle check.

use crate::app::CameraController;
use crate::app::state::{CaptureOutcome, CaptureState, Message, RecordingPhase};
use crate::app::timers::TimerToken;
use crate::backends::camera::{PhotoResult, RecordOptions, VideoResult};
use crate::errors::{CaptureError, RecordError};
use tracing::{debug, error, info, warn};

impl CameraController {
    // =========================================================================
    // Photo Capture
    // =========================================================================

    pub(crate) fn handle_take_photo(&mut self) {
        if !self.session.capture.is_idle() {
            debug!(mode = ?self.session.capture.mode(), "Ignoring photo request: busy");
            return;
        }
        if !self.session.is_ready() {
            debug!("Ignoring photo request: camera not ready");
            return;
        }

        info!("Capturing photo");
        self.session.capture = CaptureState::TakingPhoto;
        let future = self.hardware.capture_photo(self.config.photo);
        self.perform(future, Message::PhotoCaptured);
    }

    pub(crate) fn handle_photo_captured(&mut self, result: Result<PhotoResult, CaptureError>) {
        if self.session.capture != CaptureState::TakingPhoto {
            warn!("Photo result arrived outside a capture");
            return;
        }
        self.session.capture = CaptureState::Idle;

        match result {
            Ok(photo) => {
                info!(
                    uri = %photo.uri,
                    width = photo.width,
                    height = photo.height,
                    "Picture taken"
                );
                self.emit(CaptureOutcome::PhotoTaken { photo });
            }
            Err(err) => {
                error!(error = %err, "Failed to take picture");
                self.emit(CaptureOutcome::PhotoFailed {
                    message: format!("Failed to take picture: {}", err),
                });
            }
        }
    }

    // =========================================================================
    // Video Recording
    // =========================================================================

    pub(crate) fn handle_toggle_recording(&mut self) {
        if self.session.capture.is_recording() {
            self.handle_stop_recording();
        } else {
            self.handle_start_recording();
        }
    }

    pub(crate) fn handle_start_recording(&mut self) {
        if !self.session.capture.is_idle() {
            debug!(mode = ?self.session.capture.mode(), "Ignoring record request: busy");
            return;
        }
        if !self.session.is_ready() {
            debug!("Ignoring record request: camera not ready");
            return;
        }

        let options = RecordOptions {
            mute: self.session.audio_disabled,
            ..self.config.video.clone()
        };
        info!(
            quality = %options.quality,
            max_duration_secs = options.max_duration_secs,
            mute = options.mute,
            "Starting recording"
        );

        self.session.capture = CaptureState::recording();
        self.timers.elapsed.schedule_periodic(
            self.config.timing.elapsed_tick(),
            &self.sender,
            Message::ElapsedTick,
        );
        let future = self.hardware.record_video(options);
        self.perform(future, Message::RecordingFinished);
    }

    pub(crate) fn handle_stop_recording(&mut self) {
        match &mut self.session.capture {
            CaptureState::Recording {
                phase: RecordingPhase::Active,
                stop_requested,
                ..
            } => {
                if *stop_requested {
                    debug!("Stop already requested");
                    return;
                }
                *stop_requested = true;
                info!("Sending stop signal to recorder");
                self.hardware.stop_recording();
            }
            _ => debug!("Ignoring stop request: not recording"),
        }
    }

    /// Stop an active recording regardless of how it was started
    pub(crate) fn force_stop_recording(&mut self) {
        if self.session.capture.is_recording() {
            info!("Force-stopping recording");
            self.handle_stop_recording();
        }
    }

    pub(crate) fn handle_elapsed_tick(&mut self, token: TimerToken) {
        if !self.timers.elapsed.tick(token) {
            return;
        }
        if let CaptureState::Recording {
            phase: RecordingPhase::Active,
            elapsed_secs,
            ..
        } = &mut self.session.capture
        {
            *elapsed_secs += 1;
        }
    }

    pub(crate) fn handle_recording_finished(&mut self, result: Result<VideoResult, RecordError>) {
        if !self.session.capture.is_recording() {
            warn!("Recording result arrived outside a recording");
            return;
        }

        self.timers.elapsed.cancel();
        if let CaptureState::Recording { phase, .. } = &mut self.session.capture {
            *phase = RecordingPhase::CoolingDown;
        }

        match result {
            Ok(video) => {
                info!(uri = %video.uri, stopped_early = video.stopped_early, "Video recorded");
                self.emit(CaptureOutcome::VideoRecorded { video });
            }
            Err(err) => {
                error!(error = %err, "Video recording failed");
                self.emit(CaptureOutcome::RecordingFailed {
                    message: err.to_string(),
                });
            }
        }

        self.timers.cooldown.schedule(
            self.config.timing.cooldown(),
            &self.sender,
            Message::CooldownElapsed,
        );
    }

    pub(crate) fn handle_cooldown_elapsed(&mut self, token: TimerToken) {
        if !self.timers.cooldown.fire(token) {
            return;
        }
        if self.session.capture.recording_phase() == Some(RecordingPhase::CoolingDown) {
            debug!("Recording cooldown finished");
            self.session.capture = CaptureState::Idle;
        }
    }
}
