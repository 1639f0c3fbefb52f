// SPDX-License-Identifier: GPL-3.0-only

//! Pinch-to-zoom
//!
//! The pinch gesture reports a continuous magnitude. Zoom moves by one fixed
//! step each time the magnitude has moved more than the threshold away from
//! the magnitude at which the previous step was applied.

use crate::constants::{ZoomProfile, zoom};

#[derive(Debug, Clone)]
pub struct GestureZoomController {
    profile: ZoomProfile,
    level: f32,
    reference: f32,
}

impl GestureZoomController {
    pub fn new(profile: ZoomProfile) -> Self {
        Self {
            profile,
            level: 0.0,
            reference: zoom::PINCH_REFERENCE,
        }
    }

    /// Current zoom level in [0, 1]
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Pinch magnitude of the last applied step
    pub fn reference(&self) -> f32 {
        self.reference
    }

    pub fn profile(&self) -> &ZoomProfile {
        &self.profile
    }

    /// Zoom as a whole percentage for display
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    /// Feed a pinch sample; returns the new level when a step was applied
    pub fn on_pinch_progress(&mut self, progress: f32) -> Option<f32> {
        let delta = progress - self.reference;
        let next = if delta > self.profile.threshold {
            (self.level + self.profile.step).min(1.0)
        } else if delta < -self.profile.threshold {
            (self.level - self.profile.step).max(0.0)
        } else {
            return None;
        };
        self.reference = progress;
        self.level = next;
        Some(next)
    }

    pub fn on_pinch_start(&mut self) {
        self.reference = zoom::PINCH_REFERENCE;
    }

    pub fn on_pinch_end(&mut self) {
        self.reference = zoom::PINCH_REFERENCE;
    }

    /// Zoom back to 0 and forget the pinch reference
    pub fn reset(&mut self) {
        self.level = 0.0;
        self.reference = zoom::PINCH_REFERENCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Platform;

    fn android() -> GestureZoomController {
        GestureZoomController::new(Platform::Android.zoom_profile())
    }

    #[test]
    fn test_samples_inside_threshold_are_ignored() {
        let mut zoom = android();
        assert_eq!(zoom.on_pinch_progress(1.05), None);
        assert_eq!(zoom.on_pinch_progress(0.95), None);
        assert_eq!(zoom.level(), 0.0);
        assert_eq!(zoom.reference(), 1.0);
    }

    #[test]
    fn test_step_applies_and_moves_reference() {
        let mut zoom = android();
        let level = zoom.on_pinch_progress(1.2).unwrap();
        assert!((level - 0.1).abs() < 1e-6);
        assert_eq!(zoom.reference(), 1.2);
        // Small movement from the new reference is ignored
        assert_eq!(zoom.on_pinch_progress(1.25), None);
        assert!(zoom.on_pinch_progress(1.35).is_some());
        assert!((zoom.level() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_stays_in_unit_range() {
        let mut zoom = android();
        let mut p = 1.0;
        for _ in 0..40 {
            p += 0.2;
            zoom.on_pinch_progress(p);
            assert!(zoom.level() <= 1.0);
        }
        assert_eq!(zoom.level(), 1.0);
        for _ in 0..80 {
            p -= 0.2;
            zoom.on_pinch_progress(p);
            assert!(zoom.level() >= 0.0);
        }
        assert_eq!(zoom.level(), 0.0);
    }

    #[test]
    fn test_pinch_start_and_end_reset_reference() {
        let mut zoom = android();
        zoom.on_pinch_progress(1.5);
        zoom.on_pinch_end();
        assert_eq!(zoom.reference(), 1.0);
        zoom.on_pinch_progress(2.0);
        zoom.on_pinch_start();
        assert_eq!(zoom.reference(), 1.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut zoom = android();
        zoom.on_pinch_progress(1.5);
        zoom.reset();
        zoom.reset();
        assert_eq!(zoom.level(), 0.0);
        assert_eq!(zoom.reference(), 1.0);
    }

    #[test]
    fn test_ios_profile_is_finer() {
        let mut zoom = GestureZoomController::new(Platform::Ios.zoom_profile());
        let level = zoom.on_pinch_progress(1.02).unwrap();
        assert!((level - 0.01).abs() < 1e-6);
        assert_eq!(zoom.percent(), 1);
    }
}
