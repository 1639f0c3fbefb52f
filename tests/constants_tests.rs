// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use camera_control::constants::{Platform, capture, timing, zoom};
use std::time::Duration;

#[test]
fn test_platform_values() {
    // Test that both platform profiles exist
    assert_eq!(Platform::ALL.len(), 2);
    assert_eq!(Platform::default(), Platform::Android);
}

#[test]
fn test_ios_is_finer_than_android() {
    let ios = Platform::Ios.zoom_profile();
    let android = Platform::Android.zoom_profile();
    assert!(
        ios.step < android.step,
        "iOS pinch response should be finer grained"
    );
    assert!(ios.threshold < android.threshold);
}

#[test]
fn test_zoom_profiles_stay_in_unit_range() {
    for platform in Platform::ALL {
        let profile = platform.zoom_profile();
        assert!(profile.step > 0.0 && profile.step <= 1.0);
        assert!(profile.threshold > 0.0 && profile.threshold <= 1.0);
    }
    assert_eq!(zoom::PINCH_REFERENCE, 1.0);
}

#[test]
fn test_platform_display_names() {
    // Test that all platforms have non-empty display names
    for platform in Platform::ALL {
        assert!(!platform.display_name().is_empty());
    }
}

#[test]
fn test_timing_values() {
    assert_eq!(timing::SETTLE_DELAY, Duration::from_millis(550));
    assert_eq!(timing::COOLDOWN_DELAY, Duration::from_millis(500));
    assert_eq!(timing::FOCUS_INDICATOR_EXPIRY, Duration::from_millis(1500));
    assert_eq!(timing::ELAPSED_TICK, Duration::from_secs(1));
    assert!(timing::ORIENTATION_DEBOUNCE < timing::SETTLE_DELAY);
}

#[test]
fn test_capture_presets() {
    assert_eq!(capture::VIDEO_QUALITY, "480p");
    assert_eq!(capture::MAX_DURATION_SECS, 60);
    assert_eq!(capture::MAX_FILE_SIZE_BYTES, 100 * 1024 * 1024);
    assert!(capture::PHOTO_QUALITY > 0.0 && capture::PHOTO_QUALITY <= 1.0);
}
