// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Target platform profile
///
/// Zoom granularity and the hardware zoom ceiling differ per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Fine-grained pinch response
    Ios,
    /// Coarse pinch response (default)
    #[default]
    Android,
}

impl Platform {
    /// Get all platforms for UI iteration
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Get display name for the platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }

    /// Zoom profile for this platform
    pub fn zoom_profile(&self) -> ZoomProfile {
        match self {
            Platform::Ios => ZoomProfile {
                step: zoom::IOS_STEP,
                threshold: zoom::IOS_STEP,
                max_zoom: Some(zoom::IOS_MAX_ZOOM),
            },
            Platform::Android => ZoomProfile {
                step: zoom::ANDROID_STEP,
                threshold: zoom::ANDROID_STEP,
                max_zoom: None,
            },
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Pinch-to-zoom tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomProfile {
    /// Amount added to or removed from the zoom level per applied step
    pub step: f32,
    /// Minimum pinch delta since the last applied step before a new step applies
    pub threshold: f32,
    /// Hardware zoom multiplier reached at zoom level 1.0 (if the platform exposes one)
    pub max_zoom: Option<f32>,
}

/// Zoom constants
pub mod zoom {
    /// iOS step and threshold
    pub const IOS_STEP: f32 = 0.01;

    /// Android step and threshold
    pub const ANDROID_STEP: f32 = 0.1;

    /// iOS hardware zoom at level 1.0
    pub const IOS_MAX_ZOOM: f32 = 8.0;

    /// Pinch reference value at gesture start
    pub const PINCH_REFERENCE: f32 = 1.0;
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Camera stays not-ready this long after a lens change
    pub const SETTLE_DELAY: Duration = Duration::from_millis(550);

    /// Recovery pause after a recording ends before new captures are allowed
    pub const COOLDOWN_DELAY: Duration = Duration::from_millis(500);

    /// Focus indicator lifetime after touch release
    pub const FOCUS_INDICATOR_EXPIRY: Duration = Duration::from_millis(1500);

    /// Orientation notifications settle this long before layout is recomputed
    pub const ORIENTATION_DEBOUNCE: Duration = Duration::from_millis(50);

    /// Elapsed counter interval during recording
    pub const ELAPSED_TICK: Duration = Duration::from_secs(1);
}

/// UI Constants
pub mod ui {
    /// Tap-to-focus indicator edge length in screen points
    pub const TOUCH_INDICATOR_SIZE: f32 = 100.0;

    /// Footer height in portrait layout
    pub const FOOTER_HEIGHT: f32 = 55.0;

    /// Footer width in landscape layout
    pub const FOOTER_WIDTH: f32 = 80.0;
}

/// Capture presets
pub mod capture {
    /// JPEG quality for still capture
    pub const PHOTO_QUALITY: f32 = 0.85;

    /// Video quality preset name
    pub const VIDEO_QUALITY: &str = "480p";

    /// Maximum recording length in seconds
    pub const MAX_DURATION_SECS: u32 = 60;

    /// Maximum recording size in bytes (100 MiB)
    pub const MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;
}

/// Hardware lens descriptors
pub mod lens {
    /// Telephoto lens descriptor
    pub const TELEPHOTO: &str = "AVCaptureDeviceTypeBuiltInTelephotoCamera";

    /// Ultra-wide lens descriptor
    pub const ULTRA_WIDE: &str = "AVCaptureDeviceTypeBuiltInUltraWideCamera";

    /// Standard wide-angle lens descriptor
    pub const WIDE_ANGLE: &str = "AVCaptureDeviceTypeBuiltInWideAngleCamera";
}
