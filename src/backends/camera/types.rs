// SPDX-License-Identifier: GPL-3.0-only
// Shared types for camera hardware abstraction

//! Shared types for camera backends

use crate::constants::{capture, lens};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Which side of the device a lens points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Rear camera
    #[default]
    Back,
    /// Selfie camera
    Front,
}

impl Facing {
    /// The opposite facing
    pub fn toggled(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

/// Lens classification derived from the raw hardware descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensKind {
    /// Standard lens
    #[default]
    Normal,
    /// Ultra-wide lens
    Wide,
    /// Telephoto lens
    Zoomed,
}

impl LensKind {
    /// Classify a raw hardware device type
    pub fn from_device_type(device_type: &str) -> Self {
        match device_type {
            lens::TELEPHOTO => LensKind::Zoomed,
            lens::ULTRA_WIDE => LensKind::Wide,
            _ => LensKind::Normal,
        }
    }
}

impl std::fmt::Display for LensKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LensKind::Normal => write!(f, "normal"),
            LensKind::Wide => write!(f, "wide"),
            LensKind::Zoomed => write!(f, "zoomed"),
        }
    }
}

/// Device record as reported by the hardware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCameraDevice {
    pub id: String,
    pub facing: Facing,
    /// Platform lens descriptor (e.g., `AVCaptureDeviceTypeBuiltInTelephotoCamera`)
    pub device_type: String,
}

impl RawCameraDevice {
    pub fn new(id: impl Into<String>, facing: Facing, device_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            facing,
            device_type: device_type.into(),
        }
    }
}

/// Represents an enumerated camera device
///
/// Immutable once enumerated; replaced wholesale on the next enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraDevice {
    pub id: String,
    pub facing: Facing,
    pub lens_kind: LensKind,
}

impl From<RawCameraDevice> for CameraDevice {
    fn from(raw: RawCameraDevice) -> Self {
        let lens_kind = LensKind::from_device_type(&raw.device_type);
        Self {
            id: raw.id,
            facing: raw.facing,
            lens_kind,
        }
    }
}

/// Options passed to the hardware still capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoOptions {
    /// JPEG quality (0.0-1.0)
    pub quality: f32,
    /// Rotate pixels to match device orientation
    pub fix_orientation: bool,
    /// Force the upright orientation regardless of sensor metadata
    pub force_up_orientation: bool,
    /// Embed EXIF metadata
    pub write_exif: bool,
}

impl Default for PhotoOptions {
    fn default() -> Self {
        Self {
            quality: capture::PHOTO_QUALITY,
            fix_orientation: true,
            force_up_orientation: true,
            write_exif: true,
        }
    }
}

/// Options passed to the hardware video recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOptions {
    pub quality: String,
    pub max_duration_secs: u32,
    pub max_file_size_bytes: u64,
    /// Record without audio
    #[serde(default)]
    pub mute: bool,
}

impl RecordOptions {
    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_duration_secs))
    }
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            quality: capture::VIDEO_QUALITY.to_string(),
            max_duration_secs: capture::MAX_DURATION_SECS,
            max_file_size_bytes: capture::MAX_FILE_SIZE_BYTES,
            mute: false,
        }
    }
}

/// Result of a successful still capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoResult {
    pub uri: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Result of a finished video recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub uri: String,
    /// Whether the recording ended because of an explicit stop request
    #[serde(default)]
    pub stopped_early: bool,
}

/// Inbound hardware notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareEvent {
    /// Camera is open and operational
    Ready {
        /// Audio recording permission was refused
        audio_permission_denied: bool,
    },
    /// Camera is closed, pending authorization, or reconfiguring
    NotReady,
    /// Audio input was taken by another client
    AudioInterrupted,
    /// Audio input became available again
    AudioConnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_kind_from_device_type() {
        assert_eq!(
            LensKind::from_device_type("AVCaptureDeviceTypeBuiltInTelephotoCamera"),
            LensKind::Zoomed
        );
        assert_eq!(
            LensKind::from_device_type("AVCaptureDeviceTypeBuiltInUltraWideCamera"),
            LensKind::Wide
        );
        assert_eq!(
            LensKind::from_device_type("AVCaptureDeviceTypeBuiltInWideAngleCamera"),
            LensKind::Normal
        );
        assert_eq!(LensKind::from_device_type(""), LensKind::Normal);
    }

    #[test]
    fn test_device_from_raw() {
        let raw = RawCameraDevice::new("2", Facing::Back, lens::TELEPHOTO);
        let device = CameraDevice::from(raw);
        assert_eq!(device.id, "2");
        assert_eq!(device.facing, Facing::Back);
        assert_eq!(device.lens_kind, LensKind::Zoomed);
    }

    #[test]
    fn test_default_capture_options() {
        let photo = PhotoOptions::default();
        assert_eq!(photo.quality, 0.85);
        assert!(photo.fix_orientation && photo.force_up_orientation && photo.write_exif);

        let video = RecordOptions::default();
        assert_eq!(video.quality, "480p");
        assert_eq!(video.max_duration(), Duration::from_secs(60));
        assert_eq!(video.max_file_size_bytes, 104_857_600);
    }
}
