// SPDX-License-Identifier: GPL-3.0-only

//! Application state types

use super::camera_selector::{CameraDeviceSelector, SelectorControls};
use super::focus::{FocusPoint, TouchIndicator};
use super::layout::{OrientationInfo, ViewportRect};
use super::parameters::{AspectRatio, FlashMode, WhiteBalance};
use super::timers::TimerToken;
use super::zoom::GestureZoomController;
use crate::backends::camera::{
    CameraDevice, Facing, HardwareEvent, PhotoResult, RawCameraDevice, VideoResult,
};
use crate::constants::ZoomProfile;
use crate::errors::{CaptureError, EnumerationError, RecordError};
use serde::{Deserialize, Serialize};

/// What the camera is busy with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    #[default]
    Idle,
    TakingPhoto,
    Recording,
}

/// Sub-phase of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingPhase {
    /// Hardware is recording
    Active,
    /// Hardware finished; waiting out the cooldown before returning to idle
    CoolingDown,
}

/// Capture state machine
///
/// Exactly one variant holds at any time, which makes photo and recording
/// mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    TakingPhoto,
    Recording {
        phase: RecordingPhase,
        /// Seconds counted by the elapsed ticker
        elapsed_secs: u32,
        /// Stop has already been forwarded to the hardware
        stop_requested: bool,
    },
}

impl CaptureState {
    /// Fresh recording state
    pub fn recording() -> Self {
        CaptureState::Recording {
            phase: RecordingPhase::Active,
            elapsed_secs: 0,
            stop_requested: false,
        }
    }

    pub fn mode(&self) -> CaptureMode {
        match self {
            CaptureState::Idle => CaptureMode::Idle,
            CaptureState::TakingPhoto => CaptureMode::TakingPhoto,
            CaptureState::Recording { .. } => CaptureMode::Recording,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CaptureState::Idle)
    }

    /// Check if the hardware is currently recording
    pub fn is_recording(&self) -> bool {
        matches!(
            self,
            CaptureState::Recording {
                phase: RecordingPhase::Active,
                ..
            }
        )
    }

    pub fn recording_phase(&self) -> Option<RecordingPhase> {
        match self {
            CaptureState::Recording { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        match self {
            CaptureState::Recording { elapsed_secs, .. } => *elapsed_secs,
            _ => 0,
        }
    }
}

/// App lifecycle state reported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    #[default]
    Active,
    Inactive,
    Background,
}

/// Notifications from the surrounding platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnvironmentEvent {
    OrientationChanged(OrientationInfo),
    AppStateChanged(AppState),
    /// Camera screen became the visible screen
    ScreenFocused,
    /// Camera screen lost focus (navigation away)
    ScreenBlurred,
}

/// Result of a capture surfaced to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureOutcome {
    PhotoTaken { photo: PhotoResult },
    PhotoFailed { message: String },
    VideoRecorded { video: VideoResult },
    RecordingFailed { message: String },
}

/// Messages applied by the controller, one at a time
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Capture intents =====
    TakePhoto,
    StartRecording,
    StopRecording,
    /// Start when idle, stop when recording
    ToggleRecording,

    // ===== Parameter intents =====
    CycleFlash,
    CycleWhiteBalance,
    CycleAspectRatio,
    ResetZoom,

    // ===== Gestures =====
    PinchStart,
    PinchProgress(f32),
    PinchEnd,
    /// Touch down on the preview, screen coordinates
    TouchDown { page_x: f32, page_y: f32 },
    TouchUp,

    // ===== Camera selection =====
    /// Loop to the next camera (or flip facing without ids)
    LoopCamera,
    SelectCamera(String),

    // ===== Inbound events =====
    Hardware(HardwareEvent),
    Environment(EnvironmentEvent),

    // ===== Async completions =====
    DevicesEnumerated(Result<Vec<RawCameraDevice>, EnumerationError>),
    PhotoCaptured(Result<PhotoResult, CaptureError>),
    RecordingFinished(Result<VideoResult, RecordError>),

    // ===== Timer firings =====
    SettleElapsed(TimerToken),
    CooldownElapsed(TimerToken),
    FocusIndicatorExpired(TimerToken),
    OrientationSettled(TimerToken),
    ElapsedTick(TimerToken),
}

/// Aggregate root owned by the controller
#[derive(Debug, Clone)]
pub struct Session {
    pub capture: CaptureState,
    /// Hardware reports the camera open and operational
    pub hardware_ready: bool,
    /// A lens change is settling; capture is blocked
    pub settling: bool,
    /// Recording runs without audio
    pub audio_disabled: bool,
    pub zoom: GestureZoomController,
    pub flash: FlashMode,
    pub white_balance: WhiteBalance,
    pub aspect_ratio: AspectRatio,
    pub selector: CameraDeviceSelector,
    /// An enumeration request is in flight
    pub enumerating: bool,
    pub orientation: OrientationInfo,
    /// Latest orientation waiting out the debounce
    pub pending_orientation: Option<OrientationInfo>,
    /// Cached tap-to-focus reference frame
    pub viewport: Option<ViewportRect>,
    pub focus_point: Option<FocusPoint>,
    pub touch_indicator: Option<TouchIndicator>,
    pub app_state: AppState,
    pub screen_focused: bool,
}

impl Session {
    pub fn new(zoom: ZoomProfile, aspect_ratio: AspectRatio) -> Self {
        Self {
            capture: CaptureState::Idle,
            hardware_ready: false,
            settling: false,
            audio_disabled: false,
            zoom: GestureZoomController::new(zoom),
            flash: FlashMode::default(),
            white_balance: WhiteBalance::default(),
            aspect_ratio,
            selector: CameraDeviceSelector::new(),
            enumerating: false,
            orientation: OrientationInfo::default(),
            pending_orientation: None,
            viewport: None,
            focus_point: None,
            touch_indicator: None,
            app_state: AppState::default(),
            screen_focused: true,
        }
    }

    /// Capture and record may start
    pub fn is_ready(&self) -> bool {
        self.hardware_ready && !self.settling
    }

    /// Parameter and selection buttons are shown
    pub fn controls_visible(&self) -> bool {
        self.is_ready() && self.capture.is_idle()
    }

    /// Defaults applied after every lens change
    pub fn reset_camera_parameters(&mut self) {
        self.zoom.reset();
        self.flash = FlashMode::default();
        self.white_balance = WhiteBalance::default();
        self.focus_point = None;
        self.touch_indicator = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.capture.mode(),
            recording_phase: self.capture.recording_phase(),
            ready: self.is_ready(),
            hardware_ready: self.hardware_ready,
            settling: self.settling,
            controls_visible: self.controls_visible(),
            zoom: self.zoom.level(),
            zoom_percent: self.zoom.percent(),
            max_zoom: self.zoom.profile().max_zoom,
            flash: self.flash,
            white_balance: self.white_balance,
            white_balance_label: self.white_balance.label().to_string(),
            aspect_ratio: self.aspect_ratio,
            devices: self.selector.devices().map(<[CameraDevice]>::to_vec),
            selected_device: self.selector.selected_id().map(str::to_string),
            facing: self.selector.facing(),
            selector: self.selector.controls(),
            focus_point: self.focus_point,
            touch_indicator: self.touch_indicator,
            viewport: self.viewport,
            orientation: self.orientation,
            elapsed_secs: self.capture.elapsed_secs(),
            audio_disabled: self.audio_disabled,
            app_state: self.app_state,
        }
    }
}

/// Read-only copy of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: CaptureMode,
    pub recording_phase: Option<RecordingPhase>,
    pub ready: bool,
    pub hardware_ready: bool,
    pub settling: bool,
    pub controls_visible: bool,
    pub zoom: f32,
    pub zoom_percent: u32,
    pub max_zoom: Option<f32>,
    pub flash: FlashMode,
    pub white_balance: WhiteBalance,
    pub white_balance_label: String,
    pub aspect_ratio: AspectRatio,
    /// `None` until enumerated
    pub devices: Option<Vec<CameraDevice>>,
    pub selected_device: Option<String>,
    pub facing: Facing,
    pub selector: SelectorControls,
    pub focus_point: Option<FocusPoint>,
    pub touch_indicator: Option<TouchIndicator>,
    pub viewport: Option<ViewportRect>,
    pub orientation: OrientationInfo,
    pub elapsed_secs: u32,
    pub audio_disabled: bool,
    pub app_state: AppState,
}

impl Snapshot {
    /// Status line shown while busy, e.g. "Capturing Video (muted)... (3)"
    pub fn status_line(&self) -> Option<String> {
        match self.mode {
            CaptureMode::Idle => None,
            CaptureMode::TakingPhoto => Some("Capturing Picture...".to_string()),
            CaptureMode::Recording => Some(format!(
                "Capturing Video{}... ({})",
                if self.audio_disabled { " (muted)" } else { "" },
                self.elapsed_secs
            )),
        }
    }
}
