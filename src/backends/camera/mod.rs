// SPDX-License-Identifier: GPL-3.0-only

//! Camera hardware abstraction
//!
//! The controller never talks to a platform camera directly. Everything it
//! needs goes through [`CameraHardware`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Presentation layer │  ← reads Snapshot, dispatches Message
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraController   │  ← single owner of the Session
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CameraHardware Trait│  ← Common interface
//! └──────────┬──────────┘
//!            │
//!            ▼
//!   ┌─────────────────┐
//!   │ Platform camera │  (or VirtualCamera in tests and the CLI)
//!   └─────────────────┘
//! ```

pub mod types;

pub use types::*;

use crate::app::focus::FocusPoint;
use crate::app::parameters::{AspectRatio, FlashMode, WhiteBalance};
use crate::errors::{CaptureError, EnumerationError, RecordError};
use futures::future::BoxFuture;
use futures::stream::BoxStream;

/// Complete camera hardware trait
///
/// Async operations return boxed `'static` futures so the controller can run
/// them on spawned tasks. Parameter setters are fire-and-forget.
pub trait CameraHardware: Send + Sync {
    // ===== Enumeration =====

    /// Query the list of physical lenses
    fn enumerate_devices(&self)
    -> BoxFuture<'static, Result<Vec<RawCameraDevice>, EnumerationError>>;

    // ===== Capture: Photo =====

    /// Capture a single still image
    fn capture_photo(
        &self,
        options: PhotoOptions,
    ) -> BoxFuture<'static, Result<PhotoResult, CaptureError>>;

    // ===== Capture: Video =====

    /// Start recording; the future resolves when the recording ends
    ///
    /// A recording ends when [`CameraHardware::stop_recording`] is called, when
    /// `max_duration_secs` or `max_file_size_bytes` is reached, or on failure.
    fn record_video(
        &self,
        options: RecordOptions,
    ) -> BoxFuture<'static, Result<VideoResult, RecordError>>;

    /// Signal the active recording to finish early
    fn stop_recording(&self);

    // ===== Parameters =====

    fn set_zoom(&self, level: f32);

    /// Hardware zoom ceiling that zoom level 1.0 maps to
    fn set_max_zoom(&self, max_zoom: f32);

    fn set_flash_mode(&self, mode: FlashMode);

    fn set_white_balance(&self, setting: WhiteBalance);

    /// Set (or clear) the autofocus point of interest, in landscape-referenced coordinates
    fn set_focus_point(&self, point: Option<FocusPoint>);

    fn set_aspect_ratio(&self, ratio: AspectRatio);

    /// Activate a specific lens by id
    fn set_active_device(&self, id: &str);

    /// Activate the default lens for a facing (used when no lens ids are known)
    fn set_facing(&self, facing: Facing);

    // ===== Events =====

    /// Stream of readiness and audio notifications
    ///
    /// Called once per controller start. The stream ends when the hardware goes away.
    fn hardware_events(&self) -> BoxStream<'static, HardwareEvent>;
}
