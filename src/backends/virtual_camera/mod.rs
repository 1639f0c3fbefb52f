// SPDX-License-Identifier: GPL-3.0-only

//! In-process simulated camera hardware
//!
//! Used by the CLI and the tests. Devices, latencies and failures are
//! scriptable; every command the controller sends is recorded so callers can
//! assert on it. Captures fabricate URIs and never touch storage.
//!
//! # Recording
//!
//! ```text
//! record_video() ──► oneshot stop channel installed
//!        │
//!        ├── stop_recording()   → resolves with stopped_early = true
//!        └── max duration hit   → resolves with stopped_early = false
//! ```

mod rig;

pub use rig::Rig;

use crate::app::focus::FocusPoint;
use crate::app::parameters::{AspectRatio, FlashMode, WhiteBalance};
use crate::backends::camera::{
    CameraHardware, Facing, HardwareEvent, PhotoOptions, PhotoResult, RawCameraDevice,
    RecordOptions, VideoResult,
};
use crate::errors::{CaptureError, EnumerationError, RecordError};
use futures::channel::mpsc as stream_channel;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, StreamExt};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Default simulated photo latency
const PHOTO_LATENCY: Duration = Duration::from_millis(200);

/// Default simulated enumeration latency
const ENUMERATION_LATENCY: Duration = Duration::from_millis(10);

/// Simulated sensor size
const SENSOR_WIDTH: u32 = 4032;
const SENSOR_HEIGHT: u32 = 3024;

/// A command received from the controller
#[derive(Debug, Clone, PartialEq)]
pub enum HardwareCommand {
    EnumerateDevices,
    CapturePhoto(PhotoOptions),
    RecordVideo(RecordOptions),
    StopRecording,
    SetZoom(f32),
    SetMaxZoom(f32),
    SetFlashMode(FlashMode),
    SetWhiteBalance(WhiteBalance),
    SetFocusPoint(Option<FocusPoint>),
    SetAspectRatio(AspectRatio),
    SetActiveDevice(String),
    SetFacing(Facing),
}

/// Internal simulator state
struct VirtualState {
    devices: Vec<RawCameraDevice>,
    enumeration_failure: Option<EnumerationError>,
    photo_failure: Option<CaptureError>,
    record_failure: Option<RecordError>,
    photo_latency: Duration,
    enumeration_latency: Duration,
    commands: Vec<HardwareCommand>,
    stop_sender: Option<oneshot::Sender<()>>,
    subscribers: Vec<stream_channel::UnboundedSender<HardwareEvent>>,
    captures: u32,
}

/// Simulated camera
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct VirtualCamera {
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualCamera {
    pub fn new(devices: Vec<RawCameraDevice>) -> Self {
        Self {
            state: Arc::new(Mutex::new(VirtualState {
                devices,
                enumeration_failure: None,
                photo_failure: None,
                record_failure: None,
                photo_latency: PHOTO_LATENCY,
                enumeration_latency: ENUMERATION_LATENCY,
                commands: Vec::new(),
                stop_sender: None,
                subscribers: Vec::new(),
                captures: 0,
            })),
        }
    }

    pub fn with_rig(rig: Rig) -> Self {
        info!(?rig, "Creating virtual camera");
        Self::new(rig.devices())
    }

    fn state(&self) -> MutexGuard<'_, VirtualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, command: HardwareCommand) {
        self.state().commands.push(command);
    }

    // ===== Scripting =====

    /// Replace the device list returned by the next enumeration
    pub fn set_devices(&self, devices: Vec<RawCameraDevice>) {
        self.state().devices = devices;
    }

    /// Make enumerations fail (`None` restores success)
    pub fn fail_enumeration(&self, error: Option<EnumerationError>) {
        self.state().enumeration_failure = error;
    }

    /// Make photo captures fail (`None` restores success)
    pub fn fail_photos(&self, error: Option<CaptureError>) {
        self.state().photo_failure = error;
    }

    /// Make recordings fail (`None` restores success)
    pub fn fail_recordings(&self, error: Option<RecordError>) {
        self.state().record_failure = error;
    }

    pub fn set_photo_latency(&self, latency: Duration) {
        self.state().photo_latency = latency;
    }

    /// Push a hardware event to every subscriber
    pub fn emit(&self, event: HardwareEvent) {
        debug!(?event, "Virtual camera event");
        self.state()
            .subscribers
            .retain(|subscriber| subscriber.unbounded_send(event.clone()).is_ok());
    }

    /// Report the camera open with audio available
    pub fn emit_ready(&self) {
        self.emit(HardwareEvent::Ready {
            audio_permission_denied: false,
        });
    }

    // ===== Inspection =====

    /// Every command received so far
    pub fn commands(&self) -> Vec<HardwareCommand> {
        self.state().commands.clone()
    }

    /// Commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&HardwareCommand) -> bool) -> usize {
        self.state().commands.iter().filter(|c| predicate(*c)).count()
    }

    pub fn clear_commands(&self) {
        self.state().commands.clear();
    }

    pub fn is_recording(&self) -> bool {
        self.state().stop_sender.is_some()
    }

    /// Number of live event subscriptions
    pub fn subscriber_count(&self) -> usize {
        let mut state = self.state();
        state.subscribers.retain(|s| !s.is_closed());
        state.subscribers.len()
    }

    fn next_uri(&self, prefix: &str, extension: &str) -> String {
        let mut state = self.state();
        state.captures += 1;
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!(
            "file:///virtual/DCIM/{}_{}_{:04}.{}",
            prefix, timestamp, state.captures, extension
        )
    }
}

impl CameraHardware for VirtualCamera {
    fn enumerate_devices(
        &self,
    ) -> BoxFuture<'static, Result<Vec<RawCameraDevice>, EnumerationError>> {
        self.record(HardwareCommand::EnumerateDevices);
        let (latency, result) = {
            let state = self.state();
            let result = match &state.enumeration_failure {
                Some(err) => Err(err.clone()),
                None => Ok(state.devices.clone()),
            };
            (state.enumeration_latency, result)
        };
        async move {
            tokio::time::sleep(latency).await;
            result
        }
        .boxed()
    }

    fn capture_photo(
        &self,
        options: PhotoOptions,
    ) -> BoxFuture<'static, Result<PhotoResult, CaptureError>> {
        self.record(HardwareCommand::CapturePhoto(options));
        let (latency, failure) = {
            let state = self.state();
            (state.photo_latency, state.photo_failure.clone())
        };
        let result = match failure {
            Some(err) => Err(err),
            None => {
                let mut metadata = BTreeMap::new();
                metadata.insert("quality".to_string(), options.quality.to_string());
                metadata.insert("exif".to_string(), options.write_exif.to_string());
                Ok(PhotoResult {
                    uri: self.next_uri("IMG", "jpg"),
                    width: SENSOR_WIDTH,
                    height: SENSOR_HEIGHT,
                    metadata,
                })
            }
        };
        async move {
            tokio::time::sleep(latency).await;
            result
        }
        .boxed()
    }

    fn record_video(
        &self,
        options: RecordOptions,
    ) -> BoxFuture<'static, Result<VideoResult, RecordError>> {
        self.record(HardwareCommand::RecordVideo(options.clone()));
        let failure = self.state().record_failure.clone();
        if let Some(err) = failure {
            return async move { Err(err) }.boxed();
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        self.state().stop_sender = Some(stop_tx);
        let uri = self.next_uri("VID", "mp4");
        let max_duration = options.max_duration();
        let state = Arc::clone(&self.state);

        async move {
            let stopped_early = tokio::select! {
                _ = stop_rx => true,
                _ = tokio::time::sleep(max_duration) => false,
            };
            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .stop_sender = None;
            Ok(VideoResult { uri, stopped_early })
        }
        .boxed()
    }

    fn stop_recording(&self) {
        self.record(HardwareCommand::StopRecording);
        if let Some(sender) = self.state().stop_sender.take() {
            let _ = sender.send(());
        }
    }

    fn set_zoom(&self, level: f32) {
        self.record(HardwareCommand::SetZoom(level));
    }

    fn set_max_zoom(&self, max_zoom: f32) {
        self.record(HardwareCommand::SetMaxZoom(max_zoom));
    }

    fn set_flash_mode(&self, mode: FlashMode) {
        self.record(HardwareCommand::SetFlashMode(mode));
    }

    fn set_white_balance(&self, setting: WhiteBalance) {
        self.record(HardwareCommand::SetWhiteBalance(setting));
    }

    fn set_focus_point(&self, point: Option<FocusPoint>) {
        self.record(HardwareCommand::SetFocusPoint(point));
    }

    fn set_aspect_ratio(&self, ratio: AspectRatio) {
        self.record(HardwareCommand::SetAspectRatio(ratio));
    }

    fn set_active_device(&self, id: &str) {
        self.record(HardwareCommand::SetActiveDevice(id.to_string()));
    }

    fn set_facing(&self, facing: Facing) {
        self.record(HardwareCommand::SetFacing(facing));
    }

    fn hardware_events(&self) -> BoxStream<'static, HardwareEvent> {
        let (tx, rx) = stream_channel::unbounded();
        self.state().subscribers.push(tx);
        rx.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_recording_early() {
        let camera = VirtualCamera::with_rig(Rig::Dual);
        let recording = tokio::spawn(camera.record_video(RecordOptions::default()));
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(camera.is_recording());

        camera.stop_recording();
        let video = recording.await.unwrap().unwrap();
        assert!(video.stopped_early);
        assert!(video.uri.ends_with(".mp4"));
        assert!(!camera.is_recording());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recording_hits_max_duration() {
        let camera = VirtualCamera::with_rig(Rig::Dual);
        let options = RecordOptions {
            max_duration_secs: 3,
            ..RecordOptions::default()
        };
        let video = camera.record_video(options).await.unwrap();
        assert!(!video.stopped_early);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_failures() {
        let camera = VirtualCamera::with_rig(Rig::Triple);
        camera.fail_enumeration(Some(EnumerationError::Backend("gone".into())));
        assert!(camera.enumerate_devices().await.is_err());
        camera.fail_enumeration(None);
        assert_eq!(camera.enumerate_devices().await.unwrap().len(), 3);

        camera.fail_photos(Some(CaptureError::Disconnected));
        assert_eq!(
            camera.capture_photo(PhotoOptions::default()).await,
            Err(CaptureError::Disconnected)
        );
        assert_eq!(
            camera.count(|c| matches!(c, HardwareCommand::EnumerateDevices)),
            2
        );
    }

    #[tokio::test]
    async fn test_events_reach_every_subscriber() {
        let camera = VirtualCamera::with_rig(Rig::Single);
        let mut first = camera.hardware_events();
        let mut second = camera.hardware_events();
        camera.emit_ready();
        let ready = HardwareEvent::Ready {
            audio_permission_denied: false,
        };
        assert_eq!(first.next().await, Some(ready.clone()));
        assert_eq!(second.next().await, Some(ready));

        drop(first);
        assert_eq!(camera.subscriber_count(), 1);
    }

    #[test]
    fn test_rig_layouts() {
        assert!(Rig::None.devices().is_empty());
        assert_eq!(Rig::Quad.devices().len(), 4);
        assert_eq!("triple".parse::<Rig>(), Ok(Rig::Triple));
    }
}
