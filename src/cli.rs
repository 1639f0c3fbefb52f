// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for the virtual camera
//!
//! This module provides command-line functionality for:
//! - Listing the lenses of a simulated rig
//! - Driving a controller with a script of timed intents

use camera_control::app::camera_selector::CameraDeviceSelector;
use camera_control::app::layout::OrientationInfo;
use camera_control::app::{AppState, CameraController, CaptureOutcome, EnvironmentEvent, Message};
use camera_control::backends::camera::HardwareEvent;
use camera_control::errors::AppError;
use camera_control::{Config, Platform, Rig, VirtualCamera};
use futures::StreamExt;
use futures::channel::mpsc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// One scripted action
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Action {
    // Hardware
    Ready {
        #[serde(default)]
        audio_permission_denied: bool,
    },
    NotReady,
    AudioInterrupted,
    AudioConnected,
    // Environment
    Orientation(OrientationInfo),
    AppState(AppState),
    Focus,
    Blur,
    // Intents
    TakePhoto,
    StartRecording,
    StopRecording,
    ToggleRecording,
    CycleFlash,
    CycleWhiteBalance,
    CycleAspectRatio,
    ResetZoom,
    PinchStart,
    Pinch(f32),
    PinchEnd,
    Tap { x: f32, y: f32 },
    Release,
    LoopCamera,
    SelectCamera(String),
}

#[derive(Debug, Clone, Deserialize)]
struct Step {
    /// Time to let the controller run before this action
    #[serde(default)]
    wait_ms: u64,
    action: Action,
}

#[derive(Debug, Clone, Deserialize)]
struct Script {
    steps: Vec<Step>,
    /// Time to keep running after the last step
    #[serde(default = "default_tail_ms")]
    tail_ms: u64,
}

fn default_tail_ms() -> u64 {
    1000
}

impl Default for Script {
    fn default() -> Self {
        Self {
            steps: vec![
                Step {
                    wait_ms: 0,
                    action: Action::Ready {
                        audio_permission_denied: false,
                    },
                },
                Step {
                    wait_ms: 100,
                    action: Action::TakePhoto,
                },
            ],
            tail_ms: default_tail_ms(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RunReport {
    snapshot: camera_control::Snapshot,
    outcomes: Vec<CaptureOutcome>,
}

/// List the lenses of a virtual rig
pub fn list_cameras(rig: Rig) -> Result<(), Box<dyn std::error::Error>> {
    let mut selector = CameraDeviceSelector::new();
    selector.apply_enumeration(rig.devices());

    let devices = selector.devices().unwrap_or_default();
    if devices.is_empty() {
        println!("No camera ids reported (front/back toggle only).");
        return Ok(());
    }

    println!("Available cameras:");
    println!();
    for (index, device) in devices.iter().enumerate() {
        let marker = if selector.selected_id() == Some(device.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            " {}[{}] id={} {} {}",
            marker, index, device.id, device.facing, device.lens_kind
        );
    }
    println!();
    println!(
        "Selector: {}",
        serde_json::to_string(&selector.controls()).map_err(AppError::from)?
    );

    Ok(())
}

/// Run a script against a controller over a virtual rig and print the result
pub fn run_script(
    rig: Rig,
    script: Option<PathBuf>,
    platform: Option<Platform>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = match script {
        Some(path) => load_script(&path)?,
        None => Script::default(),
    };

    let mut config = match config {
        Some(path) => Config::load(&path).map_err(AppError::from)?,
        None => Config::load_or_default(),
    };
    if let Some(platform) = platform {
        config.platform = platform;
        config.zoom = None;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(drive(rig, config, script));

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_script(path: &Path) -> Result<Script, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

async fn drive(rig: Rig, config: Config, script: Script) -> RunReport {
    let camera = Arc::new(VirtualCamera::with_rig(rig));
    let (environment, environment_rx) = mpsc::unbounded();

    let mut controller = CameraController::new(camera.clone(), config);
    let mut outcomes_rx = controller.outcomes();
    controller.start(environment_rx.boxed());
    let handle = controller.handle();

    info!(steps = script.steps.len(), "Running script");
    for step in script.steps {
        controller.run_for(Duration::from_millis(step.wait_ms)).await;
        match step.action {
            Action::Ready {
                audio_permission_denied,
            } => camera.emit(HardwareEvent::Ready {
                audio_permission_denied,
            }),
            Action::NotReady => camera.emit(HardwareEvent::NotReady),
            Action::AudioInterrupted => camera.emit(HardwareEvent::AudioInterrupted),
            Action::AudioConnected => camera.emit(HardwareEvent::AudioConnected),
            Action::Orientation(info) => {
                let _ = environment.unbounded_send(EnvironmentEvent::OrientationChanged(info));
            }
            Action::AppState(state) => {
                let _ = environment.unbounded_send(EnvironmentEvent::AppStateChanged(state));
            }
            Action::Focus => {
                let _ = environment.unbounded_send(EnvironmentEvent::ScreenFocused);
            }
            Action::Blur => {
                let _ = environment.unbounded_send(EnvironmentEvent::ScreenBlurred);
            }
            intent => {
                if let Some(message) = intent_message(intent) {
                    handle.dispatch(message);
                }
            }
        }
    }
    controller
        .run_for(Duration::from_millis(script.tail_ms))
        .await;

    let snapshot = controller.snapshot();
    controller.teardown();

    let mut outcomes = Vec::new();
    while let Ok(outcome) = outcomes_rx.try_recv() {
        outcomes.push(outcome);
    }

    RunReport { snapshot, outcomes }
}

fn intent_message(action: Action) -> Option<Message> {
    let message = match action {
        Action::TakePhoto => Message::TakePhoto,
        Action::StartRecording => Message::StartRecording,
        Action::StopRecording => Message::StopRecording,
        Action::ToggleRecording => Message::ToggleRecording,
        Action::CycleFlash => Message::CycleFlash,
        Action::CycleWhiteBalance => Message::CycleWhiteBalance,
        Action::CycleAspectRatio => Message::CycleAspectRatio,
        Action::ResetZoom => Message::ResetZoom,
        Action::PinchStart => Message::PinchStart,
        Action::Pinch(progress) => Message::PinchProgress(progress),
        Action::PinchEnd => Message::PinchEnd,
        Action::Tap { x, y } => Message::TouchDown {
            page_x: x,
            page_y: y,
        },
        Action::Release => Message::TouchUp,
        Action::LoopCamera => Message::LoopCamera,
        Action::SelectCamera(id) => Message::SelectCamera(id),
        _ => return None,
    };
    Some(message)
}
