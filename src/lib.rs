// SPDX-License-Identifier: GPL-3.0-only

//! Camera Control - capture-device state machine for a touch camera screen
//!
//! This library sits between a camera hardware abstraction and a touch UI. It
//! turns taps, pinches and button presses into hardware parameter changes and
//! photo/video capture requests, and keeps the capture state consistent while
//! those requests are in flight.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Controller, session state, message dispatch and the pure
//!   layout/zoom/focus/selection logic
//! - [`backends`]: Camera hardware abstraction and a virtual camera
//! - [`config`]: User configuration handling
//! - [`constants`]: Platform profiles, timing and capture presets
//! - [`errors`]: Error taxonomy
//!
//! # Example
//!
//! ```ignore
//! let camera = Arc::new(VirtualCamera::with_rig(Rig::Triple));
//! let mut controller = CameraController::new(camera.clone(), Config::default());
//! controller.start(futures::stream::empty().boxed());
//! camera.emit_ready();
//! controller.run_for(Duration::from_millis(100)).await;
//! controller.dispatch(Message::TakePhoto);
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types
pub use app::{CameraController, CaptureMode, CaptureOutcome, Message, Snapshot};
pub use backends::camera::CameraHardware;
pub use backends::virtual_camera::{Rig, VirtualCamera};
pub use config::Config;
pub use constants::Platform;
