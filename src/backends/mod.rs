// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for camera hardware
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             CameraController                 │
//! └────────────────────┬────────────────────────┘
//!                      │ CameraHardware
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                   │
//! │  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │ Platform camera  │  │ Virtual Camera  │  │
//! │  │   (embedder)     │  │  (in-process)   │  │
//! │  └──────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`camera`]: Hardware trait and the types crossing it
//! - [`virtual_camera`]: Simulated hardware for the CLI and tests

pub mod camera;
pub mod virtual_camera;
