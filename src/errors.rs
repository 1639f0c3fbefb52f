// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera controller
//!
//! None of these are fatal. Every failure ends the attempted operation and
//! the controller falls back to a well-defined idle state.

use thiserror::Error;

/// Top-level error used by the CLI and config layer
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Enumeration error: {0}")]
    Enumeration(#[from] EnumerationError),
    #[error("Photo error: {0}")]
    Capture(#[from] CaptureError),
    #[error("Recording error: {0}")]
    Record(#[from] RecordError),
    #[error("Device selection error: {0}")]
    DeviceSelection(#[from] DeviceSelectionError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Other(String),
}

/// Device enumeration failed. Degrades to an empty device list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("Camera not ready")]
    NotReady,
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Photo capture failed. Surfaced to the user, mode returns to idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Capture failed: {0}")]
    Failed(String),
    #[error("Camera disconnected")]
    Disconnected,
}

/// Video recording failed. Surfaced to the user, mode returns to idle after cooldown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Failed to store recorded video: {0}")]
    StoreFailed(String),
    #[error("Recording interrupted")]
    Interrupted,
}

/// The requested device could not be selected. Selection falls back to the facing toggle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceSelectionError {
    #[error("Unknown camera id: {0}")]
    UnknownDevice(String),
    #[error("No camera ids available")]
    NoDeviceIds,
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to write config: {0}")]
    Write(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl AppError {
    /// Check if this error should be shown to the user as a dialog
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::Capture(_) | AppError::Record(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(err.to_string())
    }
}
