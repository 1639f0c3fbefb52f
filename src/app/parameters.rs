// SPDX-License-Identifier: GPL-3.0-only

//! Discrete camera parameters cycled by button presses

use serde::{Deserialize, Serialize};

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashMode {
    /// Torch / flashlight mode (LED stays on continuously)
    Torch,
    /// Flash LED is off
    #[default]
    Off,
    /// Flash fires when the scene is dark
    Auto,
    /// Flash fires for every capture
    On,
}

impl FlashMode {
    /// Cycle to the next mode: Torch -> Off -> Auto -> On -> Torch
    pub fn next(self) -> Self {
        match self {
            FlashMode::Torch => FlashMode::Off,
            FlashMode::Off => FlashMode::Auto,
            FlashMode::Auto => FlashMode::On,
            FlashMode::On => FlashMode::Torch,
        }
    }
}

/// White balance presets, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteBalance {
    #[default]
    Auto,
    Sunny,
    Cloudy,
    Shadow,
    Incandescent,
    Fluorescent,
}

impl WhiteBalance {
    pub const ALL: [WhiteBalance; 6] = [
        WhiteBalance::Auto,
        WhiteBalance::Sunny,
        WhiteBalance::Cloudy,
        WhiteBalance::Shadow,
        WhiteBalance::Incandescent,
        WhiteBalance::Fluorescent,
    ];

    /// Position in [`WhiteBalance::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|wb| *wb == self).unwrap_or(0)
    }

    /// Preset at `index`, wrapping
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Two-letter button label
    pub fn label(&self) -> &'static str {
        match self {
            WhiteBalance::Auto => "WB",
            WhiteBalance::Sunny => "SU",
            WhiteBalance::Cloudy => "CL",
            WhiteBalance::Shadow => "SH",
            WhiteBalance::Incandescent => "IN",
            WhiteBalance::Fluorescent => "FL",
        }
    }
}

/// Capture aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "4:3")]
    FourThree,
    #[serde(rename = "1:1")]
    OneOne,
    #[serde(rename = "16:9")]
    SixteenNine,
}

impl AspectRatio {
    /// Cycle: 4:3 -> 1:1 -> 16:9 -> 4:3
    pub fn next(self) -> Self {
        match self {
            AspectRatio::FourThree => AspectRatio::OneOne,
            AspectRatio::OneOne => AspectRatio::SixteenNine,
            AspectRatio::SixteenNine => AspectRatio::FourThree,
        }
    }

    /// Label as passed to the hardware (e.g., "16:9")
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::FourThree => "4:3",
            AspectRatio::OneOne => "1:1",
            AspectRatio::SixteenNine => "16:9",
        }
    }

    /// Numeric ratio (long side over short side) used by the viewport layout
    pub fn ratio(&self) -> f32 {
        parse_ratio(self.label()).unwrap_or(1.0)
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a "w:h" string into w / h
pub fn parse_ratio(s: &str) -> Option<f32> {
    let (w, h) = s.split_once(':')?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    if h == 0 {
        return None;
    }
    Some(w as f32 / h as f32)
}
