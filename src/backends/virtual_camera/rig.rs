// SPDX-License-Identifier: GPL-3.0-only

//! Preset lens configurations for the virtual camera

use crate::backends::camera::{Facing, RawCameraDevice};
use crate::constants::lens;
use serde::{Deserialize, Serialize};

/// Simulated device lens layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rig {
    /// No lens ids reported
    None,
    /// One back lens
    Single,
    /// One back and one front lens
    #[default]
    Dual,
    /// Back wide-angle, back ultra-wide, front
    Triple,
    /// Back wide-angle, telephoto, ultra-wide, front
    Quad,
}

impl Rig {
    /// Devices in enumeration order
    pub fn devices(&self) -> Vec<RawCameraDevice> {
        match self {
            Rig::None => Vec::new(),
            Rig::Single => vec![back("0", lens::WIDE_ANGLE)],
            Rig::Dual => vec![back("0", lens::WIDE_ANGLE), front("1")],
            Rig::Triple => vec![
                back("0", lens::WIDE_ANGLE),
                back("2", lens::ULTRA_WIDE),
                front("1"),
            ],
            Rig::Quad => vec![
                back("0", lens::WIDE_ANGLE),
                back("2", lens::TELEPHOTO),
                back("3", lens::ULTRA_WIDE),
                front("1"),
            ],
        }
    }
}

impl std::str::FromStr for Rig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Rig::None),
            "single" => Ok(Rig::Single),
            "dual" => Ok(Rig::Dual),
            "triple" => Ok(Rig::Triple),
            "quad" => Ok(Rig::Quad),
            other => Err(format!("unknown rig: {}", other)),
        }
    }
}

fn back(id: &str, device_type: &str) -> RawCameraDevice {
    RawCameraDevice::new(id, Facing::Back, device_type)
}

fn front(id: &str) -> RawCameraDevice {
    RawCameraDevice::new(id, Facing::Front, lens::WIDE_ANGLE)
}
