// SPDX-License-Identifier: GPL-3.0-only

//! Lens enumeration bookkeeping and selection policy

use crate::backends::camera::{CameraDevice, Facing, RawCameraDevice};
use crate::errors::DeviceSelectionError;
use serde::{Deserialize, Serialize};

/// What a successful selection change asks the hardware to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveCamera {
    /// Activate a lens by id
    Device(String),
    /// No lens ids known: activate the default lens for this facing
    Facing(Facing),
}

/// One button in a per-device selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceControl {
    pub device: CameraDevice,
    pub selected: bool,
}

/// Selection controls offered to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "devices", rename_all = "snake_case")]
pub enum SelectorControls {
    /// Nothing to switch between (or not enumerated yet)
    #[default]
    Hidden,
    /// No device-id information: single button flipping front/back
    FacingToggle,
    /// Exactly two devices: single button looping to the other id
    Loop,
    /// Three or more devices: one button per device
    PerDevice(Vec<DeviceControl>),
}

impl SelectorControls {
    pub fn is_hidden(&self) -> bool {
        matches!(self, SelectorControls::Hidden)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraDeviceSelector {
    /// `None` until enumerated; an empty list means enumeration found nothing
    known_devices: Option<Vec<CameraDevice>>,
    selected_id: Option<String>,
    facing: Facing,
    /// Set by a facing toggle; enumeration then leaves the id unselected
    facing_fallback: bool,
}

impl CameraDeviceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> Option<&[CameraDevice]> {
        self.known_devices.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Facing used by the id-less fallback path
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Install a fresh enumeration result
    ///
    /// The default is chosen from enumeration order before the front-first
    /// sort. An existing selection survives if its id is still present, and
    /// an active facing toggle stays in effect. Returns the lens the hardware
    /// must switch to when the selected id changed.
    pub fn apply_enumeration(&mut self, raw: Vec<RawCameraDevice>) -> Option<ActiveCamera> {
        let devices: Vec<CameraDevice> = raw.into_iter().map(CameraDevice::from).collect();
        let previous = self.selected_id.clone();

        let keep_current = self.facing_fallback
            || self
                .selected_id
                .as_ref()
                .is_some_and(|id| devices.iter().any(|d| &d.id == id));
        if !keep_current {
            self.selected_id = default_selection(&devices).map(|d| d.id.clone());
        }

        if let Some(device) = self
            .selected_id
            .as_ref()
            .and_then(|id| devices.iter().find(|d| &d.id == id))
        {
            self.facing = device.facing;
        }

        self.known_devices = Some(front_first(devices));

        match &self.selected_id {
            Some(id) if previous.as_ref() != Some(id) => Some(ActiveCamera::Device(id.clone())),
            _ => None,
        }
    }

    pub fn controls(&self) -> SelectorControls {
        let Some(devices) = &self.known_devices else {
            return SelectorControls::Hidden;
        };

        if self.selected_id.is_none() {
            return SelectorControls::FacingToggle;
        }

        match devices.len() {
            0 | 1 => SelectorControls::Hidden,
            2 => SelectorControls::Loop,
            _ => SelectorControls::PerDevice(
                devices
                    .iter()
                    .map(|d| DeviceControl {
                        device: d.clone(),
                        selected: self.selected_id.as_deref() == Some(d.id.as_str()),
                    })
                    .collect(),
            ),
        }
    }

    /// The loop action: next id in display order, or the facing toggle without ids
    ///
    /// `None` when the only device is already selected.
    pub fn loop_next(&mut self) -> Option<ActiveCamera> {
        match self.next_id() {
            Some(id) if self.selected_id.as_deref() == Some(id.as_str()) => None,
            Some(id) => Some(self.apply_id(id)),
            None => Some(self.toggle_facing()),
        }
    }

    /// Choose a device explicitly
    ///
    /// `Ok(None)` if it is already selected.
    pub fn select(&mut self, id: &str) -> Result<Option<ActiveCamera>, DeviceSelectionError> {
        if self.selected_id.as_deref() == Some(id) {
            return Ok(None);
        }
        let devices = self
            .known_devices
            .as_ref()
            .filter(|d| !d.is_empty())
            .ok_or(DeviceSelectionError::NoDeviceIds)?;
        if !devices.iter().any(|d| d.id == id) {
            return Err(DeviceSelectionError::UnknownDevice(id.to_string()));
        }
        Ok(Some(self.apply_id(id.to_string())))
    }

    /// Flip front/back and drop any id selection
    pub fn toggle_facing(&mut self) -> ActiveCamera {
        self.facing = self.facing.toggled();
        self.selected_id = None;
        self.facing_fallback = true;
        ActiveCamera::Facing(self.facing)
    }

    fn next_id(&self) -> Option<String> {
        let current = self.selected_id.as_deref()?;
        let devices = self.known_devices.as_ref().filter(|d| !d.is_empty())?;
        let next = devices
            .iter()
            .position(|d| d.id == current)
            .map_or(0, |idx| (idx + 1) % devices.len());
        Some(devices[next].id.clone())
    }

    fn apply_id(&mut self, id: String) -> ActiveCamera {
        if let Some(device) = self
            .known_devices
            .as_ref()
            .and_then(|devices| devices.iter().find(|d| d.id == id))
        {
            self.facing = device.facing;
        }
        self.selected_id = Some(id.clone());
        self.facing_fallback = false;
        ActiveCamera::Device(id)
    }
}

/// First back-facing device, else the first device
pub fn default_selection(devices: &[CameraDevice]) -> Option<&CameraDevice> {
    devices
        .iter()
        .find(|d| d.facing == Facing::Back)
        .or_else(|| devices.first())
}

/// Stable sort placing front-facing devices first
pub fn front_first(mut devices: Vec<CameraDevice>) -> Vec<CameraDevice> {
    devices.sort_by_key(|d| match d.facing {
        Facing::Front => 0,
        Facing::Back => 1,
    });
    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::LensKind;
    use crate::constants::lens;

    fn triple() -> Vec<RawCameraDevice> {
        vec![
            RawCameraDevice::new("back-normal", Facing::Back, lens::WIDE_ANGLE),
            RawCameraDevice::new("back-wide", Facing::Back, lens::ULTRA_WIDE),
            RawCameraDevice::new("front-normal", Facing::Front, lens::WIDE_ANGLE),
        ]
    }

    fn ids(selector: &CameraDeviceSelector) -> Vec<&str> {
        selector
            .devices()
            .unwrap()
            .iter()
            .map(|d| d.id.as_str())
            .collect()
    }

    #[test]
    fn test_default_selection_and_sort_order() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        assert_eq!(selector.selected_id(), Some("back-normal"));
        assert_eq!(ids(&selector), vec!["front-normal", "back-normal", "back-wide"]);
        assert_eq!(selector.devices().unwrap()[2].lens_kind, LensKind::Wide);
    }

    #[test]
    fn test_default_falls_back_to_first_device() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(vec![
            RawCameraDevice::new("f1", Facing::Front, lens::WIDE_ANGLE),
            RawCameraDevice::new("f2", Facing::Front, lens::WIDE_ANGLE),
        ]);
        assert_eq!(selector.selected_id(), Some("f1"));
        assert_eq!(selector.facing(), Facing::Front);
    }

    #[test]
    fn test_per_device_controls_for_three() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        let SelectorControls::PerDevice(controls) = selector.controls() else {
            panic!("expected per-device controls");
        };
        assert_eq!(controls.len(), 3);
        assert_eq!(controls.iter().filter(|c| c.selected).count(), 1);
        assert!(controls[1].selected);
    }

    #[test]
    fn test_two_devices_loop() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(vec![
            RawCameraDevice::new("back", Facing::Back, lens::WIDE_ANGLE),
            RawCameraDevice::new("front", Facing::Front, lens::WIDE_ANGLE),
        ]);
        assert_eq!(selector.controls(), SelectorControls::Loop);
        assert_eq!(selector.loop_next(), Some(ActiveCamera::Device("front".into())));
        assert_eq!(selector.loop_next(), Some(ActiveCamera::Device("back".into())));
        assert_eq!(selector.loop_next(), Some(ActiveCamera::Device("front".into())));
    }

    #[test]
    fn test_zero_or_one_device_hides_controls() {
        let mut selector = CameraDeviceSelector::new();
        assert!(selector.controls().is_hidden());
        selector.apply_enumeration(vec![RawCameraDevice::new(
            "only",
            Facing::Back,
            lens::WIDE_ANGLE,
        )]);
        assert!(selector.controls().is_hidden());
        assert_eq!(selector.loop_next(), None);
        assert_eq!(selector.selected_id(), Some("only"));
    }

    #[test]
    fn test_empty_list_offers_facing_toggle() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(Vec::new());
        assert_eq!(selector.selected_id(), None);
        assert_eq!(selector.controls(), SelectorControls::FacingToggle);
        assert_eq!(selector.loop_next(), Some(ActiveCamera::Facing(Facing::Front)));
        assert_eq!(selector.loop_next(), Some(ActiveCamera::Facing(Facing::Back)));
    }

    #[test]
    fn test_select_existing_is_noop() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        assert_eq!(selector.select("back-normal"), Ok(None));
        assert_eq!(
            selector.select("back-wide"),
            Ok(Some(ActiveCamera::Device("back-wide".into())))
        );
        assert_eq!(
            selector.select("missing"),
            Err(DeviceSelectionError::UnknownDevice("missing".into()))
        );
    }

    #[test]
    fn test_first_enumeration_reports_default() {
        let mut selector = CameraDeviceSelector::new();
        assert_eq!(
            selector.apply_enumeration(triple()),
            Some(ActiveCamera::Device("back-normal".into()))
        );
        assert_eq!(selector.apply_enumeration(triple()), None);
        assert_eq!(selector.apply_enumeration(Vec::new()), None);
    }

    #[test]
    fn test_reenumeration_keeps_selection() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        selector.select("back-wide").unwrap();
        assert_eq!(selector.apply_enumeration(triple()), None);
        assert_eq!(selector.selected_id(), Some("back-wide"));
    }

    #[test]
    fn test_reenumeration_reports_replaced_selection() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        selector.select("back-wide").unwrap();
        let shrunk = vec![RawCameraDevice::new(
            "front-normal",
            Facing::Front,
            lens::WIDE_ANGLE,
        )];
        assert_eq!(
            selector.apply_enumeration(shrunk),
            Some(ActiveCamera::Device("front-normal".into()))
        );
        assert_eq!(selector.facing(), Facing::Front);
    }

    #[test]
    fn test_reenumeration_keeps_facing_toggle() {
        let mut selector = CameraDeviceSelector::new();
        selector.apply_enumeration(triple());
        selector.toggle_facing();
        assert_eq!(selector.apply_enumeration(triple()), None);
        assert_eq!(selector.selected_id(), None);
        assert_eq!(selector.facing(), Facing::Front);
        assert_eq!(selector.controls(), SelectorControls::FacingToggle);

        selector.select("back-wide").unwrap();
        selector.apply_enumeration(triple());
        assert_eq!(selector.selected_id(), Some("back-wide"));
    }
}
