// SPDX-License-Identifier: GPL-3.0-only

//! Tap-to-focus coordinate mapping
//!
//! The hardware focus API always measures in landscape coordinates with the
//! home button on the right. Portrait taps get a fixed 90° remap. A device
//! held in the mirrored landscape orientation (home button on the left)
//! cannot be detected and maps incorrectly; that case is left as is because
//! the camera placement makes the orientation impractical.

use super::layout::ViewportRect;
use serde::{Deserialize, Serialize};

/// Normalized autofocus point of interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPoint {
    pub x: f32,
    pub y: f32,
    pub auto_exposure: bool,
}

/// Visual focus rectangle position, viewport-local screen points (top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchIndicator {
    pub x: f32,
    pub y: f32,
}

/// Result of mapping one tap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub point: FocusPoint,
    pub indicator: TouchIndicator,
}

/// Normalize a tap inside `viewport` into hardware focus coordinates
pub fn normalize_tap(
    page_x: f32,
    page_y: f32,
    viewport: &ViewportRect,
    is_portrait: bool,
) -> (f32, f32) {
    let (local_x, local_y) = viewport.to_local(page_x, page_y);
    let x0 = local_x / viewport.width;
    let y0 = local_y / viewport.height;

    if is_portrait {
        (y0, 1.0 - x0)
    } else {
        (x0, y0)
    }
}

/// Map a tap to a focus point plus an indicator centered on the touch
///
/// `None` for taps outside the viewport.
pub fn map_tap(
    page_x: f32,
    page_y: f32,
    viewport: &ViewportRect,
    is_portrait: bool,
    indicator_size: f32,
) -> Option<FocusTarget> {
    if !viewport.contains(page_x, page_y) {
        return None;
    }
    let (x, y) = normalize_tap(page_x, page_y, viewport, is_portrait);
    let (local_x, local_y) = viewport.to_local(page_x, page_y);
    let half = indicator_size / 2.0;

    Some(FocusTarget {
        point: FocusPoint {
            x,
            y,
            auto_exposure: true,
        },
        indicator: TouchIndicator {
            x: local_x - half,
            y: local_y - half,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportRect = ViewportRect {
        top: 0.0,
        left: 0.0,
        width: 200.0,
        height: 100.0,
    };

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn test_landscape_center() {
        assert!(approx(normalize_tap(100.0, 50.0, &VIEWPORT, false), (0.5, 0.5)));
    }

    #[test]
    fn test_portrait_remap() {
        // x0 = 0.25, y0 = 0.8
        assert!(approx(normalize_tap(50.0, 80.0, &VIEWPORT, true), (0.8, 0.75)));
        // Center stays the center only because x0 == y0
        assert!(approx(normalize_tap(100.0, 50.0, &VIEWPORT, true), (0.5, 0.5)));
    }

    #[test]
    fn test_offset_viewport() {
        let viewport = ViewportRect {
            top: 100.0,
            left: 20.0,
            width: 200.0,
            height: 100.0,
        };
        assert!(approx(normalize_tap(70.0, 180.0, &viewport, false), (0.25, 0.8)));
    }

    #[test]
    fn test_indicator_is_centered_on_touch() {
        let target = map_tap(50.0, 80.0, &VIEWPORT, true, 100.0).unwrap();
        assert_eq!(target.indicator, TouchIndicator { x: 0.0, y: 30.0 });
        assert!(target.point.auto_exposure);
    }

    #[test]
    fn test_taps_outside_viewport_are_rejected() {
        let viewport = ViewportRect {
            top: 134.5,
            left: 0.0,
            width: 390.0,
            height: 520.0,
        };
        assert_eq!(map_tap(10.0, 20.0, &viewport, true, 80.0), None);
        assert_eq!(map_tap(10.0, 655.0, &viewport, true, 80.0), None);
        assert_eq!(map_tap(391.0, 300.0, &viewport, true, 80.0), None);

        let edge = map_tap(0.0, 134.5, &viewport, true, 80.0).unwrap();
        assert_eq!((edge.point.x, edge.point.y), (0.0, 1.0));
    }
}
