// SPDX-License-Identifier: GPL-3.0-only

//! Camera viewport geometry
//!
//! Maps screen metrics, footer size and aspect ratio to the rectangle the
//! preview occupies. The rectangle is also the reference frame for
//! tap-to-focus.

use serde::{Deserialize, Serialize};

/// Screen metrics for the current orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationInfo {
    pub is_portrait: bool,
    pub width: f32,
    pub height: f32,
    /// Status bar / header height removed from the usable area
    pub minus_height: f32,
    /// Bottom safe-area inset
    pub inset_bottom: f32,
}

impl OrientationInfo {
    pub fn portrait(width: f32, height: f32) -> Self {
        Self {
            is_portrait: true,
            width,
            height,
            minus_height: 0.0,
            inset_bottom: 0.0,
        }
    }

    pub fn landscape(width: f32, height: f32) -> Self {
        Self {
            is_portrait: false,
            width,
            height,
            minus_height: 0.0,
            inset_bottom: 0.0,
        }
    }
}

impl Default for OrientationInfo {
    fn default() -> Self {
        Self::portrait(390.0, 844.0)
    }
}

/// Footer dimensions: height applies in portrait, width in landscape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FooterMetrics {
    pub width: f32,
    pub height: f32,
}

/// Camera preview rectangle in screen points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// Convert screen coordinates into viewport-local coordinates
    pub fn to_local(&self, page_x: f32, page_y: f32) -> (f32, f32) {
        (page_x - self.left, page_y - self.top)
    }

    /// Whether a screen point falls inside the rectangle (edges included)
    pub fn contains(&self, page_x: f32, page_y: f32) -> bool {
        let (x, y) = self.to_local(page_x, page_y);
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Area left for the camera once the footer and insets are removed (width, height)
pub fn available_area(orientation: &OrientationInfo, footer: &FooterMetrics) -> (f32, f32) {
    let chrome = orientation.minus_height + orientation.inset_bottom;
    if orientation.is_portrait {
        (orientation.width, orientation.height - footer.height - chrome)
    } else {
        (orientation.width - footer.width, orientation.height - chrome)
    }
}

/// Compute the centered, ratio-preserving viewport
///
/// Portrait layouts are width-driven, landscape layouts height-driven.
pub fn compute_viewport(
    orientation: &OrientationInfo,
    footer: &FooterMetrics,
    ratio: f32,
) -> ViewportRect {
    let (available_width, available_height) = available_area(orientation, footer);

    if orientation.is_portrait {
        let height = orientation.width * ratio;
        ViewportRect {
            top: ((available_height - height) / 2.0).max(0.0),
            left: 0.0,
            width: orientation.width,
            height,
        }
    } else {
        let height = orientation.height - orientation.minus_height;
        let width = height * ratio;
        ViewportRect {
            top: 0.0,
            left: ((available_width - width) / 2.0).max(0.0),
            width,
            height,
        }
    }
}

/// Like [`compute_viewport`], but `None` when the metrics give an empty rectangle
pub fn try_compute_viewport(
    orientation: &OrientationInfo,
    footer: &FooterMetrics,
    ratio: f32,
) -> Option<ViewportRect> {
    let rect = compute_viewport(orientation, footer, ratio);
    (!rect.is_degenerate()).then_some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: FooterMetrics = FooterMetrics {
        width: 80.0,
        height: 55.0,
    };

    #[test]
    fn test_portrait_is_width_driven_and_centered() {
        let orientation = OrientationInfo::portrait(300.0, 800.0);
        let rect = compute_viewport(&orientation, &FOOTER, 4.0 / 3.0);
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.width, 300.0);
        assert!((rect.height - 400.0).abs() < 1e-3);
        // available height 745, (745 - 400) / 2
        assert!((rect.top - 172.5).abs() < 1e-3);
    }

    #[test]
    fn test_portrait_top_never_negative() {
        let orientation = OrientationInfo::portrait(600.0, 700.0);
        let rect = compute_viewport(&orientation, &FOOTER, 16.0 / 9.0);
        assert_eq!(rect.top, 0.0);
    }

    #[test]
    fn test_landscape_is_height_driven_and_centered() {
        let mut orientation = OrientationInfo::landscape(1000.0, 400.0);
        orientation.minus_height = 20.0;
        let rect = compute_viewport(&orientation, &FOOTER, 4.0 / 3.0);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.height, 380.0);
        assert!((rect.width - 506.666_7).abs() < 1e-2);
        // available width 920
        assert!((rect.left - (920.0 - rect.width) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_insets_shrink_available_area() {
        let mut orientation = OrientationInfo::portrait(300.0, 800.0);
        orientation.minus_height = 40.0;
        orientation.inset_bottom = 30.0;
        assert_eq!(available_area(&orientation, &FOOTER), (300.0, 675.0));
    }

    #[test]
    fn test_degenerate_viewport() {
        let orientation = OrientationInfo::portrait(0.0, 800.0);
        assert!(try_compute_viewport(&orientation, &FOOTER, 1.0).is_none());
    }
}
