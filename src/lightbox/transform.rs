// SPDX-License-Identifier: MPL-2.0
//! Viewport transform engine: zoom scale and pan offset for the image shown
//! in the modal viewer.
//!
//! Coordinates are viewport-local display pixels. The image is laid out
//! centered at scale 1 in its contain-fitted size (`base`); `pan` is the
//! offset of the image center from the viewport center. A point `p` relative
//! to the image center appears on screen at
//! `viewport_center + pan + scale * p`.

use crate::config::{DOUBLE_TAP_SCALE, MAX_SCALE, MIN_SCALE, PAN_OVERSCROLL_MARGIN};
use iced::{Point, Size, Vector};

/// Zoom scale, always within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// True at the unzoomed rest scale.
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Rounded percentage for toolbar display.
    pub fn as_percent(self) -> u16 {
        (self.0 * 100.0).round() as u16
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}

/// Current zoom and pan of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportTransform {
    scale: Scale,
    pan: Vector,
}

impl ViewportTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// True when at scale 1 with no pan, the state navigation requires.
    pub fn is_reset(&self) -> bool {
        self.scale.is_min()
    }

    /// Returns to scale 1, pan zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Multiplies the scale by `factor`, keeping the image point under
    /// `anchor` stationary on screen, then clamps the pan.
    ///
    /// The anchor point is in viewport-local coordinates. When the scale is
    /// already pinned at a bound the pan is left untouched apart from
    /// re-clamping.
    pub fn zoom_at(&mut self, anchor: Point, factor: f32, viewport: Size, base: Size) {
        let target = Scale::new(self.scale.get() * factor);
        self.set_scale_at(anchor, target, viewport, base);
    }

    /// Sets the scale to an absolute value, anchored like [`Self::zoom_at`].
    /// Pinch gestures use this so the scale tracks finger spread relative to
    /// the gesture's starting scale instead of compounding per event.
    pub fn set_scale_at(&mut self, anchor: Point, target: Scale, viewport: Size, base: Size) {
        let old = self.scale.get();
        let k = target.get() / old;
        let center = Vector::new(viewport.width / 2.0, viewport.height / 2.0);
        let a = Vector::new(anchor.x - center.x, anchor.y - center.y);

        self.pan = Vector::new(
            (self.pan.x - a.x) * k + a.x,
            (self.pan.y - a.y) * k + a.y,
        );
        self.scale = target;
        self.clamp_pan(viewport, base);
    }

    /// Shifts the pan by `delta` display pixels. Silently ignored at scale 1.
    pub fn pan_by(&mut self, delta: Vector, viewport: Size, base: Size) {
        if self.scale.is_min() {
            return;
        }
        self.pan = self.pan + delta;
        self.clamp_pan(viewport, base);
    }

    /// Double-click toggle: zoom to the preset scale when unzoomed,
    /// otherwise return to rest.
    pub fn toggle_at(&mut self, anchor: Point, viewport: Size, base: Size) {
        if self.scale.is_min() {
            self.set_scale_at(anchor, Scale::new(DOUBLE_TAP_SCALE), viewport, base);
        } else {
            self.reset();
        }
    }

    /// Clamps the pan so the scaled image cannot drift away from the
    /// viewport. Along an axis where the scaled image fits, the pan is
    /// forced to zero; where it overflows, the offset may reach half the
    /// overflow plus a small overscroll margin. Idempotent.
    pub fn clamp_pan(&mut self, viewport: Size, base: Size) {
        let scale = self.scale.get();
        self.pan.x = clamp_axis(self.pan.x, base.width * scale, viewport.width);
        self.pan.y = clamp_axis(self.pan.y, base.height * scale, viewport.height);
    }
}

fn clamp_axis(pan: f32, scaled: f32, viewport: f32) -> f32 {
    if scaled <= viewport {
        0.0
    } else {
        let limit = (scaled - viewport) / 2.0 + PAN_OVERSCROLL_MARGIN;
        pan.clamp(-limit, limit)
    }
}

/// Contain-fits an image of `width` x `height` pixels into `viewport`,
/// preserving aspect ratio. This is the `base` size the transform works in.
pub fn fitted_size(width: u32, height: u32, viewport: Size) -> Size {
    if width == 0 || height == 0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Size::ZERO;
    }
    let (w, h) = (width as f32, height as f32);
    let ratio = (viewport.width / w).min(viewport.height / h).min(1.0);
    Size::new(w * ratio, h * ratio)
}
