// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom scale bounds and step factors
//! - **Pan**: Overscroll margin for pan clamping
//! - **Gestures**: Swipe and double-click detection thresholds
//! - **Preload**: Neighbor-image preload cache sizing

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of a freshly loaded image (unzoomed, fits its frame).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum allowed zoom scale.
pub const MAX_SCALE: f32 = 4.0;

/// Multiplicative zoom step per wheel tick or toolbar press.
/// Repeated ticks compose geometrically rather than linearly.
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 1.2;

/// Target scale for a double-click/double-tap toggle from the unzoomed state.
pub const DOUBLE_TAP_SCALE: f32 = 2.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Extra slack past flush when panning a zoomed image to its edge, in
/// display pixels. Tunable, not load-bearing.
pub const PAN_OVERSCROLL_MARGIN: f32 = 16.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel for a one-finger swipe to count as navigation.
pub const DEFAULT_SWIPE_NAV_THRESHOLD: f32 = 40.0;

/// Two presses within this window and radius count as a double click.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 400;

/// Maximum cursor travel between two presses of a double click.
pub const DOUBLE_CLICK_RADIUS: f32 = 8.0;

// ==========================================================================
// Preload Defaults
// ==========================================================================

/// Default preload cache size in bytes (32 MB).
/// Allows ~4 full HD images (8 MB each) or ~16 smaller images.
pub const DEFAULT_PRELOAD_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum preload cache size in bytes (8 MB).
pub const MIN_PRELOAD_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum preload cache size in bytes (128 MB).
pub const MAX_PRELOAD_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of preloaded images to keep.
pub const DEFAULT_PRELOAD_MAX_IMAGES: usize = 16;

/// Minimum preloaded images to keep.
pub const MIN_PRELOAD_MAX_IMAGES: usize = 4;

/// Maximum preloaded images to keep.
pub const MAX_PRELOAD_MAX_IMAGES: usize = 32;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Duration of the modal fade-in, in milliseconds. Skipped entirely when
/// reduced motion is requested.
pub const MODAL_FADE_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR > 1.0);
    assert!(DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE <= MAX_SCALE);

    // Pan validation
    assert!(PAN_OVERSCROLL_MARGIN >= 0.0);

    // Gesture validation
    assert!(DEFAULT_SWIPE_NAV_THRESHOLD > 0.0);
    assert!(DOUBLE_CLICK_WINDOW_MS > 0);
    assert!(DOUBLE_CLICK_RADIUS > 0.0);

    // Preload validation
    assert!(MIN_PRELOAD_CACHE_BYTES > 0);
    assert!(MAX_PRELOAD_CACHE_BYTES >= MIN_PRELOAD_CACHE_BYTES);
    assert!(DEFAULT_PRELOAD_CACHE_BYTES >= MIN_PRELOAD_CACHE_BYTES);
    assert!(DEFAULT_PRELOAD_CACHE_BYTES <= MAX_PRELOAD_CACHE_BYTES);
    assert!(MIN_PRELOAD_MAX_IMAGES > 0);
    assert!(MAX_PRELOAD_MAX_IMAGES >= MIN_PRELOAD_MAX_IMAGES);
    assert!(DEFAULT_PRELOAD_MAX_IMAGES >= MIN_PRELOAD_MAX_IMAGES);
    assert!(DEFAULT_PRELOAD_MAX_IMAGES <= MAX_PRELOAD_MAX_IMAGES);
};
