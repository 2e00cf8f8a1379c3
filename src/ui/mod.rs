// SPDX-License-Identifier: MPL-2.0
//! UI layer: the thumbnail grid, the modal overlay, shared styles, and
//! custom widgets.

pub mod grid;
pub mod overlay;
pub mod styles;
pub mod widgets;
