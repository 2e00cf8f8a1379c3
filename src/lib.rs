// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a gallery lightbox built with the Iced GUI framework.
//!
//! It displays a grid of grouped thumbnails and opens a modal viewer with
//! gesture-driven zoom and pan, wrapping navigation within each group,
//! keyboard shortcuts, and background preloading of neighboring images.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
