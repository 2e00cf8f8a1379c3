// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations live in embedded Fluent (`.ftl`) files, one per locale.
//! Locale resolution order: CLI flag, config file, OS locale, then the
//! built-in `en-US` fallback.

pub mod fluent;

pub use fluent::I18n;
