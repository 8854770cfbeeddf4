// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system with translation files embedded at
//! build time from `assets/i18n/`.
//!
//! Locale resolution order: CLI `--lang`, then `[general] language` from the
//! config file, then the OS locale, then `en-US`.

pub mod fluent;
