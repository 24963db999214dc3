// SPDX-License-Identifier: MPL-2.0
//! Localized UI text.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! locale is picked once at startup from `--lang`, then `general.language`,
//! then the system locale, then `en-US`. Keys missing from a translation
//! fall back to the `en-US` text.

pub mod fluent;
