// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`notice`] - Icon, heading and body panel with an optional action and
//!   collapsible details
//! - [`modal`] - Dimmed, click-to-dismiss layer for dialogs and previews

pub mod modal;
pub mod notice;
