// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`navbar`] - Title bar with *Choose files*, layout and theme toggles
//! - [`upload_zone`] - Drop target highlighted while files hover the window
//! - [`gallery`] - Grid/list of uploaded files with category filters
//! - [`preview`] - Full-size preview overlay
//! - [`confirm`] - Delete confirmation dialog
//! - [`progress`] - Floating upload progress pill
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display, modal layer)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rendering (visual primitives)
//! - [`action_icons`] - Semantic action-to-icon mapping
//! - [`notifications`] - Toast notification system for user feedback

pub mod action_icons;
pub mod components;
pub mod confirm;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod preview;
pub mod progress;
pub mod styles;
pub mod theming;
pub mod upload_zone;
